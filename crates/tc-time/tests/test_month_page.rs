//! Month grid layout.

use tc_time::{
    Date, MonthPage, NullCalendar, RuleCalendar, Weekday, FIRST_PAGE_YEAR, LAST_PAGE_YEAR,
};

#[test]
fn february_2023() {
    let page = MonthPage::sunday_first(2023, 2, &RuleCalendar::manitoba()).unwrap();
    let rows = page.rows();
    assert!(rows.len() == 4 || rows.len() == 5);
    // 2023-02-01 is a Wednesday; 28 days span five Sunday-first weeks.
    assert_eq!(rows.len(), 5);
    for row in rows {
        assert_eq!(row.cells().len(), 7);
        assert_eq!(row.cells()[0].date.weekday(), Weekday::Sunday);
    }
    let firsts: Vec<bool> = rows.iter().map(|r| r.is_first()).collect();
    let lasts: Vec<bool> = rows.iter().map(|r| r.is_last()).collect();
    assert_eq!(firsts, [true, false, false, false, false]);
    assert_eq!(lasts, [false, false, false, false, true]);

    let in_month = rows
        .iter()
        .flat_map(|r| r.cells())
        .filter(|c| c.in_month)
        .count();
    assert_eq!(in_month, 28);

    let louis_riel = rows
        .iter()
        .flat_map(|r| r.cells())
        .find(|c| c.date == Date::from_ymd(2023, 2, 20).unwrap())
        .unwrap();
    assert_eq!(louis_riel.holiday.as_ref().unwrap().name(), "Louis Riel Day");
}

#[test]
fn every_month_is_contiguous() {
    for year in [FIRST_PAGE_YEAR, 1583, 1900, 2000, 2023, 2024, 2100, LAST_PAGE_YEAR] {
        for month in 1..=12u8 {
            let page = MonthPage::sunday_first(year, month, &NullCalendar).unwrap();
            let rows = page.rows();
            assert!((4..=6).contains(&rows.len()), "{year}-{month}");
            assert!(rows[0].is_first() && rows[rows.len() - 1].is_last());
            let cells: Vec<_> = rows.iter().flat_map(|r| r.cells()).collect();
            for pair in cells.windows(2) {
                assert_eq!(pair[1].date - pair[0].date, 1);
            }
            let first_in = cells.iter().position(|c| c.in_month).unwrap();
            assert!(first_in < 7);
            assert_eq!(cells[first_in].day(), 1);
            let last_in = cells.iter().rposition(|c| c.in_month).unwrap();
            assert!(cells.len() - last_in <= 7);
            assert_eq!(cells[last_in].date, cells[last_in].date.end_of_month());
        }
    }
}

#[test]
fn first_and_last_flags_are_unique() {
    let page = MonthPage::sunday_first(2026, 10, &NullCalendar).unwrap();
    let rows = page.rows();
    assert_eq!(rows.iter().filter(|r| r.is_first()).count(), 1);
    assert_eq!(rows.iter().filter(|r| r.is_last()).count(), 1);
}

#[test]
fn out_of_month_cells_keep_holidays() {
    // 2023-12-31 (New Year's Eve) is a Sunday and 2024-01-01 a Monday, so the
    // first row of January 2024 starts with the last day of December.
    let page = MonthPage::sunday_first(2024, 1, &RuleCalendar::manitoba()).unwrap();
    let first = &page.rows()[0].cells()[0];
    assert!(!first.in_month);
    assert_eq!(first.holiday.as_ref().unwrap().name(), "New Year's Eve");
}

#[test]
fn pages_at_the_ends_of_the_date_range() {
    for week_start in [Weekday::Sunday, Weekday::Monday, Weekday::Saturday] {
        let december = MonthPage::build(LAST_PAGE_YEAR, 12, &NullCalendar, week_start).unwrap();
        let last = december.rows().last().unwrap().cells()[6].date;
        assert!(last <= Date::MAX && last.year() == LAST_PAGE_YEAR + 1);
        let january = MonthPage::build(FIRST_PAGE_YEAR, 1, &NullCalendar, week_start).unwrap();
        assert!(january.rows()[0].cells()[0].date >= Date::MIN);
    }
    assert!(MonthPage::sunday_first(LAST_PAGE_YEAR + 1, 12, &NullCalendar).is_err());
    assert!(MonthPage::sunday_first(FIRST_PAGE_YEAR - 1, 1, &NullCalendar).is_err());
}
