//! "n-th weekday of the month" predicate used by the holiday rules.

use crate::date::days_in_month;
use crate::date::Date;
use crate::weekday::Weekday;

/// Return `true` iff `date` is the `n`-th `weekday` of its month.
///
/// Walks forward from the 1st to the first `weekday`, then steps whole
/// weeks `n - 1` times and compares day numbers.  A zero `n`, the wrong
/// weekday, or an occurrence past the end of the month all give `false`.
pub fn is_nth_weekday(date: Date, n: u8, weekday: Weekday) -> bool {
    if n == 0 || date.weekday() != weekday {
        return false;
    }
    let first = date.first_of_month();
    let mut day = 1u32;
    let mut current = first.weekday();
    while current != weekday {
        current = current.succ();
        day += 1;
    }
    let mut count = 1;
    while count < n {
        day += 7;
        count += 1;
    }
    day <= u32::from(days_in_month(date.year(), date.month()))
        && day == u32::from(date.day_of_month())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn mothers_and_fathers_day_2023() {
        assert!(is_nth_weekday(date(2023, 5, 14), 2, Weekday::Sunday));
        assert!(is_nth_weekday(date(2023, 6, 18), 3, Weekday::Sunday));
        assert!(!is_nth_weekday(date(2023, 5, 7), 2, Weekday::Sunday));
        assert!(!is_nth_weekday(date(2023, 6, 25), 3, Weekday::Sunday));
    }

    #[test]
    fn wrong_weekday_is_false() {
        // 2023-05-15 is a Monday
        assert!(!is_nth_weekday(date(2023, 5, 15), 3, Weekday::Sunday));
    }

    #[test]
    fn missing_occurrence_is_false() {
        // February 2023 has four Mondays; there is no fifth or sixth.
        for d in 1..=28 {
            assert!(!is_nth_weekday(date(2023, 2, d), 5, Weekday::Monday));
        }
        assert!(!is_nth_weekday(date(2023, 2, 27), 200, Weekday::Monday));
        assert!(!is_nth_weekday(date(2023, 2, 27), 0, Weekday::Monday));
    }

    #[test]
    fn first_day_of_month_matches() {
        // 2024-01-01 is a Monday
        assert!(is_nth_weekday(date(2024, 1, 1), 1, Weekday::Monday));
    }

    #[test]
    fn agrees_with_nth_weekday_constructor() {
        for n in 1..=5u8 {
            for m in 1..=12u8 {
                if let Ok(expected) = Date::nth_weekday(n, Weekday::Thursday, 2024, m) {
                    assert!(is_nth_weekday(expected, n, Weekday::Thursday));
                    assert!(!is_nth_weekday(expected + 7, n, Weekday::Thursday));
                }
            }
        }
    }
}
