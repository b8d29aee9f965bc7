//! The display grid of one month.
//!
//! A page is a list of week rows.  Each row holds exactly seven consecutive
//! days starting at the configured first weekday, so the first and last rows
//! usually borrow days from the neighbouring months.

use log::debug;

use crate::calendar::HolidayCalendar;
use crate::date::Date;
use crate::holiday::Holiday;
use crate::month::Month;
use crate::weekday::Weekday;
use tc_core::errors::{Error, Result};

/// First year whose pages stay inside the representable date range.
pub const FIRST_PAGE_YEAR: u16 = 2;

/// Last year whose pages stay inside the representable date range.
pub const LAST_PAGE_YEAR: u16 = 9998;

/// One day in the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell {
    /// The calendar date shown in this cell.
    pub date: Date,
    /// Whether `date` belongs to the page's month.
    pub in_month: bool,
    /// Holiday on `date`, if any.
    pub holiday: Option<Holiday>,
}

impl DayCell {
    /// Day of month printed in the cell.
    pub fn day(&self) -> u8 {
        self.date.day_of_month()
    }
}

/// Seven consecutive days.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekRow {
    cells: Vec<DayCell>,
    first: bool,
    last: bool,
}

impl WeekRow {
    /// The seven cells, in display order.
    pub fn cells(&self) -> &[DayCell] {
        &self.cells
    }

    /// `true` for the top row of the page.
    pub fn is_first(&self) -> bool {
        self.first
    }

    /// `true` for the bottom row of the page.
    pub fn is_last(&self) -> bool {
        self.last
    }
}

/// The grid of a single (year, month).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthPage {
    year: u16,
    month: Month,
    week_start: Weekday,
    rows: Vec<WeekRow>,
}

impl MonthPage {
    /// Lay out `year`/`month` with weeks beginning on `week_start`, labelling
    /// each day through `calendar`.
    ///
    /// # Errors
    /// Fails with [`Error::Date`] if `month` is outside 1–12, and with
    /// [`Error::InvalidArgument`] if `year` lies outside
    /// [`FIRST_PAGE_YEAR`]`..=`[`LAST_PAGE_YEAR`].
    pub fn build(
        year: u16,
        month: u8,
        calendar: &dyn HolidayCalendar,
        week_start: Weekday,
    ) -> Result<Self> {
        if !(FIRST_PAGE_YEAR..=LAST_PAGE_YEAR).contains(&year) {
            return Err(Error::InvalidArgument(format!(
                "year {year} out of range [{FIRST_PAGE_YEAR}, {LAST_PAGE_YEAR}]"
            )));
        }
        let first_of_month = Date::from_ymd(year, month, 1)?;
        let last_of_month = first_of_month.end_of_month();

        let lead = i32::from(week_start.days_until(first_of_month.weekday()));
        let start = first_of_month.add_days(-lead)?;
        let weeks = (lead + i32::from(last_of_month.day_of_month()) + 6) / 7;

        let mut rows = Vec::with_capacity(weeks as usize);
        for week in 0..weeks {
            let cells = (0..7)
                .map(|i| -> Result<DayCell> {
                    let date = start.add_days(7 * week + i)?;
                    Ok(DayCell {
                        date,
                        in_month: date.month() == month && date.year() == year,
                        holiday: calendar.holiday(date),
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            rows.push(WeekRow {
                cells,
                first: week == 0,
                last: week == weeks - 1,
            });
        }

        debug!(
            "laid out {year}-{month:02} in {} weeks starting {week_start}",
            rows.len()
        );

        Ok(Self {
            year,
            month: first_of_month.month_of_year(),
            week_start,
            rows,
        })
    }

    /// Sunday-first layout, as printed on North American wall calendars.
    pub fn sunday_first(year: u16, month: u8, calendar: &dyn HolidayCalendar) -> Result<Self> {
        Self::build(year, month, calendar, Weekday::Sunday)
    }

    /// The page's year.
    pub fn year(&self) -> u16 {
        self.year
    }

    /// The page's month.
    pub fn month(&self) -> Month {
        self.month
    }

    /// First weekday of every row.
    pub fn week_start(&self) -> Weekday {
        self.week_start
    }

    /// Week rows from top to bottom.
    pub fn rows(&self) -> &[WeekRow] {
        &self.rows
    }

    /// Banner text, e.g. `"February 2023"`.
    pub fn title(&self) -> String {
        format!("{} {}", self.month, self.year)
    }
}
