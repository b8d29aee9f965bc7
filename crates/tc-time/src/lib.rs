//! # tc-time
//!
//! Dates, Easter, holiday rules, and the month grid of a wall calendar.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `HolidayCalendar` trait and built-in calendars.
pub mod calendar;

/// `Date` type.
pub mod date;

/// Easter Sunday and the feasts derived from it.
pub mod easter;

/// Holiday labels and rules.
pub mod holiday;

/// Months of the year.
pub mod month;

/// Week rows of one month.
pub mod month_page;

/// n-th weekday of the month predicate.
pub mod nth_weekday;

/// Days of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::{HolidayCalendar, NullCalendar, RuleCalendar};
pub use date::Date;
pub use easter::{easter_monday, easter_sunday, good_friday};
pub use holiday::{Emphasis, Holiday, HolidayRule};
pub use month::Month;
pub use month_page::{DayCell, MonthPage, WeekRow, FIRST_PAGE_YEAR, LAST_PAGE_YEAR};
pub use nth_weekday::is_nth_weekday;
pub use weekday::Weekday;
