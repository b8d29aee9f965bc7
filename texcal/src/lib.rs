//! # texcal
//!
//! Printable wall calendars as LaTeX source.
//!
//! This crate is a **façade** over the workspace crates plus the pieces the
//! `texcal` binary needs: configuration loading and logger setup.
//!
//! ```rust
//! use texcal::latex::{render_calendar, CalendarJob, CalendarStyle};
//! use texcal::time::RuleCalendar;
//!
//! let job = CalendarJob::new(vec![2023], vec![12]).unwrap();
//! let src = render_calendar(&job, &RuleCalendar::manitoba(), &CalendarStyle::default()).unwrap();
//! assert!(src.contains("Christmas Day"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

use chrono::Datelike;

/// Error definitions.
pub use tc_core as core;

/// Dates, Easter, holiday rules, and month grids.
pub use tc_time as time;

/// LaTeX documents and calendar rendering.
pub use tc_latex as latex;

/// Config file discovery and parsing.
pub mod config;

/// Logger bootstrap.
pub mod logging;

use tc_core::errors::Result;
use tc_latex::CalendarJob;
use tc_time::{Date, Emphasis, HolidayCalendar};

/// Today's date in the local time zone.
pub fn today() -> Result<Date> {
    let now = chrono::Local::now().date_naive();
    let year = u16::try_from(now.year())
        .map_err(|_| tc_core::Error::Date(format!("year {} out of range", now.year())))?;
    Date::from_ymd(year, now.month() as u8, now.day() as u8)
}

/// One line per holiday in the job's months: `YYYY-MM-DD<TAB>name<TAB>emphasis`.
pub fn list_holidays(job: &CalendarJob, calendar: &dyn HolidayCalendar) -> Result<String> {
    let mut out = String::new();
    for (year, month) in job.pages() {
        let first = Date::from_ymd(year, month, 1)?;
        for (date, holiday) in calendar.holidays_between(first, first.end_of_month()) {
            let emphasis = match holiday.emphasis() {
                Emphasis::Primary => "primary",
                Emphasis::Grayed => "grayed",
            };
            out.push_str(&format!("{date}\t{}\t{emphasis}\n", holiday.name()));
        }
    }
    Ok(out)
}
