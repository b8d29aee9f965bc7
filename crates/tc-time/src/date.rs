//! `Date` type.
//!
//! A date is a plain (year, month, day) triple in the proleptic Gregorian
//! calendar.  Arithmetic goes through a day serial number counted from
//! 1970-01-01 (serial 0), computed on demand.
//!
//! # Range
//! * Years 1 through 9999 are representable.
//! * Anything computed from Easter additionally needs `year >= 1583`, see
//!   [`crate::easter`].

use crate::month::Month;
use crate::weekday::Weekday;
use tc_core::errors::{Error, Result};

/// A calendar date.
///
/// Field order makes the derived ordering chronological.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date {
    year: u16,
    month: u8,
    day: u8,
}

// ── Constants ─────────────────────────────────────────────────────────────────

impl Date {
    /// Minimum valid date: January 1, year 1.
    pub const MIN: Date = Date {
        year: 1,
        month: 1,
        day: 1,
    };

    /// Maximum valid date: December 31, 9999.
    pub const MAX: Date = Date {
        year: 9999,
        month: 12,
        day: 31,
    };

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from year (1–9999), month (1–12), and day-of-month.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        if !(Self::MIN.year..=Self::MAX.year).contains(&year) {
            return Err(Error::Date(format!("year {year} out of range [1, 9999]")));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year}-{month:02}"
            )));
        }
        Ok(Date { year, month, day })
    }

    /// Create a date from a serial number (days since 1970-01-01).
    pub fn from_serial(serial: i32) -> Result<Self> {
        if serial < Self::MIN.serial() || serial > Self::MAX.serial() {
            return Err(Error::Date(format!(
                "serial {serial} outside [{}, {}]",
                Self::MIN.serial(),
                Self::MAX.serial()
            )));
        }
        let (year, month, day) = ymd_from_serial(serial);
        Ok(Date { year, month, day })
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number (days since 1970-01-01, negative before).
    pub fn serial(&self) -> i32 {
        serial_from_ymd(self.year, self.month, self.day)
    }

    /// Return the year (1–9999).
    pub fn year(&self) -> u16 {
        self.year
    }

    /// Return the month number (1–12).
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Return the month as an enum.
    pub fn month_of_year(&self) -> Month {
        Month::from_number(self.month).unwrap_or(Month::January)
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        self.day
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        weekday_of(self.year, self.month, self.day)
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days.  Returns an error if the result is out of range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        self.serial()
            .checked_add(n)
            .ok_or_else(|| Error::Date(format!("date arithmetic overflow adding {n} days")))
            .and_then(Self::from_serial)
    }

    /// Return the number of calendar days between `self` and `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: Date) -> i32 {
        other.serial() - self.serial()
    }

    /// Return the first day of the month containing this date.
    pub fn first_of_month(self) -> Self {
        Date { day: 1, ..self }
    }

    /// Return the last day of the month containing this date.
    pub fn end_of_month(self) -> Self {
        Date {
            day: days_in_month(self.year, self.month),
            ..self
        }
    }

    /// Return the *n*-th occurrence of `weekday` in the month of `year`/`month`.
    ///
    /// For example, `nth_weekday(2, Weekday::Sunday, 2023, 5)` returns
    /// Mother's Day 2023 (2023-05-14).
    ///
    /// # Errors
    /// Returns an error if `n` is zero or larger than the number of such
    /// weekdays in the month, or if the month itself is invalid.
    pub fn nth_weekday(n: u8, weekday: Weekday, year: u16, month: u8) -> Result<Self> {
        if n == 0 {
            return Err(Error::Date("nth_weekday: n must be >= 1".into()));
        }
        let first = Date::from_ymd(year, month, 1)?;
        let skip = first.weekday().days_until(weekday);
        let day = 1 + u32::from(skip) + 7 * (u32::from(n) - 1);
        if day > u32::from(days_in_month(year, month)) {
            return Err(Error::Date(format!(
                "nth_weekday: {n}-th {weekday} does not exist in {year}-{month:02}"
            )));
        }
        Date::from_ymd(year, month, day as u8)
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<i32> for Date {
    type Output = Self;
    fn add(self, rhs: i32) -> Self {
        self.add_days(rhs).expect("date addition overflow")
    }
}

impl std::ops::Sub<i32> for Date {
    type Output = Self;
    fn sub(self, rhs: i32) -> Self {
        self.add_days(-rhs).expect("date subtraction underflow")
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        rhs.days_between(self)
    }
}

impl std::ops::AddAssign<i32> for Date {
    fn add_assign(&mut self, rhs: i32) {
        *self = *self + rhs;
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({self})")
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
///
/// Returns 0 for a month outside 1–12.
pub fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Weekday of an already-validated (year, month, day).
fn weekday_of(year: u16, month: u8, day: u8) -> Weekday {
    // 1970-01-01 was a Thursday (index 3).
    let w = (serial_from_ymd(year, month, day) + 3).rem_euclid(7) as u8;
    Weekday::from_index(w).unwrap_or(Weekday::Monday)
}

/// Convert (year, month, day) to days since 1970-01-01.
///
/// Shifts the year to start in March so the leap day falls at the end.
fn serial_from_ymd(year: u16, month: u8, day: u8) -> i32 {
    let m = i32::from(month);
    let y = i32::from(year) - i32::from(m <= 2);
    let era = y.div_euclid(400);
    let yoe = y.rem_euclid(400);
    let mp = (m + 9) % 12;
    let doy = (153 * mp + 2) / 5 + i32::from(day) - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Decompose a serial number into (year, month, day).
fn ymd_from_serial(serial: i32) -> (u16, u8, u8) {
    let z = serial + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + i32::from(month <= 2);
    (year as u16, month as u8, day as u8)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch() {
        let d = Date::from_ymd(1970, 1, 1).unwrap();
        assert_eq!(d.serial(), 0);
        assert_eq!(d.weekday(), Weekday::Thursday);
    }

    #[test]
    fn test_roundtrip() {
        let dates = [
            (1, 1, 1),
            (1582, 10, 15),
            (1900, 2, 28), // non-leap century
            (2000, 2, 29), // leap
            (2023, 6, 15),
            (9999, 12, 31),
        ];
        for (y, m, d) in dates {
            let date = Date::from_ymd(y, m, d).unwrap();
            let back = Date::from_serial(date.serial()).unwrap();
            assert_eq!(back, date, "serial roundtrip failed for {y}-{m:02}-{d:02}");
        }
    }

    #[test]
    fn test_weekday() {
        // 2024-01-01 is a Monday
        let d = Date::from_ymd(2024, 1, 1).unwrap();
        assert_eq!(d.weekday(), Weekday::Monday);
        assert_eq!(d.weekday().index(), 0);
        // 2023-12-31 is a Sunday
        let d2 = Date::from_ymd(2023, 12, 31).unwrap();
        assert_eq!(d2.weekday(), Weekday::Sunday);
        assert_eq!(d2.weekday().index(), 6);
    }

    #[test]
    fn test_invalid_dates() {
        assert!(Date::from_ymd(2023, 2, 29).is_err());
        assert!(Date::from_ymd(2023, 13, 1).is_err());
        assert!(Date::from_ymd(2023, 0, 1).is_err());
        assert!(Date::from_ymd(0, 1, 1).is_err());
        assert!(Date::from_ymd(2023, 4, 31).is_err());
    }

    #[test]
    fn test_arithmetic() {
        let d = Date::from_ymd(2023, 1, 1).unwrap();
        let d2 = d + 31;
        assert_eq!(d2, Date::from_ymd(2023, 2, 1).unwrap());
        assert_eq!(d2 - d, 31);
        assert_eq!(Date::from_ymd(2024, 3, 1).unwrap() - 1, Date::from_ymd(2024, 2, 29).unwrap());
        assert!(Date::MAX.add_days(1).is_err());
        assert!(Date::MIN.add_days(-1).is_err());
    }

    #[test]
    fn test_month_bounds() {
        let d = Date::from_ymd(2024, 2, 15).unwrap();
        assert_eq!(d.end_of_month().day_of_month(), 29); // 2024 is a leap year
        assert_eq!(d.first_of_month().day_of_month(), 1);
        assert_eq!(d.month_of_year(), Month::February);
    }

    #[test]
    fn test_ordering() {
        let a = Date::from_ymd(2023, 12, 31).unwrap();
        let b = Date::from_ymd(2024, 1, 1).unwrap();
        assert!(a < b);
    }

    #[test]
    fn test_nth_weekday() {
        let d = Date::nth_weekday(2, Weekday::Sunday, 2023, 5).unwrap();
        assert_eq!(d, Date::from_ymd(2023, 5, 14).unwrap());

        // 5th Monday of January 2024 = January 29
        let d3 = Date::nth_weekday(5, Weekday::Monday, 2024, 1).unwrap();
        assert_eq!(d3, Date::from_ymd(2024, 1, 29).unwrap());
    }

    #[test]
    fn test_nth_weekday_out_of_range() {
        // There is no 5th Wednesday in February 2024
        assert!(Date::nth_weekday(5, Weekday::Wednesday, 2024, 2).is_err());
        assert!(Date::nth_weekday(0, Weekday::Monday, 2024, 1).is_err());
    }

    #[test]
    fn test_display() {
        let d = Date::from_ymd(2025, 4, 20).unwrap();
        assert_eq!(d.to_string(), "2025-04-20");
        assert_eq!(format!("{d:?}"), "Date(2025-04-20)");
    }
}
