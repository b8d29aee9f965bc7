//! Easter Sunday and the feasts tied to it.
//!
//! The congruence below is the Gauss-style "anniversarius" computation of the
//! Paschal full moon followed by the Sunday after it.  All divisions truncate
//! and every intermediate stays non-negative for `year >= 1583`.

use crate::date::Date;
use tc_core::errors::{Error, Result};

/// First year of the Gregorian calendar for which the computation is valid.
pub const FIRST_GREGORIAN_YEAR: u16 = 1583;

/// Return the date of Easter Sunday in `year`.
///
/// # Errors
/// Returns [`Error::InvalidArgument`] for years before 1583, where the
/// Gregorian epact tables do not apply.
pub fn easter_sunday(year: u16) -> Result<Date> {
    if year < FIRST_GREGORIAN_YEAR {
        return Err(Error::InvalidArgument(format!(
            "Easter is only defined for Gregorian years >= {FIRST_GREGORIAN_YEAR}, got {year}"
        )));
    }
    let y = i32::from(year);
    // golden number - 1
    let g = y % 19;
    let c = y / 100;
    // (23 - epact) mod 30
    let h = (c - c / 4 - (8 * c + 13) / 25 + 19 * g + 15) % 30;
    // days from March 21 to the Paschal full moon
    let i = h - (h / 28) * (1 - (h / 28) * (29 / (h + 1)) * ((21 - g) / 11));
    // weekday of the full moon (0 = Sunday)
    let j = (y + y / 4 + i + 2 - c + c / 4) % 7;
    // days from March 21 to the Sunday on or before the full moon, -6..=28
    let p = i - j;
    let day = 1 + (p + 27 + (p + 6) / 40) % 31;
    let month = 3 + (p + 26) / 30;
    Date::from_ymd(year, month as u8, day as u8)
}

/// Good Friday: two days before Easter Sunday.
pub fn good_friday(year: u16) -> Result<Date> {
    easter_sunday(year)?.add_days(-2)
}

/// Easter Monday: the day after Easter Sunday.
pub fn easter_monday(year: u16) -> Result<Date> {
    easter_sunday(year)?.add_days(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weekday::Weekday;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn easter_2023() {
        assert_eq!(easter_sunday(2023).unwrap(), date(2023, 4, 9));
        assert_eq!(good_friday(2023).unwrap(), date(2023, 4, 7));
        assert_eq!(easter_monday(2023).unwrap(), date(2023, 4, 10));
    }

    #[test]
    fn always_a_sunday() {
        for y in 1583..=2400u16 {
            assert_eq!(easter_sunday(y).unwrap().weekday(), Weekday::Sunday, "year {y}");
        }
    }

    #[test]
    fn julian_years_rejected() {
        assert!(matches!(easter_sunday(1582), Err(Error::InvalidArgument(_))));
        assert!(easter_sunday(FIRST_GREGORIAN_YEAR).is_ok());
    }
}
