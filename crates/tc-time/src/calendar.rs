//! `HolidayCalendar` trait and its implementations.
//!
//! A holiday calendar maps every date to at most one [`Holiday`].  The
//! rule-based calendar evaluates an ordered rule table where the first
//! matching rule wins; the order is part of the behaviour and is never
//! re-sorted.

use log::trace;

use crate::date::Date;
use crate::holiday::{Holiday, HolidayRule};
use crate::weekday::Weekday;

/// A calendar of named holidays.
pub trait HolidayCalendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"Manitoba"`).
    fn name(&self) -> &str;

    /// Return the holiday falling on `date`, if any.
    fn holiday(&self, date: Date) -> Option<Holiday>;

    /// Return `true` if `date` carries a holiday label.
    fn is_holiday(&self, date: Date) -> bool {
        self.holiday(date).is_some()
    }

    /// Collect every holiday in the inclusive range `[from, to]`.
    fn holidays_between(&self, from: Date, to: Date) -> Vec<(Date, Holiday)> {
        let mut found = Vec::new();
        let mut d = from;
        while d <= to {
            if let Some(h) = self.holiday(d) {
                found.push((d, h));
            }
            match d.add_days(1) {
                Ok(next) => d = next,
                Err(_) => break,
            }
        }
        found
    }
}

/// A calendar without any holidays.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullCalendar;

impl HolidayCalendar for NullCalendar {
    fn name(&self) -> &str {
        "None"
    }

    fn holiday(&self, _date: Date) -> Option<Holiday> {
        None
    }
}

/// A calendar driven by an ordered list of rules; the first match wins.
#[derive(Debug, Clone)]
pub struct RuleCalendar {
    name: String,
    rules: Vec<(HolidayRule, Holiday)>,
}

impl RuleCalendar {
    /// Create an empty rule calendar.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rules: Vec::new(),
        }
    }

    /// Append a rule.  It has lower priority than every rule already present.
    pub fn with_rule(mut self, rule: HolidayRule, holiday: Holiday) -> Self {
        self.rules.push((rule, holiday));
        self
    }

    /// The rules in evaluation order.
    pub fn rules(&self) -> &[(HolidayRule, Holiday)] {
        &self.rules
    }

    /// Manitoba statutory holidays followed by grayed federal and informal
    /// observances.
    ///
    /// Priority order:
    /// * New Year's Day (Jan 1), Canada Day (Jul 1), Remembrance Day
    ///   (Nov 11), Christmas Day (Dec 25)
    /// * Louis Riel Day (3rd Monday of February), Labour Day (1st Monday of
    ///   September), Thanksgiving Day (2nd Monday of October)
    /// * Good Friday, Easter Sunday, Easter Monday (grayed)
    /// * Victoria Day (Monday on or before May 24)
    /// * grayed: Christmas Eve, Boxing Day, Terry Fox Day (1st Monday of
    ///   August), St. Patrick's Day, Valentine's Day, Mother's Day (2nd
    ///   Sunday of May), Father's Day (3rd Sunday of June), Halloween,
    ///   New Year's Eve
    pub fn manitoba() -> Self {
        use crate::holiday::HolidayRule::{EasterOffset, Fixed, NthWeekday, WeekdayInRange};

        let fixed = |month, day| Fixed { month, day };
        let nth = |month, n, weekday| NthWeekday { month, n, weekday };

        Self::new("Manitoba")
            // fixed-date statutory holidays
            .with_rule(fixed(1, 1), Holiday::primary("New Year's Day"))
            .with_rule(fixed(7, 1), Holiday::primary("Canada Day"))
            .with_rule(fixed(11, 11), Holiday::primary("Remembrance Day"))
            .with_rule(fixed(12, 25), Holiday::primary("Christmas Day"))
            // nth-weekday statutory holidays
            .with_rule(nth(2, 3, Weekday::Monday), Holiday::primary("Louis Riel Day"))
            .with_rule(nth(9, 1, Weekday::Monday), Holiday::primary("Labour Day"))
            .with_rule(nth(10, 2, Weekday::Monday), Holiday::primary("Thanksgiving Day"))
            // movable feasts
            .with_rule(EasterOffset(-2), Holiday::primary("Good Friday"))
            .with_rule(EasterOffset(0), Holiday::primary("Easter Sunday"))
            .with_rule(EasterOffset(1), Holiday::grayed("Easter Monday"))
            // literal 18..=24 range, not "last Monday before May 25"
            .with_rule(
                WeekdayInRange {
                    month: 5,
                    weekday: Weekday::Monday,
                    first_day: 18,
                    last_day: 24,
                },
                Holiday::primary("Victoria Day"),
            )
            // grayed observances
            .with_rule(fixed(12, 24), Holiday::grayed("Christmas Eve"))
            .with_rule(fixed(12, 26), Holiday::grayed("Boxing Day"))
            .with_rule(nth(8, 1, Weekday::Monday), Holiday::grayed("Terry Fox Day"))
            .with_rule(fixed(3, 17), Holiday::grayed("St. Patrick's Day"))
            .with_rule(fixed(2, 14), Holiday::grayed("Valentine's Day"))
            .with_rule(nth(5, 2, Weekday::Sunday), Holiday::grayed("Mother's Day"))
            .with_rule(nth(6, 3, Weekday::Sunday), Holiday::grayed("Father's Day"))
            .with_rule(fixed(10, 31), Holiday::grayed("Halloween"))
            .with_rule(fixed(12, 31), Holiday::grayed("New Year's Eve"))
    }
}

impl HolidayCalendar for RuleCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    fn holiday(&self, date: Date) -> Option<Holiday> {
        let (_, holiday) = self.rules.iter().find(|(rule, _)| rule.matches(date))?;
        trace!("{}: {date} is {holiday}", self.name);
        Some(holiday.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::holiday::Emphasis;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn label(d: Date) -> Option<(String, Emphasis)> {
        RuleCalendar::manitoba()
            .holiday(d)
            .map(|h| (h.name().to_string(), h.emphasis()))
    }

    #[test]
    fn null_calendar_has_no_holidays() {
        assert!(!NullCalendar.is_holiday(date(2023, 12, 25)));
    }

    #[test]
    fn louis_riel_day_2023() {
        // 3rd Monday of February 2023 = Feb 20
        assert_eq!(
            label(date(2023, 2, 20)),
            Some(("Louis Riel Day".into(), Emphasis::Primary))
        );
        assert_eq!(label(date(2023, 2, 13)), None);
    }

    #[test]
    fn good_friday_2023() {
        assert_eq!(
            label(date(2023, 4, 7)),
            Some(("Good Friday".into(), Emphasis::Primary))
        );
    }

    #[test]
    fn easter_monday_is_grayed() {
        assert_eq!(
            label(date(2023, 4, 10)),
            Some(("Easter Monday".into(), Emphasis::Grayed))
        );
    }

    #[test]
    fn victoria_day_2023() {
        // Monday on or before May 24, 2023: May 22
        assert_eq!(
            label(date(2023, 5, 22)),
            Some(("Victoria Day".into(), Emphasis::Primary))
        );
    }

    #[test]
    fn terry_fox_day_2023() {
        assert_eq!(
            label(date(2023, 8, 7)),
            Some(("Terry Fox Day".into(), Emphasis::Grayed))
        );
    }

    #[test]
    fn ordinary_day() {
        // 2023-03-15 is a Wednesday
        assert_eq!(label(date(2023, 3, 15)), None);
    }

    #[test]
    fn appended_rule_has_lowest_priority() {
        let cal = RuleCalendar::manitoba()
            .with_rule(
                HolidayRule::Fixed { month: 12, day: 25 },
                Holiday::grayed("Shadowed"),
            )
            .with_rule(
                HolidayRule::Fixed { month: 6, day: 21 },
                Holiday::grayed("Solstice"),
            );
        assert_eq!(cal.holiday(date(2023, 12, 25)).unwrap().name(), "Christmas Day");
        assert_eq!(cal.holiday(date(2023, 6, 21)).unwrap().name(), "Solstice");
    }

    #[test]
    fn holidays_between_2023() {
        let cal = RuleCalendar::manitoba();
        let found = cal.holidays_between(date(2023, 1, 1), date(2023, 12, 31));
        let primary = found
            .iter()
            .filter(|(_, h)| h.emphasis() == Emphasis::Primary)
            .count();
        assert_eq!(primary, 10);
        assert_eq!(found.len(), 20);
    }
}
