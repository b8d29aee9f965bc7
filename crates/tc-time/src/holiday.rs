//! Holiday labels and the date predicates that produce them.

use crate::date::Date;
use crate::easter::easter_sunday;
use crate::nth_weekday::is_nth_weekday;
use crate::weekday::Weekday;

/// How prominently a holiday is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Emphasis {
    /// Statutory holiday, printed at full contrast.
    #[default]
    Primary,
    /// Informal or federal-only observance, printed in gray.
    Grayed,
}

/// A holiday label attached to a date.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Holiday {
    name: String,
    emphasis: Emphasis,
}

impl Holiday {
    /// A full-contrast holiday.
    pub fn primary(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            emphasis: Emphasis::Primary,
        }
    }

    /// A de-emphasized holiday.
    pub fn grayed(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            emphasis: Emphasis::Grayed,
        }
    }

    /// Plain-text name, e.g. `"Victoria Day"`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Emphasis used when rendering the label.
    pub fn emphasis(&self) -> Emphasis {
        self.emphasis
    }

    /// Shorthand for `emphasis() == Emphasis::Grayed`.
    pub fn is_grayed(&self) -> bool {
        self.emphasis == Emphasis::Grayed
    }
}

impl std::fmt::Display for Holiday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

/// A predicate selecting the date(s) of a holiday within any year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HolidayRule {
    /// Same month and day every year.
    Fixed {
        /// Month (1–12).
        month: u8,
        /// Day of month.
        day: u8,
    },
    /// The `n`-th `weekday` of `month`.
    NthWeekday {
        /// Month (1–12).
        month: u8,
        /// 1-based occurrence.
        n: u8,
        /// Weekday to count.
        weekday: Weekday,
    },
    /// A fixed number of days from Easter Sunday (negative = before).
    ///
    /// Never matches before 1583.
    EasterOffset(i32),
    /// A `weekday` whose day of month lies in `first_day..=last_day`.
    WeekdayInRange {
        /// Month (1–12).
        month: u8,
        /// Required weekday.
        weekday: Weekday,
        /// First admissible day of month.
        first_day: u8,
        /// Last admissible day of month.
        last_day: u8,
    },
}

impl HolidayRule {
    /// Return `true` if `date` satisfies this rule.
    pub fn matches(&self, date: Date) -> bool {
        match *self {
            HolidayRule::Fixed { month, day } => {
                date.month() == month && date.day_of_month() == day
            }
            HolidayRule::NthWeekday { month, n, weekday } => {
                date.month() == month && is_nth_weekday(date, n, weekday)
            }
            HolidayRule::EasterOffset(offset) => easter_sunday(date.year())
                .and_then(|easter| easter.add_days(offset))
                .map_or(false, |feast| feast == date),
            HolidayRule::WeekdayInRange {
                month,
                weekday,
                first_day,
                last_day,
            } => {
                date.month() == month
                    && date.weekday() == weekday
                    && (first_day..=last_day).contains(&date.day_of_month())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn fixed_rule() {
        let rule = HolidayRule::Fixed { month: 7, day: 1 };
        assert!(rule.matches(date(2023, 7, 1)));
        assert!(rule.matches(date(1850, 7, 1)));
        assert!(!rule.matches(date(2023, 7, 2)));
        assert!(!rule.matches(date(2023, 1, 7)));
    }

    #[test]
    fn easter_offset_rule() {
        let good_friday = HolidayRule::EasterOffset(-2);
        assert!(good_friday.matches(date(2024, 3, 29)));
        assert!(!good_friday.matches(date(2024, 3, 31)));
        // Julian-era dates never match.
        assert!(!HolidayRule::EasterOffset(0).matches(date(1500, 4, 8)));
    }

    #[test]
    fn weekday_in_range_rule() {
        let rule = HolidayRule::WeekdayInRange {
            month: 5,
            weekday: Weekday::Monday,
            first_day: 18,
            last_day: 24,
        };
        assert!(rule.matches(date(2025, 5, 19)));
        assert!(!rule.matches(date(2025, 5, 26)));
        assert!(!rule.matches(date(2025, 5, 20)));
    }

    #[test]
    fn labels() {
        let h = Holiday::grayed("Halloween");
        assert!(h.is_grayed());
        assert_eq!(h.to_string(), "Halloween");
        assert_eq!(Holiday::primary("Canada Day").emphasis(), Emphasis::Primary);
    }
}
