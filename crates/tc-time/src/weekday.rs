//! Day-of-week enum.

/// Day of the week.
///
/// Variants are indexed 0–6 (Monday = 0, Sunday = 6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Weekday {
    /// Monday (0).
    Monday = 0,
    /// Tuesday (1).
    Tuesday = 1,
    /// Wednesday (2).
    Wednesday = 2,
    /// Thursday (3).
    Thursday = 3,
    /// Friday (4).
    Friday = 4,
    /// Saturday (5).
    Saturday = 5,
    /// Sunday (6).
    Sunday = 6,
}

impl Weekday {
    /// Construct from the index (0 = Monday … 6 = Sunday).
    ///
    /// Returns `None` if the value is out of range.
    pub fn from_index(n: u8) -> Option<Self> {
        match n {
            0 => Some(Weekday::Monday),
            1 => Some(Weekday::Tuesday),
            2 => Some(Weekday::Wednesday),
            3 => Some(Weekday::Thursday),
            4 => Some(Weekday::Friday),
            5 => Some(Weekday::Saturday),
            6 => Some(Weekday::Sunday),
            _ => None,
        }
    }

    /// Return the index (0 = Monday … 6 = Sunday).
    pub fn index(&self) -> u8 {
        *self as u8
    }

    /// The following day of the week, wrapping Sunday to Monday.
    pub fn succ(&self) -> Self {
        match self {
            Weekday::Monday => Weekday::Tuesday,
            Weekday::Tuesday => Weekday::Wednesday,
            Weekday::Wednesday => Weekday::Thursday,
            Weekday::Thursday => Weekday::Friday,
            Weekday::Friday => Weekday::Saturday,
            Weekday::Saturday => Weekday::Sunday,
            Weekday::Sunday => Weekday::Monday,
        }
    }

    /// Number of days from `self` forward to `other` (0–6).
    pub fn days_until(&self, other: Weekday) -> u8 {
        (other.index() + 7 - self.index()) % 7
    }

    /// The seven weekdays of a week that begins on `self`.
    pub fn week_from(self) -> [Weekday; 7] {
        let mut days = [self; 7];
        for i in 1..7 {
            days[i] = days[i - 1].succ();
        }
        days
    }

    /// Full English name (`"Monday"`, `"Tuesday"`, …).
    pub fn name(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for Weekday {
    type Err = tc_core::Error;

    fn from_str(s: &str) -> tc_core::Result<Self> {
        let lower = s.trim().to_ascii_lowercase();
        (0..7)
            .filter_map(Weekday::from_index)
            .find(|w| {
                let name = w.name().to_ascii_lowercase();
                name == lower || name[..3] == lower
            })
            .ok_or_else(|| tc_core::Error::InvalidArgument(format!("unknown weekday `{s}`")))
    }
}
