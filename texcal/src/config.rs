//! Configuration file loading.
//!
//! The file is TOML.  Every key is optional:
//!
//! ```toml
//! week_start = "sunday"        # or "monday"
//! holiday_gray = 50            # 0 (white) ..= 100 (black)
//! out_of_month_gray = 25
//! day_names = true
//! holidays = "manitoba"        # or "none"
//!
//! [[extra_holidays]]
//! name = "Founders' Day"
//! month = 6
//! day = 21
//! grayed = true
//! ```

use std::env;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::Deserialize;
use thiserror::Error;

use tc_latex::calendar::{DEFAULT_HOLIDAY_GRAY, DEFAULT_OUT_OF_MONTH_GRAY};
use tc_latex::CalendarStyle;
use tc_time::{Date, Holiday, HolidayCalendar, HolidayRule, NullCalendar, RuleCalendar, Weekday};

const CONFIG_PATH_ENV_VAR: &str = "TEXCAL_CONFIG_FILE";

/// Errors raised while locating, reading, or interpreting a config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("cannot read config file `{path}`: {source}")]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// The file is not valid TOML for [`Config`].
    #[error("cannot parse config file `{path}`: {source}")]
    Parse {
        /// File that failed.
        path: PathBuf,
        /// Underlying error.
        source: toml::de::Error,
    },

    /// The values parsed but are out of range.
    #[error("invalid configuration: {0}")]
    Invalid(#[from] tc_core::Error),
}

/// First column of each week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    /// North American layout.
    #[default]
    Sunday,
    /// ISO layout.
    Monday,
}

impl From<WeekStart> for Weekday {
    fn from(w: WeekStart) -> Weekday {
        match w {
            WeekStart::Sunday => Weekday::Sunday,
            WeekStart::Monday => Weekday::Monday,
        }
    }
}

/// Built-in holiday table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HolidaySet {
    /// Manitoba statutory holidays and grayed observances.
    #[default]
    Manitoba,
    /// Only `extra_holidays`.
    None,
}

/// A user-defined fixed-date holiday, checked after the built-in table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExtraHoliday {
    /// Label printed in the cell.
    pub name: String,
    /// Month (1–12).
    pub month: u8,
    /// Day of month.
    pub day: u8,
    /// Print in gray.
    #[serde(default)]
    pub grayed: bool,
}

/// Settings read from the config file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// First column of each week.
    pub week_start: WeekStart,
    /// Darkness of grayed holiday labels.
    pub holiday_gray: u8,
    /// Darkness of days from adjacent months.
    pub out_of_month_gray: u8,
    /// Print weekday names above each grid.
    pub day_names: bool,
    /// Built-in holiday table.
    pub holidays: HolidaySet,
    /// Additional fixed-date holidays.
    pub extra_holidays: Vec<ExtraHoliday>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            week_start: WeekStart::default(),
            holiday_gray: DEFAULT_HOLIDAY_GRAY,
            out_of_month_gray: DEFAULT_OUT_OF_MONTH_GRAY,
            day_names: true,
            holidays: HolidaySet::default(),
            extra_holidays: Vec::new(),
        }
    }
}

impl Config {
    /// Parse a config from TOML text.
    pub fn from_toml_str(text: &str, origin: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Read and parse the file at `path`.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text, path)
    }

    /// The rendering style described by this config.
    pub fn style(&self) -> Result<CalendarStyle, ConfigError> {
        let style = CalendarStyle {
            holiday_gray: self.holiday_gray,
            out_of_month_gray: self.out_of_month_gray,
            day_names: self.day_names,
            week_start: self.week_start.into(),
        };
        style.validate()?;
        Ok(style)
    }

    /// The holiday calendar described by this config.
    pub fn holiday_calendar(&self) -> Result<Box<dyn HolidayCalendar>, ConfigError> {
        if self.holidays == HolidaySet::None && self.extra_holidays.is_empty() {
            return Ok(Box::new(NullCalendar));
        }
        let mut calendar = match self.holidays {
            HolidaySet::Manitoba => RuleCalendar::manitoba(),
            HolidaySet::None => RuleCalendar::new("Custom"),
        };
        for extra in &self.extra_holidays {
            // 2000 is a leap year, so Feb 29 is accepted.
            Date::from_ymd(2000, extra.month, extra.day)?;
            let holiday = if extra.grayed {
                Holiday::grayed(extra.name.as_str())
            } else {
                Holiday::primary(extra.name.as_str())
            };
            calendar = calendar.with_rule(
                HolidayRule::Fixed {
                    month: extra.month,
                    day: extra.day,
                },
                holiday,
            );
        }
        Ok(Box::new(calendar))
    }
}

/// Candidate config files, most specific first.
///
/// `$TEXCAL_CONFIG_FILE`, then `$XDG_CONFIG_HOME/texcal/config.toml` (or the
/// platform config directory), then `~/.texcal.toml`.
pub fn find_configfile_locations() -> Vec<PathBuf> {
    let mut locations = Vec::new();
    if let Some(path) = env::var_os(CONFIG_PATH_ENV_VAR) {
        locations.push(PathBuf::from(path));
    }
    let config_dir = env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(dirs::config_dir);
    if let Some(dir) = config_dir {
        locations.push(dir.join("texcal").join("config.toml"));
    }
    if let Some(home) = dirs::home_dir() {
        locations.push(home.join(".texcal.toml"));
    }
    locations
}

/// Load the config named on the command line, or the first existing file in
/// [`find_configfile_locations`], or the defaults.
///
/// An explicitly named file must exist.
pub fn load_suitable_config(explicit: Option<&Path>) -> Result<Config, ConfigError> {
    if let Some(path) = explicit {
        info!("loading config from {}", path.display());
        return Config::from_file(path);
    }
    for candidate in find_configfile_locations() {
        if candidate.is_file() {
            info!("loading config from {}", candidate.display());
            return Config::from_file(&candidate);
        }
        debug!("no config at {}", candidate.display());
    }
    Ok(Config::default())
}
