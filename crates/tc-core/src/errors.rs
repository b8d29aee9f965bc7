//! Error types for texcal.
//!
//! Every fallible operation in the workspace reports one `thiserror`-derived
//! enum.  Precondition checks go through the [`ensure!`](crate::ensure) and
//! [`fail!`](crate::fail) macros defined here.

use thiserror::Error;

/// The top-level error type used throughout texcal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// General runtime error (raised by `fail!`).
    #[error("{0}")]
    Runtime(String),

    /// Precondition violated (raised by `ensure!`).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// A (year, month, day) triple that is not a valid Gregorian date, or
    /// date arithmetic that leaves the supported range.
    #[error("date error: {0}")]
    Date(String),

    /// Invalid argument, e.g. a year outside the domain of an algorithm.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Shorthand `Result` type used throughout texcal.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use tc_core::{ensure, errors::Error};
/// fn month(m: u8) -> tc_core::errors::Result<u8> {
///     ensure!((1..=12).contains(&m), "month {m} out of range [1, 12]");
///     Ok(m)
/// }
/// assert!(month(3).is_ok());
/// assert!(month(13).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use tc_core::{fail, errors::Error};
/// fn always_err() -> tc_core::errors::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray(level: u8) -> Result<u8> {
        crate::ensure!(level <= 100, "gray level {level} exceeds 100");
        Ok(level)
    }

    #[test]
    fn ensure_passes_through() {
        assert_eq!(gray(50), Ok(50));
    }

    #[test]
    fn ensure_reports_precondition() {
        let err = gray(101).unwrap_err();
        assert_eq!(
            err.to_string(),
            "precondition not satisfied: gray level 101 exceeds 100"
        );
    }

    #[test]
    fn display_messages() {
        assert_eq!(
            Error::Date("day 30 out of range [1, 28] for 2023-02".into()).to_string(),
            "date error: day 30 out of range [1, 28] for 2023-02"
        );
        assert_eq!(
            Error::InvalidArgument("year 1500".into()).to_string(),
            "invalid argument: year 1500"
        );
    }
}
