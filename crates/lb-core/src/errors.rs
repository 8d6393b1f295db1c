//! Error types for lunar-birthday.
//!
//! Every fallible operation in the workspace reports through the single
//! `thiserror`-derived [`Error`] enum below.  The `ensure!` and `fail!`
//! macros are shorthands for early returns with a formatted message.

use thiserror::Error;

/// The top-level error type used throughout lunar-birthday.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The lunar `(year, month, day, leap)` combination does not exist in the
    /// conversion table: month outside 1–12, a leap month the year does not
    /// have, or a day past the end of the month.
    #[error("invalid lunar date {year}-{}{month:02}-{day:02}", leap_prefix(.leap))]
    InvalidLunarDate {
        /// Lunar year.
        year: i32,
        /// Lunar month number.
        month: u8,
        /// Lunar day of month.
        day: u8,
        /// Whether the leap month was requested.
        leap: bool,
    },

    /// The requested year lies outside the span covered by the lunar table.
    #[error("year {year} outside the supported range [{min}, {max}]")]
    UnsupportedYearRange {
        /// The offending year.
        year: i32,
        /// First supported year.
        min: i32,
        /// Last supported year.
        max: i32,
    },

    /// Solar (Gregorian) date error.
    #[error("date error: {0}")]
    Date(String),

    /// A string could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// Return `true` for the errors a caller should treat as "this record
    /// cannot be placed on the calendar": an impossible lunar date or a year
    /// outside the table.
    pub fn is_conversion_failure(&self) -> bool {
        matches!(
            self,
            Error::InvalidLunarDate { .. } | Error::UnsupportedYearRange { .. }
        )
    }
}

fn leap_prefix(leap: &bool) -> &'static str {
    if *leap {
        "leap "
    } else {
        ""
    }
}

/// Shorthand `Result` type used throughout lunar-birthday.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::InvalidArgument(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use lb_core::{ensure, errors::Error};
/// fn horizon(days: u32) -> lb_core::errors::Result<u32> {
///     ensure!(days <= 366, "horizon must be at most a year, got {days}");
///     Ok(days)
/// }
/// assert!(horizon(7).is_ok());
/// assert!(horizon(400).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidArgument(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::Date(...))` immediately.
///
/// # Example
/// ```
/// use lb_core::{fail, errors::Error};
/// fn always_err() -> lb_core::errors::Result<()> {
///     fail!("no such day");
/// }
/// assert_eq!(always_err(), Err(Error::Date("no such day".into())));
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Date(format!($($msg)*)))
    };
}
