//! Error types for amlich.
//!
//! Every fallible operation in the workspace returns [`Result`], whose error
//! side is the single `thiserror`-derived [`Error`] enum.  Lunar validation
//! failures carry a structured [`LunarDateIssue`] so that callers can tell a
//! 29-day month apart from a missing leap month without parsing messages.

use thiserror::Error;

/// Why a lunar `(year, month, day, is_leap_month)` combination does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LunarDateIssue {
    /// The month ordinal is not in `1..=12`.
    MonthOutOfRange,
    /// The day exceeds the actual length of that month (29 or 30), or is 0.
    DayOutOfRange {
        /// Actual length of the requested month.
        length: u8,
    },
    /// A leap month was requested in a year that has none.
    NoLeapMonth,
    /// A leap month was requested, but the year's leap month has another ordinal.
    LeapMonthMismatch {
        /// Ordinal of the leap month the year actually has.
        leap_month: u8,
    },
}

impl std::fmt::Display for LunarDateIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LunarDateIssue::MonthOutOfRange => write!(f, "month out of range [1, 12]"),
            LunarDateIssue::DayOutOfRange { length } => {
                write!(f, "day out of range [1, {length}]")
            }
            LunarDateIssue::NoLeapMonth => write!(f, "year has no leap month"),
            LunarDateIssue::LeapMonthMismatch { leap_month } => {
                write!(f, "year's leap month is month {leap_month}")
            }
        }
    }
}

/// The top-level error type used throughout amlich.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// The lunar date does not exist in the given lunar year.
    #[error(
        "invalid lunar date {year}-{month:02}-{day:02}{}: {reason}",
        leap_suffix(.is_leap_month)
    )]
    InvalidLunarDate {
        /// Lunar year.
        year: i32,
        /// Lunar month ordinal.
        month: u8,
        /// Lunar day of month.
        day: u8,
        /// Whether the leap instance of `month` was requested.
        is_leap_month: bool,
        /// What is wrong with the combination.
        reason: LunarDateIssue,
    },

    /// Year or date outside the supported range.
    #[error("out of range: {0}")]
    OutOfRange(String),

    /// Malformed Gregorian date.
    #[error("date error: {0}")]
    Date(String),

    /// Precondition violated (raised by [`ensure!`](crate::ensure)).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),
}

impl Error {
    /// Return `true` for [`Error::InvalidLunarDate`].
    pub fn is_invalid_lunar_date(&self) -> bool {
        matches!(self, Error::InvalidLunarDate { .. })
    }

    /// Return `true` for [`Error::OutOfRange`].
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Error::OutOfRange(_))
    }
}

fn leap_suffix(is_leap_month: &bool) -> &'static str {
    if *is_leap_month {
        " (leap)"
    } else {
        ""
    }
}

/// Shorthand `Result` type used throughout amlich.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use amlich_core::{ensure, errors::Error};
/// fn month(m: u8) -> amlich_core::errors::Result<u8> {
///     ensure!((1..=12).contains(&m), "month {m} out of range [1, 12]");
///     Ok(m)
/// }
/// assert!(month(12).is_ok());
/// assert!(matches!(month(13), Err(Error::Precondition(_))));
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
