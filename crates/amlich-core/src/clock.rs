//! Injected "now" provider.
//!
//! The engine never reads the wall clock on its own.  Operations that need
//! "today" (month grids, next lunar 1st/15th) take a [`Clock`] and read it
//! exactly once per call, so a single logical operation never straddles
//! midnight.
//!
//! All civil dates are resolved in Vietnam civil time (UTC+7).

use chrono::{FixedOffset, NaiveDate, Utc};

/// Seconds east of UTC for Vietnam civil time.
pub const VIETNAM_UTC_OFFSET_SECS: i32 = 7 * 3600;

/// Source of the current civil date.
pub trait Clock: std::fmt::Debug + Send + Sync {
    /// Return the current civil date in the clock's time zone.
    fn today(&self) -> NaiveDate;
}

/// Wall clock resolved at a fixed UTC offset.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    offset: FixedOffset,
}

impl SystemClock {
    /// Wall clock in Vietnam civil time (UTC+7).
    pub fn vietnam() -> Self {
        Self {
            offset: FixedOffset::east_opt(VIETNAM_UTC_OFFSET_SECS)
                .expect("UTC+7 is a valid offset"),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::vietnam()
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.offset).date_naive()
    }
}

/// A clock frozen on one date.  Used by tests and by callers replaying a
/// computation for a known day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
