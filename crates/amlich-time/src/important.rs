//! Next Mồng 1 (lunar day 1) and Rằm (lunar day 15).

use crate::date::Date;
use crate::lunar::{self, gregorian_to_lunar, LunarMonth};
use amlich_core::errors::Result;
use amlich_core::Clock;
use tracing::trace;

/// The next lunar 1st and 15th strictly after a reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ImportantDates {
    /// Next Mồng 1.
    pub next_first: Date,
    /// Next Rằm.
    pub next_full_moon: Date,
}

/// Find the next lunar day 1 and day 15 after `from`.
///
/// Before the 15th, the next Rằm is in the current month and the next
/// Mồng 1 in the following one; from the 15th on, both fall in the
/// following month.  Leap months count as months of their own.
///
/// # Errors
/// [`Error::OutOfRange`](amlich_core::Error::OutOfRange) near the end of the
/// supported range.
pub fn next_first_and_fifteenth(from: Date) -> Result<ImportantDates> {
    let today = gregorian_to_lunar(from);
    let current = today.lunar_month();
    let (next_year, next) = lunar::next_month(today.year(), current.number, current.is_leap);

    let next_first = first_of(next_year, next)?;
    let next_full_moon = if today.day() < 15 {
        fifteenth_of(today.year(), current)?
    } else {
        fifteenth_of(next_year, next)?
    };
    trace!(%from, %next_first, %next_full_moon, "next important dates");
    Ok(ImportantDates {
        next_first,
        next_full_moon,
    })
}

fn first_of(year: i32, month: LunarMonth) -> Result<Date> {
    lunar::lunar_to_gregorian(year, month.number, 1, month.is_leap)
}

fn fifteenth_of(year: i32, month: LunarMonth) -> Result<Date> {
    // Only trips at the range bounds; every lunar month has at least 29 days.
    if !lunar::is_valid_lunar_date(year, month.number, 15, month.is_leap) {
        return first_of(year, month)?.add_days(14);
    }
    lunar::lunar_to_gregorian(year, month.number, 15, month.is_leap)
}

/// [`next_first_and_fifteenth`] anchored on an injected clock.
#[derive(Debug)]
pub struct ImportantDateFinder<'a> {
    clock: &'a dyn Clock,
}

impl<'a> ImportantDateFinder<'a> {
    /// Finder reading "today" from `clock`.
    pub fn new(clock: &'a dyn Clock) -> Self {
        Self { clock }
    }

    /// Next Mồng 1 and Rằm after today.  The clock is read once.
    pub fn next_from_now(&self) -> Result<ImportantDates> {
        let today = Date::from_naive(self.clock.today())?;
        next_first_and_fifteenth(today)
    }
}
