//! `Month`: Gregorian month-of-year, as used to address a month grid.

use crate::date::days_in_month;

/// Gregorian month, numbered 1–12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
#[allow(missing_docs)]
pub enum Month {
    January = 1,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

const MONTHS: [Month; 12] = {
    use Month::*;
    [
        January, February, March, April, May, June, July, August, September, October, November,
        December,
    ]
};

impl Month {
    /// Construct from a number (1 = January … 12 = December).
    ///
    /// Returns `None` if the value is out of range.
    pub fn from_number(n: u8) -> Option<Self> {
        MONTHS.get((n as usize).checked_sub(1)?).copied()
    }

    /// Return the 1-based month number.
    pub fn number(&self) -> u8 {
        *self as u8
    }

    /// Number of days in this month of `year`.
    pub fn length(&self, year: u16) -> u8 {
        days_in_month(year, self.number())
    }
}
