//! `Weekday`: day of the week, in the Sunday-first order of a month grid.

/// Day of the week.
///
/// Discriminants are grid columns: Sunday = 0 … Saturday = 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[repr(u8)]
#[allow(missing_docs)]
pub enum Weekday {
    Sunday = 0,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

const WEEK: [Weekday; 7] = {
    use Weekday::*;
    [Sunday, Monday, Tuesday, Wednesday, Thursday, Friday, Saturday]
};

impl Weekday {
    /// Weekday in grid column `n` (0 = Sunday … 6 = Saturday).
    ///
    /// Returns `None` if the value is out of range.
    pub fn from_column(n: u8) -> Option<Self> {
        WEEK.get(n as usize).copied()
    }

    /// Grid column (0 = Sunday … 6 = Saturday); also the number of days
    /// since the preceding Sunday.
    pub fn column(&self) -> u8 {
        *self as u8
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}
