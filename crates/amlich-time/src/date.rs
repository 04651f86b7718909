//! Gregorian `Date` type.
//!
//! Dates are stored as a serial number of days since an epoch: serial 1 is
//! January 1, 1900.  The representable range is exactly the range the lunar
//! conversion supports, 1900-01-01 to 2100-12-31, so every `Date` has a
//! lunar counterpart.
//!
//! # Serial number convention
//! * Serial 1 = January 1, 1900 (a Monday).
//! * Serial 73 414 = December 31, 2100.
//! * Julian day number = serial + 2 415 020.

use crate::weekday::Weekday;
use amlich_core::errors::{Error, Result};
use amlich_core::JulianDay;
use chrono::{Datelike, NaiveDate};

/// Julian day number of serial 0 (December 31, 1899).
const JDN_OFFSET: i32 = 2_415_020;

/// First supported Gregorian year.
pub const MIN_YEAR: u16 = 1900;

/// Last supported Gregorian year.
pub const MAX_YEAR: u16 = 2100;

/// A timezone-naive Gregorian calendar date.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

// ── Constants ─────────────────────────────────────────────────────────────────

impl Date {
    /// Minimum valid date: January 1, 1900.
    pub const MIN: Date = Date(1);

    /// Maximum valid date: December 31, 2100.
    pub const MAX: Date = Date(73_414);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a serial number.
    pub fn from_serial(serial: i32) -> Result<Self> {
        let d = Date(serial);
        if d < Self::MIN || d > Self::MAX {
            return Err(Error::OutOfRange(format!(
                "serial {serial} outside [{}, {}]",
                Self::MIN.0,
                Self::MAX.0
            )));
        }
        Ok(d)
    }

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(Error::OutOfRange(format!(
                "year {year} out of range [{MIN_YEAR}, {MAX_YEAR}]"
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year}-{month:02}"
            )));
        }
        Ok(Date(serial_from_ymd(year, month, day)))
    }

    /// Create a date from a Julian day number.
    pub fn from_jdn(jdn: JulianDay) -> Result<Self> {
        Self::from_serial(jdn - JDN_OFFSET)
    }

    /// Convert a `chrono` civil date.
    pub fn from_naive(date: NaiveDate) -> Result<Self> {
        let year = u16::try_from(date.year())
            .map_err(|_| Error::OutOfRange(format!("year {} out of range", date.year())))?;
        Self::from_ymd(year, date.month() as u8, date.day() as u8)
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return the Julian day number.
    pub fn jdn(&self) -> JulianDay {
        self.0 + JDN_OFFSET
    }

    /// Return the year (1900–2100).
    pub fn year(&self) -> u16 {
        ymd_from_serial(self.0).0
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        ymd_from_serial(self.0).1
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        ymd_from_serial(self.0).2
    }

    /// Return `(year, month, day)`.
    pub fn ymd(&self) -> (u16, u8, u8) {
        ymd_from_serial(self.0)
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // Serial 1 (1900-01-01) is a Monday, so serial 0 would be a Sunday.
        Weekday::from_column(self.0.rem_euclid(7) as u8).expect("rem_euclid always in 0..7")
    }

    /// Format as ISO 8601 (`YYYY-MM-DD`).
    pub fn iso(&self) -> String {
        let (y, m, d) = ymd_from_serial(self.0);
        format!("{y:04}-{m:02}-{d:02}")
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days.  Returns an error if the result is out of range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        Self::from_serial(self.0 + n).map_err(|_| {
            Error::OutOfRange(format!("{self:?} + {n} days leaves the supported range"))
        })
    }

    /// Iterate over every date in `[self, end]`.
    pub fn iter_to(self, end: Date) -> impl Iterator<Item = Date> {
        (self.0..=end.0).map(Date)
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<i32> for Date {
    type Output = Self;
    fn add(self, rhs: i32) -> Self {
        self.add_days(rhs).expect("date addition overflow")
    }
}

impl std::ops::Sub<i32> for Date {
    type Output = Self;
    fn sub(self, rhs: i32) -> Self {
        self.add_days(-rhs).expect("date subtraction underflow")
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.iso())
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({})", self.iso())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Date {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.iso())
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => unreachable!(),
    }
}

/// Julian day number of any proleptic Gregorian date, including dates
/// outside the `Date` range.
pub fn jdn_from_ymd(year: i32, month: i32, day: i32) -> JulianDay {
    let (y, m, d) = (year, month, day);
    (1461 * (y + 4800 + (m - 14) / 12)) / 4 + (367 * (m - 2 - 12 * ((m - 14) / 12))) / 12
        - (3 * ((y + 4900 + (m - 14) / 12) / 100)) / 4
        + d
        - 32075
}

fn serial_from_ymd(year: u16, month: u8, day: u8) -> i32 {
    jdn_from_ymd(year as i32, month as i32, day as i32) - JDN_OFFSET
}

fn ymd_from_serial(serial: i32) -> (u16, u8, u8) {
    let (y, m, d) = ymd_from_jdn(serial + JDN_OFFSET);
    (y as u16, m as u8, d as u8)
}

/// Inverse of [`jdn_from_ymd`].
fn ymd_from_jdn(jdn: JulianDay) -> (i32, i32, i32) {
    let a = jdn + 32_044;
    let b = (4 * a + 3) / 146_097;
    let c = a - (b * 146_097) / 4;
    let d = (4 * c + 3) / 1461;
    let e = c - (1461 * d) / 4;
    let m = (5 * e + 2) / 153;
    let day = e - (153 * m + 2) / 5 + 1;
    let month = m + 3 - 12 * (m / 10);
    let year = b * 100 + d - 4800 + m / 10;
    (year, month, day)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch() {
        let d = Date::from_ymd(1900, 1, 1).unwrap();
        assert_eq!(d.serial(), 1);
        assert_eq!(d, Date::MIN);
        assert_eq!(Date::from_ymd(2100, 12, 31).unwrap(), Date::MAX);
    }

    #[test]
    fn test_roundtrip() {
        let dates = [
            (1900, 1, 1),
            (1900, 12, 31),
            (2000, 2, 29), // leap
            (2100, 2, 28), // non-leap century
            (2000, 1, 1),
            (2023, 6, 15),
            (2100, 12, 31),
        ];
        for (y, m, d) in dates {
            let date = Date::from_ymd(y, m, d).unwrap();
            assert_eq!(date.ymd(), (y, m, d), "mismatch for {y}-{m:02}-{d:02}");
        }
    }

    #[test]
    fn test_out_of_range() {
        assert!(Date::from_ymd(1899, 12, 31).unwrap_err().is_out_of_range());
        assert!(Date::from_ymd(2101, 1, 1).unwrap_err().is_out_of_range());
        assert!(matches!(Date::from_ymd(2023, 2, 29), Err(Error::Date(_))));
        assert!(Date::MAX.add_days(1).is_err());
        assert!(Date::MIN.add_days(-1).is_err());
    }

    #[test]
    fn test_jdn() {
        let d = Date::from_ymd(2000, 1, 1).unwrap();
        assert_eq!(d.jdn(), 2_451_545);
        assert_eq!(Date::from_jdn(2_451_545).unwrap(), d);
        assert_eq!(jdn_from_ymd(2000, 1, 1), 2_451_545);
        assert_eq!(jdn_from_ymd(1899, 12, 31), 2_415_020);
        assert_eq!(Date::MAX.jdn(), jdn_from_ymd(2100, 12, 31));
    }

    #[test]
    fn test_weekday() {
        // 2024-01-01 is a Monday
        let d = Date::from_ymd(2024, 1, 1).unwrap();
        assert_eq!(d.weekday(), Weekday::Monday);
        // 2024-01-06 is a Saturday
        let d2 = Date::from_ymd(2024, 1, 6).unwrap();
        assert_eq!(d2.weekday(), Weekday::Saturday);
    }

    #[test]
    fn test_arithmetic() {
        let d = Date::from_ymd(2023, 1, 1).unwrap();
        let d2 = d + 31;
        assert_eq!(d2.ymd(), (2023, 2, 1));
        assert_eq!(Date::from_ymd(2023, 2, 1).unwrap() - d, 31);
        assert_eq!(d.iter_to(d2).count(), 32);
    }

    #[test]
    fn test_chrono_interop() {
        let n = NaiveDate::from_ymd_opt(2025, 1, 29).unwrap();
        let d = Date::from_naive(n).unwrap();
        assert_eq!(d.iso(), "2025-01-29");
        assert!(Date::from_naive(NaiveDate::from_ymd_opt(2101, 1, 1).unwrap()).is_err());
    }
}
