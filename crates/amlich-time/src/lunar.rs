//! Gregorian ↔ Vietnamese lunisolar conversion.
//!
//! The lunar year is laid out from the astronomical base routines in
//! [`ephemeris`](crate::ephemeris): month boundaries are the civil days
//! (UTC+7) of successive new moons, and in a span of 13 months between two
//! winter-solstice months the first month without a major solar term is the
//! leap month.  This module owns only the policy layer on top of that:
//! validation, range checks, and error shaping.
//!
//! # Supported range
//! Lunar years 1899 ..= 2100, restricted to dates whose Gregorian
//! counterpart lies in [`Date::MIN`] ..= [`Date::MAX`].

use crate::date::{Date, MAX_YEAR, MIN_YEAR};
use crate::ephemeris;
use crate::lunar_date::LunarDate;
use amlich_core::errors::{Error, LunarDateIssue, Result};
use amlich_core::JulianDay;
use tracing::trace;

/// First lunar year accepted as input (its months 12 fall in January 1900).
pub const MIN_LUNAR_YEAR: i32 = MIN_YEAR as i32 - 1;

/// Last lunar year accepted as input.
pub const MAX_LUNAR_YEAR: i32 = MAX_YEAR as i32;

/// A lunar month label: ordinal `1..=12` plus the leap flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LunarMonth {
    /// Month ordinal, `1..=12`.
    pub number: u8,
    /// `true` for the intercalary instance sharing `number`.
    pub is_leap: bool,
}

impl LunarMonth {
    /// A regular (non-leap) month.
    pub const fn common(number: u8) -> Self {
        Self {
            number,
            is_leap: false,
        }
    }

    /// The leap instance of `number`.
    pub const fn leap(number: u8) -> Self {
        Self {
            number,
            is_leap: true,
        }
    }
}

/// First day of one lunar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthStart {
    /// Which month starts here.
    pub month: LunarMonth,
    /// Julian day number of its day 1.
    pub jdn: JulianDay,
}

/// Month layout of one lunar year, from month 1 day 1 up to (excluding)
/// the next lunar new year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LunarYear {
    year: i32,
    months: Vec<MonthStart>,
    end: JulianDay,
}

impl LunarYear {
    /// Lay out lunar year `year`.
    ///
    /// # Errors
    /// [`Error::OutOfRange`] if `year` is outside
    /// [`MIN_LUNAR_YEAR`] ..= [`MAX_LUNAR_YEAR`].
    pub fn new(year: i32) -> Result<Self> {
        check_year(year)?;
        Ok(Self::compute(year))
    }

    /// Lay out a year without the range check; only called with years whose
    /// layout is known to be needed for an in-range `Date`.
    fn compute(year: i32) -> Self {
        // Months 1..=10 sit in the solstice span that ends in Gregorian
        // `year`; months 11 and 12 in the span that starts there.
        let earlier = sui(year - 1);
        let later = sui(year);

        let mut months: Vec<MonthStart> = earlier
            .iter()
            .filter(|m| m.month.number <= 10)
            .copied()
            .collect();
        let tail = later.iter().take_while(|m| m.month.number >= 11);
        months.extend(tail.copied());
        let end = later
            .iter()
            .find(|m| m.month == LunarMonth::common(1))
            .map(|m| m.jdn)
            .expect("every solstice span contains month 1");

        trace!(year, months = months.len(), "laid out lunar year");
        Self { year, months, end }
    }

    /// Lunar year number.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Month starts in calendar order (12 or 13 entries).
    pub fn months(&self) -> &[MonthStart] {
        &self.months
    }

    /// Ordinal of this year's leap month, if it has one.
    pub fn leap_month(&self) -> Option<u8> {
        self.months
            .iter()
            .find(|m| m.month.is_leap)
            .map(|m| m.month.number)
    }

    /// Gregorian date of lunar new year (month 1, day 1).
    pub fn new_year(&self) -> Result<Date> {
        Date::from_jdn(self.months[0].jdn)
    }

    /// Number of days in the lunar year (353–355 or 383–385).
    pub fn length(&self) -> i32 {
        self.end - self.months[0].jdn
    }

    fn position(&self, month: u8, is_leap: bool) -> Result<usize> {
        let invalid = |reason| Error::InvalidLunarDate {
            year: self.year,
            month,
            day: 1,
            is_leap_month: is_leap,
            reason,
        };
        if !(1..=12).contains(&month) {
            return Err(invalid(LunarDateIssue::MonthOutOfRange));
        }
        let wanted = LunarMonth { number: month, is_leap };
        if let Some(i) = self.months.iter().position(|m| m.month == wanted) {
            return Ok(i);
        }
        Err(invalid(match self.leap_month() {
            Some(leap_month) => LunarDateIssue::LeapMonthMismatch { leap_month },
            None => LunarDateIssue::NoLeapMonth,
        }))
    }

    /// Julian day number of day 1 of the given month.
    pub fn month_start(&self, month: u8, is_leap: bool) -> Result<JulianDay> {
        Ok(self.months[self.position(month, is_leap)?].jdn)
    }

    /// Length (29 or 30) of the given month.
    pub fn month_length(&self, month: u8, is_leap: bool) -> Result<u8> {
        let i = self.position(month, is_leap)?;
        let next = self.months.get(i + 1).map_or(self.end, |m| m.jdn);
        Ok((next - self.months[i].jdn) as u8)
    }

    /// Locate a Julian day inside this year as `(month, day)`.
    pub fn locate(&self, jdn: JulianDay) -> Option<(LunarMonth, u8)> {
        if jdn < self.months[0].jdn || jdn >= self.end {
            return None;
        }
        let i = self.months.partition_point(|m| m.jdn <= jdn) - 1;
        let m = self.months[i];
        Some((m.month, (jdn - m.jdn + 1) as u8))
    }
}

/// Labelled month starts of the solstice span beginning with month 11 of
/// Gregorian year `year` and ending before month 11 of `year + 1`.
fn sui(year: i32) -> Vec<MonthStart> {
    let a11 = ephemeris::month_11_start(year);
    let b11 = ephemeris::month_11_start(year + 1);
    let k = ephemeris::lunation_nearest(a11);
    let count = if b11 - a11 > 365 { 13 } else { 12 };
    let leap_at = (count == 13).then(|| ephemeris::leap_month_offset(a11));

    (0..count)
        .map(|i| {
            let month = match leap_at {
                Some(l) if i == l => LunarMonth::leap(label(i - 1)),
                Some(l) if i > l => LunarMonth::common(label(i - 1)),
                _ => LunarMonth::common(label(i)),
            };
            MonthStart {
                month,
                jdn: ephemeris::new_moon_day(k + i as i32),
            }
        })
        .collect()
}

/// Month ordinal at offset `i` from month 11, ignoring leap months.
fn label(i: usize) -> u8 {
    ((10 + i) % 12) as u8 + 1
}

fn check_year(year: i32) -> Result<()> {
    if !(MIN_LUNAR_YEAR..=MAX_LUNAR_YEAR).contains(&year) {
        return Err(Error::OutOfRange(format!(
            "lunar year {year} out of range [{MIN_LUNAR_YEAR}, {MAX_LUNAR_YEAR}]"
        )));
    }
    Ok(())
}

// ── Conversion primitives ─────────────────────────────────────────────────────

/// Convert a Gregorian date to its lunar date.  Total over [`Date`].
///
/// # Example
/// ```
/// use amlich_time::{gregorian_to_lunar, Date};
///
/// let tet = gregorian_to_lunar(Date::from_ymd(2025, 1, 29).unwrap());
/// assert_eq!((tet.year(), tet.month(), tet.day()), (2025, 1, 1));
/// ```
pub fn gregorian_to_lunar(date: Date) -> LunarDate {
    let jdn = date.jdn();
    let mut layout = LunarYear::compute(date.year() as i32);
    if jdn < layout.months[0].jdn {
        layout = LunarYear::compute(layout.year - 1);
    }
    let (month, day) = layout
        .locate(jdn)
        .expect("a date before Tết of its year lies in the previous lunar year");
    LunarDate::from_parts(layout.year, month.number, day, month.is_leap, date)
}

/// Convert a lunar date to its Gregorian date.
///
/// # Errors
/// * [`Error::InvalidLunarDate`] when the month/day/leap combination does
///   not exist in `year`.
/// * [`Error::OutOfRange`] when `year` or the resulting date is outside the
///   supported range.
pub fn lunar_to_gregorian(year: i32, month: u8, day: u8, is_leap_month: bool) -> Result<Date> {
    let layout = LunarYear::new(year)?;
    let start = layout.month_start(month, is_leap_month).map_err(|e| with_day(e, day))?;
    let length = layout.month_length(month, is_leap_month)?;
    if day == 0 || day > length {
        return Err(Error::InvalidLunarDate {
            year,
            month,
            day,
            is_leap_month,
            reason: LunarDateIssue::DayOutOfRange { length },
        });
    }
    Date::from_jdn(start + day as i32 - 1)
}

/// Length (29 or 30) of lunar month `(year, month, is_leap_month)`.
pub fn month_length(year: i32, month: u8, is_leap_month: bool) -> Result<u8> {
    LunarYear::new(year)?.month_length(month, is_leap_month)
}

/// Ordinal of the leap month of lunar `year`, if any.
pub fn leap_month(year: i32) -> Result<Option<u8>> {
    Ok(LunarYear::new(year)?.leap_month())
}

/// Return `true` iff `lunar_to_gregorian` would succeed.  Never fails.
pub fn is_valid_lunar_date(year: i32, month: u8, day: u8, is_leap_month: bool) -> bool {
    lunar_to_gregorian(year, month, day, is_leap_month).is_ok()
}

/// The lunar month following `(year, month, is_leap_month)`.
///
/// A regular month is followed by its leap instance when the year has one
/// (checked with [`is_valid_lunar_date`]); month 12 wraps to month 1 of
/// `year + 1`.
pub fn next_month(year: i32, month: u8, is_leap_month: bool) -> (i32, LunarMonth) {
    if !is_leap_month && is_valid_lunar_date(year, month, 1, true) {
        return (year, LunarMonth::leap(month));
    }
    if month >= 12 {
        (year + 1, LunarMonth::common(1))
    } else {
        (year, LunarMonth::common(month + 1))
    }
}

fn with_day(e: Error, day: u8) -> Error {
    match e {
        Error::InvalidLunarDate {
            year,
            month,
            is_leap_month,
            reason,
            ..
        } => Error::InvalidLunarDate {
            year,
            month,
            day,
            is_leap_month,
            reason,
        },
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn common_year_layout() {
        let y = LunarYear::new(2024).unwrap();
        assert_eq!(y.months().len(), 12);
        assert_eq!(y.leap_month(), None);
        assert_eq!(y.new_year().unwrap(), date(2024, 2, 10));
        assert_eq!(y.length(), date(2025, 1, 29) - date(2024, 2, 10));
    }

    #[test]
    fn leap_year_layout() {
        let y = LunarYear::new(2023).unwrap();
        assert_eq!(y.months().len(), 13);
        assert_eq!(y.leap_month(), Some(2));
        let order: Vec<_> = y.months().iter().map(|m| m.month).collect();
        assert_eq!(order[1], LunarMonth::common(2));
        assert_eq!(order[2], LunarMonth::leap(2));
        assert_eq!(order[3], LunarMonth::common(3));
    }

    #[test]
    fn year_2025_leap_six() {
        assert_eq!(leap_month(2025).unwrap(), Some(6));
        assert_eq!(lunar_to_gregorian(2025, 6, 1, false).unwrap(), date(2025, 6, 25));
        assert_eq!(lunar_to_gregorian(2025, 6, 1, true).unwrap(), date(2025, 7, 25));
        assert_eq!(lunar_to_gregorian(2025, 7, 1, false).unwrap(), date(2025, 8, 23));
        assert_eq!(month_length(2025, 6, false).unwrap(), 30);
        assert_eq!(month_length(2025, 6, true).unwrap(), 29);
    }

    #[test]
    fn day_thirty_in_short_month() {
        let err = lunar_to_gregorian(2025, 6, 30, true).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidLunarDate {
                year: 2025,
                month: 6,
                day: 30,
                is_leap_month: true,
                reason: LunarDateIssue::DayOutOfRange { length: 29 },
            }
        );
        assert!(!is_valid_lunar_date(2025, 6, 30, true));
        assert!(is_valid_lunar_date(2025, 6, 29, true));
    }

    #[test]
    fn leap_month_errors() {
        assert!(matches!(
            lunar_to_gregorian(2024, 3, 1, true),
            Err(Error::InvalidLunarDate {
                reason: LunarDateIssue::NoLeapMonth,
                ..
            })
        ));
        assert!(matches!(
            lunar_to_gregorian(2025, 3, 1, true),
            Err(Error::InvalidLunarDate {
                reason: LunarDateIssue::LeapMonthMismatch { leap_month: 6 },
                day: 1,
                ..
            })
        ));
        assert!(matches!(
            lunar_to_gregorian(2025, 13, 1, false),
            Err(Error::InvalidLunarDate {
                reason: LunarDateIssue::MonthOutOfRange,
                ..
            })
        ));
        assert!(matches!(
            lunar_to_gregorian(2025, 1, 0, false),
            Err(Error::InvalidLunarDate { .. })
        ));
    }

    #[test]
    fn out_of_range_years() {
        assert!(lunar_to_gregorian(1898, 1, 1, false).unwrap_err().is_out_of_range());
        assert!(lunar_to_gregorian(2101, 1, 1, false).unwrap_err().is_out_of_range());
        // Month 11 of lunar 1899 starts in December 1899.
        assert!(lunar_to_gregorian(1899, 11, 1, false).unwrap_err().is_out_of_range());
        assert!(!is_valid_lunar_date(1898, 1, 1, false));
    }

    #[test]
    fn range_edges() {
        let first = gregorian_to_lunar(Date::MIN);
        assert_eq!(first.year(), 1899);
        assert_eq!(first.month(), 12);
        assert_eq!(
            lunar_to_gregorian(first.year(), first.month(), first.day(), first.is_leap_month())
                .unwrap(),
            Date::MIN
        );
        let last = gregorian_to_lunar(Date::MAX);
        assert_eq!(last.year(), 2100);
    }

    #[test]
    fn known_conversions() {
        let cases = [
            ((2000, 1, 1), (1999, 11, 25, false)),
            ((2024, 2, 10), (2024, 1, 1, false)),
            ((2024, 9, 17), (2024, 8, 15, false)),
            ((2024, 12, 31), (2024, 12, 1, false)),
            ((2025, 1, 28), (2024, 12, 29, false)),
            ((2025, 1, 29), (2025, 1, 1, false)),
            ((2023, 3, 22), (2023, 2, 1, true)),
            ((2020, 5, 23), (2020, 4, 1, true)),
        ];
        for ((y, m, d), (ly, lm, ld, leap)) in cases {
            let lunar = gregorian_to_lunar(date(y, m, d));
            assert_eq!(
                (lunar.year(), lunar.month(), lunar.day(), lunar.is_leap_month()),
                (ly, lm, ld, leap),
                "{y}-{m:02}-{d:02}"
            );
            assert_eq!(lunar_to_gregorian(ly, lm, ld, leap).unwrap(), date(y, m, d));
        }
    }

    #[test]
    fn next_month_is_leap_aware() {
        assert_eq!(next_month(2025, 6, false), (2025, LunarMonth::leap(6)));
        assert_eq!(next_month(2025, 6, true), (2025, LunarMonth::common(7)));
        assert_eq!(next_month(2024, 12, false), (2025, LunarMonth::common(1)));
        assert_eq!(next_month(2024, 5, false), (2024, LunarMonth::common(6)));
    }
}
