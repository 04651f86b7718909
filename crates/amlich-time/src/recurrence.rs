//! Lunar anniversaries projected onto Gregorian date windows.
//!
//! An anniversary (a death anniversary, a family festival) is anchored on a
//! lunar `(month, day)` and, when recurring, repeats once per lunar year.
//! Because lunar years straddle Gregorian years, a window starting in
//! Gregorian year `Y` can contain the occurrence of lunar year `Y - 1`
//! (months 11 and 12 fall in January/February).  The projector therefore
//! probes lunar years `start.year - 1 ..= end.year` and keeps those that
//! land inside the window.
//!
//! A lunar year in which the anniversary does not exist (a leap-month
//! anchor in a year without that leap month, day 30 of a 29-day month) is
//! an ordinary [`YearProbe::Skipped`] result, not an error of the series.

use crate::date::Date;
use crate::lunar::lunar_to_gregorian;
use crate::lunar_date::LunarDate;
use amlich_core::ensure;
use amlich_core::errors::{Error, Result};
use tracing::debug;

/// A user-authored lunar anniversary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnniversaryDefinition {
    /// Lunar month, `1..=12`.
    pub lunar_month: u8,
    /// Lunar day, `1..=30`.
    pub lunar_day: u8,
    /// Anchored on the leap instance of `lunar_month`.
    pub is_leap_month: bool,
    /// Repeats every lunar year; otherwise only `anchor_lunar_year` counts.
    pub recurring: bool,
    /// Lunar year the anniversary was authored for.
    pub anchor_lunar_year: i32,
}

impl AnniversaryDefinition {
    /// A recurring anniversary on a regular month.
    pub fn recurring(lunar_month: u8, lunar_day: u8, anchor_lunar_year: i32) -> Self {
        Self {
            lunar_month,
            lunar_day,
            is_leap_month: false,
            recurring: true,
            anchor_lunar_year,
        }
    }

    /// A one-off lunar date.
    pub fn once(lunar_month: u8, lunar_day: u8, is_leap_month: bool, lunar_year: i32) -> Self {
        Self {
            lunar_month,
            lunar_day,
            is_leap_month,
            recurring: false,
            anchor_lunar_year: lunar_year,
        }
    }

    /// Mark the anchor as a leap-month date.
    pub fn in_leap_month(mut self) -> Self {
        self.is_leap_month = true;
        self
    }

    fn validate(&self) -> Result<()> {
        ensure!(
            (1..=12).contains(&self.lunar_month),
            "anniversary month {} out of range [1, 12]",
            self.lunar_month
        );
        ensure!(
            (1..=30).contains(&self.lunar_day),
            "anniversary day {} out of range [1, 30]",
            self.lunar_day
        );
        Ok(())
    }
}

/// One Gregorian occurrence of an anniversary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Occurrence {
    /// Gregorian date.
    pub date: Date,
    /// The lunar date it falls on.
    pub lunar: LunarDate,
    /// `false` only for the anchor year itself.
    pub is_recurring_instance: bool,
}

/// Outcome of probing one lunar year.
#[derive(Debug, Clone, PartialEq)]
pub enum YearProbe {
    /// The anniversary falls inside the window.
    Occurs(Occurrence),
    /// The anniversary exists that year but lies outside the window.
    OutsideWindow(Date),
    /// The anniversary does not exist that year (or leaves the supported
    /// range); the error says why.
    Skipped(Error),
}

/// Projects one [`AnniversaryDefinition`] onto Gregorian windows.
#[derive(Debug, Clone, Copy)]
pub struct RecurrenceProjector {
    definition: AnniversaryDefinition,
}

impl RecurrenceProjector {
    /// Projector for `definition`.
    ///
    /// # Errors
    /// [`Error::Precondition`] if the month or day is outside `1..=12` /
    /// `1..=30`.
    pub fn new(definition: AnniversaryDefinition) -> Result<Self> {
        definition.validate()?;
        Ok(Self { definition })
    }

    /// The definition being projected.
    pub fn definition(&self) -> &AnniversaryDefinition {
        &self.definition
    }

    /// Lunar years to probe for the window `[start, end]`.
    fn candidate_years(&self, start: Date, end: Date) -> std::ops::RangeInclusive<i32> {
        let d = &self.definition;
        if d.recurring {
            (start.year() as i32 - 1)..=(end.year() as i32)
        } else {
            d.anchor_lunar_year..=d.anchor_lunar_year
        }
    }

    /// Probe lunar year `year` against the window `[start, end]`.
    pub fn probe(&self, year: i32, start: Date, end: Date) -> YearProbe {
        let d = &self.definition;
        match lunar_to_gregorian(year, d.lunar_month, d.lunar_day, d.is_leap_month) {
            Ok(date) if (start..=end).contains(&date) => YearProbe::Occurs(Occurrence {
                date,
                lunar: LunarDate::from_parts(year, d.lunar_month, d.lunar_day, d.is_leap_month, date),
                is_recurring_instance: year != d.anchor_lunar_year,
            }),
            Ok(date) => YearProbe::OutsideWindow(date),
            Err(e) => YearProbe::Skipped(e),
        }
    }

    /// Every occurrence in `[start, end]`, ascending, without duplicates.
    ///
    /// # Errors
    /// * [`Error::Precondition`] if `start > end`.
    /// * For a non-recurring anniversary, the conversion error of its anchor
    ///   date, which the author needs to see.
    pub fn project(&self, start: Date, end: Date) -> Result<Vec<Occurrence>> {
        ensure!(start <= end, "window start {start} is after window end {end}");

        let mut occurrences = Vec::new();
        for year in self.candidate_years(start, end) {
            match self.probe(year, start, end) {
                YearProbe::Occurs(o) => occurrences.push(o),
                YearProbe::OutsideWindow(_) => {}
                YearProbe::Skipped(e) if self.definition.recurring => {
                    debug!(year, reason = %e, "anniversary does not occur this lunar year");
                }
                YearProbe::Skipped(e) => return Err(e),
            }
        }
        occurrences.sort_by_key(|o| o.date);
        occurrences.dedup_by_key(|o| o.date);
        Ok(occurrences)
    }

    /// The first occurrence on or after `from`, looking at most
    /// `max_years` lunar years ahead.
    pub fn next_on_or_after(&self, from: Date, max_years: u16) -> Result<Option<Occurrence>> {
        let horizon = Date::from_ymd(from.year().saturating_add(max_years).min(Date::MAX.year()), 12, 31)?;
        Ok(self.project(from, horizon)?.into_iter().next())
    }
}

/// Every Gregorian date in `[window_start, window_end]` on which
/// `definition` falls, ascending, without duplicates.
///
/// # Example
/// ```
/// use amlich_time::{project_occurrences, AnniversaryDefinition, Date};
///
/// // 12/20 of lunar 2024 falls in January 2025.
/// let def = AnniversaryDefinition::recurring(12, 20, 2024);
/// let start = Date::from_ymd(2025, 1, 1).unwrap();
/// let end = Date::from_ymd(2025, 2, 15).unwrap();
/// let hits = project_occurrences(&def, start, end).unwrap();
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].date, Date::from_ymd(2025, 1, 19).unwrap());
/// ```
pub fn project_occurrences(
    definition: &AnniversaryDefinition,
    window_start: Date,
    window_end: Date,
) -> Result<Vec<Occurrence>> {
    RecurrenceProjector::new(*definition)?.project(window_start, window_end)
}
