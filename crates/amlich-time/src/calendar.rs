//! Gregorian month grids annotated with lunar metadata.
//!
//! A grid covers whole Sunday-first weeks: it starts on the Sunday on or
//! before the 1st and ends on the Saturday on or after the last day, so
//! its length is always a multiple of 7 and the leading and trailing days
//! belong to the neighbouring months.

use crate::date::Date;
use crate::holiday::{self, Holiday};
use crate::lunar::gregorian_to_lunar;
use crate::lunar_date::LunarDate;
use crate::month::Month;
use crate::recurrence::Occurrence;
use amlich_core::errors::{Error, Result};
use amlich_core::Clock;
use tracing::debug;

/// One cell of a month grid.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CalendarDay {
    /// Gregorian date of the cell.
    pub date: Date,
    /// Its lunar date.
    pub lunar: LunarDate,
    /// Equal to the builder's "today".
    pub is_today: bool,
    /// Inside the requested Gregorian month.
    pub is_current_month: bool,
    /// Lunar day 1 or 15.
    pub is_important: bool,
    /// Lunar festival, else Gregorian holiday.
    pub holiday: Option<Holiday>,
    /// Anniversary occurrences falling on this date.
    pub occurrences: Vec<Occurrence>,
}

/// Builder for a month grid.
///
/// ```
/// use amlich_time::calendar::MonthBuilder;
/// use amlich_time::Date;
///
/// let grid = MonthBuilder::new(2025, 2)
///     .with_today(Date::from_ymd(2025, 2, 12).unwrap())
///     .build()
///     .unwrap();
/// assert_eq!(grid.len() % 7, 0);
/// assert!(grid.iter().any(|d| d.is_today && d.lunar.day() == 15));
/// ```
#[derive(Debug, Clone)]
pub struct MonthBuilder {
    year: u16,
    month: u8,
    today: Option<Date>,
    occurrences: Vec<Occurrence>,
}

impl MonthBuilder {
    /// Grid for Gregorian `month` (1–12) of `year`.
    pub fn new(year: u16, month: u8) -> Self {
        Self {
            year,
            month,
            today: None,
            occurrences: Vec::new(),
        }
    }

    /// Mark `today` in the grid.
    pub fn with_today(mut self, today: Date) -> Self {
        self.today = Some(today);
        self
    }

    /// Read "today" once from `clock`.
    pub fn with_clock(self, clock: &dyn Clock) -> Result<Self> {
        let today = Date::from_naive(clock.today())?;
        Ok(self.with_today(today))
    }

    /// Occurrences to fold into the matching cells.  Those outside the grid
    /// are ignored.
    pub fn with_occurrences(mut self, occurrences: impl IntoIterator<Item = Occurrence>) -> Self {
        self.occurrences.extend(occurrences);
        self
    }

    /// Build the grid.
    ///
    /// # Errors
    /// * [`Error::Precondition`] if the month is not in `1..=12`.
    /// * [`Error::OutOfRange`] if any cell leaves the supported range
    ///   (January 1900, December 2100).
    pub fn build(self) -> Result<Vec<CalendarDay>> {
        let month = Month::from_number(self.month).ok_or_else(|| {
            Error::Precondition(format!("month index {} out of range [1, 12]", self.month))
        })?;
        let first = Date::from_ymd(self.year, month.number(), 1)?;
        let last = Date::from_ymd(self.year, month.number(), month.length(self.year))?;
        let start = first.add_days(-(first.weekday().column() as i32))?;
        let end = last.add_days(6 - last.weekday().column() as i32)?;
        debug!(year = self.year, month = self.month, %start, %end, "building month grid");

        let days = start
            .iter_to(end)
            .map(|date| {
                let lunar = gregorian_to_lunar(date);
                let holiday = lunar.festival().map(Holiday::Lunar).or_else(|| {
                    holiday::solar_holiday(date.month(), date.day_of_month()).map(Holiday::Solar)
                });
                CalendarDay {
                    date,
                    lunar,
                    is_today: self.today == Some(date),
                    is_current_month: date.month() == month.number(),
                    is_important: lunar.is_important(),
                    holiday,
                    occurrences: self
                        .occurrences
                        .iter()
                        .filter(|o| o.date == date)
                        .copied()
                        .collect(),
                }
            })
            .collect();
        Ok(days)
    }
}

/// Month grid for Gregorian `month` (1–12) of `year`.  See [`MonthBuilder`].
pub fn build_month(
    year: u16,
    month: u8,
    occurrences: &[Occurrence],
    today: Option<Date>,
) -> Result<Vec<CalendarDay>> {
    let mut builder = MonthBuilder::new(year, month).with_occurrences(occurrences.iter().copied());
    if let Some(today) = today {
        builder = builder.with_today(today);
    }
    builder.build()
}
