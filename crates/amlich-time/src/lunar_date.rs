//! `LunarDate` value type and its derived metadata.

use crate::date::Date;
use crate::holiday::{self, LunarFestival, Significance};
use crate::locale::Locale;
use crate::lunar::{self, LunarMonth};
use crate::moon_phase::MoonPhase;
use crate::sexagenary::{Sexagenary, ZodiacAnimal};
use crate::solar_term::{self, SolarTerm};
use amlich_core::errors::Result;

/// A date of the Vietnamese lunisolar calendar.
///
/// Only obtainable through conversion or validation, so `day` never exceeds
/// the real length of its month.  Every derived attribute is a pure function
/// of the date.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LunarDate {
    year: i32,
    month: u8,
    day: u8,
    is_leap_month: bool,
    #[cfg_attr(feature = "serde", serde(rename = "gregorian"))]
    solar: Date,
}

impl LunarDate {
    /// Validate and build a lunar date.
    ///
    /// # Errors
    /// As [`lunar_to_gregorian`](crate::lunar::lunar_to_gregorian).
    pub fn new(year: i32, month: u8, day: u8, is_leap_month: bool) -> Result<Self> {
        let solar = lunar::lunar_to_gregorian(year, month, day, is_leap_month)?;
        Ok(Self::from_parts(year, month, day, is_leap_month, solar))
    }

    pub(crate) fn from_parts(year: i32, month: u8, day: u8, is_leap_month: bool, solar: Date) -> Self {
        Self {
            year,
            month,
            day,
            is_leap_month,
            solar,
        }
    }

    /// Lunar year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Month ordinal, `1..=12`.
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Day of month, `1..=30`.
    pub fn day(&self) -> u8 {
        self.day
    }

    /// `true` when the date lies in the leap month.
    pub fn is_leap_month(&self) -> bool {
        self.is_leap_month
    }

    /// Month label.
    pub fn lunar_month(&self) -> LunarMonth {
        LunarMonth {
            number: self.month,
            is_leap: self.is_leap_month,
        }
    }

    /// The Gregorian date of this day.
    pub fn to_gregorian(&self) -> Date {
        self.solar
    }

    /// Moon phase for the day of month.
    pub fn moon_phase(&self) -> MoonPhase {
        MoonPhase::from_day(self.day).expect("lunar days are 1..=30")
    }

    /// Cycle name of the year.
    pub fn cycle_year(&self) -> Sexagenary {
        Sexagenary::for_year(self.year)
    }

    /// Cycle name of the month.
    pub fn cycle_month(&self) -> Sexagenary {
        Sexagenary::for_month(self.year, self.month)
    }

    /// Cycle name of the day.
    pub fn cycle_day(&self) -> Sexagenary {
        Sexagenary::for_day(self.solar.jdn())
    }

    /// Zodiac animal of the year.
    pub fn zodiac(&self) -> ZodiacAnimal {
        self.cycle_year().branch.animal()
    }

    /// Solar term in effect on this day.
    pub fn solar_term(&self) -> SolarTerm {
        solar_term::solar_term_for(self.solar)
    }

    /// `true` on Mồng 1 and Rằm.
    pub fn is_important(&self) -> bool {
        holiday::is_important_lunar_date(self.day)
    }

    /// Traditional festival falling on this day, if any.  Leap months carry
    /// no festivals.
    pub fn festival(&self) -> Option<LunarFestival> {
        if self.is_leap_month {
            return None;
        }
        if let Some(f) = holiday::lunar_festival(self.month, self.day) {
            return Some(f);
        }
        let is_eve = self.month == 12
            && self.day >= 29
            && lunar::month_length(self.year, 12, false).is_ok_and(|len| len == self.day);
        is_eve.then_some(LunarFestival::NewYearsEve)
    }

    /// Cultural annotation: a named festival, else Mồng 1 / Rằm.
    pub fn significance(&self) -> Option<Significance> {
        if let Some(f) = self.festival() {
            return Some(Significance::Festival(f));
        }
        match self.day {
            1 => Some(Significance::FirstDay),
            15 => Some(Significance::FullMoonDay),
            _ => None,
        }
    }

    /// Resolve every derived name through `locale`.
    pub fn details(&self, locale: &dyn Locale) -> LunarDetails {
        LunarDetails {
            month_name: locale.month_name(self.month, self.is_leap_month),
            day_name: locale.day_name(self.day),
            moon_phase_label: locale.moon_phase(self.moon_phase()).to_owned(),
            cycle_year_name: locale.sexagenary(self.cycle_year()),
            cycle_month_name: locale.sexagenary(self.cycle_month()),
            cycle_day_name: locale.sexagenary(self.cycle_day()),
            zodiac_animal_name: locale.zodiac(self.zodiac()).to_owned(),
            cultural_significance: self.significance().map(|s| locale.significance(s)),
            solar_term_name: locale.solar_term(self.solar_term()).to_owned(),
        }
    }
}

impl std::fmt::Display for LunarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)?;
        if self.is_leap_month {
            write!(f, " (leap)")?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for LunarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "LunarDate({self} = {})", self.solar)
    }
}

/// All display names of a [`LunarDate`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LunarDetails {
    /// e.g. "Tháng Giêng".
    pub month_name: String,
    /// e.g. "Mồng 1".
    pub day_name: String,
    /// e.g. "Trăng tròn".
    pub moon_phase_label: String,
    /// e.g. "Giáp Thìn".
    pub cycle_year_name: String,
    /// e.g. "Bính Dần".
    pub cycle_month_name: String,
    /// e.g. "Mậu Ngọ".
    pub cycle_day_name: String,
    /// e.g. "Rồng".
    pub zodiac_animal_name: String,
    /// Festival name, "Mồng Một" or "Rằm".
    pub cultural_significance: Option<String>,
    /// e.g. "Lập xuân".
    pub solar_term_name: String,
}
