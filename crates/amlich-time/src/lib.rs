//! # amlich-time
//!
//! Gregorian dates, the Vietnamese lunisolar calendar, anniversaries and
//! month grids.
//!
//! ```
//! use amlich_time::{gregorian_to_lunar, lunar_to_gregorian, Date};
//!
//! let tet = lunar_to_gregorian(2025, 1, 1, false).unwrap();
//! assert_eq!(tet, Date::from_ymd(2025, 1, 29).unwrap());
//! assert_eq!(gregorian_to_lunar(tet).year(), 2025);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Month grids (`MonthBuilder`, `CalendarDay`).
pub mod calendar;

/// `Date` type.
pub mod date;

/// New moons and solar longitude at Vietnam civil time.
pub mod ephemeris;

/// Lunar festivals and Gregorian holidays.
pub mod holiday;

/// Next Mồng 1 and Rằm.
pub mod important;

/// Display names.
pub mod locale;

/// Lunar year layout and Gregorian ⇄ lunar conversion.
pub mod lunar;

/// `LunarDate` and its derived metadata.
pub mod lunar_date;

/// Gregorian `Month`.
pub mod month;

/// Moon phase banding.
pub mod moon_phase;

/// Anniversary projection.
pub mod recurrence;

/// Heavenly stems, earthly branches and zodiac animals.
pub mod sexagenary;

/// The 24 solar terms.
pub mod solar_term;

/// `Weekday` in grid order.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::{build_month, CalendarDay, MonthBuilder};
pub use date::Date;
pub use holiday::{Holiday, LunarFestival, Significance, SolarHoliday};
pub use important::{next_first_and_fifteenth, ImportantDateFinder, ImportantDates};
pub use locale::{Locale, Vietnamese};
pub use lunar::{
    gregorian_to_lunar, is_valid_lunar_date, leap_month, lunar_to_gregorian, month_length,
    LunarMonth, LunarYear,
};
pub use lunar_date::{LunarDate, LunarDetails};
pub use month::Month;
pub use moon_phase::MoonPhase;
pub use recurrence::{
    project_occurrences, AnniversaryDefinition, Occurrence, RecurrenceProjector, YearProbe,
};
pub use sexagenary::{Sexagenary, ZodiacAnimal};
pub use solar_term::{solar_term_for, SolarTerm};
pub use weekday::Weekday;
