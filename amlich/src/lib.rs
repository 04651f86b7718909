//! # amlich
//!
//! Vietnamese lunisolar calendar (âm lịch): Gregorian ⇄ lunar conversion,
//! lunar metadata, the next Mồng 1 / Rằm, anniversary projection and
//! annotated month grids.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `amlich-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! amlich = "0.1"
//! ```
//!
//! ```rust
//! use amlich::time::{Date, Vietnamese};
//!
//! let d = amlich::gregorian_to_lunar(Date::from_ymd(2024, 2, 10).unwrap());
//! assert_eq!((d.year(), d.month(), d.day()), (2024, 1, 1));
//! assert_eq!(d.details(&Vietnamese).cycle_year_name, "Giáp Thìn");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, the injected clock, and error definitions.
pub use amlich_core as core;

/// Dates, lunar conversion, metadata, anniversaries and month grids.
pub use amlich_time as time;

// ── Entry points ──────────────────────────────────────────────────────────────

pub use amlich_core::{Clock, Error, Result, SystemClock};
pub use amlich_time::{
    build_month, gregorian_to_lunar, is_valid_lunar_date, lunar_to_gregorian, month_length,
    next_first_and_fifteenth, project_occurrences,
};
