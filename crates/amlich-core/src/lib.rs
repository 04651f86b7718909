//! # amlich-core
//!
//! Core types, traits, and error definitions for amlich.
//!
//! This crate provides the foundational building blocks shared across the
//! workspace – the error hierarchy with its `ensure!` macro, the injected
//! [`Clock`], and numeric type aliases.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Injected "now" provider (`Clock`, `SystemClock`, `FixedClock`).
pub mod clock;

/// Error types and the `ensure!` macro.
pub mod errors;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used by the astronomical routines.
pub type Real = f64;

/// Julian day number of a civil day.
pub type JulianDay = i32;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use clock::{Clock, FixedClock, SystemClock};
pub use errors::{Error, LunarDateIssue, Result};
