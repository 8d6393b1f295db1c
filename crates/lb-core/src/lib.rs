//! # lb-core
//!
//! Core types and error definitions for lunar-birthday.
//!
//! This crate provides the foundational pieces shared across the other
//! crates in the workspace: the error type, the `ensure!` / `fail!` macros,
//! the query [`Settings`], and string parsers for dates.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

/// Reminder and grid settings.
pub mod settings;

/// Miscellaneous utilities.
pub mod utilities;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Signed year number.  Lunar and solar years share this type so that
/// off-by-one-year searches can step below the supported range without
/// wrapping.
pub type Year = i32;

/// Signed day count between two dates.
pub type DayCount = i32;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use settings::Settings;
