//! # festivos-core
//!
//! Shared building blocks for the festivos workspace: the error enum,
//! the `Result` alias, and primitive type aliases.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error types and the shared `Result` alias.
pub mod errors;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// A civil calendar year (supported range 1583–9999).
pub type Year = u16;

/// A month number, 1 = January … 12 = December.
pub type MonthNumber = u8;

/// A day of the month, 1–31.
pub type DayOfMonth = u8;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
