//! # festivos-time
//!
//! Calendar date, weekday, month, and Computus types.
//!
//! Everything here is a pure value computation: no clocks, no timezones,
//! no I/O.  A [`Date`] is a day in the proleptic Gregorian calendar,
//! valid between 1583-01-01 and 9999-12-31.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Easter Sunday computation.
pub mod computus;

/// `Date` type.
pub mod date;

/// `Month` — month of the year.
pub mod month;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use computus::easter_sunday;
pub use date::{days_in_month, is_leap_year, Date};
pub use month::Month;
pub use weekday::Weekday;
