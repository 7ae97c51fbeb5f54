//! # festivos
//!
//! Civil and religious holiday-calendar resolution: the Computus, the
//! four movable-holiday rules, and catalog-wide lookups.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates.  Application code should depend on this
//! crate rather than the individual `festivos-*` crates; the REST
//! boundary lives separately in `festivos-api`.
//!
//! ## Quick start
//!
//! ```rust
//! use festivos::calendar::{colombia, HolidayService, Verdict};
//!
//! let service = HolidayService::new(colombia());
//! // July 20, 2025: Colombia's Independence Day
//! assert_eq!(service.verify(2025, 7, 20), Verdict::Holiday);
//! assert_eq!(service.holidays_for_year(2025).len(), 18);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Shared error types and primitive aliases.
pub use festivos_core as core;

/// Date, weekday, month, and Computus types.
pub use festivos_time as time;

/// Holiday definitions, resolution, catalogs, and the lookup service.
pub use festivos_calendar as calendar;
