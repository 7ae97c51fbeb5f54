//! # festivos-calendar
//!
//! Holiday definitions, the resolution rules that turn them into
//! concrete dates, the catalog-provider seam, and the lookup service.
//!
//! The resolution core ([`resolver::resolve`] plus the Computus in
//! `festivos-time`) is pure and total over well-formed inputs; all
//! robustness policy lives in [`service::HolidayService`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Catalog provider trait and the in-memory implementation.
pub mod catalog;

/// Built-in country catalogs.
pub mod catalogs;

/// Holiday definition and resolved-holiday value types.
pub mod definition;

/// Definition-to-date resolution.
pub mod resolver;

/// Catalog-wide verification and listing.
pub mod service;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use catalog::{HolidayCatalog, InMemoryCatalog};
pub use catalogs::colombia;
pub use definition::{HolidayDefinition, HolidayKind, ResolvedHoliday};
pub use resolver::resolve;
pub use service::{HolidayService, Verdict};
