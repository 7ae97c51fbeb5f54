//! Error types for festivos.
//!
//! A single `thiserror`-derived enum is shared by every crate in the
//! workspace.  All three variants describe data problems, not resource
//! failures: the core is pure computation, so nothing here is fatal.

use thiserror::Error;

/// The top-level error type used throughout festivos.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The (year, month, day) triple does not name an existing calendar
    /// date, e.g. April 31 or February 29 of a non-leap year.
    #[error("invalid calendar date: {0}")]
    InvalidCalendarDate(String),

    /// A catalog entry carries a kind tag outside the four recognized
    /// variants.  This is a data-integrity problem in the catalog, not a
    /// user-input problem.
    #[error("unknown holiday kind tag: {0}")]
    InvalidHolidayKind(u8),

    /// The year lies outside the supported civil calendar range.  The
    /// Gregorian calendar was adopted in 1583; nothing before it has a
    /// well-defined date here.
    #[error("year {0} outside the supported Gregorian range [1583, 9999]")]
    UnsupportedYear(i32),
}

/// Shorthand `Result` type used throughout festivos.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let e = Error::InvalidCalendarDate("2023-02-29".into());
        assert_eq!(e.to_string(), "invalid calendar date: 2023-02-29");

        let e = Error::InvalidHolidayKind(9);
        assert_eq!(e.to_string(), "unknown holiday kind tag: 9");

        let e = Error::UnsupportedYear(1492);
        assert!(e.to_string().contains("1492"));
    }
}
