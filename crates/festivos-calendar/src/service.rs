//! Whole-catalog orchestration: date verification and per-year listings.
//!
//! The service owns the robustness policy the resolver deliberately does
//! not have: a malformed catalog entry is logged and skipped, so one bad
//! record never fails a whole-catalog query.

use crate::catalog::HolidayCatalog;
use crate::definition::ResolvedHoliday;
use crate::resolver::resolve;
use festivos_core::{DayOfMonth, MonthNumber, Year};
use festivos_time::Date;
use tracing::warn;

/// Outcome of a holiday check for a user-supplied date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The date matches a resolved holiday.
    Holiday,
    /// The date is valid but matches no holiday.
    NotHoliday,
    /// The supplied (year, month, day) triple is not a real date.
    InvalidDate,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Verdict::Holiday => "HOLIDAY",
            Verdict::NotHoliday => "NOT_HOLIDAY",
            Verdict::InvalidDate => "INVALID_DATE",
        };
        write!(f, "{s}")
    }
}

/// Holiday lookup over an injected catalog provider.
///
/// Stateless between calls; safe to share across threads and requests.
#[derive(Debug, Clone)]
pub struct HolidayService<C> {
    catalog: C,
}

impl<C: HolidayCatalog> HolidayService<C> {
    /// Build a service over the given catalog provider.
    pub fn new(catalog: C) -> Self {
        Self { catalog }
    }

    /// Check whether (year, month, day) is a recognized holiday.
    ///
    /// An impossible date yields [`Verdict::InvalidDate`] rather than an
    /// error; comparison is by calendar date only.
    pub fn verify(&self, year: Year, month: MonthNumber, day: DayOfMonth) -> Verdict {
        let target = match Date::from_ymd(year, month, day) {
            Ok(d) => d,
            Err(_) => return Verdict::InvalidDate,
        };
        for definition in self.catalog.fetch_all() {
            match resolve(&definition, year) {
                Ok(date) if date == target => return Verdict::Holiday,
                Ok(_) => {}
                Err(err) => {
                    warn!(holiday = definition.name(), %err, "skipping unresolvable catalog entry");
                }
            }
        }
        Verdict::NotHoliday
    }

    /// Resolve every catalog entry for `year`, in catalog order.
    ///
    /// Entries that fail to resolve are logged and skipped; the call as a
    /// whole never fails.
    pub fn holidays_for_year(&self, year: Year) -> Vec<ResolvedHoliday> {
        let definitions = self.catalog.fetch_all();
        let mut resolved = Vec::with_capacity(definitions.len());
        for definition in definitions {
            match resolve(&definition, year) {
                Ok(date) => resolved.push(ResolvedHoliday {
                    name: definition.name().to_owned(),
                    date,
                }),
                Err(err) => {
                    warn!(holiday = definition.name(), %err, "skipping unresolvable catalog entry");
                }
            }
        }
        resolved
    }
}
