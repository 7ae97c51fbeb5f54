//! Computus — the date of Easter Sunday in the Gregorian calendar.
//!
//! Several historically divergent integer formulas exist for this
//! computation; mixing them across call sites is a correctness bug, so
//! this module is the single Computus in the workspace.  The variant
//! used here is the anonymous Gregorian algorithm (Meeus–Jones–Butcher),
//! which carries the century-correction terms and is therefore exact for
//! every Gregorian year, not just 1900–2099 like the simplified
//! two-term forms.

use crate::date::Date;
use festivos_core::errors::{Error, Result};
use festivos_core::Year;

/// Compute the date of Easter Sunday for `year`.
///
/// Total for every year in the supported range [1583, 9999]; years
/// before the Gregorian adoption fail with [`Error::UnsupportedYear`].
/// The result always falls between March 22 and April 25 inclusive.
pub fn easter_sunday(year: Year) -> Result<Date> {
    if !(1583..=9999).contains(&year) {
        return Err(Error::UnsupportedYear(year as i32));
    }
    let y = year as i32;
    let a = y % 19;
    let b = y / 100;
    let c = y % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;
    // month is always 3 or 4, day always in range, so this cannot fail
    Date::from_ymd(year, month as u8, day as u8)
}
