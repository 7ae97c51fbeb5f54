//! Turning a [`HolidayDefinition`] plus a year into a concrete [`Date`].

use crate::definition::{HolidayDefinition, HolidayKind};
use festivos_core::errors::Result;
use festivos_core::Year;
use festivos_time::{easter_sunday, Date, Weekday};

/// Resolve a holiday definition to its concrete date in `year`.
///
/// Pure computation, deterministic for equal inputs.  Fails with
/// [`festivos_core::Error::InvalidCalendarDate`] when a fixed definition
/// names a date that does not exist in `year` (the error is surfaced,
/// never clamped) and with [`festivos_core::Error::UnsupportedYear`]
/// when `year` lies outside the Gregorian range.
pub fn resolve(definition: &HolidayDefinition, year: Year) -> Result<Date> {
    let raw = match definition.kind() {
        HolidayKind::Fixed | HolidayKind::FixedShifted => {
            Date::from_ymd(year, definition.month(), definition.day())?
        }
        HolidayKind::EasterRelative | HolidayKind::EasterRelativeShifted => {
            easter_sunday(year)?.add_days(definition.easter_offset())?
        }
    };
    if definition.kind().is_shifted() {
        raw.next_or_same(Weekday::Monday)
    } else {
        Ok(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use festivos_core::Error;
    use festivos_time::Month;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn fixed_is_verbatim() {
        let navidad = HolidayDefinition::fixed("Navidad", Month::December, 25);
        assert_eq!(resolve(&navidad, 2024).unwrap(), date(2024, 12, 25));
        assert_eq!(resolve(&navidad, 2025).unwrap(), date(2025, 12, 25));
    }

    #[test]
    fn fixed_shifted_moves_to_monday() {
        let reyes = HolidayDefinition::fixed_shifted("Reyes Magos", Month::January, 6);
        // Jan 6 2024 is a Saturday → observed Monday Jan 8
        assert_eq!(resolve(&reyes, 2024).unwrap(), date(2024, 1, 8));
        // Jan 6 2025 is a Monday → observed as-is
        assert_eq!(resolve(&reyes, 2025).unwrap(), date(2025, 1, 6));
    }

    #[test]
    fn easter_relative_applies_signed_offset() {
        // Easter 2025 = April 20
        let viernes = HolidayDefinition::easter_relative("Viernes Santo", -2);
        assert_eq!(resolve(&viernes, 2025).unwrap(), date(2025, 4, 18));
        let jueves = HolidayDefinition::easter_relative("Jueves Santo", -3);
        assert_eq!(resolve(&jueves, 2025).unwrap(), date(2025, 4, 17));
    }

    #[test]
    fn easter_relative_shifted() {
        // Easter 2025 + 40 = May 30, a Friday → observed Monday June 2
        let ascension = HolidayDefinition::easter_relative_shifted("Ascensión", 40);
        assert_eq!(resolve(&ascension, 2025).unwrap(), date(2025, 6, 2));
    }

    #[test]
    fn offset_zero_shifted_lands_on_easter_monday() {
        // Easter Sunday is never a Monday, so the shift always advances
        let d = HolidayDefinition::easter_relative_shifted("Pascua trasladada", 0);
        assert_eq!(resolve(&d, 2025).unwrap(), date(2025, 4, 21));
    }

    #[test]
    fn nonexistent_fixed_date_is_an_error() {
        let bad = HolidayDefinition::fixed("Bisiesto", Month::February, 29);
        assert_eq!(resolve(&bad, 2024).unwrap(), date(2024, 2, 29));
        assert!(matches!(
            resolve(&bad, 2023),
            Err(Error::InvalidCalendarDate(_))
        ));
    }

    #[test]
    fn pre_gregorian_year_is_an_error() {
        let navidad = HolidayDefinition::fixed("Navidad", Month::December, 25);
        assert!(matches!(
            resolve(&navidad, 1500),
            Err(Error::UnsupportedYear(1500))
        ));
        let pascua = HolidayDefinition::easter_relative("Pascua", 0);
        assert!(matches!(
            resolve(&pascua, 1500),
            Err(Error::UnsupportedYear(1500))
        ));
    }

    #[test]
    fn resolution_is_referentially_transparent() {
        let corpus = HolidayDefinition::easter_relative_shifted("Corpus Christi", 61);
        assert_eq!(resolve(&corpus, 2030), resolve(&corpus, 2030));
    }
}
