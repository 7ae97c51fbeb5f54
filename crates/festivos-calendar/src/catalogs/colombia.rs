//! Colombian statutory holiday catalog.
//!
//! The eighteen national holidays as defined by Law 51 of 1983 (the
//! "Ley Emiliani"), which moves a number of observances to the following
//! Monday.  Six dates are observed verbatim, two are tied to Holy Week,
//! and the rest either shift from a fixed date or shift from an
//! Easter-relative one.

use crate::catalog::InMemoryCatalog;
use crate::definition::HolidayDefinition;
use festivos_time::Month;

/// Build the Colombian national holiday catalog.
///
/// Entries are listed in calendar order of a non-shifted year.  The
/// Easter-relative offsets 40, 61, and 68 (Ascension, Corpus Christi,
/// Sacred Heart) land on Fridays, so the Monday shift puts them on the
/// legally observed Easter +43, +64, and +71.
pub fn colombia() -> InMemoryCatalog {
    InMemoryCatalog::new(vec![
        HolidayDefinition::fixed("Año Nuevo", Month::January, 1),
        HolidayDefinition::fixed_shifted("Día de los Reyes Magos", Month::January, 6),
        HolidayDefinition::fixed_shifted("Día de San José", Month::March, 19),
        HolidayDefinition::easter_relative("Jueves Santo", -3),
        HolidayDefinition::easter_relative("Viernes Santo", -2),
        HolidayDefinition::fixed("Día del Trabajo", Month::May, 1),
        HolidayDefinition::easter_relative_shifted("Ascensión del Señor", 40),
        HolidayDefinition::easter_relative_shifted("Corpus Christi", 61),
        HolidayDefinition::easter_relative_shifted("Sagrado Corazón de Jesús", 68),
        HolidayDefinition::fixed_shifted("San Pedro y San Pablo", Month::June, 29),
        HolidayDefinition::fixed("Día de la Independencia", Month::July, 20),
        HolidayDefinition::fixed("Batalla de Boyacá", Month::August, 7),
        HolidayDefinition::fixed_shifted("Asunción de la Virgen", Month::August, 15),
        HolidayDefinition::fixed_shifted("Día de la Raza", Month::October, 12),
        HolidayDefinition::fixed_shifted("Todos los Santos", Month::November, 1),
        HolidayDefinition::fixed_shifted("Independencia de Cartagena", Month::November, 11),
        HolidayDefinition::fixed("Inmaculada Concepción", Month::December, 8),
        HolidayDefinition::fixed("Navidad", Month::December, 25),
    ])
}
