//! Integration tests for holiday resolution.

use festivos_calendar::{resolve, HolidayDefinition, HolidayKind};
use festivos_time::{Date, Month, Weekday};

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

/// The Monday shift never moves a date more than six days forward, and
/// the result is a Monday unless the raw date already was one.
#[test]
fn shift_bounds_over_a_full_year() {
    for month in 1..=12u8 {
        for day in 1..=festivos_time::days_in_month(2024, month) {
            let raw = HolidayDefinition::fixed("raw", Month::from_number(month).unwrap(), day);
            let shifted =
                HolidayDefinition::fixed_shifted("shifted", Month::from_number(month).unwrap(), day);
            let raw_date = resolve(&raw, 2024).unwrap();
            let shifted_date = resolve(&shifted, 2024).unwrap();

            let delta = raw_date.days_between(shifted_date);
            assert!(
                (0..=6).contains(&delta),
                "{raw_date:?} shifted by {delta} days"
            );
            if shifted_date == raw_date {
                assert_eq!(raw_date.weekday(), Weekday::Monday);
            } else {
                assert_eq!(shifted_date.weekday(), Weekday::Monday);
            }
        }
    }
}

/// A fixed-shifted date already on a Monday is a fixed point of the rule.
#[test]
fn monday_is_a_fixed_point() {
    // Jan 1, 2024 is a Monday
    let new_year = HolidayDefinition::fixed_shifted("Año Nuevo", Month::January, 1);
    assert_eq!(resolve(&new_year, 2024).unwrap(), date(2024, 1, 1));
}

/// Offset 0 with the shift lands on the Monday after Easter, since
/// Easter Sunday itself is never a Monday.
#[test]
fn easter_monday_via_shift() {
    let d = HolidayDefinition::easter_relative_shifted("Lunes de Pascua", 0);
    assert_eq!(resolve(&d, 2025).unwrap(), date(2025, 4, 21));
    for year in 1990..=2060u16 {
        let resolved = resolve(&d, year).unwrap();
        assert_eq!(resolved.weekday(), Weekday::Monday);
        let easter = festivos_time::easter_sunday(year).unwrap();
        assert_eq!(easter.days_between(resolved), 1);
    }
}

#[test]
fn definitions_roundtrip_through_json() {
    let definitions = vec![
        HolidayDefinition::fixed("Navidad", Month::December, 25),
        HolidayDefinition::fixed_shifted("Reyes Magos", Month::January, 6),
        HolidayDefinition::easter_relative("Viernes Santo", -2),
        HolidayDefinition::easter_relative_shifted("Corpus Christi", 61),
    ];
    let json = serde_json::to_string(&definitions).unwrap();
    let back: Vec<HolidayDefinition> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, definitions);
    // Kinds serialize as their storage tags
    assert!(json.contains("\"kind\":1"));
    assert!(json.contains("\"kind\":4"));
}

#[test]
fn unknown_kind_tag_fails_deserialization() {
    let json = r#"{"name":"X","kind":7,"month":1,"day":1,"easter_offset":0}"#;
    let result: Result<HolidayDefinition, _> = serde_json::from_str(json);
    assert!(result.is_err());
}

#[test]
fn kind_is_a_closed_set() {
    let kinds = [
        HolidayKind::Fixed,
        HolidayKind::FixedShifted,
        HolidayKind::EasterRelative,
        HolidayKind::EasterRelativeShifted,
    ];
    for kind in kinds {
        assert_eq!(HolidayKind::try_from(kind.tag()).unwrap(), kind);
    }
}
