//! `Date` type.
//!
//! Dates are represented as a serial number of days in the proleptic
//! Gregorian calendar (rata die).
//!
//! # Serial number convention
//! * Serial 1 = January 1, year 1 (a Monday).
//! * The valid range is 1583-01-01 (Gregorian adoption) to 9999-12-31.

use crate::weekday::Weekday;
use festivos_core::errors::{Error, Result};
use festivos_core::{DayOfMonth, MonthNumber, Year};

/// A calendar date represented as a serial number.
///
/// Pure value type: no time-of-day, no timezone.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

// ── Constants ─────────────────────────────────────────────────────────────────

impl Date {
    /// Minimum valid date: January 1, 1583.
    pub const MIN: Date = Date(577_814);

    /// Maximum valid date: December 31, 9999.
    pub const MAX: Date = Date(3_652_059);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a serial number.
    ///
    /// Returns an error if `serial` falls outside the supported range.
    pub fn from_serial(serial: i32) -> Result<Self> {
        let d = Date(serial);
        if d < Self::MIN || d > Self::MAX {
            return Err(Error::InvalidCalendarDate(format!(
                "serial {serial} outside supported range"
            )));
        }
        Ok(d)
    }

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    ///
    /// A year outside [1583, 9999] yields [`Error::UnsupportedYear`]; a
    /// month/day combination that does not exist (April 31, February 29
    /// of a non-leap year, …) yields [`Error::InvalidCalendarDate`].
    /// Nothing is ever clamped.
    pub fn from_ymd(year: Year, month: MonthNumber, day: DayOfMonth) -> Result<Self> {
        if !(1583..=9999).contains(&year) {
            return Err(Error::UnsupportedYear(year as i32));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::InvalidCalendarDate(format!(
                "month {month} out of range [1, 12]"
            )));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::InvalidCalendarDate(format!(
                "day {day} out of range [1, {days_in}] for {year}-{month:02}"
            )));
        }
        Ok(Date(serial_from_ymd(year, month, day)))
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return the year (1583–9999).
    pub fn year(&self) -> Year {
        ymd_from_serial(self.0).0
    }

    /// Return the month (1–12).
    pub fn month(&self) -> MonthNumber {
        ymd_from_serial(self.0).1
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> DayOfMonth {
        ymd_from_serial(self.0).2
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // Serial 1 (0001-01-01) is a Monday, so serial 1 → ordinal 1.
        let w = ((self.0 - 1).rem_euclid(7) + 1) as u8;
        Weekday::from_ordinal(w).expect("rem_euclid always in 1..=7")
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days (negative `n` moves backwards).  Returns an
    /// error if the result leaves the supported range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        let d = Date(self.0 + n);
        if d < Self::MIN || d > Self::MAX {
            return Err(Error::InvalidCalendarDate(format!(
                "date arithmetic: {self:?} {n:+} days out of range"
            )));
        }
        Ok(d)
    }

    /// Return the number of calendar days between `self` and `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: Date) -> i32 {
        other.0 - self.0
    }

    /// Return the next date falling on `weekday`, or `self` unchanged if
    /// it already does.
    ///
    /// The delta added is `(target − current) mod 7`, so the result is
    /// never more than six days ahead and the operation is idempotent:
    /// a Monday asked for the next-or-same Monday stays put rather than
    /// jumping a week forward.
    pub fn next_or_same(self, weekday: Weekday) -> Result<Self> {
        let delta =
            (weekday.ordinal() as i32 - self.weekday().ordinal() as i32).rem_euclid(7);
        self.add_days(delta)
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<i32> for Date {
    type Output = Self;
    fn add(self, rhs: i32) -> Self {
        self.add_days(rhs).expect("date addition out of range")
    }
}

impl std::ops::Sub<i32> for Date {
    type Output = Self;
    fn sub(self, rhs: i32) -> Self {
        self.add_days(-rhs).expect("date subtraction out of range")
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

impl std::ops::AddAssign<i32> for Date {
    fn add_assign(&mut self, rhs: i32) {
        *self = self.add_days(rhs).expect("date addition out of range");
    }
}

impl std::ops::SubAssign<i32> for Date {
    fn sub_assign(&mut self, rhs: i32) {
        *self = self.add_days(-rhs).expect("date subtraction out of range");
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        let month = crate::month::Month::from_number(m).expect("month always in 1..=12");
        write!(f, "{d} {month} {y}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "Date({y:04}-{m:02}-{d:02})")
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year in the Gregorian calendar.
pub fn is_leap_year(year: Year) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: Year, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => unreachable!(),
    }
}

/// Convert (year, month, day) to a rata-die serial number.
///
/// Serial 1 = 0001-01-01.
fn serial_from_ymd(year: Year, month: u8, day: u8) -> i32 {
    let y = year as i32 - 1;
    // Whole days in years [1, year)
    let mut serial = y * 365 + y / 4 - y / 100 + y / 400;
    // Days in months [1, month) of the current year
    serial += MONTH_OFFSET[month as usize - 1] as i32;
    if month > 2 && is_leap_year(year) {
        serial += 1;
    }
    serial + day as i32
}

/// Decompose a serial number into (year, month, day).
fn ymd_from_serial(serial: i32) -> (Year, u8, u8) {
    // Estimate the year, then adjust until the serial falls within it
    let mut y = (serial / 366 + 1) as Year;
    while serial >= serial_from_ymd(y + 1, 1, 1) {
        y += 1;
    }
    let doy = serial - serial_from_ymd(y, 1, 1) + 1; // 1-based
    let mut m = 1u8;
    let mut remaining = doy;
    loop {
        let days = days_in_month(y, m) as i32;
        if remaining <= days {
            break;
        }
        remaining -= days;
        m += 1;
    }
    (y, m, remaining as u8)
}

/// Cumulative day-of-year offset at the start of each month (non-leap).
const MONTH_OFFSET: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_constants() {
        assert_eq!(Date::MIN, Date::from_ymd(1583, 1, 1).unwrap());
        assert_eq!(Date::MAX, Date::from_ymd(9999, 12, 31).unwrap());
    }

    #[test]
    fn roundtrip() {
        let dates = [
            (1583, 1, 1),
            (1600, 2, 29),  // leap century
            (1900, 2, 28),  // non-leap century
            (2000, 2, 29),  // leap
            (2024, 6, 15),
            (9999, 12, 31),
        ];
        for (y, m, d) in dates {
            let date = Date::from_ymd(y, m, d).unwrap();
            assert_eq!(date.year(), y, "year mismatch for {y}-{m:02}-{d:02}");
            assert_eq!(date.month(), m, "month mismatch for {y}-{m:02}-{d:02}");
            assert_eq!(date.day_of_month(), d, "day mismatch for {y}-{m:02}-{d:02}");
        }
    }

    #[test]
    fn invalid_dates_are_surfaced() {
        assert!(matches!(
            Date::from_ymd(2023, 2, 29),
            Err(Error::InvalidCalendarDate(_))
        ));
        assert!(matches!(
            Date::from_ymd(2023, 4, 31),
            Err(Error::InvalidCalendarDate(_))
        ));
        assert!(matches!(
            Date::from_ymd(2023, 13, 1),
            Err(Error::InvalidCalendarDate(_))
        ));
        assert!(matches!(
            Date::from_ymd(2023, 6, 0),
            Err(Error::InvalidCalendarDate(_))
        ));
        assert!(matches!(
            Date::from_ymd(1582, 10, 5),
            Err(Error::UnsupportedYear(1582))
        ));
    }

    #[test]
    fn weekday() {
        // 2024-01-01 is a Monday
        assert_eq!(Date::from_ymd(2024, 1, 1).unwrap().weekday(), Weekday::Monday);
        // 2000-01-01 is a Saturday
        assert_eq!(Date::from_ymd(2000, 1, 1).unwrap().weekday(), Weekday::Saturday);
        // 1583-01-01 is a Saturday
        assert_eq!(Date::MIN.weekday(), Weekday::Saturday);
    }

    #[test]
    fn arithmetic() {
        let d = Date::from_ymd(2023, 1, 1).unwrap();
        let d2 = d + 31;
        assert_eq!(d2.month(), 2);
        assert_eq!(d2.day_of_month(), 1);
        assert_eq!(Date::from_ymd(2023, 2, 1).unwrap() - d, 31);
        // March rolls over into April
        let march = Date::from_ymd(2025, 3, 1).unwrap();
        assert_eq!(march + 31, Date::from_ymd(2025, 4, 1).unwrap());
    }

    #[test]
    fn next_or_same_stays_on_target() {
        // 2024-04-01 is a Monday: no shift
        let mon = Date::from_ymd(2024, 4, 1).unwrap();
        assert_eq!(mon.next_or_same(Weekday::Monday).unwrap(), mon);
        // 2024-03-31 is a Sunday: shift one day
        let sun = Date::from_ymd(2024, 3, 31).unwrap();
        assert_eq!(sun.next_or_same(Weekday::Monday).unwrap(), mon);
        // 2024-04-02 is a Tuesday: shift six days to the next Monday
        let tue = Date::from_ymd(2024, 4, 2).unwrap();
        assert_eq!(
            tue.next_or_same(Weekday::Monday).unwrap(),
            Date::from_ymd(2024, 4, 8).unwrap()
        );
    }

    #[test]
    fn add_days_out_of_range() {
        assert!(Date::MAX.add_days(1).is_err());
        assert!(Date::MIN.add_days(-1).is_err());
    }
}
