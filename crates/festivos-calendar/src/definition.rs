//! Holiday definitions: the abstract rules a catalog stores.
//!
//! A [`HolidayDefinition`] says *how* a holiday's date is found for a
//! given year; [`resolve`](crate::resolver::resolve) turns it into a
//! concrete [`Date`].

use festivos_core::errors::{Error, Result};
use festivos_core::{DayOfMonth, MonthNumber};
use festivos_time::{Date, Month};
use serde::{Deserialize, Serialize};

/// How a holiday's concrete date is derived for a year.
///
/// Catalog storage uses the numeric tags 1–4; in code the enum is closed,
/// so an unknown kind can only enter through [`HolidayKind::try_from`],
/// where it fails with [`Error::InvalidHolidayKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum HolidayKind {
    /// Fixed date, observed as-is (tag 1).
    Fixed = 1,
    /// Fixed date, moved to the following Monday unless it already falls
    /// on one (tag 2).
    FixedShifted = 2,
    /// A signed day offset from Easter Sunday (tag 3).
    EasterRelative = 3,
    /// Easter-relative, then moved to the following Monday unless it
    /// already falls on one (tag 4).
    EasterRelativeShifted = 4,
}

impl HolidayKind {
    /// Return the numeric storage tag (1–4).
    pub fn tag(&self) -> u8 {
        *self as u8
    }

    /// Whether this kind applies the Monday-shift rule.
    pub fn is_shifted(&self) -> bool {
        matches!(self, HolidayKind::FixedShifted | HolidayKind::EasterRelativeShifted)
    }

}

impl TryFrom<u8> for HolidayKind {
    type Error = Error;

    fn try_from(tag: u8) -> Result<Self> {
        match tag {
            1 => Ok(HolidayKind::Fixed),
            2 => Ok(HolidayKind::FixedShifted),
            3 => Ok(HolidayKind::EasterRelative),
            4 => Ok(HolidayKind::EasterRelativeShifted),
            _ => Err(Error::InvalidHolidayKind(tag)),
        }
    }
}

impl From<HolidayKind> for u8 {
    fn from(kind: HolidayKind) -> u8 {
        kind.tag()
    }
}

/// An abstract holiday rule, as supplied by the catalog.
///
/// Immutable once built; only the fields relevant to `kind` carry
/// meaning (`month`/`day` for the fixed kinds, `easter_offset` for the
/// Easter-relative ones).  The irrelevant fields stay at zero, matching
/// how catalogs store these records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayDefinition {
    name: String,
    kind: HolidayKind,
    #[serde(default)]
    month: MonthNumber,
    #[serde(default)]
    day: DayOfMonth,
    #[serde(default)]
    easter_offset: i32,
}

impl HolidayDefinition {
    /// A holiday observed on the same date every year.
    pub fn fixed(name: impl Into<String>, month: Month, day: DayOfMonth) -> Self {
        Self {
            name: name.into(),
            kind: HolidayKind::Fixed,
            month: month.number(),
            day,
            easter_offset: 0,
        }
    }

    /// A fixed-date holiday moved to the following Monday when it does
    /// not already fall on one.
    pub fn fixed_shifted(name: impl Into<String>, month: Month, day: DayOfMonth) -> Self {
        Self {
            name: name.into(),
            kind: HolidayKind::FixedShifted,
            month: month.number(),
            day,
            easter_offset: 0,
        }
    }

    /// A movable holiday at a signed day offset from Easter Sunday.
    pub fn easter_relative(name: impl Into<String>, easter_offset: i32) -> Self {
        Self {
            name: name.into(),
            kind: HolidayKind::EasterRelative,
            month: 0,
            day: 0,
            easter_offset,
        }
    }

    /// An Easter-relative holiday moved to the following Monday when it
    /// does not already fall on one.
    pub fn easter_relative_shifted(name: impl Into<String>, easter_offset: i32) -> Self {
        Self {
            name: name.into(),
            kind: HolidayKind::EasterRelativeShifted,
            month: 0,
            day: 0,
            easter_offset,
        }
    }

    /// The holiday's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The resolution kind.
    pub fn kind(&self) -> HolidayKind {
        self.kind
    }

    /// Month number (1–12); meaningful for the fixed kinds only.
    pub fn month(&self) -> MonthNumber {
        self.month
    }

    /// Day of the month (1–31); meaningful for the fixed kinds only.
    pub fn day(&self) -> DayOfMonth {
        self.day
    }

    /// Signed day offset from Easter Sunday; meaningful for the
    /// Easter-relative kinds only.
    pub fn easter_offset(&self) -> i32 {
        self.easter_offset
    }
}

/// A holiday pinned to a concrete date in some year.
///
/// Pure value, produced fresh per (definition, year) resolution.  Any
/// transport representation (JSON, timestamps) is the boundary's
/// business, not this type's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedHoliday {
    /// The holiday's display name.
    pub name: String,
    /// The concrete calendar date in the requested year.
    pub date: Date,
}
