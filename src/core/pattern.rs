use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::shift_code::ShiftCode;

/// Length of the repeating cycle, in days.
///
/// Every roster in the system shares this one cycle length so that rosters
/// anchored to the same start date are always comparable day-for-day.
pub const CYCLE_DAYS: usize = 56;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("pattern has {actual} slots, expected exactly {CYCLE_DAYS}")]
    WrongLength { actual: usize },
}

/// One slot of a cycle pattern: either the off sentinel or a worked shift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DaySlot {
    Off,
    Work(ShiftCode),
}

impl DaySlot {
    #[must_use]
    pub fn is_work(&self) -> bool {
        matches!(self, Self::Work(_))
    }

    #[must_use]
    pub fn shift(&self) -> Option<&ShiftCode> {
        match self {
            Self::Off => None,
            Self::Work(code) => Some(code),
        }
    }
}

/// A fixed-length repeating shift pattern.
///
/// The constructor enforces the 56-slot invariant, so any `CyclePattern`
/// in circulation is valid by construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<DaySlot>", into = "Vec<DaySlot>")]
pub struct CyclePattern {
    slots: Vec<DaySlot>,
}

impl CyclePattern {
    /// Build a pattern from exactly [`CYCLE_DAYS`] slots.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::WrongLength`] for any other length.
    pub fn new(slots: Vec<DaySlot>) -> Result<Self, PatternError> {
        if slots.len() == CYCLE_DAYS {
            Ok(Self { slots })
        } else {
            Err(PatternError::WrongLength {
                actual: slots.len(),
            })
        }
    }

    /// Slot for a 1-based day index in `1..=56`.
    ///
    /// # Panics
    ///
    /// Panics if `day_index` is outside `1..=56`; indexes are produced by the
    /// cycle expander, which guarantees the range.
    #[must_use]
    pub fn slot(&self, day_index: u32) -> &DaySlot {
        &self.slots[(day_index as usize) - 1]
    }

    pub fn iter(&self) -> impl Iterator<Item = &DaySlot> {
        self.slots.iter()
    }

    #[must_use]
    pub fn work_day_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_work()).count()
    }
}

impl TryFrom<Vec<DaySlot>> for CyclePattern {
    type Error = PatternError;

    fn try_from(slots: Vec<DaySlot>) -> Result<Self, Self::Error> {
        Self::new(slots)
    }
}

impl From<CyclePattern> for Vec<DaySlot> {
    fn from(pattern: CyclePattern) -> Self {
        pattern.slots
    }
}
