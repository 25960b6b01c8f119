use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::pattern::{CyclePattern, CYCLE_DAYS};
use crate::core::types::LineId;

/// One worker's repeating roster (a "bid line").
///
/// Immutable for the duration of a request; the engine never persists it.
/// The core schema is fixed; anything extra from the upload survives in
/// `extra` without the engine ever interpreting it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Roster {
    /// Unique identifier within the loaded set
    pub id: String,

    /// Group / operation this line belongs to (e.g. "`Tower`")
    pub group: String,

    /// Line identifier within the group
    pub line: LineId,

    /// The 56-day repeating pattern
    pub pattern: CyclePattern,

    /// Uninterpreted extra attributes carried through from the upload
    #[serde(default, skip_serializing_if = "serde_json::Map::is_empty")]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Roster {
    pub fn new(
        id: impl Into<String>,
        group: impl Into<String>,
        line: impl Into<String>,
        pattern: CyclePattern,
    ) -> Self {
        Self {
            id: id.into(),
            group: group.into(),
            line: LineId::new(line),
            pattern,
            extra: serde_json::Map::new(),
        }
    }
}

/// Maps cycle-relative day indexes to real calendar dates.
///
/// Always passed explicitly into every expansion; there is no ambient
/// anchor anywhere in the engine. All rosters in one comparison must share
/// the same anchor, or day alignment is meaningless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterAnchor {
    /// Calendar date of cycle day 1
    pub start_date: NaiveDate,

    /// Number of times the 56-day cycle repeats (must be >= 1)
    pub num_cycles: u32,
}

impl RosterAnchor {
    pub fn new(start_date: NaiveDate, num_cycles: u32) -> Self {
        Self {
            start_date,
            num_cycles,
        }
    }

    /// Total days in the schedule window.
    #[must_use]
    pub fn window_days(&self) -> i64 {
        i64::from(self.num_cycles) * CYCLE_DAYS as i64
    }

    /// First date past the end of the window (exclusive bound).
    #[must_use]
    pub fn end_date(&self) -> NaiveDate {
        self.start_date + chrono::Duration::days(self.window_days())
    }
}
