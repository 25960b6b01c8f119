use serde::{Deserialize, Serialize};

/// Line identifier within a group (e.g. "`L014`")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineId(pub String);

impl LineId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for LineId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Broad time-of-day band a shift code belongs to.
///
/// Category drives all comparison logic: two shifts with different codes but
/// the same category count as equivalent for mirroring and filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ShiftCategory {
    /// Morning starts (roughly 05:00-10:59)
    Days,
    /// Late-morning starts (11:00-13:59)
    MidDays,
    /// Afternoon starts (14:00-17:59)
    Afternoons,
    /// Evening starts (18:00-20:59)
    LateDays,
    /// Overnight starts (21:00-04:59)
    Midnights,
    /// A rostered day off
    Off,
    /// Code not in the lookup table and not inferable
    #[default]
    Unknown,
}

impl ShiftCategory {
    /// Map a 24h begin hour to its category band.
    ///
    /// Used by the fallback inference chain when a code is absent from
    /// the lookup table but embeds its start hour as a prefix.
    #[must_use]
    pub fn from_begin_hour(hour: u32) -> Self {
        match hour {
            5..=10 => Self::Days,
            11..=13 => Self::MidDays,
            14..=17 => Self::Afternoons,
            18..=20 => Self::LateDays,
            0..=4 | 21..=23 => Self::Midnights,
            _ => Self::Unknown,
        }
    }

    /// True for any category other than `Off`. Unrecognized codes still
    /// occupy a scheduled slot, so `Unknown` counts as work.
    #[must_use]
    pub fn is_work(self) -> bool {
        !matches!(self, Self::Off)
    }
}

impl std::fmt::Display for ShiftCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Days => write!(f, "Days"),
            Self::MidDays => write!(f, "Mid Days"),
            Self::Afternoons => write!(f, "Afternoons"),
            Self::LateDays => write!(f, "Late Days"),
            Self::Midnights => write!(f, "Midnights"),
            Self::Off => write!(f, "Off"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

/// A per-item failure recorded while processing a batch.
///
/// Malformed rosters never abort a batch; they are collected into skip
/// lists like this one and reported alongside the successful results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkippedRoster {
    /// Identifier of the offending record, best-effort
    pub id: String,
    /// Human-readable reason it was skipped
    pub reason: String,
}
