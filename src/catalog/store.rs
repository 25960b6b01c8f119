use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};

use crate::core::pattern::{CyclePattern, DaySlot, CYCLE_DAYS};
use crate::core::roster::Roster;
use crate::core::shift_code::ShiftCodeTable;
use crate::core::types::SkippedRoster;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read roster file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse roster file: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Roster file format version for compatibility checking
pub const ROSTER_DATA_VERSION: &str = "1.0.0";

/// Slot strings treated as the off sentinel in uploaded data
const OFF_SENTINELS: &[&str] = &["", "-", "off", "OFF", "Off", "RDO", "X"];

/// Serializable roster-file format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterData {
    pub version: String,
    pub rosters: Vec<RosterRecord>,
}

/// One roster as uploaded: raw code strings, not yet validated.
///
/// The core schema is fixed; any extra fields in the upload land in `extra`
/// untouched rather than silently extending the schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterRecord {
    #[serde(default)]
    pub id: String,
    pub group: String,
    pub line: String,
    /// 56 slot strings: a shift code, or an off sentinel
    pub days: Vec<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Outcome of a load: how many rosters made it in, and which were skipped.
///
/// Malformed records never abort the batch (skip and report).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoadReport {
    pub loaded: usize,
    pub skipped: Vec<SkippedRoster>,
}

/// The loaded roster set with lookup indexes.
#[derive(Debug, Default)]
pub struct RosterCatalog {
    /// All validated rosters
    pub rosters: Vec<Roster>,

    /// Index: roster ID -> index in rosters vec
    id_to_index: HashMap<String, usize>,

    /// Index: group name -> indices of its rosters
    group_to_indices: HashMap<String, Vec<usize>>,
}

impl RosterCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load rosters from a JSON file.
    ///
    /// # Errors
    ///
    /// Fails only when the file cannot be read or is not valid JSON;
    /// individually malformed records end up in the [`LoadReport`].
    pub fn load_from_file(
        path: &Path,
        codes: &ShiftCodeTable,
    ) -> Result<(Self, LoadReport), CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content, codes)
    }

    /// Parse rosters from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::ParseError` if the envelope is not valid JSON.
    pub fn from_json(
        json: &str,
        codes: &ShiftCodeTable,
    ) -> Result<(Self, LoadReport), CatalogError> {
        let data: RosterData = serde_json::from_str(json)?;

        if data.version != ROSTER_DATA_VERSION {
            warn!(
                expected = ROSTER_DATA_VERSION,
                found = %data.version,
                "roster file version mismatch"
            );
        }

        let mut catalog = Self::new();
        let mut report = LoadReport::default();

        for (position, record) in data.rosters.into_iter().enumerate() {
            // Positions in skip reasons are 1-based for user friendliness
            match validate_record(record, codes, position + 1) {
                Ok(roster) => {
                    catalog.add_roster(roster);
                    report.loaded += 1;
                }
                Err(skip) => {
                    warn!(id = %skip.id, reason = %skip.reason, "skipping roster");
                    report.skipped.push(skip);
                }
            }
        }

        debug!(
            loaded = report.loaded,
            skipped = report.skipped.len(),
            "roster catalog loaded"
        );
        Ok((catalog, report))
    }

    pub fn add_roster(&mut self, roster: Roster) {
        let index = self.rosters.len();
        self.id_to_index.insert(roster.id.clone(), index);
        self.group_to_indices
            .entry(roster.group.clone())
            .or_default()
            .push(index);
        self.rosters.push(roster);
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Roster> {
        self.id_to_index.get(id).map(|&i| &self.rosters[i])
    }

    /// Rosters in any of the given groups; empty selection means all.
    #[must_use]
    pub fn in_groups(&self, groups: &[String]) -> Vec<&Roster> {
        if groups.is_empty() {
            return self.rosters.iter().collect();
        }
        groups
            .iter()
            .filter_map(|g| self.group_to_indices.get(g))
            .flatten()
            .map(|&i| &self.rosters[i])
            .collect()
    }

    /// Distinct group names, sorted.
    #[must_use]
    pub fn groups(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.group_to_indices.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rosters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rosters.is_empty()
    }
}

fn validate_record(
    record: RosterRecord,
    codes: &ShiftCodeTable,
    position: usize,
) -> Result<Roster, SkippedRoster> {
    let fallback_id = if record.id.is_empty() {
        format!("{}-{}", record.group, record.line)
    } else {
        record.id.clone()
    };

    if record.line.trim().is_empty() {
        return Err(SkippedRoster {
            id: fallback_id,
            reason: format!("record {position} has no line identifier"),
        });
    }

    if record.days.len() != CYCLE_DAYS {
        return Err(SkippedRoster {
            id: fallback_id,
            reason: format!(
                "record {position} has {} day slots, expected {CYCLE_DAYS}",
                record.days.len()
            ),
        });
    }

    let slots = record.days.iter().map(|raw| resolve_slot(raw, codes)).collect();
    // Length already checked, so the constructor cannot fail here
    let pattern = CyclePattern::new(slots).map_err(|e| SkippedRoster {
        id: fallback_id.clone(),
        reason: e.to_string(),
    })?;

    let mut roster = Roster::new(fallback_id, record.group, record.line, pattern);
    roster.extra = record.extra;
    Ok(roster)
}

fn resolve_slot(raw: &str, codes: &ShiftCodeTable) -> DaySlot {
    let raw = raw.trim();
    if OFF_SENTINELS.contains(&raw) {
        return DaySlot::Off;
    }
    let shift = codes.resolve(raw);
    if shift.category.is_work() {
        DaySlot::Work(shift)
    } else {
        DaySlot::Off
    }
}
