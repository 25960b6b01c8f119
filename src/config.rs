//! Engine configuration: the shared roster anchor, the holiday list, and
//! the shift-code lookup table, loaded from one JSON file.
//!
//! The anchor is required — no calendar arithmetic is possible without it,
//! so a missing or invalid anchor fails fast instead of degrading.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::core::roster::RosterAnchor;
use crate::core::shift_code::ShiftCodeTable;
use crate::stats::Holiday;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("No roster anchor configured; cannot map cycle days to dates")]
    MissingAnchor,

    #[error("Invalid roster anchor: {0}")]
    InvalidAnchor(String),
}

/// Raw file shape; the anchor is optional here so its absence can produce
/// the dedicated `MissingAnchor` error rather than a generic parse failure.
#[derive(Debug, Deserialize)]
struct RawConfig {
    anchor: Option<RosterAnchor>,
    #[serde(default)]
    holidays: Vec<Holiday>,
    #[serde(default)]
    shift_codes: ShiftCodeTable,
}

/// Validated process-wide configuration for the engine.
#[derive(Debug, Clone, Serialize)]
pub struct EngineConfig {
    pub anchor: RosterAnchor,
    pub holidays: Vec<Holiday>,
    pub shift_codes: ShiftCodeTable,
}

impl EngineConfig {
    /// Load and validate configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Fails fast on unreadable/unparseable files, a missing anchor, or an
    /// anchor with zero cycles.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse and validate configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`EngineConfig::load_from_file`], minus IO.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = serde_json::from_str(json)?;
        let anchor = raw.anchor.ok_or(ConfigError::MissingAnchor)?;

        if anchor.num_cycles == 0 {
            return Err(ConfigError::InvalidAnchor(
                "num_cycles must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            anchor,
            holidays: raw.holidays,
            shift_codes: raw.shift_codes,
        })
    }
}
