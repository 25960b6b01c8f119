use std::collections::HashMap;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::types::ShiftCategory;

/// A shift definition from the reference table.
///
/// Immutable reference data. `Off` codes never appear here as worked slots;
/// a pattern slot resolving to an Off-category code becomes the off sentinel
/// during roster loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftCode {
    /// Raw code as it appears in the roster (e.g. "`0700D`")
    pub code: String,

    /// Time-of-day band, drives all comparison logic
    pub category: ShiftCategory,

    /// Shift start time
    pub begin_time: NaiveTime,

    /// Shift end time (may be earlier than `begin_time` for overnight shifts)
    pub end_time: NaiveTime,

    /// Paid length in hours
    pub hours_length: f64,
}

impl ShiftCode {
    pub fn new(
        code: impl Into<String>,
        category: ShiftCategory,
        begin_time: NaiveTime,
        end_time: NaiveTime,
        hours_length: f64,
    ) -> Self {
        Self {
            code: code.into(),
            category,
            begin_time,
            end_time,
            hours_length,
        }
    }

    /// Placeholder for a code we know nothing about.
    ///
    /// Downstream consumers must treat `Unknown` as a valid, low-information
    /// category; it still counts as a work day.
    #[must_use]
    pub fn unknown(code: impl Into<String>) -> Self {
        let midnight = NaiveTime::from_hms_opt(0, 0, 0).unwrap_or_default();
        Self {
            code: code.into(),
            category: ShiftCategory::Unknown,
            begin_time: midnight,
            end_time: midnight,
            hours_length: 0.0,
        }
    }
}

/// One step of the category-inference fallback chain.
type Inference = fn(&ShiftCodeTable, &str) -> Option<ShiftCode>;

/// Ordered inference strategies tried in sequence for each code.
///
/// The chain terminates in [`ShiftCode::unknown`] when no strategy applies.
const INFERENCE_CHAIN: &[Inference] = &[lookup_exact, infer_from_hour_prefix];

/// Lookup table mapping raw codes to shift definitions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShiftCodeTable {
    codes: HashMap<String, ShiftCode>,
}

impl ShiftCodeTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, code: ShiftCode) {
        self.codes.insert(code.code.clone(), code);
    }

    #[must_use]
    pub fn get(&self, code: &str) -> Option<&ShiftCode> {
        self.codes.get(code)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Resolve a raw code to a full shift definition.
    ///
    /// Tries each inference strategy in order: exact table lookup, then
    /// begin-hour inference from a numeric code prefix. Unrecognized codes
    /// degrade to category `Unknown` rather than failing.
    #[must_use]
    pub fn resolve(&self, code: &str) -> ShiftCode {
        let code = code.trim();
        for strategy in INFERENCE_CHAIN {
            if let Some(shift) = strategy(self, code) {
                return shift;
            }
        }
        debug!(code, "shift code not recognized, using Unknown category");
        ShiftCode::unknown(code)
    }
}

fn lookup_exact(table: &ShiftCodeTable, code: &str) -> Option<ShiftCode> {
    table.get(code).cloned()
}

/// Infer a shift from an hour prefix embedded in the code.
///
/// Many operations encode the start time in the code itself ("`0730X`" starts
/// at 07:30). The leading four digits are read as HHMM when possible, else
/// the leading two as HH. Inferred shifts assume a standard 8-hour length.
fn infer_from_hour_prefix(_table: &ShiftCodeTable, code: &str) -> Option<ShiftCode> {
    let digits: String = code.chars().take_while(char::is_ascii_digit).collect();

    let (hour, minute) = if digits.len() >= 4 {
        (digits[..2].parse().ok()?, digits[2..4].parse().ok()?)
    } else if digits.len() >= 2 {
        (digits[..2].parse().ok()?, 0u32)
    } else {
        return None;
    };

    let begin = NaiveTime::from_hms_opt(hour, minute, 0)?;
    let end = begin + chrono::Duration::hours(8);
    let category = ShiftCategory::from_begin_hour(hour);
    debug!(code, %category, "inferred shift category from hour prefix");

    Some(ShiftCode::new(code, category, begin, end, 8.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_resolve_known_code() {
        let mut table = ShiftCodeTable::new();
        table.insert(ShiftCode::new(
            "D1",
            ShiftCategory::Days,
            t(7, 0),
            t(15, 0),
            8.0,
        ));

        let shift = table.resolve("D1");
        assert_eq!(shift.category, ShiftCategory::Days);
        assert_eq!(shift.begin_time, t(7, 0));
    }

    #[test]
    fn test_resolve_infers_from_four_digit_prefix() {
        let table = ShiftCodeTable::new();
        let shift = table.resolve("0730X");
        assert_eq!(shift.category, ShiftCategory::Days);
        assert_eq!(shift.begin_time, t(7, 30));
        assert!((shift.hours_length - 8.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_resolve_infers_from_two_digit_prefix() {
        let table = ShiftCodeTable::new();
        let shift = table.resolve("22N");
        assert_eq!(shift.category, ShiftCategory::Midnights);
        assert_eq!(shift.begin_time, t(22, 0));
    }

    #[test]
    fn test_resolve_unknown_code() {
        let table = ShiftCodeTable::new();
        let shift = table.resolve("XYZ");
        assert_eq!(shift.category, ShiftCategory::Unknown);
        assert_eq!(shift.code, "XYZ");
    }

    #[test]
    fn test_table_lookup_wins_over_inference() {
        // "07A" would infer Days from the prefix, but the table says Midnights
        let mut table = ShiftCodeTable::new();
        table.insert(ShiftCode::new(
            "07A",
            ShiftCategory::Midnights,
            t(23, 0),
            t(7, 0),
            8.0,
        ));

        assert_eq!(table.resolve("07A").category, ShiftCategory::Midnights);
    }

    #[test]
    fn test_invalid_hour_prefix_falls_through() {
        let table = ShiftCodeTable::new();
        // 29 is not a valid hour
        assert_eq!(table.resolve("2900").category, ShiftCategory::Unknown);
    }
}
