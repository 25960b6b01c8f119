//! Bid-line ranking: score rosters against a user's weighted criteria.

use chrono::NaiveDate;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::debug;

use crate::core::roster::{Roster, RosterAnchor};
use crate::core::types::{ShiftCategory, SkippedRoster};
use crate::expand::day_at;
use crate::stats::{Holiday, RosterStats};

/// Neutral weight substituted for missing or non-finite weights.
pub const NEUTRAL_WEIGHT: f64 = 1.0;

fn neutral() -> f64 {
    NEUTRAL_WEIGHT
}

/// Per-dimension multipliers for the composite line score.
///
/// Free-form: zero disables a dimension entirely, values above 1 emphasize
/// it. Missing fields in a criteria file default to [`NEUTRAL_WEIGHT`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingWeights {
    #[serde(default = "neutral")]
    pub group: f64,
    #[serde(default = "neutral")]
    pub day_off: f64,
    #[serde(default = "neutral")]
    pub category: f64,
    #[serde(default = "neutral")]
    pub shift_length: f64,
    #[serde(default = "neutral")]
    pub blocks5: f64,
    #[serde(default = "neutral")]
    pub blocks4: f64,
    #[serde(default = "neutral")]
    pub weekends: f64,
    #[serde(default = "neutral")]
    pub saturdays: f64,
    #[serde(default = "neutral")]
    pub sundays: f64,
}

impl Default for RankingWeights {
    fn default() -> Self {
        Self {
            group: NEUTRAL_WEIGHT,
            day_off: NEUTRAL_WEIGHT,
            category: NEUTRAL_WEIGHT,
            shift_length: NEUTRAL_WEIGHT,
            blocks5: NEUTRAL_WEIGHT,
            blocks4: NEUTRAL_WEIGHT,
            weekends: NEUTRAL_WEIGHT,
            saturdays: NEUTRAL_WEIGHT,
            sundays: NEUTRAL_WEIGHT,
        }
    }
}

impl RankingWeights {
    /// Replace non-finite weights with the neutral value.
    #[must_use]
    pub fn sanitized(&self) -> Self {
        let fix = |w: f64| if w.is_finite() { w } else { NEUTRAL_WEIGHT };
        Self {
            group: fix(self.group),
            day_off: fix(self.day_off),
            category: fix(self.category),
            shift_length: fix(self.shift_length),
            blocks5: fix(self.blocks5),
            blocks4: fix(self.blocks4),
            weekends: fix(self.weekends),
            saturdays: fix(self.saturdays),
            sundays: fix(self.sundays),
        }
    }
}

/// What the user is looking for in a line.
///
/// Empty selection lists mean "no preference" and score as a full match.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(default)]
    pub groups: Vec<String>,

    #[serde(default)]
    pub day_off_dates: BTreeSet<NaiveDate>,

    #[serde(default)]
    pub categories: Vec<ShiftCategory>,

    /// Preferred shift lengths in hours
    #[serde(default)]
    pub shift_lengths: Vec<f64>,

    #[serde(default)]
    pub weights: RankingWeights,
}

/// Scoring dimension names, used in the per-dimension breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Group,
    DayOff,
    Category,
    ShiftLength,
    Blocks5,
    Blocks4,
    Weekends,
    Saturdays,
    Sundays,
}

/// One dimension's contribution to a line score.
///
/// Retained for explainability; the engine itself never reads it back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DimensionScore {
    pub dimension: Dimension,
    /// Raw dimension value, normalized to `[0, 1]`
    pub value: f64,
    pub weight: f64,
    /// `value * weight`
    pub weighted: f64,
}

/// Composite score for one roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineScore {
    pub roster_id: String,
    pub group: String,
    pub line: String,
    pub total: f64,
    pub breakdown: Vec<DimensionScore>,
}

/// Outcome of ranking a batch: scored lines plus per-roster skips.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankReport {
    /// Scored lines, best first
    pub ranked: Vec<LineScore>,
    pub skipped: Vec<SkippedRoster>,
}

/// Score a single roster against the criteria.
///
/// Every dimension value is normalized to `[0, 1]` before weighting, so
/// weights are directly comparable across dimensions. With all weights at
/// zero the total is exactly zero for any roster.
#[must_use]
pub fn score_line(
    roster: &Roster,
    stats: &RosterStats,
    anchor: &RosterAnchor,
    criteria: &FilterCriteria,
) -> LineScore {
    let weights = criteria.weights.sanitized();
    let w = &stats.weekends;

    let dimensions = [
        (Dimension::Group, group_value(roster, criteria), weights.group),
        (
            Dimension::DayOff,
            day_off_value(roster, anchor, &criteria.day_off_dates),
            weights.day_off,
        ),
        (
            Dimension::Category,
            category_value(stats, &criteria.categories),
            weights.category,
        ),
        (
            Dimension::ShiftLength,
            shift_length_value(roster, &criteria.shift_lengths),
            weights.shift_length,
        ),
        (
            Dimension::Blocks5,
            block_value(stats.blocks.blocks5, anchor),
            weights.blocks5,
        ),
        (
            Dimension::Blocks4,
            block_value(stats.blocks.blocks4, anchor),
            weights.blocks4,
        ),
        (
            Dimension::Weekends,
            fraction(w.weekends_off, w.total_weekends),
            weights.weekends,
        ),
        (
            Dimension::Saturdays,
            fraction(w.total_saturdays - w.saturdays_worked, w.total_saturdays),
            weights.saturdays,
        ),
        (
            Dimension::Sundays,
            fraction(w.total_sundays - w.sundays_worked, w.total_sundays),
            weights.sundays,
        ),
    ];

    let breakdown: Vec<DimensionScore> = dimensions
        .into_iter()
        .map(|(dimension, value, weight)| DimensionScore {
            dimension,
            value,
            weight,
            weighted: value * weight,
        })
        .collect();

    let total = breakdown.iter().map(|d| d.weighted).sum();

    LineScore {
        roster_id: roster.id.clone(),
        group: roster.group.clone(),
        line: roster.line.to_string(),
        total,
        breakdown,
    }
}

/// Score and rank a batch of rosters, best first.
///
/// Rosters that cannot be scored are skipped and reported, never fatal to
/// the batch. Candidates are scored in parallel; each computation is
/// independent of every other.
#[must_use]
pub fn rank_lines(
    rosters: &[Roster],
    anchor: &RosterAnchor,
    holidays: &[Holiday],
    criteria: &FilterCriteria,
) -> RankReport {
    let (mut ranked, skipped): (Vec<_>, Vec<_>) = rosters
        .par_iter()
        .map(|roster| {
            if roster.line.is_empty() {
                return Err(SkippedRoster {
                    id: roster.id.clone(),
                    reason: "missing line identifier".to_string(),
                });
            }
            let stats = RosterStats::derive(roster, anchor, holidays);
            Ok(score_line(roster, &stats, anchor, criteria))
        })
        .partition_map(|r| match r {
            Ok(score) => rayon::iter::Either::Left(score),
            Err(skip) => rayon::iter::Either::Right(skip),
        });

    ranked.sort_by(|a, b| {
        b.total
            .partial_cmp(&a.total)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    debug!(
        ranked = ranked.len(),
        skipped = skipped.len(),
        "ranked bid lines"
    );
    RankReport { ranked, skipped }
}

fn group_value(roster: &Roster, criteria: &FilterCriteria) -> f64 {
    if criteria.groups.is_empty() || criteria.groups.contains(&roster.group) {
        1.0
    } else {
        0.0
    }
}

fn day_off_value(roster: &Roster, anchor: &RosterAnchor, desired: &BTreeSet<NaiveDate>) -> f64 {
    if desired.is_empty() {
        return 1.0;
    }
    let matched = desired
        .iter()
        .filter(|&&date| day_at(&roster.pattern, anchor, date).is_off())
        .count();
    #[allow(clippy::cast_precision_loss)]
    {
        matched as f64 / desired.len() as f64
    }
}

fn category_value(stats: &RosterStats, categories: &[ShiftCategory]) -> f64 {
    if categories.is_empty() {
        return 1.0;
    }
    fraction(stats.categories.in_categories(categories), stats.categories.total())
}

fn shift_length_value(roster: &Roster, lengths: &[f64]) -> f64 {
    if lengths.is_empty() {
        return 1.0;
    }
    let mut work = 0u32;
    let mut matched = 0u32;
    for slot in roster.pattern.iter() {
        if let Some(shift) = slot.shift() {
            work += 1;
            if lengths.iter().any(|&l| (l - shift.hours_length).abs() < 0.01) {
                matched += 1;
            }
        }
    }
    fraction(matched, work)
}

/// Block counts normalize against the whole weeks in the window, capped at 1.
fn block_value(count: u32, anchor: &RosterAnchor) -> f64 {
    let weeks = anchor.window_days() / 7;
    if weeks == 0 {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let value = f64::from(count) / weeks as f64;
    value.min(1.0)
}

fn fraction(part: u32, whole: u32) -> f64 {
    if whole == 0 {
        0.0
    } else {
        f64::from(part) / f64::from(whole)
    }
}
