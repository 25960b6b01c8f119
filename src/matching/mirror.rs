//! Mirror-line matching: day-by-day comparison of a user's roster against
//! candidates, looking for lines with the same days off but different
//! (ideally complementary) shift types — the most tradeable partners.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::roster::{Roster, RosterAnchor};
use crate::expand::{expand, ExpandedDay};
use crate::matching::shift_times::circular_gap_minutes;

/// Default begin-time gap (minutes) for a difference to count as significant
pub const DEFAULT_SIGNIFICANT_GAP_MINUTES: i64 = 240;

/// Policy knobs for the mirror matcher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MirrorConfig {
    /// Begin-time gap above which a different-category day counts as a
    /// significant difference (the most valuable trades)
    pub significant_gap_minutes: i64,
}

impl Default for MirrorConfig {
    fn default() -> Self {
        Self {
            significant_gap_minutes: DEFAULT_SIGNIFICANT_GAP_MINUTES,
        }
    }
}

/// Classification of one aligned day pair. Exactly one applies per day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DayClass {
    /// Same off/work state and, if both working, same shift category
    Identical,
    /// Both working, different shift category
    Different,
    /// One off, one working — preserves total days worked while changing
    /// who covers which days, which is what a trade needs
    WorkOffMismatch,
}

/// One candidate's mirror comparison report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MirrorMatch {
    pub roster_id: String,
    pub group: String,
    pub line: String,

    /// Days in the compared window
    pub days_compared: u32,
    pub identical_days: u32,
    pub different_days: u32,
    pub work_off_mismatches: u32,

    /// Different-category days whose begin-time gap exceeds the threshold
    pub significant_differences: u32,

    /// Percentage of the user's own work days on which the candidate works
    /// the same category (how much of the user's pattern it preserves)
    pub user_pattern_score: f64,

    /// Trade desirability; candidates are ranked by this, descending
    pub trade_score: f64,
}

/// Compare the user's roster against every candidate and rank by trade
/// desirability.
///
/// Alignment is by calendar date through the shared anchor, never by
/// cycle-relative index, so both rosters agree on what any given date is.
#[must_use]
pub fn find_mirror_lines(
    user: &Roster,
    candidates: &[Roster],
    anchor: &RosterAnchor,
    config: &MirrorConfig,
) -> Vec<MirrorMatch> {
    let user_days: Vec<ExpandedDay<'_>> = expand(&user.pattern, anchor).collect();

    let mut matches: Vec<MirrorMatch> = candidates
        .par_iter()
        .filter(|candidate| candidate.id != user.id)
        .map(|candidate| compare(&user_days, candidate, anchor, config))
        .collect();

    matches.sort_by(|a, b| {
        b.trade_score
            .partial_cmp(&a.trade_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    debug!(candidates = matches.len(), "mirror matching complete");
    matches
}

fn compare(
    user_days: &[ExpandedDay<'_>],
    candidate: &Roster,
    anchor: &RosterAnchor,
    config: &MirrorConfig,
) -> MirrorMatch {
    let mut identical = 0u32;
    let mut different = 0u32;
    let mut mismatch = 0u32;
    let mut significant = 0u32;
    let mut user_work_days = 0u32;
    let mut identical_user_work = 0u32;

    for (user_day, cand_day) in user_days.iter().zip(expand(&candidate.pattern, anchor)) {
        // Same anchor on both sides, so the dates line up pairwise
        debug_assert_eq!(user_day.date, cand_day.date);

        if user_day.is_work() {
            user_work_days += 1;
        }

        match classify(user_day, &cand_day) {
            DayClass::Identical => {
                identical += 1;
                if user_day.is_work() {
                    identical_user_work += 1;
                }
            }
            DayClass::Different => {
                different += 1;
                if is_significant(user_day, &cand_day, config) {
                    significant += 1;
                }
            }
            DayClass::WorkOffMismatch => mismatch += 1,
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    let days_compared = user_days.len() as u32;
    let user_pattern_score = percentage(identical_user_work, user_work_days);
    let trade_score = trade_score(different, significant, mismatch, days_compared);

    MirrorMatch {
        roster_id: candidate.id.clone(),
        group: candidate.group.clone(),
        line: candidate.line.to_string(),
        days_compared,
        identical_days: identical,
        different_days: different,
        work_off_mismatches: mismatch,
        significant_differences: significant,
        user_pattern_score,
        trade_score,
    }
}

fn classify(user: &ExpandedDay<'_>, cand: &ExpandedDay<'_>) -> DayClass {
    match (user.shift(), cand.shift()) {
        (None, None) => DayClass::Identical,
        (Some(u), Some(c)) if u.category == c.category => DayClass::Identical,
        (Some(_), Some(_)) => DayClass::Different,
        _ => DayClass::WorkOffMismatch,
    }
}

fn is_significant(user: &ExpandedDay<'_>, cand: &ExpandedDay<'_>, config: &MirrorConfig) -> bool {
    match (user.shift(), cand.shift()) {
        (Some(u), Some(c)) => {
            circular_gap_minutes(u.begin_time, c.begin_time) > config.significant_gap_minutes
        }
        _ => false,
    }
}

/// Weighted trade desirability, scaled to be comparable across window sizes.
///
/// Work/off mismatches weigh 3 (opposite coverage, the ideal trade),
/// significant start-time differences weigh 2, and the remaining minor
/// different-category days weigh 1.
fn trade_score(different: u32, significant: u32, mismatch: u32, days: u32) -> f64 {
    if days == 0 {
        return 0.0;
    }
    let minor = different - significant;
    let weighted = f64::from(minor) + 2.0 * f64::from(significant) + 3.0 * f64::from(mismatch);
    weighted * 100.0 / f64::from(days)
}

fn percentage(part: u32, whole: u32) -> f64 {
    if whole == 0 {
        0.0
    } else {
        f64::from(part) / f64::from(whole) * 100.0
    }
}
