//! Day-off matching: find candidates whose rosters are off on the specific
//! calendar dates the user needs covered.

use chrono::{NaiveDate, NaiveTime};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::debug;

use crate::core::roster::{Roster, RosterAnchor};
use crate::expand::day_at;
use crate::matching::shift_times::{distinct_begin_times, overlap_fraction};

/// Policy knobs for the day-off matcher.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DayOffConfig {
    /// Minimum matched days to qualify. `None` applies the default policy:
    /// at least half the desired days, rounded up.
    pub min_matches: Option<u32>,

    /// Diagnostic mode: retain candidates below the threshold, with their
    /// counts, so a user can see why few matches were found.
    pub include_excluded: bool,
}

impl DayOffConfig {
    fn threshold(&self, total_desired: u32) -> u32 {
        self.min_matches.unwrap_or(total_desired.div_ceil(2))
    }
}

/// One candidate's day-off match report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayOffMatch {
    pub roster_id: String,
    pub group: String,
    pub line: String,

    /// Desired dates on which the candidate is off (in window)
    pub matched_dates: Vec<NaiveDate>,
    pub match_count: u32,
    pub total_desired: u32,
    /// `round(match_count / total_desired * 100)`
    pub match_percentage: u32,

    /// Candidate is in the user's own group (ranked above equal percentages)
    pub same_group: bool,

    /// Overlap between the candidate's and the user's shift begin times,
    /// used as the final tie-break
    pub time_overlap: f64,

    /// Candidate's distinct shift begin times, for display
    pub shift_times: Vec<NaiveTime>,
}

/// Ranked day-off matches plus diagnostic extras.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DayOffReport {
    /// Qualifying candidates, best first
    pub matches: Vec<DayOffMatch>,

    /// Below-threshold candidates, only populated in diagnostic mode
    pub excluded: Vec<DayOffMatch>,
}

/// Find and rank candidates that are off on the user's desired dates.
///
/// All rosters are expanded under the one shared `anchor`. The user's own
/// roster is never a candidate. An empty candidate set or an empty desired
/// set yields an empty report, not an error.
#[must_use]
pub fn find_day_off_matches(
    user: &Roster,
    desired: &BTreeSet<NaiveDate>,
    candidates: &[Roster],
    anchor: &RosterAnchor,
    config: &DayOffConfig,
) -> DayOffReport {
    if desired.is_empty() || candidates.is_empty() {
        return DayOffReport::default();
    }

    #[allow(clippy::cast_possible_truncation)]
    let total_desired = desired.len() as u32;
    let threshold = config.threshold(total_desired);
    let user_times = distinct_begin_times(&user.pattern);

    let mut evaluated: Vec<DayOffMatch> = candidates
        .par_iter()
        .filter(|candidate| candidate.id != user.id)
        .map(|candidate| evaluate(candidate, desired, total_desired, anchor, user, &user_times))
        .collect();

    // Percentage descending, then own group first, then time compatibility
    evaluated.sort_by(|a, b| {
        b.match_percentage
            .cmp(&a.match_percentage)
            .then(b.same_group.cmp(&a.same_group))
            .then(
                b.time_overlap
                    .partial_cmp(&a.time_overlap)
                    .unwrap_or(std::cmp::Ordering::Equal),
            )
    });

    let (matches, excluded): (Vec<_>, Vec<_>) = evaluated
        .into_iter()
        .partition(|m| m.match_count >= threshold);

    debug!(
        matches = matches.len(),
        excluded = excluded.len(),
        threshold,
        "day-off matching complete"
    );

    DayOffReport {
        matches,
        excluded: if config.include_excluded {
            excluded
        } else {
            Vec::new()
        },
    }
}

fn evaluate(
    candidate: &Roster,
    desired: &BTreeSet<NaiveDate>,
    total_desired: u32,
    anchor: &RosterAnchor,
    user: &Roster,
    user_times: &[NaiveTime],
) -> DayOffMatch {
    // A desired date matches only when the candidate is off AND the date is
    // inside the schedule window; out-of-window days are not off days.
    let matched_dates: Vec<NaiveDate> = desired
        .iter()
        .copied()
        .filter(|&date| day_at(&candidate.pattern, anchor, date).is_off())
        .collect();

    #[allow(clippy::cast_possible_truncation)]
    let match_count = matched_dates.len() as u32;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let match_percentage =
        (f64::from(match_count) / f64::from(total_desired) * 100.0).round() as u32;

    let shift_times = distinct_begin_times(&candidate.pattern);
    let time_overlap = overlap_fraction(&shift_times, user_times);

    DayOffMatch {
        roster_id: candidate.id.clone(),
        group: candidate.group.clone(),
        line: candidate.line.to_string(),
        matched_dates,
        match_count,
        total_desired,
        match_percentage,
        same_group: candidate.group == user.group,
        time_overlap,
        shift_times,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pattern::{CyclePattern, DaySlot, CYCLE_DAYS};
    use crate::core::shift_code::ShiftCodeTable;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Days 1-5 of each week worked with `code`, days 6-7 off.
    fn five_two(id: &str, group: &str, code: &str) -> Roster {
        let table = ShiftCodeTable::new();
        let slots = (0..CYCLE_DAYS)
            .map(|i| {
                if i % 7 < 5 {
                    DaySlot::Work(table.resolve(code))
                } else {
                    DaySlot::Off
                }
            })
            .collect();
        Roster::new(id, group, id, CyclePattern::new(slots).unwrap())
    }

    fn all_work(id: &str, group: &str) -> Roster {
        let table = ShiftCodeTable::new();
        Roster::new(
            id,
            group,
            id,
            CyclePattern::new(vec![DaySlot::Work(table.resolve("0700D")); CYCLE_DAYS]).unwrap(),
        )
    }

    #[test]
    fn test_full_match_on_pattern_off_days() {
        // Anchor 2024-10-09, five-on/two-off; 10-14 and 10-15 land on the
        // pattern's off days (indexes 6 and 7)
        let anchor = RosterAnchor::new(ymd(2024, 10, 9), 1);
        let user = all_work("user", "Tower");
        let candidate = five_two("cand", "Tower", "0700D");
        let desired: BTreeSet<NaiveDate> =
            [ymd(2024, 10, 14), ymd(2024, 10, 15)].into_iter().collect();

        let report = find_day_off_matches(
            &user,
            &desired,
            &[candidate],
            &anchor,
            &DayOffConfig::default(),
        );
        assert_eq!(report.matches.len(), 1);
        let m = &report.matches[0];
        assert_eq!(m.match_count, 2);
        assert_eq!(m.match_percentage, 100);
        assert_eq!(m.matched_dates, vec![ymd(2024, 10, 14), ymd(2024, 10, 15)]);
    }

    #[test]
    fn test_date_before_window_never_matches() {
        let anchor = RosterAnchor::new(ymd(2024, 10, 9), 1);
        let user = all_work("user", "Tower");
        // Candidate is off every day, but the desired date precedes the window
        let candidate = Roster::new(
            "cand",
            "Tower",
            "L1",
            CyclePattern::new(vec![DaySlot::Off; CYCLE_DAYS]).unwrap(),
        );
        let desired: BTreeSet<NaiveDate> = [ymd(2024, 10, 1)].into_iter().collect();

        let report = find_day_off_matches(
            &user,
            &desired,
            &[candidate],
            &anchor,
            &DayOffConfig {
                include_excluded: true,
                ..DayOffConfig::default()
            },
        );
        assert!(report.matches.is_empty());
        assert_eq!(report.excluded[0].match_count, 0);
    }

    #[test]
    fn test_threshold_default_half_rounded_up() {
        let config = DayOffConfig::default();
        assert_eq!(config.threshold(4), 2);
        assert_eq!(config.threshold(5), 3);
        assert_eq!(config.threshold(1), 1);
    }

    #[test]
    fn test_own_group_ranks_above_equal_percentage() {
        let anchor = RosterAnchor::new(ymd(2024, 10, 9), 1);
        let user = all_work("user", "Tower");
        let same = five_two("same-group", "Tower", "0700D");
        let other = five_two("other-group", "Radar", "0700D");
        let desired: BTreeSet<NaiveDate> =
            [ymd(2024, 10, 14), ymd(2024, 10, 15)].into_iter().collect();

        let report = find_day_off_matches(
            &user,
            &desired,
            &[other, same],
            &anchor,
            &DayOffConfig::default(),
        );
        assert_eq!(report.matches[0].roster_id, "same-group");
        assert_eq!(report.matches[1].roster_id, "other-group");
    }

    #[test]
    fn test_time_overlap_breaks_remaining_ties() {
        let anchor = RosterAnchor::new(ymd(2024, 10, 9), 1);
        // User works 0700 starts; candidate working the same start time wins
        let user = five_two("user", "Tower", "0700D");
        let compatible = five_two("compatible", "Tower", "0700D");
        let incompatible = five_two("incompatible", "Tower", "1500A");
        let desired: BTreeSet<NaiveDate> =
            [ymd(2024, 10, 14), ymd(2024, 10, 15)].into_iter().collect();

        let report = find_day_off_matches(
            &user,
            &desired,
            &[incompatible, compatible],
            &anchor,
            &DayOffConfig::default(),
        );
        assert_eq!(report.matches[0].roster_id, "compatible");
    }

    #[test]
    fn test_empty_desired_set_returns_empty_report() {
        let anchor = RosterAnchor::new(ymd(2024, 10, 9), 1);
        let user = all_work("user", "Tower");
        let candidate = five_two("cand", "Tower", "0700D");

        let report = find_day_off_matches(
            &user,
            &BTreeSet::new(),
            &[candidate],
            &anchor,
            &DayOffConfig::default(),
        );
        assert!(report.matches.is_empty());
        assert!(report.excluded.is_empty());
    }

    #[test]
    fn test_user_roster_is_not_a_candidate() {
        let anchor = RosterAnchor::new(ymd(2024, 10, 9), 1);
        let user = five_two("user", "Tower", "0700D");
        let desired: BTreeSet<NaiveDate> = [ymd(2024, 10, 14)].into_iter().collect();

        let report = find_day_off_matches(
            &user,
            &desired,
            &[user.clone()],
            &anchor,
            &DayOffConfig::default(),
        );
        assert!(report.matches.is_empty());
    }
}
