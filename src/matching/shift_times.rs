//! Shift-time helpers shared by the matchers: distinct begin times of a
//! roster and the compatibility measure between two rosters' time sets.

use chrono::{NaiveTime, Timelike};

use crate::core::pattern::CyclePattern;

/// Minutes in a day, for circular time arithmetic.
const DAY_MINUTES: i64 = 24 * 60;

/// Distinct shift begin times in a pattern, sorted.
#[must_use]
pub fn distinct_begin_times(pattern: &CyclePattern) -> Vec<NaiveTime> {
    let mut times: Vec<NaiveTime> = pattern
        .iter()
        .filter_map(|slot| slot.shift().map(|s| s.begin_time))
        .collect();
    times.sort_unstable();
    times.dedup();
    times
}

/// Gap between two times of day on a circular 24h clock, in minutes.
///
/// `23:00` and `01:00` are 120 minutes apart, not 1320.
#[must_use]
pub fn circular_gap_minutes(a: NaiveTime, b: NaiveTime) -> i64 {
    let a = i64::from(a.num_seconds_from_midnight()) / 60;
    let b = i64::from(b.num_seconds_from_midnight()) / 60;
    let gap = (a - b).abs();
    gap.min(DAY_MINUTES - gap)
}

/// Fraction of time values shared between two begin-time sets.
///
/// Set overlap over the union, like a Jaccard index; `0.0` when both sets
/// are empty (two all-off rosters have no meaningful time compatibility).
#[must_use]
pub fn overlap_fraction(a: &[NaiveTime], b: &[NaiveTime]) -> f64 {
    let shared = a.iter().filter(|t| b.contains(t)).count();
    let union = a.len() + b.len() - shared;
    if union == 0 {
        0.0
    } else {
        #[allow(clippy::cast_precision_loss)]
        {
            shared as f64 / union as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pattern::{DaySlot, CYCLE_DAYS};
    use crate::core::shift_code::ShiftCodeTable;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_circular_gap_wraps_midnight() {
        assert_eq!(circular_gap_minutes(t(23, 0), t(1, 0)), 120);
        assert_eq!(circular_gap_minutes(t(7, 0), t(15, 0)), 480);
        assert_eq!(circular_gap_minutes(t(6, 30), t(6, 30)), 0);
    }

    #[test]
    fn test_overlap_fraction() {
        let a = [t(7, 0), t(15, 0)];
        let b = [t(15, 0), t(23, 0)];
        // shared 1, union 3
        assert!((overlap_fraction(&a, &b) - 1.0 / 3.0).abs() < 1e-9);
        assert!((overlap_fraction(&a, &a) - 1.0).abs() < 1e-9);
        assert!((overlap_fraction(&[], &[]) - 0.0).abs() < 1e-9);
    }

    #[test]
    fn test_distinct_begin_times_sorted_and_deduped() {
        let table = ShiftCodeTable::new();
        let slots = (0..CYCLE_DAYS)
            .map(|i| match i % 3 {
                0 => DaySlot::Work(table.resolve("1500A")),
                1 => DaySlot::Work(table.resolve("0700D")),
                _ => DaySlot::Off,
            })
            .collect();
        let pattern = crate::core::pattern::CyclePattern::new(slots).unwrap();

        assert_eq!(distinct_begin_times(&pattern), vec![t(7, 0), t(15, 0)]);
    }
}
