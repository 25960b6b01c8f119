//! Run-length block counting over the work/off sequence.

use serde::{Deserialize, Serialize};

/// Counts of maximal consecutive-work-day runs.
///
/// A run counts toward `blocks4` or `blocks5` only when its length is
/// *exactly* 4 or 5 and it is bounded on both sides by an off day or a
/// sequence boundary. A 6-day run contributes to neither, so sub-runs of
/// longer stretches are never double-counted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockCounts {
    /// Maximal runs of exactly 4 consecutive work days
    pub blocks4: u32,

    /// Maximal runs of exactly 5 consecutive work days
    pub blocks5: u32,

    /// Length of the longest work run observed
    pub longest_run: u32,

    /// Total work days in the window
    pub work_days: u32,

    /// Total off days in the window
    pub off_days: u32,
}

/// Scan a work/off boolean sequence and tally block counts.
///
/// An empty or all-off sequence yields zero blocks without error.
pub fn count_blocks(work_days: impl Iterator<Item = bool>) -> BlockCounts {
    let mut counts = BlockCounts::default();
    let mut run = 0u32;

    for is_work in work_days {
        if is_work {
            run += 1;
            counts.work_days += 1;
        } else {
            counts.off_days += 1;
            close_run(&mut counts, run);
            run = 0;
        }
    }
    // The sequence boundary bounds a trailing run
    close_run(&mut counts, run);

    counts
}

fn close_run(counts: &mut BlockCounts, run: u32) {
    match run {
        4 => counts.blocks4 += 1,
        5 => counts.blocks5 += 1,
        _ => {}
    }
    counts.longest_run = counts.longest_run.max(run);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(seq: &[u8]) -> BlockCounts {
        count_blocks(seq.iter().map(|&d| d == 1))
    }

    #[test]
    fn test_exact_five_day_run() {
        let counts = count(&[0, 1, 1, 1, 1, 1, 0]);
        assert_eq!(counts.blocks5, 1);
        assert_eq!(counts.blocks4, 0);
    }

    #[test]
    fn test_six_day_run_counts_toward_neither() {
        let counts = count(&[0, 1, 1, 1, 1, 1, 1, 0]);
        assert_eq!(counts.blocks5, 0);
        assert_eq!(counts.blocks4, 0);
        assert_eq!(counts.longest_run, 6);
    }

    #[test]
    fn test_sequence_boundary_bounds_a_run() {
        // Runs at both ends have one side bounded by the boundary
        let counts = count(&[1, 1, 1, 1, 0, 1, 1, 1, 1, 1]);
        assert_eq!(counts.blocks4, 1);
        assert_eq!(counts.blocks5, 1);
    }

    #[test]
    fn test_empty_sequence() {
        assert_eq!(count(&[]), BlockCounts::default());
    }

    #[test]
    fn test_all_off_sequence() {
        let counts = count(&[0, 0, 0, 0]);
        assert_eq!(counts.blocks4, 0);
        assert_eq!(counts.blocks5, 0);
        assert_eq!(counts.off_days, 4);
        assert_eq!(counts.work_days, 0);
    }

    #[test]
    fn test_mixed_runs() {
        // 4-run, 2-run, 5-run, 4-run
        let counts = count(&[1, 1, 1, 1, 0, 1, 1, 0, 1, 1, 1, 1, 1, 0, 1, 1, 1, 1]);
        assert_eq!(counts.blocks4, 2);
        assert_eq!(counts.blocks5, 1);
        assert_eq!(counts.work_days, 15);
        assert_eq!(counts.off_days, 3);
    }
}
