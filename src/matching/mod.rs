//! Matching and scoring: bid-line ranking against weighted criteria,
//! day-off trade matching, and mirror-line comparison.

pub mod day_off;
pub mod mirror;
pub mod rank;
pub mod shift_times;

pub use day_off::{find_day_off_matches, DayOffConfig, DayOffMatch, DayOffReport};
pub use mirror::{find_mirror_lines, MirrorConfig, MirrorMatch};
pub use rank::{rank_lines, score_line, FilterCriteria, LineScore, RankReport, RankingWeights};
