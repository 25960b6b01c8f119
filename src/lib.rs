//! # bidline
//!
//! A library for analyzing cyclic shift-work rosters and finding
//! compatible colleagues for day-off trades.
//!
//! Shift workers on a fixed-length repeating duty roster ("bid line")
//! often need specific calendar days off, or want to compare competing
//! lines against their own preferences. Doing that by hand means expanding
//! a 56-day repeating pattern onto the calendar and eyeballing hundreds of
//! candidate lines.
//!
//! `bidline` does the arithmetic: it expands compact repeating patterns
//! into calendar-anchored timelines, derives statistics (weekend coverage,
//! consecutive-work blocks, holiday collisions), scores lines against
//! weighted preferences, and matches a roster against candidates for two
//! distinct trade problems.
//!
//! ## Features
//!
//! - **Cycle expansion**: one authoritative mapping from cycle day to
//!   calendar date, shared by every computation
//! - **Line statistics**: weekend classification, exact-4/exact-5 work
//!   blocks, per-category tallies, holiday collisions
//! - **Bid-line ranking**: weighted multi-criteria scores with a
//!   per-dimension breakdown for explainability
//! - **Day-off matching**: find lines that are off on the dates you need,
//!   ranked with own-group precedence and shift-time tie-breaks
//! - **Mirror-line matching**: day-by-day comparison to find lines with
//!   the same days off but complementary shift types
//!
//! ## Example
//!
//! ```rust
//! use bidline::{expand, CyclePattern, DaySlot, RosterAnchor};
//! use chrono::NaiveDate;
//!
//! let pattern = CyclePattern::new(vec![DaySlot::Off; 56]).unwrap();
//! let anchor = RosterAnchor::new(
//!     NaiveDate::from_ymd_opt(2024, 10, 9).unwrap(),
//!     2,
//! );
//!
//! // 56 * 2 calendar days, each with its 1-based cycle index
//! let days: Vec<_> = expand::expand(&pattern, &anchor).collect();
//! assert_eq!(days.len(), 112);
//! assert_eq!(days[0].day_index_in_cycle, days[56].day_index_in_cycle);
//! ```
//!
//! ## Modules
//!
//! - [`core`]: shift codes, cycle patterns, rosters, anchors
//! - [`expand`]: cycle expansion — the only cycle arithmetic in the crate
//! - [`stats`]: derived statistics over expanded timelines
//! - [`matching`]: ranking, day-off matching, mirror-line matching
//! - [`catalog`]: roster-set loading with skip-and-report validation
//! - [`config`]: anchor, holidays, and shift-code table configuration
//! - [`cli`]: command-line interface implementation

pub mod catalog;
pub mod cli;
pub mod config;
pub mod core;
pub mod expand;
pub mod matching;
pub mod stats;

// Re-export commonly used types for convenience
pub use catalog::store::RosterCatalog;
pub use config::EngineConfig;
pub use core::pattern::{CyclePattern, DaySlot, CYCLE_DAYS};
pub use core::roster::{Roster, RosterAnchor};
pub use core::shift_code::{ShiftCode, ShiftCodeTable};
pub use core::types::*;
pub use matching::day_off::{find_day_off_matches, DayOffConfig, DayOffReport};
pub use matching::mirror::{find_mirror_lines, MirrorConfig, MirrorMatch};
pub use matching::rank::{rank_lines, FilterCriteria, LineScore, RankReport};
pub use stats::RosterStats;
