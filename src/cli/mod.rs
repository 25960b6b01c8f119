//! Command-line interface for bidline.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **rank**: score every roster against weighted criteria ("bid line ranking")
//! - **dayoff**: find candidates that are off on specific dates
//! - **mirror**: find candidates with the same days off but different shifts
//! - **stats**: derived statistics for one line
//!
//! ## Usage
//!
//! ```text
//! # Rank all lines against a criteria file
//! bidline rank rosters.json --config config.json --criteria criteria.json
//!
//! # Who is off on the days I need?
//! bidline dayoff rosters.json --config config.json --line t-1 \
//!     --date 2024-10-14 --date 2024-10-15
//!
//! # Find trade partners with opposite coverage
//! bidline mirror rosters.json --config config.json --line t-1
//!
//! # JSON output for scripting
//! bidline stats rosters.json --config config.json --line t-1 --format json
//! ```

use clap::{Parser, Subcommand};
use std::path::Path;

pub mod dayoff;
pub mod mirror;
pub mod rank;
pub mod stats;

use crate::catalog::store::RosterCatalog;
use crate::config::EngineConfig;
use crate::core::roster::Roster;

#[derive(Parser)]
#[command(name = "bidline")]
#[command(version)]
#[command(about = "Analyze cyclic shift rosters and find compatible trade partners")]
#[command(
    long_about = "bidline expands fixed-length repeating shift rosters onto the calendar and\ncompares them.\n\nIt can rank every line against your weighted preferences, find colleagues\nwho are off on the specific days you need, and find 'mirror' lines with the\nsame days off but a different shift type - the ideal trade partners."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank every roster against weighted filter criteria
    Rank(rank::RankArgs),

    /// Find rosters that are off on specific calendar dates
    Dayoff(dayoff::DayOffArgs),

    /// Find mirror lines: same days off, different shift type
    Mirror(mirror::MirrorArgs),

    /// Show derived statistics for one line
    Stats(stats::StatsArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Load the engine config and the roster set, reporting skips on stderr.
///
/// Shared by every subcommand; the engine itself never touches files.
pub(crate) fn load_inputs(
    config_path: &Path,
    rosters_path: &Path,
    verbose: bool,
) -> anyhow::Result<(EngineConfig, RosterCatalog)> {
    let config = EngineConfig::load_from_file(config_path)?;
    let (catalog, report) = RosterCatalog::load_from_file(rosters_path, &config.shift_codes)?;

    if verbose {
        eprintln!(
            "Loaded {} rosters in {} groups ({} skipped)",
            catalog.len(),
            catalog.groups().len(),
            report.skipped.len()
        );
    }
    for skip in &report.skipped {
        eprintln!("Skipped roster {}: {}", skip.id, skip.reason);
    }

    Ok((config, catalog))
}

/// Look up the user's own roster by id, with a helpful failure message.
pub(crate) fn find_user_roster<'a>(
    catalog: &'a RosterCatalog,
    line_id: &str,
) -> anyhow::Result<&'a Roster> {
    catalog.get(line_id).ok_or_else(|| {
        anyhow::anyhow!(
            "no roster with id '{line_id}' (known ids: {})",
            catalog
                .rosters
                .iter()
                .map(|r| r.id.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        )
    })
}
