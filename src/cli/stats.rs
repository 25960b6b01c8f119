//! Stats command - derived statistics for a single line.

use std::path::PathBuf;

use clap::Args;

use crate::cli::{find_user_roster, load_inputs, OutputFormat};
use crate::stats::RosterStats;

#[derive(Args)]
pub struct StatsArgs {
    /// Roster file (JSON)
    #[arg(required = true)]
    pub rosters: PathBuf,

    /// Engine config file with anchor, holidays, and shift codes
    #[arg(short, long, required = true)]
    pub config: PathBuf,

    /// Id of the roster to summarize
    #[arg(short, long, required = true)]
    pub line: String,
}

/// Execute the stats command
///
/// # Errors
///
/// Returns an error if inputs cannot be loaded or the line is unknown.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: StatsArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let (config, catalog) = load_inputs(&args.config, &args.rosters, verbose)?;
    let roster = find_user_roster(&catalog, &args.line)?;

    let stats = RosterStats::derive(roster, &config.anchor, &config.holidays);

    match format {
        OutputFormat::Text => print_text(&args.line, &stats),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&stats)?),
    }

    Ok(())
}

fn print_text(line: &str, stats: &RosterStats) {
    println!("Line {line}");
    println!(
        "  work days {}  off days {}  longest run {}",
        stats.blocks.work_days, stats.blocks.off_days, stats.blocks.longest_run
    );
    println!(
        "  blocks: {} five-day, {} four-day",
        stats.blocks.blocks5, stats.blocks.blocks4
    );

    let w = &stats.weekends;
    println!(
        "  weekends: {} total, {} fully worked, {} Sat-only, {} Sun-only, {} off",
        w.total_weekends,
        w.full_weekends_worked,
        w.saturdays_only_worked,
        w.sundays_only_worked,
        w.weekends_off
    );

    let c = &stats.categories;
    println!(
        "  categories: days {}  mid {}  afternoons {}  late {}  midnights {}  unknown {}",
        c.days, c.mid_days, c.afternoons, c.late_days, c.midnights, c.unknown
    );

    if stats.holiday_collisions.is_empty() {
        println!("  holidays: none worked");
    } else {
        println!("  holidays worked:");
        for collision in &stats.holiday_collisions {
            println!(
                "    {}  {}  ({})",
                collision.date, collision.name, collision.code
            );
        }
    }
}
