//! Dayoff command - find candidates off on the dates the user needs.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Args;

use crate::cli::{find_user_roster, load_inputs, OutputFormat};
use crate::matching::day_off::{find_day_off_matches, DayOffConfig, DayOffReport};

#[derive(Args)]
pub struct DayOffArgs {
    /// Roster file (JSON)
    #[arg(required = true)]
    pub rosters: PathBuf,

    /// Engine config file with anchor, holidays, and shift codes
    #[arg(short, long, required = true)]
    pub config: PathBuf,

    /// Id of the user's own roster
    #[arg(short, long, required = true)]
    pub line: String,

    /// Desired day off (repeatable)
    #[arg(short, long = "date", required = true)]
    pub dates: Vec<NaiveDate>,

    /// Restrict candidates to these groups (repeatable; default all)
    #[arg(short, long = "group")]
    pub groups: Vec<String>,

    /// Minimum matched days to qualify (default: half the dates, rounded up)
    #[arg(long)]
    pub min_matches: Option<u32>,

    /// Also show candidates below the qualification threshold
    #[arg(long)]
    pub show_excluded: bool,

    /// Number of matches to show
    #[arg(short = 'n', long, default_value = "10")]
    pub limit: usize,
}

/// Execute the dayoff command
///
/// # Errors
///
/// Returns an error if inputs cannot be loaded or the user line is unknown.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: DayOffArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let (config, catalog) = load_inputs(&args.config, &args.rosters, verbose)?;
    let user = find_user_roster(&catalog, &args.line)?;

    let desired = args.dates.iter().copied().collect();
    let candidates: Vec<_> = catalog.in_groups(&args.groups).into_iter().cloned().collect();
    let matcher_config = DayOffConfig {
        min_matches: args.min_matches,
        include_excluded: args.show_excluded,
    };

    let report = find_day_off_matches(user, &desired, &candidates, &config.anchor, &matcher_config);

    match format {
        OutputFormat::Text => print_text(&report, args.limit),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}

fn print_text(report: &DayOffReport, limit: usize) {
    if report.matches.is_empty() {
        println!("No qualifying matches found.");
    }

    for (rank, m) in report.matches.iter().take(limit).enumerate() {
        let dates: Vec<String> = m.matched_dates.iter().map(ToString::to_string).collect();
        let times: Vec<String> = m
            .shift_times
            .iter()
            .map(|t| t.format("%H:%M").to_string())
            .collect();
        println!(
            "{:>3}. {} / line {}  {}% ({}/{}){}",
            rank + 1,
            m.group,
            m.line,
            m.match_percentage,
            m.match_count,
            m.total_desired,
            if m.same_group { "  [own group]" } else { "" }
        );
        println!("       off on: {}", dates.join(", "));
        println!("       shift times: {}", times.join(", "));
    }

    if !report.excluded.is_empty() {
        println!("\nBelow threshold:");
        for m in &report.excluded {
            println!(
                "     {} / line {}  {}% ({}/{})",
                m.group, m.line, m.match_percentage, m.match_count, m.total_desired
            );
        }
    }
}
