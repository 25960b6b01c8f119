//! Mirror command - find trade partners with complementary coverage.

use std::path::PathBuf;

use clap::Args;

use crate::cli::{find_user_roster, load_inputs, OutputFormat};
use crate::matching::mirror::{find_mirror_lines, MirrorConfig, MirrorMatch};

#[derive(Args)]
pub struct MirrorArgs {
    /// Roster file (JSON)
    #[arg(required = true)]
    pub rosters: PathBuf,

    /// Engine config file with anchor, holidays, and shift codes
    #[arg(short, long, required = true)]
    pub config: PathBuf,

    /// Id of the user's own roster
    #[arg(short, long, required = true)]
    pub line: String,

    /// Restrict candidates to these groups (repeatable; default all)
    #[arg(short, long = "group")]
    pub groups: Vec<String>,

    /// Begin-time gap in minutes for a difference to count as significant
    #[arg(long, default_value = "240")]
    pub gap_minutes: i64,

    /// Number of matches to show
    #[arg(short = 'n', long, default_value = "10")]
    pub limit: usize,
}

/// Execute the mirror command
///
/// # Errors
///
/// Returns an error if inputs cannot be loaded or the user line is unknown.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: MirrorArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let (config, catalog) = load_inputs(&args.config, &args.rosters, verbose)?;
    let user = find_user_roster(&catalog, &args.line)?;

    let candidates: Vec<_> = catalog.in_groups(&args.groups).into_iter().cloned().collect();
    let matcher_config = MirrorConfig {
        significant_gap_minutes: args.gap_minutes,
    };

    let matches = find_mirror_lines(user, &candidates, &config.anchor, &matcher_config);

    match format {
        OutputFormat::Text => print_text(&matches, args.limit),
        OutputFormat::Json => {
            let trimmed: Vec<_> = matches.iter().take(args.limit).collect();
            println!("{}", serde_json::to_string_pretty(&trimmed)?);
        }
    }

    Ok(())
}

fn print_text(matches: &[MirrorMatch], limit: usize) {
    if matches.is_empty() {
        println!("No candidates to compare.");
    }

    for (rank, m) in matches.iter().take(limit).enumerate() {
        println!(
            "{:>3}. {} / line {}  trade score {:.1}",
            rank + 1,
            m.group,
            m.line,
            m.trade_score
        );
        println!(
            "       identical {}  different {} (significant {})  work/off mismatch {}",
            m.identical_days, m.different_days, m.significant_differences, m.work_off_mismatches
        );
        println!(
            "       preserves {:.0}% of your work pattern over {} days",
            m.user_pattern_score, m.days_compared
        );
    }
}
