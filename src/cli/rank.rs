//! Rank command - score every loaded roster against weighted criteria.

use std::path::PathBuf;

use clap::Args;

use crate::cli::{load_inputs, OutputFormat};
use crate::matching::rank::{rank_lines, FilterCriteria, RankReport};

#[derive(Args)]
pub struct RankArgs {
    /// Roster file (JSON)
    #[arg(required = true)]
    pub rosters: PathBuf,

    /// Engine config file with anchor, holidays, and shift codes
    #[arg(short, long, required = true)]
    pub config: PathBuf,

    /// Criteria file (JSON `FilterCriteria`); omit to rank with neutral
    /// weights and no filters
    #[arg(long)]
    pub criteria: Option<PathBuf>,

    /// Number of lines to show
    #[arg(short = 'n', long, default_value = "10")]
    pub limit: usize,
}

/// Execute the rank command
///
/// # Errors
///
/// Returns an error if inputs cannot be loaded or parsed.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: RankArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let (config, catalog) = load_inputs(&args.config, &args.rosters, verbose)?;

    let criteria = match &args.criteria {
        Some(path) => {
            let content = std::fs::read_to_string(path)?;
            serde_json::from_str::<FilterCriteria>(&content)?
        }
        None => FilterCriteria::default(),
    };

    let candidates = catalog.in_groups(&criteria.groups);
    let owned: Vec<_> = candidates.into_iter().cloned().collect();
    let report = rank_lines(&owned, &config.anchor, &config.holidays, &criteria);

    match format {
        OutputFormat::Text => print_text(&report, args.limit),
        OutputFormat::Json => print_json(&report, args.limit)?,
    }

    Ok(())
}

fn print_text(report: &RankReport, limit: usize) {
    if report.ranked.is_empty() {
        println!("No lines could be scored.");
    }

    for (rank, score) in report.ranked.iter().take(limit).enumerate() {
        println!(
            "{:>3}. {} / line {}  total {:.3}",
            rank + 1,
            score.group,
            score.line,
            score.total
        );
        for dim in &score.breakdown {
            if dim.weight == 0.0 {
                continue;
            }
            println!(
                "       {:<14} value {:.2}  weight {:.2}  -> {:.3}",
                format!("{:?}", dim.dimension),
                dim.value,
                dim.weight,
                dim.weighted
            );
        }
    }

    for skip in &report.skipped {
        eprintln!("Skipped {}: {}", skip.id, skip.reason);
    }
}

fn print_json(report: &RankReport, limit: usize) -> anyhow::Result<()> {
    let trimmed = RankReport {
        ranked: report.ranked.iter().take(limit).cloned().collect(),
        skipped: report.skipped.clone(),
    };
    println!("{}", serde_json::to_string_pretty(&trimmed)?);
    Ok(())
}
