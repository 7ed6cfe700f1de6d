//! Scores command - sum polygenic risk score profiles per subject.

use clap::Args;

use crate::cli::{format_optional, LayoutArgs, OutputFormat};
use crate::cohort::scores::{load_prscores, ScoreTable};

/// Arguments for the scores command
#[derive(Args)]
pub struct ScoresArgs {
    /// Phenotype ID; profiles are read from <prs-dir>/<PHENOTYPE>/scores/*.profile
    #[arg(required = true)]
    pub phenotype: String,

    #[command(flatten)]
    pub layout: LayoutArgs,
}

/// Execute the scores command
///
/// # Errors
///
/// Returns an error if no profiles are found or they cannot be parsed.
#[allow(clippy::needless_pass_by_value)]
pub fn run(args: ScoresArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let layout = args.layout.resolve()?;
    let table = load_prscores(&layout, &args.phenotype)?;

    if verbose {
        for file in &table.files {
            eprintln!("Profile: {}", file.display());
        }
    }

    match format {
        OutputFormat::Text => print_text_scores(&table),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&table)?),
        OutputFormat::Tsv => print_tsv_scores(&table),
    }

    Ok(())
}

fn print_text_scores(table: &ScoreTable) {
    let missing = table.scores.iter().filter(|s| s.score.is_none()).count();

    println!("Risk Scores: {}", table.phenotype);
    println!("{}", "=".repeat(60));
    println!("  Profile files: {}", table.files.len());
    println!("  Subjects: {}", table.len());
    println!("  Missing totals: {missing}");
    println!();
    print_tsv_scores(table);
}

fn print_tsv_scores(table: &ScoreTable) {
    println!("subject\t{}", table.phenotype);
    for score in &table.scores {
        println!("{}\t{}", score.subject, format_optional(score.score));
    }
}
