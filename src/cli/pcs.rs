//! Pcs command - load population structure per subject.

use clap::Args;

use crate::cli::{LayoutArgs, OutputFormat};
use crate::cohort::population::{load_pop_struct, PopulationStructure};

/// Arguments for the pcs command
#[derive(Args)]
pub struct PcsArgs {
    /// Sample name or pattern; reads <genotype-dir>/<SAMPLE>.eigenvec
    #[arg(required = true)]
    pub sample: String,

    #[command(flatten)]
    pub layout: LayoutArgs,
}

/// Execute the pcs command
///
/// # Errors
///
/// Returns an error if no eigenvector file matches or it cannot be parsed.
#[allow(clippy::needless_pass_by_value)]
pub fn run(args: PcsArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let layout = args.layout.resolve()?;
    let structure = load_pop_struct(&layout, &args.sample)?;

    if verbose {
        eprintln!("Eigenvectors: {}", structure.source.display());
    }

    match format {
        OutputFormat::Text => print_text_structure(&structure),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&structure)?),
        OutputFormat::Tsv => print_tsv_structure(&structure),
    }

    Ok(())
}

fn print_text_structure(structure: &PopulationStructure) {
    println!("Population Structure: {}", structure.sample);
    println!("{}", "=".repeat(60));
    println!("  Source: {}", structure.source.display());
    println!("  Subjects: {}", structure.len());
    println!("  Components: {}", structure.components.join(", "));
    println!();
    print_tsv_structure(structure);
}

fn print_tsv_structure(structure: &PopulationStructure) {
    println!("subject\t{}", structure.components.join("\t"));
    for subject in &structure.subjects {
        let values: Vec<String> = subject.values.iter().map(f64::to_string).collect();
        println!("{}\t{}", subject.subject, values.join("\t"));
    }
}
