//! Join command - risk scores joined with population structure.

use clap::Args;

use crate::cli::{format_optional, LayoutArgs, OutputFormat};
use crate::cohort::join::{join_covariates, CovariateTable};
use crate::cohort::population::load_pop_struct;
use crate::cohort::scores::load_prscores;

/// Arguments for the join command
#[derive(Args)]
pub struct JoinArgs {
    /// Phenotype ID of the risk scores
    #[arg(required = true)]
    pub phenotype: String,

    /// Sample name or pattern of the eigenvector file
    #[arg(required = true)]
    pub sample: String,

    #[command(flatten)]
    pub layout: LayoutArgs,
}

/// Execute the join command
///
/// # Errors
///
/// Returns an error if either dataset cannot be loaded.
#[allow(clippy::needless_pass_by_value)]
pub fn run(args: JoinArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let layout = args.layout.resolve()?;
    let scores = load_prscores(&layout, &args.phenotype)?;
    let structure = load_pop_struct(&layout, &args.sample)?;
    let table = join_covariates(&scores, &structure);

    if verbose {
        eprintln!(
            "Subjects: {} with scores, {} with components, {} joined",
            scores.len(),
            structure.len(),
            table.rows.len()
        );
    }

    match format {
        OutputFormat::Text => {
            println!("Covariates: {} x {}", table.phenotype, structure.sample);
            println!("{}", "=".repeat(60));
            println!("  Subjects: {}", table.rows.len());
            println!();
            print_tsv_covariates(&table);
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&table)?),
        OutputFormat::Tsv => print_tsv_covariates(&table),
    }

    Ok(())
}

fn print_tsv_covariates(table: &CovariateTable) {
    let mut header = vec!["subject".to_string(), table.phenotype.clone()];
    header.extend(table.components.iter().cloned());
    println!("{}", header.join("\t"));

    for row in &table.rows {
        let mut fields = vec![row.subject.clone(), format_optional(row.score)];
        fields.extend(row.components.iter().map(f64::to_string));
        println!("{}", fields.join("\t"));
    }
}
