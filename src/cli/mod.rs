//! Command-line interface for geno-join.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **match**: Look up SNP identifiers for a query table in a reference table
//! - **scores**: Sum PLINK score profiles of a phenotype per subject
//! - **pcs**: Load the principal components of a sample per subject
//! - **join**: Join a phenotype's scores with a sample's principal components
//!
//! ## Usage
//!
//! ```text
//! # Match a .bim file against a reference, accepting swapped alleles
//! geno-join match cohort.bim hapmap3.txt --swap
//!
//! # Summed risk scores, JSON output
//! geno-join scores height --format json
//!
//! # Scores joined with population structure, custom data root
//! geno-join join height ukb --layout layout.json
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cohort::layout::DataLayout;

pub mod join;
pub mod match_ids;
pub mod pcs;
pub mod scores;

#[derive(Parser)]
#[command(name = "geno-join")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Match SNPs to reference identifiers and join PRS and population-structure tables")]
#[command(
    long_about = "geno-join loads small tabular genomics datasets and joins them by key.\n\nIt provides:\n- SNP identifier lookup by chromosome, position and alleles, with optional allele swapping\n- Per-subject sums of PLINK score profiles\n- Per-subject principal components from .eigenvec files"
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
    /// Look up reference SNP identifiers for a query table
    Match(match_ids::MatchArgs),

    /// Sum polygenic risk score profiles per subject
    Scores(scores::ScoresArgs),

    /// Load population structure (principal components) per subject
    Pcs(pcs::PcsArgs),

    /// Join risk scores with population structure
    Join(join::JoinArgs),
}

/// Options locating the input data directories
#[derive(clap::Args, Debug, Default)]
pub struct LayoutArgs {
    /// JSON file with `gwas_dir`, `genotype_dir` and `prs_dir` entries
    #[arg(long)]
    pub layout: Option<PathBuf>,

    /// Directory of reference tables [default: inputs/GWAS]
    #[arg(long)]
    pub gwas_dir: Option<PathBuf>,

    /// Directory of .eigenvec files [default: outputs/genotypes]
    #[arg(long)]
    pub genotype_dir: Option<PathBuf>,

    /// Directory of per-phenotype score profiles [default: outputs/prs]
    #[arg(long)]
    pub prs_dir: Option<PathBuf>,
}

impl LayoutArgs {
    /// Layout from the `--layout` file (or defaults) with directory flags applied
    ///
    /// # Errors
    ///
    /// Returns an error if the layout file cannot be read or parsed.
    pub fn resolve(&self) -> anyhow::Result<DataLayout> {
        let mut layout = match &self.layout {
            Some(path) => DataLayout::load_from_file(path)?,
            None => DataLayout::default(),
        };

        if let Some(dir) = &self.gwas_dir {
            layout.gwas_dir.clone_from(dir);
        }
        if let Some(dir) = &self.genotype_dir {
            layout.genotype_dir.clone_from(dir);
        }
        if let Some(dir) = &self.prs_dir {
            layout.prs_dir.clone_from(dir);
        }

        Ok(layout)
    }
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Missing values are written as `NA` in text and TSV output
pub(crate) fn format_optional<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map_or_else(|| "NA".to_string(), |v| v.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_layout_overrides() {
        let args = LayoutArgs {
            prs_dir: Some(PathBuf::from("/scores")),
            ..LayoutArgs::default()
        };
        let layout = args.resolve().unwrap();
        assert_eq!(layout.prs_dir, PathBuf::from("/scores"));
        assert_eq!(layout.genotype_dir, DataLayout::default().genotype_dir);
    }

    #[test]
    fn test_format_optional() {
        assert_eq!(format_optional(Some(1.5)), "1.5");
        assert_eq!(format_optional::<f64>(None), "NA");
    }
}
