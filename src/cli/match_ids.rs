//! Match command - look up reference SNP identifiers for a query table.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use crate::cli::{format_optional, LayoutArgs, OutputFormat};
use crate::core::record::SnpRecord;
use crate::core::types::{DuplicatePolicy, MatchSummary, MatchedId};
use crate::matching::{MatchingConfig, ReferenceIndex, ReferenceMatcher};
use crate::parsing::snp_table::{read_query_table, read_reference_table};

/// Arguments for the match command
#[derive(Args)]
pub struct MatchArgs {
    /// Query table (CHR, BP, A1, A2 columns, or a PLINK .bim file)
    #[arg(required = true)]
    pub query: PathBuf,

    /// Reference table (CHR, BP, A1, A2, SNP columns, or a PLINK .bim file).
    /// Relative paths that do not exist are looked up in the GWAS directory.
    #[arg(required = true)]
    pub reference: PathBuf,

    /// Also match rows whose A1/A2 are swapped relative to the reference.
    /// Swapped identifiers are written reversed (rs123 -> 321sr).
    #[arg(long)]
    pub swap: bool,

    /// How to handle reference rows sharing a chromosome and position
    #[arg(long, value_enum, default_value = "reject")]
    pub duplicates: DuplicatePolicy,

    /// Write swapped identifiers unreversed, with a separate SWAPPED column
    #[arg(long)]
    pub annotate_swaps: bool,

    #[command(flatten)]
    pub layout: LayoutArgs,
}

struct MatchReport<'a> {
    args: &'a MatchArgs,
    reference_path: PathBuf,
    query: &'a [SnpRecord],
    index: &'a ReferenceIndex,
    results: &'a [Option<MatchedId>],
    summary: MatchSummary,
}

/// Execute the match command
///
/// # Errors
///
/// Returns an error if inputs cannot be parsed or the reference index
/// cannot be built.
#[allow(clippy::needless_pass_by_value)]
pub fn run(args: MatchArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let layout = args.layout.resolve()?;
    let reference_path = layout.resolve_gwas_table(&args.reference);

    let query = read_query_table(&args.query)
        .with_context(|| format!("Failed to read query table {}", args.query.display()))?;
    if verbose {
        eprintln!("Query: {} rows from {}", query.len(), args.query.display());
    }

    let reference = read_reference_table(&reference_path).with_context(|| {
        format!("Failed to read reference table {}", reference_path.display())
    })?;
    let config = MatchingConfig::default()
        .with_swap(args.swap)
        .with_duplicate_policy(args.duplicates);
    let index = ReferenceIndex::build(&reference, config.duplicate_policy)?;
    if verbose {
        eprintln!(
            "Reference: {} loci from {} ({} incomplete rows dropped, {} duplicates ignored)",
            index.len(),
            reference_path.display(),
            index.dropped(),
            index.duplicates_ignored()
        );
    }

    let results = ReferenceMatcher::with_config(&index, &config).match_all(&query);
    let summary = MatchSummary::from_results(&results);

    let report = MatchReport {
        args: &args,
        reference_path,
        query: &query,
        index: &index,
        results: &results,
        summary,
    };

    match format {
        OutputFormat::Text => print_text_report(&report),
        OutputFormat::Json => print_json_report(&report)?,
        OutputFormat::Tsv => print_tsv_report(&report),
    }

    Ok(())
}

fn result_columns(result: Option<&MatchedId>, annotate_swaps: bool) -> Vec<String> {
    if annotate_swaps {
        vec![
            format_optional(result.map(|m| m.snp.as_str())),
            format_optional(result.map(MatchedId::is_swapped)),
        ]
    } else {
        vec![format_optional(result.map(MatchedId::legacy_id))]
    }
}

fn record_columns(record: &SnpRecord) -> [String; 4] {
    [
        format_optional(record.chromosome.as_deref()),
        format_optional(record.position.as_deref()),
        format_optional(record.a1.as_deref()),
        format_optional(record.a2.as_deref()),
    ]
}

fn header(annotate_swaps: bool) -> &'static str {
    if annotate_swaps {
        "CHR\tBP\tA1\tA2\tSNP\tSWAPPED"
    } else {
        "CHR\tBP\tA1\tA2\tSNP"
    }
}

fn print_text_report(report: &MatchReport<'_>) {
    let summary = &report.summary;

    println!("Reference Matching");
    println!("{}", "=".repeat(60));
    println!("\nQuery: {}", report.args.query.display());
    println!("  Rows: {}", report.query.len());
    println!("\nReference: {}", report.reference_path.display());
    println!("  Loci: {}", report.index.len());
    println!("  Incomplete rows dropped: {}", report.index.dropped());
    if report.index.duplicates_ignored() > 0 {
        println!(
            "  Duplicate rows ignored: {}",
            report.index.duplicates_ignored()
        );
    }
    println!(
        "\nAllele swap: {}",
        if report.args.swap { "enabled" } else { "disabled" }
    );
    println!(
        "Matched: {} direct, {} swapped, {} missing ({:.1}%)",
        summary.direct,
        summary.swapped,
        summary.missing,
        summary.match_rate() * 100.0
    );

    println!();
    print_rows(report);
}

fn print_tsv_report(report: &MatchReport<'_>) {
    print_rows(report);
}

fn print_rows(report: &MatchReport<'_>) {
    println!("{}", header(report.args.annotate_swaps));
    for (record, result) in report.query.iter().zip(report.results) {
        let mut columns = record_columns(record).to_vec();
        columns.extend(result_columns(result.as_ref(), report.args.annotate_swaps));
        println!("{}", columns.join("\t"));
    }
}

fn print_json_report(report: &MatchReport<'_>) -> anyhow::Result<()> {
    let results: Vec<serde_json::Value> = report
        .query
        .iter()
        .zip(report.results)
        .map(|(record, result)| {
            let mut row = serde_json::json!({
                "chr": record.chromosome,
                "bp": record.position,
                "a1": record.a1,
                "a2": record.a2,
            });
            if report.args.annotate_swaps {
                row["snp"] = serde_json::json!(result.as_ref().map(|m| &m.snp));
                row["swapped"] = serde_json::json!(result.as_ref().map(MatchedId::is_swapped));
            } else {
                row["snp"] = serde_json::json!(result.as_ref().map(MatchedId::legacy_id));
            }
            row
        })
        .collect();

    let output = serde_json::json!({
        "query": report.args.query.display().to_string(),
        "reference": report.reference_path.display().to_string(),
        "allow_swap": report.args.swap,
        "reference_loci": report.index.len(),
        "reference_rows_dropped": report.index.dropped(),
        "summary": report.summary,
        "results": results,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
