//! Reader for SNP tables (query and reference).
//!
//! Two layouts are supported:
//!
//! - Tables with a header naming CHR, BP (or POS), A1, A2 and SNP columns
//! - Headerless PLINK `.bim` files, read with [`BIM_COLUMNS`]

use std::path::Path;

use tracing::debug;

use crate::core::record::SnpRecord;
use crate::parsing::table::{
    has_suffix, parse_headerless_text, parse_table_text, read_text, ParseError, Table,
};
use crate::utils::validation::non_missing;

/// Fixed column layout of a PLINK `.bim` file.
///
/// `POS` is the genetic distance (cM); `BP` is the base-pair coordinate.
pub const BIM_COLUMNS: [&str; 6] = ["CHR", "SNP", "POS", "BP", "A1", "A2"];

const CHR_ALIASES: &[&str] = &["CHR", "CHROM"];
const BP_ALIASES: &[&str] = &["BP", "POS"];
const A1_ALIASES: &[&str] = &["A1"];
const A2_ALIASES: &[&str] = &["A2"];
const SNP_ALIASES: &[&str] = &["SNP", "ID", "RSID"];

/// Column positions of the SNP fields within a table
#[derive(Debug, Clone, Copy)]
struct SnpColumns {
    chromosome: usize,
    position: usize,
    a1: usize,
    a2: usize,
    snp: Option<usize>,
}

impl SnpColumns {
    fn locate(table: &Table, require_snp: bool) -> Result<Self, ParseError> {
        let snp = if require_snp {
            Some(table.require_column(SNP_ALIASES)?)
        } else {
            table.find_column(SNP_ALIASES)
        };

        Ok(Self {
            chromosome: table.require_column(CHR_ALIASES)?,
            position: table.require_column(BP_ALIASES)?,
            a1: table.require_column(A1_ALIASES)?,
            a2: table.require_column(A2_ALIASES)?,
            snp,
        })
    }
}

/// Read a query table; the SNP column is optional and ignored for matching
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or other parse errors
/// if the content is invalid.
pub fn read_query_table(path: &Path) -> Result<Vec<SnpRecord>, ParseError> {
    let table = load(path)?;
    table_to_records(&table, false)
}

/// Read a reference table; the SNP column is required
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read,
/// `ParseError::MissingColumn` if a required column is absent, or other
/// parse errors if the content is invalid.
pub fn read_reference_table(path: &Path) -> Result<Vec<SnpRecord>, ParseError> {
    let table = load(path)?;
    table_to_records(&table, true)
}

/// Parse SNP table text with a header row
///
/// # Errors
///
/// Returns parse errors if the content is invalid or a required column is
/// missing.
pub fn parse_snp_text(text: &str, require_snp: bool) -> Result<Vec<SnpRecord>, ParseError> {
    let table = parse_table_text(text)?;
    table_to_records(&table, require_snp)
}

/// Parse headerless `.bim` text
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` if a line does not have six fields.
pub fn parse_bim_text(text: &str) -> Result<Vec<SnpRecord>, ParseError> {
    let table = parse_headerless_text(text, &BIM_COLUMNS)?;
    table_to_records(&table, true)
}

fn load(path: &Path) -> Result<Table, ParseError> {
    let content = read_text(path)?;
    let table = if has_suffix(path, ".bim") || has_suffix(path, ".bim.gz") {
        debug!("Reading {} with the fixed .bim layout", path.display());
        parse_headerless_text(&content, &BIM_COLUMNS)?
    } else {
        parse_table_text(&content)?
    };
    debug!("{}: {} SNP rows", path.display(), table.len());
    Ok(table)
}

/// Convert a parsed table into SNP records, in row order
///
/// # Errors
///
/// Returns `ParseError::MissingColumn` if CHR, BP/POS, A1 or A2 is absent,
/// or SNP when `require_snp` is set.
pub fn table_to_records(table: &Table, require_snp: bool) -> Result<Vec<SnpRecord>, ParseError> {
    let columns = SnpColumns::locate(table, require_snp)?;

    let records = table
        .rows
        .iter()
        .map(|row| SnpRecord {
            line: row.line,
            chromosome: non_missing(row.get(columns.chromosome)),
            position: non_missing(row.get(columns.position)),
            a1: non_missing(row.get(columns.a1)),
            a2: non_missing(row.get(columns.a2)),
            snp: columns.snp.and_then(|i| non_missing(row.get(i))),
        })
        .collect();

    Ok(records)
}
