//! Generic reader for delimited text tables.
//!
//! Files are either tab-delimited or padded with runs of spaces (PLINK's
//! native output). The delimiter is detected from the header line.

use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use flate2::read::MultiGzDecoder;
use thiserror::Error;
use tracing::debug;

use crate::utils::validation::check_column_limit;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid table format: {0}")]
    InvalidFormat(String),

    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Invalid value on line {line} in column {column}: '{value}'")]
    InvalidValue {
        line: usize,
        column: String,
        value: String,
    },

    #[error("Table parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Too many columns: {0}")]
    TooManyColumns(usize),
}

/// How fields are separated within a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    /// Single tab characters; empty and quoted fields are allowed
    Tab,
    /// Runs of spaces or tabs; fields are never empty
    Whitespace,
}

impl Delimiter {
    /// Pick the delimiter for a file from its first line
    #[must_use]
    pub fn detect(header_line: &str) -> Self {
        if header_line.contains('\t') {
            Self::Tab
        } else {
            Self::Whitespace
        }
    }
}

/// One data line of a table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// 1-based line number in the source text
    pub line: usize,
    pub fields: Vec<String>,
}

impl Row {
    /// Field at `index`; rows always have one field per column
    #[must_use]
    pub fn get(&self, index: usize) -> &str {
        self.fields.get(index).map_or("", String::as_str)
    }
}

/// A parsed table: column names plus raw string rows
#[derive(Debug, Clone)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
    pub delimiter: Delimiter,
}

impl Table {
    /// Index of the first column matching any alias (case-insensitive).
    ///
    /// Aliases are tried in order, so `&["BP", "POS"]` prefers `BP` when
    /// both columns exist.
    #[must_use]
    pub fn find_column(&self, aliases: &[&str]) -> Option<usize> {
        aliases.iter().find_map(|alias| {
            self.columns
                .iter()
                .position(|c| c.eq_ignore_ascii_case(alias))
        })
    }

    /// Like [`Table::find_column`], but a missing column is an error
    ///
    /// # Errors
    ///
    /// Returns `ParseError::MissingColumn` naming the first alias.
    pub fn require_column(&self, aliases: &[&str]) -> Result<usize, ParseError> {
        self.find_column(aliases).ok_or_else(|| {
            ParseError::MissingColumn(aliases.first().copied().unwrap_or_default().to_string())
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Read a file into a string, gunzipping when the name ends in `.gz`
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read or decompressed.
pub fn read_text(path: &Path) -> Result<String, ParseError> {
    let file = std::fs::File::open(path)?;
    let mut content = String::new();

    if has_suffix(path, ".gz") {
        MultiGzDecoder::new(file).read_to_string(&mut content)?;
    } else {
        std::io::BufReader::new(file).read_to_string(&mut content)?;
    }

    debug!("Read {} bytes from {}", content.len(), path.display());
    Ok(content)
}

/// Case-insensitive check on the full file name
pub(crate) fn has_suffix(path: &Path, suffix: &str) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.to_lowercase().ends_with(suffix))
}

/// Read a table with a header row from a file
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or other parse errors
/// if the content is invalid.
pub fn read_table(path: &Path) -> Result<Table, ParseError> {
    let content = read_text(path)?;
    parse_table_text(&content)
}

/// Parse table text whose first non-empty line is the header.
///
/// A leading `#` on the header is dropped (`#FID` reads as `FID`).
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` if there is no header or a row has a
/// different number of fields than the header, or
/// `ParseError::TooManyColumns` if the header is too wide.
pub fn parse_table_text(text: &str) -> Result<Table, ParseError> {
    let delimiter = detect_delimiter(text)
        .ok_or_else(|| ParseError::InvalidFormat("No header line found".to_string()))?;

    let mut rows = split_rows(text, delimiter)?.into_iter();
    let header = rows
        .next()
        .ok_or_else(|| ParseError::InvalidFormat("No header line found".to_string()))?;

    let mut columns = header.fields;
    if columns.first().is_some_and(|c| c == "#") {
        columns.remove(0);
    } else if let Some(first) = columns.first_mut() {
        if let Some(name) = first.strip_prefix('#') {
            *first = name.trim_start().to_string();
        }
    }

    build_table(columns, delimiter, rows.collect())
}

/// Parse headerless table text using a fixed set of column names.
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` if a row has a different number of
/// fields than `columns`.
pub fn parse_headerless_text(text: &str, columns: &[&str]) -> Result<Table, ParseError> {
    let delimiter = detect_delimiter(text).unwrap_or(Delimiter::Whitespace);
    let rows = split_rows(text, delimiter)?;
    let columns = columns.iter().map(|c| (*c).to_string()).collect();

    build_table(columns, delimiter, rows)
}

fn detect_delimiter(text: &str) -> Option<Delimiter> {
    text.lines()
        .find(|line| !line.trim().is_empty())
        .map(Delimiter::detect)
}

fn split_rows(text: &str, delimiter: Delimiter) -> Result<Vec<Row>, ParseError> {
    match delimiter {
        Delimiter::Tab => tab_rows(text),
        Delimiter::Whitespace => Ok(whitespace_rows(text)),
    }
}

/// Tab-delimited rows via `csv`, which handles quoted fields.
///
/// Only truly empty lines are skipped; a line of bare tabs is a row of
/// empty fields.
#[allow(clippy::cast_possible_truncation)]
fn tab_rows(text: &str) -> Result<Vec<Row>, ParseError> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(false)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    reader
        .records()
        .map(|result| {
            let record = result.map_err(csv_error)?;
            Ok(Row {
                line: record.position().map_or(0, |p| p.line() as usize),
                fields: record.iter().map(str::to_string).collect(),
            })
        })
        .collect()
}

fn whitespace_rows(text: &str) -> Vec<Row> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| Row {
            line: i + 1,
            fields: line.split_whitespace().map(str::to_string).collect(),
        })
        .collect()
}

#[allow(clippy::cast_possible_truncation)]
fn csv_error(err: csv::Error) -> ParseError {
    match err.kind() {
        csv::ErrorKind::UnequalLengths {
            pos,
            expected_len,
            len,
        } => ParseError::InvalidFormat(format!(
            "Line {} has {len} fields, expected {expected_len}",
            pos.as_ref().map_or(0, |p| p.line() as usize)
        )),
        _ => ParseError::Csv(err),
    }
}

fn build_table(
    columns: Vec<String>,
    delimiter: Delimiter,
    rows: Vec<Row>,
) -> Result<Table, ParseError> {
    if columns.is_empty() || columns.iter().all(String::is_empty) {
        return Err(ParseError::InvalidFormat("Header has no columns".to_string()));
    }
    if check_column_limit(columns.len()).is_some() {
        return Err(ParseError::TooManyColumns(columns.len()));
    }

    if let Some(row) = rows.iter().find(|r| r.fields.len() != columns.len()) {
        return Err(ParseError::InvalidFormat(format!(
            "Line {} has {} fields, expected {}",
            row.line,
            row.fields.len(),
            columns.len()
        )));
    }

    Ok(Table {
        columns,
        rows,
        delimiter,
    })
}
