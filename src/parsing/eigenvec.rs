//! Parser for principal-component (`.eigenvec`) files.
//!
//! Expects a header with `IID` and one or more component columns. `FID` is
//! accepted and dropped; plink2 writes the header as `#FID` or `#IID`.

use std::path::Path;

use crate::parsing::table::{parse_table_text, read_table, ParseError, Table};
use crate::utils::validation::is_missing;

/// One sample's component values
#[derive(Debug, Clone, PartialEq)]
pub struct EigenvecRecord {
    pub line: usize,
    pub iid: String,
    pub values: Vec<f64>,
}

/// Parsed eigenvector file
#[derive(Debug, Clone, PartialEq)]
pub struct EigenvecTable {
    /// Component column names in file order (e.g. `PC1`, `PC2`)
    pub components: Vec<String>,
    pub records: Vec<EigenvecRecord>,
}

/// Read an eigenvector file
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or other parse errors
/// if the content is invalid.
pub fn read_eigenvec(path: &Path) -> Result<EigenvecTable, ParseError> {
    let table = read_table(path)?;
    table_to_eigenvec(&table)
}

/// Parse eigenvector text
///
/// # Errors
///
/// Returns `ParseError::MissingColumn` if IID is absent,
/// `ParseError::InvalidFormat` if there are no component columns, or
/// `ParseError::InvalidValue` for a missing IID or non-numeric component.
pub fn parse_eigenvec_text(text: &str) -> Result<EigenvecTable, ParseError> {
    let table = parse_table_text(text)?;
    table_to_eigenvec(&table)
}

fn table_to_eigenvec(table: &Table) -> Result<EigenvecTable, ParseError> {
    let iid_col = table.require_column(&["IID"])?;
    let fid_col = table.find_column(&["FID"]);

    let component_cols: Vec<usize> = (0..table.columns.len())
        .filter(|&i| i != iid_col && Some(i) != fid_col)
        .collect();

    if component_cols.is_empty() {
        return Err(ParseError::InvalidFormat(
            "No principal component columns found".to_string(),
        ));
    }

    let components = component_cols
        .iter()
        .map(|&i| table.columns[i].clone())
        .collect();

    let mut records = Vec::with_capacity(table.len());
    for row in &table.rows {
        let iid = row.get(iid_col);
        if is_missing(iid) {
            return Err(ParseError::InvalidValue {
                line: row.line,
                column: "IID".to_string(),
                value: iid.to_string(),
            });
        }

        let values = component_cols
            .iter()
            .map(|&i| {
                let raw = row.get(i);
                raw.parse::<f64>()
                    .ok()
                    .filter(|_| !is_missing(raw))
                    .ok_or_else(|| ParseError::InvalidValue {
                        line: row.line,
                        column: table.columns[i].clone(),
                        value: raw.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        records.push(EigenvecRecord {
            line: row.line,
            iid: iid.to_string(),
            values,
        });
    }

    Ok(EigenvecTable {
        components,
        records,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_eigenvec_text() {
        let text = "FID\tIID\tPC1\tPC2\nf1\tf1_a\t0.01\t-0.2\nf2\tf2_b\t-0.03\t0.5\n";
        let table = parse_eigenvec_text(text).unwrap();
        assert_eq!(table.components, vec!["PC1", "PC2"]);
        assert_eq!(table.records.len(), 2);
        assert_eq!(table.records[1].iid, "f2_b");
        assert_eq!(table.records[1].values, vec![-0.03, 0.5]);
    }

    #[test]
    fn test_plink2_header_without_fid() {
        let table = parse_eigenvec_text("#IID\tPC1\nf1_a\t0.1\n").unwrap();
        assert_eq!(table.components, vec!["PC1"]);
        assert_eq!(table.records[0].iid, "f1_a");
    }

    #[test]
    fn test_missing_component_value_is_error() {
        let err = parse_eigenvec_text("FID\tIID\tPC1\nf\tf_a\tNaN\n").unwrap_err();
        assert!(matches!(
            err,
            ParseError::InvalidValue { line: 2, ref column, .. } if column == "PC1"
        ));
    }

    #[test]
    fn test_no_components() {
        let err = parse_eigenvec_text("FID\tIID\nf\tf_a\n").unwrap_err();
        assert!(matches!(err, ParseError::InvalidFormat(_)));
    }
}
