//! Parser for PLINK score profile (`.profile`) files.
//!
//! Only the `IID` and `SCORESUM` columns are read; the other PLINK columns
//! (`FID`, `PHENO`, `CNT`, `CNT2`) are ignored.

use std::path::Path;

use crate::parsing::table::{read_table, ParseError, Table};
use crate::utils::validation::{is_missing, non_missing};

/// One subject's score from a single profile file
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileRecord {
    pub line: usize,
    /// Composite sample ID as written in the file
    pub iid: String,
    /// `None` when SCORESUM is a missing token
    pub score: Option<f64>,
}

/// Read a profile file
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or other parse errors
/// if the content is invalid.
pub fn read_profile(path: &Path) -> Result<Vec<ProfileRecord>, ParseError> {
    let table = read_table(path)?;
    table_to_profile(&table)
}

/// Parse profile text
///
/// # Errors
///
/// Returns `ParseError::MissingColumn` if IID or SCORESUM is absent, or
/// `ParseError::InvalidValue` for a missing IID or non-numeric score.
pub fn parse_profile_text(text: &str) -> Result<Vec<ProfileRecord>, ParseError> {
    let table = crate::parsing::table::parse_table_text(text)?;
    table_to_profile(&table)
}

fn table_to_profile(table: &Table) -> Result<Vec<ProfileRecord>, ParseError> {
    let iid_col = table.require_column(&["IID"])?;
    let score_col = table.require_column(&["SCORESUM"])?;

    table
        .rows
        .iter()
        .map(|row| -> Result<ProfileRecord, ParseError> {
            let raw_iid = row.get(iid_col);
            let iid = non_missing(raw_iid).ok_or_else(|| ParseError::InvalidValue {
                line: row.line,
                column: "IID".to_string(),
                value: raw_iid.to_string(),
            })?;

            let raw_score = row.get(score_col);
            let score = if is_missing(raw_score) {
                None
            } else {
                Some(raw_score.parse::<f64>().map_err(|_| ParseError::InvalidValue {
                    line: row.line,
                    column: "SCORESUM".to_string(),
                    value: raw_score.to_string(),
                })?)
            };

            Ok(ProfileRecord {
                line: row.line,
                iid,
                score,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_profile_text() {
        let text = "       FID       IID  PHENO    CNT   CNT2    SCORESUM
      fam1  fam1_s1     -9     20      8       1.25
      fam2  fam2_s2     -9     20      5          NA
";
        let records = parse_profile_text(text).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].iid, "fam1_s1");
        assert_eq!(records[0].score, Some(1.25));
        assert_eq!(records[1].score, None);
    }

    #[test]
    fn test_invalid_score() {
        let err = parse_profile_text("IID SCORESUM\na_b high\n").unwrap_err();
        assert!(matches!(
            err,
            ParseError::InvalidValue { line: 2, ref column, .. } if column == "SCORESUM"
        ));
    }

    #[test]
    fn test_missing_scoresum_column() {
        let err = parse_profile_text("IID SCORE\na_b 1\n").unwrap_err();
        assert!(matches!(err, ParseError::MissingColumn(c) if c == "SCORESUM"));
    }
}
