use serde::{Deserialize, Serialize};

/// Which allele orientation produced a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Query (A1, A2) equals reference (A1, A2)
    Direct,
    /// Query (A1, A2) equals reference (A2, A1)
    Swapped,
}

/// A reference identifier found for a query row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchedId {
    /// Identifier as stored in the reference table
    pub snp: String,
    pub orientation: Orientation,
}

impl MatchedId {
    pub fn direct(snp: impl Into<String>) -> Self {
        Self {
            snp: snp.into(),
            orientation: Orientation::Direct,
        }
    }

    pub fn swapped(snp: impl Into<String>) -> Self {
        Self {
            snp: snp.into(),
            orientation: Orientation::Swapped,
        }
    }

    #[must_use]
    pub fn is_swapped(&self) -> bool {
        self.orientation == Orientation::Swapped
    }

    /// Single-string encoding of the match.
    ///
    /// Swapped matches are written with the identifier's characters in
    /// reverse order (`rs123` becomes `321sr`); direct matches are unchanged.
    #[must_use]
    pub fn legacy_id(&self) -> String {
        match self.orientation {
            Orientation::Direct => self.snp.clone(),
            Orientation::Swapped => reverse_id(&self.snp),
        }
    }
}

impl std::fmt::Display for MatchedId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.legacy_id())
    }
}

/// Reverse an identifier character by character.
///
/// Applying this to a legacy-encoded swapped identifier recovers the
/// reference identifier.
#[must_use]
pub fn reverse_id(id: &str) -> String {
    id.chars().rev().collect()
}

/// What to do when two reference rows share a locus
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Fail the index build
    #[default]
    Reject,
    /// Keep the first row in file order
    First,
}

/// Counts of match outcomes across a query table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub total: usize,
    pub direct: usize,
    pub swapped: usize,
    pub missing: usize,
}

impl MatchSummary {
    #[must_use]
    pub fn from_results(results: &[Option<MatchedId>]) -> Self {
        let mut summary = Self {
            total: results.len(),
            ..Self::default()
        };
        for result in results {
            match result.as_ref().map(|m| m.orientation) {
                Some(Orientation::Direct) => summary.direct += 1,
                Some(Orientation::Swapped) => summary.swapped += 1,
                None => summary.missing += 1,
            }
        }
        summary
    }

    /// Fraction of query rows that matched in either orientation
    #[must_use]
    pub fn match_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        {
            (self.direct + self.swapped) as f64 / self.total as f64
        }
    }
}
