use serde::{Deserialize, Serialize};

use crate::core::locus::Locus;
use crate::utils::validation::non_missing;

/// One row of a SNP table, as read from disk.
///
/// Every field is kept raw and optional: `None` means the file held a
/// missing-value token. Coercion to a [`Locus`] happens at lookup time so
/// that query and reference tables can apply different rules (a query row
/// with a bad chromosome simply never matches; a reference row with one is
/// an error).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnpRecord {
    /// 1-based line number in the source file (0 if built in memory)
    #[serde(default)]
    pub line: usize,

    pub chromosome: Option<String>,
    pub position: Option<String>,
    pub a1: Option<String>,
    pub a2: Option<String>,

    /// SNP identifier; ignored for query tables
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snp: Option<String>,
}

impl SnpRecord {
    /// Build a record from raw field values; missing tokens become `None`.
    pub fn new(
        chromosome: impl AsRef<str>,
        position: impl AsRef<str>,
        a1: impl AsRef<str>,
        a2: impl AsRef<str>,
    ) -> Self {
        Self {
            line: 0,
            chromosome: non_missing(chromosome.as_ref()),
            position: non_missing(position.as_ref()),
            a1: non_missing(a1.as_ref()),
            a2: non_missing(a2.as_ref()),
            snp: None,
        }
    }

    #[must_use]
    pub fn with_snp(mut self, snp: impl AsRef<str>) -> Self {
        self.snp = non_missing(snp.as_ref());
        self
    }

    #[must_use]
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = line;
        self
    }

    /// Lenient locus used for query rows: `None` if missing or not integral.
    #[must_use]
    pub fn locus(&self) -> Option<Locus> {
        match (&self.chromosome, &self.position) {
            (Some(chromosome), Some(position)) => Locus::parse(chromosome, position),
            _ => None,
        }
    }

    /// True when every field a reference row needs is present
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.chromosome.is_some()
            && self.position.is_some()
            && self.a1.is_some()
            && self.a2.is_some()
            && self.snp.is_some()
    }
}
