use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use thiserror::Error;
use tracing::{debug, warn};

use crate::core::locus::{parse_chromosome, Locus};
use crate::core::record::SnpRecord;
use crate::core::types::DuplicatePolicy;
use crate::utils::validation::parse_integral;

#[derive(Error, Debug)]
pub enum MatchError {
    #[error("Invalid integer on reference line {line} in column {column}: '{value}'")]
    InvalidInteger {
        line: usize,
        column: &'static str,
        value: String,
    },

    #[error("Duplicate reference locus {locus} on lines {first_line} and {line}")]
    DuplicateLocus {
        locus: Locus,
        first_line: usize,
        line: usize,
    },
}

/// Reference data stored at one locus
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceEntry {
    pub a1: String,
    pub a2: String,
    pub snp: String,
    /// Source line of the row that supplied this entry
    pub line: usize,
}

/// Sorted lookup from locus to reference entry
#[derive(Debug, Clone, Default)]
pub struct ReferenceIndex {
    entries: BTreeMap<Locus, ReferenceEntry>,
    /// Rows skipped because a required field was missing
    dropped: usize,
    /// Rows skipped under `DuplicatePolicy::First`
    duplicates: usize,
}

impl ReferenceIndex {
    /// Build the index from reference rows.
    ///
    /// Rows with any missing field are dropped. Chromosome and position of
    /// the remaining rows must be integers.
    ///
    /// # Errors
    ///
    /// Returns `MatchError::InvalidInteger` if a complete row has a
    /// non-integer chromosome or position, or `MatchError::DuplicateLocus`
    /// if two rows share a locus under `DuplicatePolicy::Reject`.
    pub fn build(records: &[SnpRecord], policy: DuplicatePolicy) -> Result<Self, MatchError> {
        let mut index = Self::default();

        for record in records {
            let (Some(chromosome), Some(position), Some(a1), Some(a2), Some(snp)) = (
                &record.chromosome,
                &record.position,
                &record.a1,
                &record.a2,
                &record.snp,
            ) else {
                index.dropped += 1;
                continue;
            };

            let chromosome =
                parse_chromosome(chromosome).ok_or_else(|| MatchError::InvalidInteger {
                    line: record.line,
                    column: "CHR",
                    value: chromosome.clone(),
                })?;
            let position = parse_integral(position).ok_or_else(|| MatchError::InvalidInteger {
                line: record.line,
                column: "BP",
                value: position.clone(),
            })?;
            let locus = Locus::new(chromosome, position);

            match index.entries.entry(locus) {
                Entry::Vacant(slot) => {
                    slot.insert(ReferenceEntry {
                        a1: a1.clone(),
                        a2: a2.clone(),
                        snp: snp.clone(),
                        line: record.line,
                    });
                }
                Entry::Occupied(existing) => match policy {
                    DuplicatePolicy::Reject => {
                        return Err(MatchError::DuplicateLocus {
                            locus,
                            first_line: existing.get().line,
                            line: record.line,
                        });
                    }
                    DuplicatePolicy::First => {
                        debug!(
                            "Ignoring duplicate reference row at {locus} (line {}, kept line {})",
                            record.line,
                            existing.get().line
                        );
                        index.duplicates += 1;
                    }
                },
            }
        }

        if index.duplicates > 0 {
            warn!(
                "Ignored {} reference rows with duplicate loci",
                index.duplicates
            );
        }
        debug!(
            "Reference index: {} loci, {} incomplete rows dropped",
            index.entries.len(),
            index.dropped
        );

        Ok(index)
    }

    #[must_use]
    pub fn get(&self, locus: &Locus) -> Option<&ReferenceEntry> {
        self.entries.get(locus)
    }

    #[must_use]
    pub fn contains(&self, locus: &Locus) -> bool {
        self.entries.contains_key(locus)
    }

    /// Entries in locus order
    pub fn iter(&self) -> impl Iterator<Item = (&Locus, &ReferenceEntry)> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    #[must_use]
    pub fn duplicates_ignored(&self) -> usize {
        self.duplicates
    }
}
