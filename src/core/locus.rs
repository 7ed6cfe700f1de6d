use serde::{Deserialize, Serialize};

use crate::utils::validation::parse_integral;

/// A genomic coordinate used as the lookup key for reference matching.
///
/// Ordering is by chromosome, then position.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Locus {
    pub chromosome: u32,
    pub position: u64,
}

impl Locus {
    #[must_use]
    pub fn new(chromosome: u32, position: u64) -> Self {
        Self {
            chromosome,
            position,
        }
    }

    /// Build a locus from raw chromosome and position fields.
    ///
    /// Returns `None` when either value is not a non-negative integer
    /// (including sex chromosome codes such as `X`).
    #[must_use]
    pub fn parse(chromosome: &str, position: &str) -> Option<Self> {
        let chromosome = parse_chromosome(chromosome)?;
        let position = parse_integral(position)?;
        Some(Self::new(chromosome, position))
    }
}

/// Parse a chromosome code as an integer.
#[must_use]
pub fn parse_chromosome(s: &str) -> Option<u32> {
    parse_integral(s).and_then(|c| u32::try_from(c).ok())
}

impl std::fmt::Display for Locus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.chromosome, self.position)
    }
}
