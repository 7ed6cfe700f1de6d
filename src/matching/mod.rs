//! Reference matching: SNP identifier lookup by locus and alleles.
//!
//! This module provides the core matching functionality:
//!
//! - [`ReferenceIndex`]: Sorted lookup from (chromosome, position) to reference entry
//! - [`ReferenceMatcher`]: Per-row matching against an index
//! - [`reference_ids`]: One-call matching returning legacy-encoded identifiers
//!
//! ## Matching Algorithm
//!
//! For each query row, in order:
//!
//! 1. **Locus lookup**: No reference entry at (CHR, BP) gives no match
//! 2. **Direct alleles**: Reference (A1, A2) equal to query (A1, A2) gives the identifier
//! 3. **Swapped alleles**: With swapping enabled, reference (A1, A2) equal to
//!    query (A2, A1) gives the identifier marked as swapped
//! 4. Anything else gives no match
//!
//! ## Example
//!
//! ```rust
//! use geno_join::core::record::SnpRecord;
//! use geno_join::matching::reference_ids;
//!
//! let reference = vec![SnpRecord::new("1", "1000", "A", "G").with_snp("rs1")];
//! let query = vec![
//!     SnpRecord::new("1", "1000", "A", "G"),
//!     SnpRecord::new("1", "1000", "G", "A"),
//!     SnpRecord::new("2", "500", "A", "G"),
//! ];
//!
//! let ids = reference_ids(&query, &reference, true).unwrap();
//! assert_eq!(ids, vec![Some("rs1".to_string()), Some("1sr".to_string()), None]);
//! ```

pub mod engine;
pub mod index;

pub use engine::{match_tables, reference_ids, MatchingConfig, ReferenceMatcher};
pub use index::{MatchError, ReferenceIndex};
