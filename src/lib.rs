//! # geno-join
//!
//! A library for matching SNPs against reference tables and joining
//! subject-level genomics datasets.
//!
//! Genotype files from different pipelines rarely agree on SNP identifiers,
//! but they do agree on coordinates. `geno-join` recovers identifiers by
//! looking each query SNP up in a reference table by chromosome and
//! base-pair position, then confirming the alleles.
//!
//! ## Features
//!
//! - **Locus lookup**: Sorted index on (chromosome, position)
//! - **Allele checks**: Direct matches, plus optional swapped-allele matches
//! - **Explicit duplicates**: Duplicate reference loci are rejected or resolved first-wins
//! - **Risk scores**: Per-subject sums across PLINK `.profile` files
//! - **Population structure**: Per-subject principal components from `.eigenvec` files
//!
//! ## Example
//!
//! ```rust,no_run
//! use geno_join::matching::{MatchingConfig, ReferenceIndex, ReferenceMatcher};
//! use geno_join::parsing::snp_table::{read_query_table, read_reference_table};
//! use std::path::Path;
//!
//! let query = read_query_table(Path::new("cohort.bim")).unwrap();
//! let reference = read_reference_table(Path::new("hapmap3.txt")).unwrap();
//!
//! let config = MatchingConfig::default().with_swap(true);
//! let index = ReferenceIndex::build(&reference, config.duplicate_policy).unwrap();
//! let results = ReferenceMatcher::with_config(&index, &config).match_all(&query);
//!
//! for (record, result) in query.iter().zip(&results) {
//!     match result {
//!         Some(id) => println!("{:?}:{:?} -> {}", record.chromosome, record.position, id),
//!         None => println!("{:?}:{:?} -> no match", record.chromosome, record.position),
//!     }
//! }
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Core data types for loci, SNP records and match results
//! - [`matching`]: Reference index and matcher
//! - [`parsing`]: Parsers for SNP tables, score profiles and eigenvector files
//! - [`cohort`]: Subject-level score and population-structure loading
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod cohort;
pub mod core;
pub mod matching;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use cohort::{DataLayout, LoadError};
pub use crate::core::locus::Locus;
pub use crate::core::record::SnpRecord;
pub use crate::core::types::*;
pub use matching::{reference_ids, MatchError, MatchingConfig, ReferenceIndex, ReferenceMatcher};
