//! Core data types for SNP reference matching.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`Locus`]: A (chromosome, base-pair position) key
//! - [`SnpRecord`]: One row of a query or reference SNP table, as read from disk
//! - [`MatchedId`], [`Orientation`]: The outcome of a successful lookup
//! - [`DuplicatePolicy`], [`MatchSummary`]: Matching configuration and statistics
//!
//! ## Chromosome Coding
//!
//! Chromosomes are integers. Sex chromosomes are not part of the reference
//! key space:
//!
//! | Input | Reference table | Query table |
//! |-------|-----------------|-------------|
//! | `1`   | chromosome 1    | chromosome 1 |
//! | `1.0` | chromosome 1    | chromosome 1 |
//! | `X`   | error           | never matches |
//! | `NA`  | row dropped     | never matches |

pub mod locus;
pub mod record;
pub mod types;
