//! Parsers for the delimited text tables the tool consumes.
//!
//! This module provides parsers for:
//!
//! - **Generic tables**: Header plus rows, tab- or whitespace-delimited, optionally gzipped
//! - **SNP tables**: Query and reference tables, including headerless PLINK `.bim` files
//! - **Score profiles**: PLINK `.profile` files (`IID`, `SCORESUM`)
//! - **Eigenvectors**: Principal-component `.eigenvec` files
//!
//! ## Example
//!
//! ```rust,no_run
//! use geno_join::parsing::snp_table::{read_query_table, read_reference_table};
//! use std::path::Path;
//!
//! let query = read_query_table(Path::new("cohort.bim")).unwrap();
//! let reference = read_reference_table(Path::new("reference.txt")).unwrap();
//! ```
//!
//! ## Recognised Columns
//!
//! | Field | Column names | Required |
//! |-------|--------------|----------|
//! | CHR   | CHR, CHROM   | Yes |
//! | BP    | BP, POS      | Yes |
//! | A1    | A1           | Yes |
//! | A2    | A2           | Yes |
//! | SNP   | SNP, ID, RSID | Reference only |
//!
//! Column names are matched case-insensitively.

pub mod eigenvec;
pub mod profile;
pub mod snp_table;
pub mod table;

pub use table::ParseError;
