//! Subject-level datasets: risk scores and population structure.
//!
//! - [`DataLayout`]: Directory configuration for the input datasets
//! - [`load_prscores`]: Sum PLINK score profiles of a phenotype per subject
//! - [`load_pop_struct`]: Principal components of a sample per subject
//! - [`join_covariates`]: Inner join of the two on subject
//!
//! Sample IDs in both file types are composite (`FAMILY_SUBJECT`); results
//! are keyed by the part after the first underscore (see [`subject::subject_id`]).

pub mod files;
pub mod join;
pub mod layout;
pub mod population;
pub mod scores;
pub mod subject;

pub use files::LoadError;
pub use join::{join_covariates, CovariateTable};
pub use layout::DataLayout;
pub use population::{load_pop_struct, PopulationStructure};
pub use scores::{load_prscores, ScoreTable};
