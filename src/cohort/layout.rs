use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::cohort::files::LoadError;

pub const DEFAULT_GWAS_DIR: &str = "inputs/GWAS";
pub const DEFAULT_GENOTYPE_DIR: &str = "outputs/genotypes";
pub const DEFAULT_PRS_DIR: &str = "outputs/prs";

/// Where the input datasets live on disk
///
/// ```text
/// <prs_dir>/<phenotype>/scores/*.profile
/// <genotype_dir>/<sample>.eigenvec
/// <gwas_dir>/<reference table>
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataLayout {
    /// Reference and summary-statistics tables
    pub gwas_dir: PathBuf,
    /// Per-sample eigenvector files
    pub genotype_dir: PathBuf,
    /// Per-phenotype score profile directories
    pub prs_dir: PathBuf,
}

impl Default for DataLayout {
    fn default() -> Self {
        Self {
            gwas_dir: PathBuf::from(DEFAULT_GWAS_DIR),
            genotype_dir: PathBuf::from(DEFAULT_GENOTYPE_DIR),
            prs_dir: PathBuf::from(DEFAULT_PRS_DIR),
        }
    }
}

impl DataLayout {
    /// Default layout rooted at `root` instead of the working directory
    #[must_use]
    pub fn with_root(root: &Path) -> Self {
        Self {
            gwas_dir: root.join(DEFAULT_GWAS_DIR),
            genotype_dir: root.join(DEFAULT_GENOTYPE_DIR),
            prs_dir: root.join(DEFAULT_PRS_DIR),
        }
    }

    /// Load a layout from a JSON file; absent keys take default values
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Io` if the file cannot be read or
    /// `LoadError::Layout` if it is not valid JSON.
    pub fn load_from_file(path: &Path) -> Result<Self, LoadError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse a layout from a JSON string
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Layout` if the JSON is invalid.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Directory holding the score profiles of one phenotype
    #[must_use]
    pub fn scores_dir(&self, phenotype: &str) -> PathBuf {
        self.prs_dir.join(phenotype).join("scores")
    }

    /// Resolve a reference table path.
    ///
    /// Paths that exist as given are returned unchanged; relative paths that
    /// do not are looked up under `gwas_dir`.
    #[must_use]
    pub fn resolve_gwas_table(&self, path: &Path) -> PathBuf {
        if path.exists() || path.is_absolute() {
            path.to_path_buf()
        } else {
            self.gwas_dir.join(path)
        }
    }
}
