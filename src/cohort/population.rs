use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::cohort::files::{find_files, pattern_in, LoadError};
use crate::cohort::layout::DataLayout;
use crate::cohort::subject::subject_id;
use crate::parsing::eigenvec::{read_eigenvec, EigenvecTable};

/// Principal components of one subject
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectComponents {
    pub subject: String,
    pub values: Vec<f64>,
}

/// Population structure of one sample, in file order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopulationStructure {
    pub sample: String,
    pub source: PathBuf,
    /// Component names (e.g. `PC1`, `PC2`)
    pub components: Vec<String>,
    pub subjects: Vec<SubjectComponents>,
}

impl PopulationStructure {
    #[must_use]
    pub fn get(&self, subject: &str) -> Option<&SubjectComponents> {
        self.subjects.iter().find(|s| s.subject == subject)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.subjects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }
}

/// Load the principal components of a sample.
///
/// `sample` is used as a file pattern: the file is the first match of
/// `<genotype_dir>/<sample>.eigenvec` in sorted order.
///
/// # Errors
///
/// Returns `LoadError::NoFilesFound` if no file matches, `LoadError::Parse`
/// if it cannot be parsed, or the errors of [`from_eigenvec`].
pub fn load_pop_struct(
    layout: &DataLayout,
    sample: &str,
) -> Result<PopulationStructure, LoadError> {
    let pattern = pattern_in(&layout.genotype_dir, &format!("{sample}.eigenvec"));
    let files = find_files(&pattern)?;
    if files.len() > 1 {
        warn!(
            "{} files match {pattern}; using {}",
            files.len(),
            files[0].display()
        );
    }

    let path = &files[0];
    let table = read_eigenvec(path).map_err(|e| LoadError::parse(path, e))?;
    let structure = from_eigenvec(sample, path, table)?;
    info!(
        "Loaded {} components for {} subjects from {}",
        structure.components.len(),
        structure.len(),
        path.display()
    );
    Ok(structure)
}

/// Re-key a parsed eigenvector table by subject, dropping FID.
///
/// # Errors
///
/// Returns `LoadError::DuplicateSample` if a sample appears twice, or
/// `LoadError::SubjectCollision` if two samples share a subject.
pub fn from_eigenvec(
    sample: &str,
    source: &Path,
    table: EigenvecTable,
) -> Result<PopulationStructure, LoadError> {
    let mut seen: HashMap<String, String> = HashMap::with_capacity(table.records.len());
    let mut subjects = Vec::with_capacity(table.records.len());

    for record in table.records {
        let Some(subject) = subject_id(&record.iid) else {
            warn!("Sample '{}' has no subject part; skipping", record.iid);
            continue;
        };

        if let Some(first) = seen.insert(subject.to_string(), record.iid.clone()) {
            if first == record.iid {
                return Err(LoadError::DuplicateSample {
                    iid: record.iid,
                    path: source.to_path_buf(),
                });
            }
            return Err(LoadError::SubjectCollision {
                subject: subject.to_string(),
                first,
                second: record.iid,
            });
        }

        subjects.push(SubjectComponents {
            subject: subject.to_string(),
            values: record.values,
        });
    }

    Ok(PopulationStructure {
        sample: sample.to_string(),
        source: source.to_path_buf(),
        components: table.components,
        subjects,
    })
}
