//! Polygenic risk score aggregation across PLINK profile files.
//!
//! A phenotype's scores are split over several `.profile` files (one per
//! chromosome or SNP batch). Totals are the per-sample sum of `SCORESUM`
//! over all files, aligned by sample ID: a sample missing from any file, or
//! with a missing score in any file, gets a missing total.

use std::collections::{BTreeMap, HashSet};
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::cohort::files::{find_files, pattern_in, LoadError};
use crate::cohort::layout::DataLayout;
use crate::cohort::subject::subject_id;
use crate::parsing::profile::{read_profile, ProfileRecord};

/// Total score of one subject
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectScore {
    pub subject: String,
    pub score: Option<f64>,
}

/// Summed scores for one phenotype, sorted by subject
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreTable {
    pub phenotype: String,
    pub files: Vec<PathBuf>,
    pub scores: Vec<SubjectScore>,
}

impl ScoreTable {
    #[must_use]
    pub fn get(&self, subject: &str) -> Option<&SubjectScore> {
        self.scores
            .binary_search_by(|s| s.subject.as_str().cmp(subject))
            .ok()
            .map(|i| &self.scores[i])
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

/// Load and sum the score profiles of a phenotype.
///
/// Reads `<prs_dir>/<phenotype>/scores/*.profile` in sorted path order.
///
/// # Errors
///
/// Returns `LoadError::NoFilesFound` if there are no profile files,
/// `LoadError::Parse` if one cannot be parsed, or the errors of
/// [`sum_profiles`].
pub fn load_prscores(layout: &DataLayout, phenotype: &str) -> Result<ScoreTable, LoadError> {
    let pattern = pattern_in(&layout.scores_dir(phenotype), "*.profile");
    let files = find_files(&pattern)?;

    let profiles = files
        .iter()
        .map(|path| {
            read_profile(path)
                .map(|records| (path.clone(), records))
                .map_err(|e| LoadError::parse(path, e))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let table = sum_profiles(phenotype, &profiles)?;
    info!(
        "Loaded {} scores for {phenotype} from {} profile files",
        table.len(),
        table.files.len()
    );
    Ok(table)
}

/// Sum already-parsed profiles.
///
/// # Errors
///
/// Returns `LoadError::DuplicateSample` if a sample appears twice in one
/// profile, or `LoadError::SubjectCollision` if two samples share a subject.
pub fn sum_profiles(
    phenotype: &str,
    profiles: &[(PathBuf, Vec<ProfileRecord>)],
) -> Result<ScoreTable, LoadError> {
    // sample -> (running total, number of files containing the sample)
    let mut totals: BTreeMap<&str, (Option<f64>, usize)> = BTreeMap::new();

    for (path, records) in profiles {
        let mut seen: HashSet<&str> = HashSet::with_capacity(records.len());
        for record in records {
            if !seen.insert(record.iid.as_str()) {
                return Err(LoadError::DuplicateSample {
                    iid: record.iid.clone(),
                    path: path.clone(),
                });
            }

            let (total, count) = totals.entry(record.iid.as_str()).or_insert((Some(0.0), 0));
            *total = total.zip(record.score).map(|(a, b)| a + b);
            *count += 1;
        }
    }

    let file_count = profiles.len();
    let mut by_subject: BTreeMap<&str, (&str, Option<f64>)> = BTreeMap::new();
    let mut unaligned = 0;

    for (iid, (total, count)) in totals {
        let Some(subject) = subject_id(iid) else {
            warn!("Sample '{iid}' has no subject part; skipping");
            continue;
        };

        let score = if count == file_count {
            total
        } else {
            unaligned += 1;
            None
        };

        if let Some((first, _)) = by_subject.insert(subject, (iid, score)) {
            return Err(LoadError::SubjectCollision {
                subject: subject.to_string(),
                first: first.to_string(),
                second: iid.to_string(),
            });
        }
    }

    if unaligned > 0 {
        warn!("{unaligned} samples are missing from at least one profile file for {phenotype}");
    }

    Ok(ScoreTable {
        phenotype: phenotype.to_string(),
        files: profiles.iter().map(|(p, _)| p.clone()).collect(),
        scores: by_subject
            .into_iter()
            .map(|(subject, (_, score))| SubjectScore {
                subject: subject.to_string(),
                score,
            })
            .collect(),
    })
}
