use serde::{Deserialize, Serialize};
use tracing::info;

use crate::cohort::population::PopulationStructure;
use crate::cohort::scores::ScoreTable;

/// One subject with both a score and principal components
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CovariateRow {
    pub subject: String,
    pub score: Option<f64>,
    pub components: Vec<f64>,
}

/// Scores joined with population structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CovariateTable {
    pub phenotype: String,
    pub components: Vec<String>,
    pub rows: Vec<CovariateRow>,
}

/// Inner join of scores and components on subject, in component-file order
#[must_use]
pub fn join_covariates(scores: &ScoreTable, population: &PopulationStructure) -> CovariateTable {
    let rows: Vec<CovariateRow> = population
        .subjects
        .iter()
        .filter_map(|pcs| {
            scores.get(&pcs.subject).map(|s| CovariateRow {
                subject: pcs.subject.clone(),
                score: s.score,
                components: pcs.values.clone(),
            })
        })
        .collect();

    info!(
        "Joined {} subjects ({} with scores, {} with components)",
        rows.len(),
        scores.len(),
        population.len()
    );

    CovariateTable {
        phenotype: scores.phenotype.clone(),
        components: population.components.clone(),
        rows,
    }
}
