use tracing::{debug, info};

use crate::core::record::SnpRecord;
use crate::core::types::{DuplicatePolicy, MatchSummary, MatchedId};
use crate::matching::index::{MatchError, ReferenceIndex};

/// Configuration for reference matching
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchingConfig {
    /// Also accept rows whose alleles appear in the opposite order
    pub allow_swap: bool,
    /// How duplicate reference loci are handled when building the index
    pub duplicate_policy: DuplicatePolicy,
}

impl MatchingConfig {
    #[must_use]
    pub fn with_swap(mut self, allow_swap: bool) -> Self {
        self.allow_swap = allow_swap;
        self
    }

    #[must_use]
    pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }
}

/// Looks up query rows in a reference index
pub struct ReferenceMatcher<'a> {
    index: &'a ReferenceIndex,
    allow_swap: bool,
}

impl<'a> ReferenceMatcher<'a> {
    /// Create a matcher that only accepts direct allele matches
    pub fn new(index: &'a ReferenceIndex) -> Self {
        Self {
            index,
            allow_swap: false,
        }
    }

    /// Create a matcher with custom configuration
    pub fn with_config(index: &'a ReferenceIndex, config: &MatchingConfig) -> Self {
        Self {
            index,
            allow_swap: config.allow_swap,
        }
    }

    /// Match a single query row.
    ///
    /// Returns `None` when the row has no usable locus, the locus is not in
    /// the reference, or the alleles disagree.
    pub fn match_record(&self, query: &SnpRecord) -> Option<MatchedId> {
        let entry = self.index.get(&query.locus()?)?;
        let (a1, a2) = (query.a1.as_deref()?, query.a2.as_deref()?);

        if entry.a1 == a1 && entry.a2 == a2 {
            return Some(MatchedId::direct(&entry.snp));
        }
        if self.allow_swap && entry.a1 == a2 && entry.a2 == a1 {
            return Some(MatchedId::swapped(&entry.snp));
        }
        None
    }

    /// Match every query row, preserving order
    pub fn match_all(&self, query: &[SnpRecord]) -> Vec<Option<MatchedId>> {
        let results: Vec<_> = query.iter().map(|q| self.match_record(q)).collect();

        let summary = MatchSummary::from_results(&results);
        info!(
            "Matched {} of {} query rows ({} direct, {} swapped)",
            summary.direct + summary.swapped,
            summary.total,
            summary.direct,
            summary.swapped
        );
        results
    }
}

/// Match query rows against reference rows in one call
///
/// # Errors
///
/// Returns a `MatchError` if the reference index cannot be built.
pub fn match_tables(
    query: &[SnpRecord],
    reference: &[SnpRecord],
    config: &MatchingConfig,
) -> Result<Vec<Option<MatchedId>>, MatchError> {
    let index = ReferenceIndex::build(reference, config.duplicate_policy)?;
    debug!(
        "Matching {} query rows against {} reference loci",
        query.len(),
        index.len()
    );
    Ok(ReferenceMatcher::with_config(&index, config).match_all(query))
}

/// Reference identifiers for each query row, using the legacy encoding.
///
/// Swapped matches are returned as the reversed identifier (`rs1` becomes
/// `1sr`). Duplicate reference loci are rejected.
///
/// # Errors
///
/// Returns a `MatchError` if the reference index cannot be built.
pub fn reference_ids(
    query: &[SnpRecord],
    reference: &[SnpRecord],
    allow_swap: bool,
) -> Result<Vec<Option<String>>, MatchError> {
    let config = MatchingConfig::default().with_swap(allow_swap);
    let results = match_tables(query, reference, &config)?;
    Ok(results
        .into_iter()
        .map(|m| m.map(|m| m.legacy_id()))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Orientation;

    fn reference() -> Vec<SnpRecord> {
        vec![
            SnpRecord::new("1", "1000", "A", "G").with_snp("rs1").with_line(2),
            SnpRecord::new("1", "2000", "C", "T").with_snp("rs22").with_line(3),
            SnpRecord::new("3", "50", "G", "C").with_snp("rs345").with_line(4),
        ]
    }

    #[test]
    fn test_direct_match() {
        let query = vec![SnpRecord::new("1", "1000", "A", "G")];
        let ids = reference_ids(&query, &reference(), false).unwrap();
        assert_eq!(ids, vec![Some("rs1".to_string())]);
    }

    #[test]
    fn test_swapped_match_allowed() {
        let query = vec![SnpRecord::new("1", "1000", "G", "A")];
        let ids = reference_ids(&query, &reference(), true).unwrap();
        assert_eq!(ids, vec![Some("1sr".to_string())]);
    }

    #[test]
    fn test_swapped_match_disallowed() {
        let query = vec![SnpRecord::new("1", "1000", "G", "A")];
        let ids = reference_ids(&query, &reference(), false).unwrap();
        assert_eq!(ids, vec![None]);
    }

    #[test]
    fn test_missing_locus() {
        let query = vec![SnpRecord::new("2", "500", "A", "G")];
        let ids = reference_ids(&query, &reference(), true).unwrap();
        assert_eq!(ids, vec![None]);
    }

    #[test]
    fn test_allele_mismatch() {
        let query = vec![SnpRecord::new("1", "2000", "C", "G")];
        let ids = reference_ids(&query, &reference(), true).unwrap();
        assert_eq!(ids, vec![None]);
    }

    #[test]
    fn test_alleles_are_case_sensitive() {
        let query = vec![SnpRecord::new("1", "1000", "a", "g")];
        let ids = reference_ids(&query, &reference(), true).unwrap();
        assert_eq!(ids, vec![None]);
    }

    #[test]
    fn test_query_without_usable_locus() {
        let query = vec![
            SnpRecord::new("X", "1000", "A", "G"),
            SnpRecord::new("1", "NA", "A", "G"),
            SnpRecord::new("1", "1000", "NA", "G"),
        ];
        let ids = reference_ids(&query, &reference(), true).unwrap();
        assert_eq!(ids, vec![None, None, None]);
    }

    #[test]
    fn test_palindromic_snp_prefers_direct() {
        let reference = vec![SnpRecord::new("5", "10", "A", "T").with_snp("rs9")];
        let query = vec![SnpRecord::new("5", "10", "A", "T")];
        let config = MatchingConfig::default().with_swap(true);
        let results = match_tables(&query, &reference, &config).unwrap();
        assert_eq!(results[0].as_ref().unwrap().orientation, Orientation::Direct);
    }

    #[test]
    fn test_order_and_length_preserved() {
        let query = vec![
            SnpRecord::new("3", "50", "C", "G"),
            SnpRecord::new("9", "9", "A", "C"),
            SnpRecord::new("1", "2000", "C", "T"),
            SnpRecord::new("1", "1000", "A", "G"),
        ];
        let ids = reference_ids(&query, &reference(), true).unwrap();
        assert_eq!(
            ids,
            vec![
                Some("543sr".to_string()),
                None,
                Some("rs22".to_string()),
                Some("rs1".to_string()),
            ]
        );
    }

    #[test]
    fn test_matcher_reuses_index() {
        let index = ReferenceIndex::build(&reference(), DuplicatePolicy::Reject).unwrap();
        let matcher = ReferenceMatcher::new(&index);
        let hit = matcher.match_record(&SnpRecord::new("1", "2000", "C", "T"));
        assert_eq!(hit, Some(MatchedId::direct("rs22")));
        assert!(matcher
            .match_record(&SnpRecord::new("1", "2000", "T", "C"))
            .is_none());
    }

    #[test]
    fn test_coercion_error_propagates() {
        let reference = vec![SnpRecord::new("chr1", "1000", "A", "G").with_snp("rs1")];
        let query = vec![SnpRecord::new("1", "1000", "A", "G")];
        assert!(reference_ids(&query, &reference, false).is_err());
    }

    #[test]
    fn test_empty_query() {
        let ids = reference_ids(&[], &reference(), true).unwrap();
        assert!(ids.is_empty());
    }
}
