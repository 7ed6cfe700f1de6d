/// Subject identifier of a composite sample ID.
///
/// Everything after the first underscore is kept. IDs without an
/// underscore have no subject identifier.
///
/// # Examples
///
/// ```
/// use geno_join::cohort::subject::subject_id;
///
/// assert_eq!(subject_id("FAM1_SUBJ_A"), Some("SUBJ_A"));
/// assert_eq!(subject_id("1234"), None);
/// ```
#[must_use]
pub fn subject_id(iid: &str) -> Option<&str> {
    iid.split_once('_').map(|(_, subject)| subject)
}
