//! Centralized validation and helper functions for raw table values.

/// Maximum number of columns accepted in a single table header
pub const MAX_COLUMNS: usize = 10_000;

/// Tokens treated as missing values in delimited input.
///
/// An empty field (possible in tab-delimited files) is also missing.
pub const MISSING_TOKENS: &[&str] = &[
    "NA", "N/A", "n/a", "NaN", "nan", "-NaN", "null", "NULL", "None", "<NA>", "#N/A",
];

/// Check whether a raw field denotes a missing value.
///
/// # Examples
///
/// ```
/// use geno_join::utils::validation::is_missing;
///
/// assert!(is_missing("NA"));
/// assert!(is_missing(""));
/// assert!(!is_missing("rs123"));
/// ```
#[must_use]
pub fn is_missing(s: &str) -> bool {
    s.is_empty() || MISSING_TOKENS.contains(&s)
}

/// Convert a raw field into `Some(value)` unless it is a missing token.
#[must_use]
pub fn non_missing(s: &str) -> Option<String> {
    if is_missing(s) {
        None
    } else {
        Some(s.to_string())
    }
}

/// Parse an integer field, accepting integral decimals such as `"22.0"`.
///
/// Numeric columns that contain missing values are frequently written out
/// as floating point, so `1.0` has to be read back as chromosome `1`.
/// Fractional, negative or non-numeric values return `None`.
///
/// # Examples
///
/// ```
/// use geno_join::utils::validation::parse_integral;
///
/// assert_eq!(parse_integral("1000"), Some(1000));
/// assert_eq!(parse_integral("7.0"), Some(7));
/// assert_eq!(parse_integral("7.5"), None);
/// assert_eq!(parse_integral("X"), None);
/// ```
#[must_use]
pub fn parse_integral(s: &str) -> Option<u64> {
    let s = s.trim();
    if let Ok(value) = s.parse::<u64>() {
        return Some(value);
    }

    let (whole, fraction) = s.split_once('.')?;
    if whole.is_empty() || fraction.is_empty() || !fraction.bytes().all(|b| b == b'0') {
        return None;
    }
    whole.parse::<u64>().ok()
}

/// Check if a header would exceed the maximum allowed column count.
///
/// Returns an error message if the limit is exceeded, None if safe.
#[must_use]
pub fn check_column_limit(count: usize) -> Option<String> {
    if count > MAX_COLUMNS {
        Some(format!(
            "Too many columns: {count} exceeds maximum of {MAX_COLUMNS}"
        ))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_missing() {
        for token in MISSING_TOKENS {
            assert!(is_missing(token), "{token} should be missing");
        }
        assert!(is_missing(""));
        assert!(!is_missing("0"));
        assert!(!is_missing("A"));
        assert!(!is_missing("na"));
    }

    #[test]
    fn test_non_missing() {
        assert_eq!(non_missing("rs1"), Some("rs1".to_string()));
        assert_eq!(non_missing("NaN"), None);
    }

    #[test]
    fn test_parse_integral() {
        assert_eq!(parse_integral("0"), Some(0));
        assert_eq!(parse_integral(" 42 "), Some(42));
        assert_eq!(parse_integral("22.00"), Some(22));
        assert_eq!(parse_integral("22."), None);
        assert_eq!(parse_integral(".0"), None);
        assert_eq!(parse_integral("-1"), None);
        assert_eq!(parse_integral("1e3"), None);
        assert_eq!(parse_integral("chr1"), None);
    }

    #[test]
    fn test_check_column_limit() {
        assert!(check_column_limit(0).is_none());
        assert!(check_column_limit(MAX_COLUMNS).is_none());
        assert!(check_column_limit(MAX_COLUMNS + 1).is_some());
    }
}
