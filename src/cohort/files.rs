use std::path::{Path, PathBuf};

use glob::Pattern;
use thiserror::Error;
use tracing::debug;

use crate::parsing::ParseError;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error("Invalid file pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("Failed to list files: {0}")]
    Glob(#[from] glob::GlobError),

    #[error("No files match '{0}'")]
    NoFilesFound(String),

    #[error("Sample '{iid}' appears more than once in {}", .path.display())]
    DuplicateSample { iid: String, path: PathBuf },

    #[error("Samples '{first}' and '{second}' both map to subject '{subject}'")]
    SubjectCollision {
        subject: String,
        first: String,
        second: String,
    },

    #[error("Failed to read layout: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse layout: {0}")]
    Layout(#[from] serde_json::Error),
}

impl LoadError {
    pub(crate) fn parse(path: &Path, source: ParseError) -> Self {
        Self::Parse {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Build a glob pattern from a literal directory and a file pattern.
///
/// The directory is escaped so characters such as `[` in a path are not
/// treated as pattern syntax; `file_pattern` is used as-is.
#[must_use]
pub fn pattern_in(dir: &Path, file_pattern: &str) -> String {
    let dir = Pattern::escape(&dir.to_string_lossy());
    if dir.is_empty() {
        file_pattern.to_string()
    } else {
        format!("{}/{file_pattern}", dir.trim_end_matches('/'))
    }
}

/// Files matching a glob pattern, sorted by path.
///
/// # Errors
///
/// Returns `LoadError::Pattern` for an invalid pattern, `LoadError::Glob`
/// if a directory cannot be read, or `LoadError::NoFilesFound` if nothing
/// matches.
pub fn find_files(pattern: &str) -> Result<Vec<PathBuf>, LoadError> {
    let paths = glob::glob(pattern).map_err(|source| LoadError::Pattern {
        pattern: pattern.to_string(),
        source,
    })?;

    let mut files = paths
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .filter(|p| p.is_file())
        .collect::<Vec<_>>();
    files.sort();

    if files.is_empty() {
        return Err(LoadError::NoFilesFound(pattern.to_string()));
    }

    debug!("{} files match {pattern}", files.len());
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_in_escapes_directory() {
        let pattern = pattern_in(Path::new("runs/[v1]/scores"), "*.profile");
        assert_eq!(pattern, "runs/[[]v1[]]/scores/*.profile");
    }

    #[test]
    fn test_find_files_sorted() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.profile", "a.profile", "c.txt"] {
            std::fs::write(dir.path().join(name), "IID SCORESUM\n").unwrap();
        }

        let files = find_files(&pattern_in(dir.path(), "*.profile")).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.profile", "b.profile"]);
    }

    #[test]
    fn test_find_files_none() {
        let dir = tempfile::tempdir().unwrap();
        let err = find_files(&pattern_in(dir.path(), "*.eigenvec")).unwrap_err();
        assert!(matches!(err, LoadError::NoFilesFound(_)));
    }
}
