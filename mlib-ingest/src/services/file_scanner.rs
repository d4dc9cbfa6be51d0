//! Library file scanner
//!
//! Recursive discovery of library files matching one extension.
//!
//! The scan is all-or-nothing: a missing root, a root that is not a
//! directory, or any entry that cannot be read aborts the whole scan.

use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

/// File scanner errors
#[derive(Debug, Error)]
pub enum ScanError {
    /// Specified path does not exist
    #[error("Path not found: {0}")]
    PathNotFound(PathBuf),

    /// Path exists but is not a directory
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    /// Cannot access an entry below the root
    #[error("File access error {0}: {1}")]
    FileAccessError(PathBuf, String),
}

/// Library file scanner
pub struct FileScanner {
    extension: String,
    max_depth: Option<usize>,
}

impl FileScanner {
    /// Create a scanner for files whose name ends with `extension`
    ///
    /// The match is a case-sensitive suffix match, so ".pdf" does not match
    /// "SONG.PDF".
    pub fn new(extension: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
            max_depth: None,
        }
    }

    /// Limit recursion depth (1 = only the root directory's own entries)
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Scan `root_path` and return matching file paths in discovery order
    ///
    /// Entries within a directory are visited in file-name order so repeated
    /// scans of the same tree produce the same sequence.
    pub fn scan(&self, root_path: &Path) -> Result<Vec<PathBuf>, ScanError> {
        if !root_path.exists() {
            return Err(ScanError::PathNotFound(root_path.to_path_buf()));
        }

        if !root_path.is_dir() {
            return Err(ScanError::NotADirectory(root_path.to_path_buf()));
        }

        let walker = WalkDir::new(root_path)
            .follow_links(false)
            .max_depth(self.max_depth.unwrap_or(usize::MAX))
            .sort_by_file_name();

        let mut matched = Vec::new();
        let mut visited = 0usize;

        for entry in walker {
            let entry = entry.map_err(|e| {
                let path = e
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| root_path.to_path_buf());
                ScanError::FileAccessError(path, e.to_string())
            })?;
            visited += 1;

            if entry.file_type().is_dir() {
                continue;
            }

            if self.matches_extension(entry.path()) {
                tracing::debug!(path = %entry.path().display(), "Matched library file");
                matched.push(entry.path().to_path_buf());
            }
        }

        tracing::info!(
            "Scan complete: {} of {} entries matched '{}'",
            matched.len(),
            visited,
            self.extension
        );

        Ok(matched)
    }

    fn matches_extension(&self, path: &Path) -> bool {
        path.file_name()
            .map(|name| name.to_string_lossy().ends_with(&self.extension))
            .unwrap_or(false)
    }
}
