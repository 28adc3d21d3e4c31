//! File discovery for flight listing directories
//!
//! Matches the configured glob pattern against the files directly inside
//! the input directory. Subdirectories are not searched.

use crate::error::{AnalysisError, Result};
use glob::{MatchOptions, Pattern};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// File discovery component for a listing directory
#[derive(Debug, Clone)]
pub struct FileDiscovery {
    input_dir: PathBuf,
    pattern: String,
}

impl FileDiscovery {
    /// Create a new file discovery instance
    pub fn new(input_dir: impl Into<PathBuf>, pattern: impl Into<String>) -> Self {
        Self {
            input_dir: input_dir.into(),
            pattern: pattern.into(),
        }
    }

    pub fn input_dir(&self) -> &Path {
        &self.input_dir
    }

    /// Discover all matching files, in sorted path order
    ///
    /// A missing input directory matches nothing.
    pub fn discover_files(&self) -> Result<Vec<PathBuf>> {
        if !self.input_dir.is_dir() {
            warn!(
                "Input directory not found, no files to read: {}",
                self.input_dir.display()
            );
            return Ok(Vec::new());
        }

        // Escape the directory so only the file pattern is interpreted
        let escaped_dir = Pattern::escape(&self.input_dir.to_string_lossy());
        let full_pattern = Path::new(&escaped_dir).join(&self.pattern);
        let full_pattern = full_pattern.to_string_lossy();

        debug!("Searching for files matching: {}", full_pattern);

        let options = MatchOptions {
            require_literal_leading_dot: true,
            ..MatchOptions::new()
        };
        let entries =
            glob::glob_with(&full_pattern, options).map_err(|e| AnalysisError::InvalidPattern {
                pattern: self.pattern.clone(),
                reason: e.to_string(),
            })?;

        let mut files = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| AnalysisError::Io(e.into()))?;
            if path.is_file() {
                files.push(path);
            }
        }
        files.sort();

        debug!(
            "Found {} matching files in {}",
            files.len(),
            self.input_dir.display()
        );
        Ok(files)
    }
}
