//! Scenario tests for the analysis pipeline
//!
//! Runs the whole pipeline against small listing directories built in
//! temporary folders.


use crate::config::AnalysisConfig;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub const HEADER: &str = "airline,price,departure_time,arrival_time,duration,stops";

/// Configuration for tests: no charts, no console output
pub fn table_only_config() -> AnalysisConfig {
    AnalysisConfig::default().without_charts().without_progress()
}

/// Create `csv` and `out` directories and write the given files into `csv`
pub fn listing_dirs(temp_dir: &TempDir, files: &[(&str, &str)]) -> (PathBuf, PathBuf) {
    let csv_dir = temp_dir.path().join("csv");
    let out_dir = temp_dir.path().join("out");
    fs::create_dir_all(&csv_dir).unwrap();

    for (name, content) in files {
        fs::write(csv_dir.join(name), content).unwrap();
    }

    (csv_dir, out_dir)
}
