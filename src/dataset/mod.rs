//! Unified dataset loading
//!
//! Discovers listing files, reads and normalizes their rows, and
//! materializes the result as a polars frame shared read-only by every
//! report.

pub mod discovery;
pub mod reader;

use self::discovery::FileDiscovery;
use self::reader::read_listing_file;

use crate::config::AnalysisConfig;
use crate::constants::{
    COL_AIRLINE, COL_ARRIVAL_TIME, COL_DEP_HOUR, COL_DEPARTURE_TIME, COL_DURATION,
    COL_DURATION_MIN, COL_PRICE, COL_PRICE_NUM, COL_STOPS,
};
use crate::error::Result;
use crate::models::FlightRecord;

use indicatif::{ProgressBar, ProgressStyle};
use polars::prelude::{Column, DataFrame, PolarsResult};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Normalized listings from every discovered file, in file-then-row order
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<FlightRecord>,
    frame: DataFrame,
    files_discovered: usize,
    files_loaded: usize,
    files_skipped: usize,
}

impl Dataset {
    pub fn records(&self) -> &[FlightRecord] {
        &self.records
    }

    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn files_discovered(&self) -> usize {
        self.files_discovered
    }

    pub fn files_loaded(&self) -> usize {
        self.files_loaded
    }

    pub fn files_skipped(&self) -> usize {
        self.files_skipped
    }
}

/// Materialize records as a frame with raw and derived columns
pub fn records_to_frame(records: &[FlightRecord]) -> PolarsResult<DataFrame> {
    let airline: Vec<&str> = records.iter().map(|r| r.airline.as_str()).collect();
    let price_num: Vec<Option<i64>> = records.iter().map(|r| r.price_num).collect();
    let dep_hour: Vec<Option<i32>> = records
        .iter()
        .map(|r| r.dep_hour.map(|hour| hour as i32))
        .collect();
    let duration_min: Vec<Option<i64>> = records.iter().map(|r| r.duration_min).collect();

    DataFrame::new(vec![
        Column::new(COL_AIRLINE.into(), airline),
        Column::new(COL_PRICE.into(), text_values(records, |r| &r.price)),
        Column::new(
            COL_DEPARTURE_TIME.into(),
            text_values(records, |r| &r.departure_time),
        ),
        Column::new(
            COL_ARRIVAL_TIME.into(),
            text_values(records, |r| &r.arrival_time),
        ),
        Column::new(COL_DURATION.into(), text_values(records, |r| &r.duration)),
        Column::new(COL_STOPS.into(), text_values(records, |r| &r.stops)),
        Column::new(COL_PRICE_NUM.into(), price_num),
        Column::new(COL_DEP_HOUR.into(), dep_hour),
        Column::new(COL_DURATION_MIN.into(), duration_min),
    ])
}

fn text_values<'a>(
    records: &'a [FlightRecord],
    field: fn(&FlightRecord) -> &Option<String>,
) -> Vec<Option<&'a str>> {
    records.iter().map(|r| field(r).as_deref()).collect()
}

/// Loads every matching file in a directory into one dataset
#[derive(Debug)]
pub struct DatasetLoader {
    discovery: FileDiscovery,
    show_progress: bool,
}

impl DatasetLoader {
    pub fn new(input_dir: impl Into<PathBuf>, config: &AnalysisConfig) -> Self {
        Self {
            discovery: FileDiscovery::new(input_dir, config.file_pattern.clone()),
            show_progress: config.show_progress,
        }
    }

    pub fn input_dir(&self) -> &Path {
        self.discovery.input_dir()
    }

    /// Discover, read and normalize all files
    ///
    /// No matching files, or only empty ones, gives an empty dataset.
    pub fn load(&self) -> Result<Dataset> {
        let files = self.discovery.discover_files()?;
        info!(
            "Loading {} files from {}",
            files.len(),
            self.input_dir().display()
        );

        let pb = if self.show_progress {
            ProgressBar::new(files.len() as u64)
        } else {
            ProgressBar::hidden()
        };
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );

        let mut records = Vec::new();
        let mut files_loaded = 0usize;
        let mut files_skipped = 0usize;

        for path in &files {
            if let Some(file_name) = path.file_name() {
                pb.set_message(format!("Reading: {}", file_name.to_string_lossy()));
            }

            let raw = match read_listing_file(path) {
                Ok(raw) => raw,
                Err(e) => {
                    pb.abandon();
                    return Err(e);
                }
            };
            pb.inc(1);

            if raw.is_empty() {
                warn!("Skipped file (no data): {}", path.display());
                files_skipped += 1;
                continue;
            }

            debug!("Normalizing {} rows from {}", raw.len(), path.display());
            records.extend(raw.into_iter().map(FlightRecord::from));
            files_loaded += 1;
        }

        pb.finish_and_clear();

        let frame = records_to_frame(&records)?;
        info!(
            "Loaded {} rows from {} files ({} empty)",
            records.len(),
            files_loaded,
            files_skipped
        );

        Ok(Dataset {
            records,
            frame,
            files_discovered: files.len(),
            files_loaded,
            files_skipped,
        })
    }
}
