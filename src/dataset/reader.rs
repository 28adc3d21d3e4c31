//! Listing file reader
//!
//! Reads one delimited file with a header row into raw records. Rows may
//! be shorter than the header; their trailing cells are absent, not empty.

use crate::constants::{
    COL_AIRLINE, COL_ARRIVAL_TIME, COL_DEPARTURE_TIME, COL_DURATION, COL_PRICE, COL_STOPS,
    REQUIRED_COLUMNS,
};
use crate::error::{AnalysisError, Result};
use crate::models::RawRecord;
use csv::{ReaderBuilder, StringRecord};
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// Header positions of the columns the loader reads
#[derive(Debug, Clone)]
pub struct ColumnMapping {
    name_to_index: HashMap<String, usize>,
}

impl ColumnMapping {
    /// Build a mapping, failing if any required column is absent
    pub fn from_headers(path: &Path, headers: &StringRecord) -> Result<Self> {
        let mut name_to_index = HashMap::new();
        for (index, name) in headers.iter().enumerate() {
            name_to_index.entry(name.to_string()).or_insert(index);
        }

        if let Some(missing) = REQUIRED_COLUMNS
            .iter()
            .find(|column| !name_to_index.contains_key(**column))
        {
            return Err(AnalysisError::MissingColumn {
                path: path.to_path_buf(),
                column: missing.to_string(),
            });
        }

        Ok(Self { name_to_index })
    }

    fn field(&self, record: &StringRecord, column: &str) -> Option<String> {
        self.name_to_index
            .get(column)
            .and_then(|&index| record.get(index))
            .map(str::to_string)
    }

    /// Extract the listing fields from one row
    pub fn raw_record(&self, record: &StringRecord) -> RawRecord {
        RawRecord {
            airline: self.field(record, COL_AIRLINE),
            price: self.field(record, COL_PRICE),
            departure_time: self.field(record, COL_DEPARTURE_TIME),
            arrival_time: self.field(record, COL_ARRIVAL_TIME),
            duration: self.field(record, COL_DURATION),
            stops: self.field(record, COL_STOPS),
        }
    }
}

/// Read every row of a listing file
///
/// A file without data rows yields an empty vector before its header is
/// checked; a file with rows but a missing required column is an error.
pub fn read_listing_file(path: &Path) -> Result<Vec<RawRecord>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|e| AnalysisError::csv(path, e))?;

    let headers = reader
        .headers()
        .map_err(|e| AnalysisError::csv(path, e))?
        .clone();

    let rows = reader
        .records()
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| AnalysisError::csv(path, e))?;

    if rows.is_empty() {
        debug!("No data rows in {}", path.display());
        return Ok(Vec::new());
    }

    let mapping = ColumnMapping::from_headers(path, &headers)?;
    let records: Vec<RawRecord> = rows.iter().map(|row| mapping.raw_record(row)).collect();

    debug!("Read {} rows from {}", records.len(), path.display());
    Ok(records)
}
