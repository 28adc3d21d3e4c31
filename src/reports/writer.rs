//! Table artifact writing
//!
//! Tables are written as CSV with a header row and no index column;
//! undefined values become empty cells.

use crate::error::Result;
use polars::prelude::{CsvWriter, DataFrame, SerWriter};
use std::fs::File;
use std::path::Path;
use tracing::debug;

/// Write a table to `path`, replacing any existing file
pub fn write_table(frame: &mut DataFrame, path: &Path) -> Result<()> {
    let mut file = File::create(path)?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(frame)?;

    debug!(
        "Wrote {} rows x {} columns to {}",
        frame.height(),
        frame.width(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_table_with_nulls() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("table.csv");
        let mut frame = DataFrame::new(vec![
            Column::new("airline".into(), ["AirX", "AirY"]),
            Column::new("mean".into(), [Some(100.5), None]),
        ])
        .unwrap();

        write_table(&mut frame, &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = written.lines().collect();
        assert_eq!(lines[0], "airline,mean");
        assert_eq!(lines[1], "AirX,100.5");
        assert_eq!(lines[2], "AirY,");
    }
}
