//! Downstream reports over the unified dataset
//!
//! Each report reads the same frame independently and returns both a
//! table ready for writing and typed rows for charts and callers.

pub mod airline_stats;
pub mod charts;
pub mod heatmap;
pub mod ranking;
pub mod writer;

use crate::error::Result;
use polars::prelude::{DataFrame, Series};

/// Borrow a frame column as a series
pub(crate) fn series<'a>(frame: &'a DataFrame, name: &str) -> Result<&'a Series> {
    Ok(frame.column(name)?.as_materialized_series())
}
