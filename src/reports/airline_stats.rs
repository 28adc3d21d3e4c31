//! Per-airline price statistics
//!
//! Min, max and mean of the parsed price per airline, ascending by mean.
//! Undefined prices are skipped; an airline with none gets undefined
//! aggregates and sorts last.

use super::series;
use crate::constants::{COL_AIRLINE, COL_MAX, COL_MEAN, COL_MIN, COL_PRICE_NUM};
use crate::error::Result;
use crate::models::AirlineStat;

use polars::prelude::*;
use tracing::debug;

/// Aggregate prices by airline into an `airline, min, max, mean` table
pub fn airline_price_stats(frame: &DataFrame) -> Result<DataFrame> {
    let stats = frame
        .clone()
        .lazy()
        .group_by_stable([col(COL_AIRLINE)])
        .agg([
            col(COL_PRICE_NUM).min().alias(COL_MIN),
            col(COL_PRICE_NUM).max().alias(COL_MAX),
            col(COL_PRICE_NUM).mean().alias(COL_MEAN),
        ])
        .sort_by_exprs(
            [col(COL_MEAN), col(COL_AIRLINE)],
            SortMultipleOptions::default().with_nulls_last(true),
        )
        .collect()?;

    debug!("Computed price statistics for {} airlines", stats.height());
    Ok(stats)
}

/// Read the statistics table back as typed rows, in table order
pub fn stat_rows(stats: &DataFrame) -> Result<Vec<AirlineStat>> {
    let airlines = series(stats, COL_AIRLINE)?.str()?;
    let mins = series(stats, COL_MIN)?.i64()?;
    let maxes = series(stats, COL_MAX)?.i64()?;
    let means = series(stats, COL_MEAN)?.f64()?;

    let rows = (0..stats.height())
        .map(|i| AirlineStat {
            airline: airlines.get(i).unwrap_or_default().to_string(),
            min_price: mins.get(i),
            max_price: maxes.get(i),
            mean_price: means.get(i),
        })
        .collect();
    Ok(rows)
}
