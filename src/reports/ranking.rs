//! Cost-effectiveness ranking
//!
//! Scores each complete listing as the sum of its standardized price and
//! standardized duration (population standard deviation) and keeps the
//! lowest scores. A component whose standard deviation is zero adds 0.

use super::series;
use crate::constants::{
    COL_AIRLINE, COL_ARRIVAL_TIME, COL_DEPARTURE_TIME, COL_DURATION_MIN, COL_PRICE_NUM,
    COL_SCORE, COL_STOPS, RANKING_COLUMNS,
};
use crate::error::Result;
use crate::models::RankedFlight;

use polars::prelude::*;
use tracing::{debug, warn};

/// Population mean and standard deviation of one column
#[derive(Debug, Clone, Copy, PartialEq)]
struct Moments {
    mean: f64,
    std_dev: f64,
}

impl Moments {
    /// Standardization expression for `name`, or 0 when the spread is zero
    fn standardize(self, name: &str) -> Expr {
        if self.std_dev > 0.0 && self.std_dev.is_finite() {
            (col(name).cast(DataType::Float64) - lit(self.mean)) / lit(self.std_dev)
        } else {
            lit(0.0)
        }
    }
}

/// Rank complete listings by score and keep the best `top_n`
///
/// Returns a table with the six ranking columns plus `score`, ascending by
/// score; ties keep dataset order. No complete listings gives an empty table.
pub fn rank_cost_effective(frame: &DataFrame, top_n: usize) -> Result<DataFrame> {
    let complete = RANKING_COLUMNS
        .iter()
        .map(|name| col(*name).is_not_null())
        .reduce(|acc, present| acc.and(present))
        .unwrap_or_else(|| lit(true));

    let subset = frame
        .clone()
        .lazy()
        .select(RANKING_COLUMNS.iter().map(|name| col(*name)).collect::<Vec<_>>())
        .filter(complete)
        .collect()?;

    debug!(
        "{} of {} listings are complete enough to rank",
        subset.height(),
        frame.height()
    );

    if subset.height() == 0 {
        warn!("No listing has every field needed for ranking");
        return Ok(subset
            .lazy()
            .with_column(lit(0.0).alias(COL_SCORE))
            .collect()?);
    }

    let price = column_moments(&subset, COL_PRICE_NUM)?;
    let duration = column_moments(&subset, COL_DURATION_MIN)?;
    debug!("Ranking moments: price {:?}, duration {:?}", price, duration);

    let ranked = subset
        .lazy()
        .with_column(
            (price.standardize(COL_PRICE_NUM) + duration.standardize(COL_DURATION_MIN))
                .alias(COL_SCORE),
        )
        .sort_by_exprs(
            [col(COL_SCORE)],
            SortMultipleOptions::default().with_maintain_order(true),
        )
        .limit(row_limit(top_n))
        .collect()?;

    Ok(ranked)
}

/// Row limit for polars; counts beyond `IdxSize` keep every row
fn row_limit(top_n: usize) -> IdxSize {
    IdxSize::try_from(top_n).unwrap_or(IdxSize::MAX)
}

fn column_moments(frame: &DataFrame, name: &str) -> Result<Moments> {
    let values = col(name).cast(DataType::Float64);
    let moments = frame
        .clone()
        .lazy()
        .select([
            values.clone().mean().alias("mean"),
            values.std(0).alias("std_dev"),
        ])
        .collect()?;

    Ok(Moments {
        mean: series(&moments, "mean")?.f64()?.get(0).unwrap_or(0.0),
        std_dev: series(&moments, "std_dev")?.f64()?.get(0).unwrap_or(0.0),
    })
}

/// Read the ranking table back as typed rows, in rank order
pub fn ranked_rows(ranking: &DataFrame) -> Result<Vec<RankedFlight>> {
    let airlines = series(ranking, COL_AIRLINE)?.str()?;
    let prices = series(ranking, COL_PRICE_NUM)?.i64()?;
    let durations = series(ranking, COL_DURATION_MIN)?.i64()?;
    let departures = series(ranking, COL_DEPARTURE_TIME)?.str()?;
    let arrivals = series(ranking, COL_ARRIVAL_TIME)?.str()?;
    let stops = series(ranking, COL_STOPS)?.str()?;
    let scores = series(ranking, COL_SCORE)?.f64()?;

    let rows = (0..ranking.height())
        .filter_map(|i| {
            Some(RankedFlight {
                airline: airlines.get(i)?.to_string(),
                price_num: prices.get(i)?,
                duration_min: durations.get(i)?,
                departure_time: departures.get(i)?.to_string(),
                arrival_time: arrivals.get(i)?.to_string(),
                stops: stops.get(i)?.to_string(),
                score: scores.get(i)?,
            })
        })
        .collect();
    Ok(rows)
}
