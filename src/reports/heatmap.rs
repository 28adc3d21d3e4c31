//! Hour-of-day price heatmap
//!
//! Mean parsed price per (airline, departure hour). Rows cover every
//! airline in the dataset; columns cover only the hours actually observed.

use super::series;
use crate::constants::{COL_AIRLINE, COL_DEP_HOUR, COL_MEAN_PRICE, COL_PRICE_NUM};
use crate::error::Result;
use crate::models::HourlyGrid;

use polars::prelude::*;
use tracing::debug;

/// Mean price by airline and departure hour as a wide table
///
/// One row per distinct airline, ascending, followed by one `Float64`
/// column per observed hour, ascending and named by the hour (`"8"`).
/// Rows with no departure hour only contribute their airline.
pub fn hourly_price_table(frame: &DataFrame) -> Result<DataFrame> {
    let means = frame
        .clone()
        .lazy()
        .filter(col(COL_DEP_HOUR).is_not_null())
        .group_by([col(COL_AIRLINE), col(COL_DEP_HOUR)])
        .agg([col(COL_PRICE_NUM).mean().alias(COL_MEAN_PRICE)]);

    let observed = means
        .clone()
        .select([col(COL_DEP_HOUR).unique().sort(SortOptions::default())])
        .collect()?;
    let hours: Vec<i32> = series(&observed, COL_DEP_HOUR)?
        .i32()?
        .into_iter()
        .flatten()
        .collect();

    let mut table = frame.clone().lazy().select([col(COL_AIRLINE).unique()]);
    for hour in &hours {
        let hour_means = means
            .clone()
            .filter(col(COL_DEP_HOUR).eq(lit(*hour)))
            .select([col(COL_AIRLINE), col(COL_MEAN_PRICE).alias(hour.to_string())]);
        table = table.left_join(hour_means, col(COL_AIRLINE), col(COL_AIRLINE));
    }

    let table = table
        .sort_by_exprs([col(COL_AIRLINE)], SortMultipleOptions::default())
        .collect()?;

    debug!(
        "Built hourly table: {} airlines x {} hours",
        table.height(),
        hours.len()
    );
    Ok(table)
}

/// Read the wide hourly table back as a grid
pub fn grid_from_table(table: &DataFrame) -> Result<HourlyGrid> {
    let airlines: Vec<String> = series(table, COL_AIRLINE)?
        .str()?
        .into_iter()
        .map(|airline| airline.unwrap_or_default().to_string())
        .collect();

    let mut hours = Vec::new();
    let mut columns = Vec::new();
    for column in table.get_columns() {
        let Ok(hour) = column.name().as_str().parse::<u32>() else {
            continue;
        };
        hours.push(hour);
        columns.push(column.as_materialized_series().f64()?);
    }

    let cells = (0..table.height())
        .map(|row| columns.iter().map(|values| values.get(row)).collect())
        .collect();

    Ok(HourlyGrid {
        airlines,
        hours,
        cells,
    })
}

/// Aggregate mean price by airline and departure hour into a grid
pub fn hourly_mean_prices(frame: &DataFrame) -> Result<HourlyGrid> {
    grid_from_table(&hourly_price_table(frame)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::records_to_frame;
    use crate::models::{FlightRecord, RawRecord};

    fn frame_of(rows: &[(&str, &str, &str)]) -> DataFrame {
        let records: Vec<FlightRecord> = rows
            .iter()
            .map(|(airline, price, departure)| {
                FlightRecord::from(RawRecord {
                    airline: Some(airline.to_string()),
                    price: Some(price.to_string()),
                    departure_time: Some(departure.to_string()),
                    ..RawRecord::default()
                })
            })
            .collect();
        records_to_frame(&records).unwrap()
    }

    #[test]
    fn test_grid_cells_are_group_means() {
        let frame = frame_of(&[
            ("AirY", "150", "09:30"),
            ("AirX", "100", "08:00"),
            ("AirX", "200", "08:45"),
            ("AirX", "90", "21:10"),
        ]);

        let grid = hourly_mean_prices(&frame).unwrap();

        assert_eq!(grid.airlines, vec!["AirX", "AirY"]);
        assert_eq!(grid.hours, vec![8, 9, 21]);
        assert_eq!(grid.dimensions(), (2, 3));
        assert_eq!(grid.get("AirX", 8), Some(150.0));
        assert_eq!(grid.get("AirX", 21), Some(90.0));
        assert_eq!(grid.get("AirY", 9), Some(150.0));
        assert_eq!(grid.get("AirY", 8), None);
        assert_eq!(grid.get("AirX", 9), None);
    }

    #[test]
    fn test_undefined_hours_do_not_contribute() {
        let frame = frame_of(&[
            ("AirX", "100", "08:00"),
            ("AirX", "900", "soon"),
            ("AirZ", "400", "8:5"),
        ]);

        let grid = hourly_mean_prices(&frame).unwrap();

        assert_eq!(grid.hours, vec![8]);
        assert_eq!(grid.get("AirX", 8), Some(100.0));
        // AirZ has no defined hour but still gets a row
        assert_eq!(grid.airlines, vec!["AirX", "AirZ"]);
        assert_eq!(grid.cells[1], vec![None]);
    }

    #[test]
    fn test_cell_with_only_undefined_prices() {
        let frame = frame_of(&[("AirX", "free", "06:00"), ("AirX", "80", "07:00")]);

        let grid = hourly_mean_prices(&frame).unwrap();

        assert_eq!(grid.hours, vec![6, 7]);
        assert_eq!(grid.get("AirX", 6), None);
        assert_eq!(grid.get("AirX", 7), Some(80.0));
    }

    #[test]
    fn test_table_layout() {
        let frame = frame_of(&[
            ("AirY", "150", "09:30"),
            ("AirX", "100", "08:00"),
            ("AirW", "70", "late"),
        ]);

        let table = hourly_price_table(&frame).unwrap();

        assert_eq!(table.shape(), (3, 3));
        assert_eq!(table.get_column_names_str(), vec!["airline", "8", "9"]);
        let airlines = series(&table, COL_AIRLINE).unwrap().str().unwrap();
        assert_eq!(airlines.get(0), Some("AirW"));
        let nine = series(&table, "9").unwrap().f64().unwrap();
        assert_eq!(nine.get(0), None);
        assert_eq!(nine.get(1), None);
        assert_eq!(nine.get(2), Some(150.0));
    }

    #[test]
    fn test_grid_matches_table() {
        let frame = frame_of(&[
            ("AirX", "100", "08:00"),
            ("AirX", "300", "08:20"),
            ("AirY", "150", "23:30"),
        ]);

        let table = hourly_price_table(&frame).unwrap();
        let grid = grid_from_table(&table).unwrap();

        assert_eq!(grid.hours, vec![8, 23]);
        assert_eq!(grid.cells, vec![vec![Some(200.0), None], vec![None, Some(150.0)]]);
    }

    #[test]
    fn test_no_departure_hours_gives_airline_only_table() {
        let frame = frame_of(&[("AirX", "100", "tbd")]);

        let table = hourly_price_table(&frame).unwrap();
        let grid = grid_from_table(&table).unwrap();

        assert_eq!(table.get_column_names_str(), vec!["airline"]);
        assert_eq!(grid.airlines, vec!["AirX"]);
        assert!(grid.hours.is_empty());
        assert!(grid.is_empty());
    }
}
