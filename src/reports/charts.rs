//! PNG chart rendering with plotters
//!
//! A bar chart of mean price per airline and a color grid of the hourly
//! heatmap with a color-scale legend.

use crate::error::{AnalysisError, Result};
use crate::models::{AirlineStat, HourlyGrid};

use plotters::prelude::*;
use std::path::Path;
use tracing::debug;

const CAPTION_FONT: (&str, u32) = ("sans-serif", 28);
const LABEL_FONT: (&str, u32) = ("sans-serif", 16);
const LEGEND_WIDTH: u32 = 140;

/// Linear color scale between two endpoint colors
#[derive(Debug, Clone, Copy)]
pub struct ColorScale {
    low: RGBColor,
    high: RGBColor,
    min: f64,
    max: f64,
}

impl ColorScale {
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            low: RGBColor(255, 247, 188),
            high: RGBColor(189, 0, 38),
            min,
            max,
        }
    }

    /// Color for a value; values are clamped to the scale's range
    pub fn color(&self, value: f64) -> RGBColor {
        let span = self.max - self.min;
        let t = if span > 0.0 {
            ((value - self.min) / span).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let channel = |lo: u8, hi: u8| (lo as f64 + (hi as f64 - lo as f64) * t).round() as u8;
        RGBColor(
            channel(self.low.0, self.high.0),
            channel(self.low.1, self.high.1),
            channel(self.low.2, self.high.2),
        )
    }
}

/// Render one bar per airline, in the order given
///
/// Airlines without a mean price keep their slot but get no bar.
pub fn render_mean_price_bars(
    stats: &[AirlineStat],
    path: &Path,
    size: (u32, u32),
) -> Result<()> {
    let artifact = path.display().to_string();
    let chart_err = |e: &dyn std::fmt::Display| AnalysisError::chart(&artifact, e);

    let labels: Vec<String> = stats.iter().map(|s| s.airline.clone()).collect();
    let highest = stats
        .iter()
        .filter_map(|s| s.mean_price)
        .fold(0.0_f64, f64::max);
    let y_top = if highest > 0.0 { highest * 1.1 } else { 1.0 };
    let slots = stats.len().max(1) as i32;

    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE).map_err(|e| chart_err(&e))?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Mean Price by Airline", CAPTION_FONT)
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(80)
        .build_cartesian_2d(0..slots, 0f64..y_top)
        .map_err(|e| chart_err(&e))?;

    let slot_px = (size.0.saturating_sub(110) as i32 / slots).max(1);
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(slots as usize + 1)
        .x_label_offset(slot_px / 2)
        .x_label_formatter(&|x| labels.get(*x as usize).cloned().unwrap_or_default())
        .y_desc("Price")
        .label_style(LABEL_FONT)
        .draw()
        .map_err(|e| chart_err(&e))?;

    chart
        .draw_series(stats.iter().enumerate().filter_map(|(i, stat)| {
            let mean = stat.mean_price?;
            let mut bar = Rectangle::new([(i as i32, 0.0), (i as i32 + 1, mean)], BLUE.filled());
            bar.set_margin(0, 0, 6, 6);
            Some(bar)
        }))
        .map_err(|e| chart_err(&e))?;

    root.present().map_err(|e| chart_err(&e))?;
    debug!("Rendered bar chart for {} airlines to {}", stats.len(), artifact);
    Ok(())
}

/// Render the hourly grid as colored cells with a color-scale legend
///
/// Undefined cells are left blank.
pub fn render_heatmap(grid: &HourlyGrid, path: &Path, size: (u32, u32)) -> Result<()> {
    let artifact = path.display().to_string();
    let chart_err = |e: &dyn std::fmt::Display| AnalysisError::chart(&artifact, e);

    let (rows, columns) = grid.dimensions();
    let (rows, columns) = (rows.max(1) as i32, columns.max(1) as i32);
    let (min, max) = grid.value_range().unwrap_or((0.0, 1.0));
    let scale = ColorScale::new(min, max);

    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE).map_err(|e| chart_err(&e))?;

    let split_at = size.0.saturating_sub(LEGEND_WIDTH).max(1) as i32;
    let (grid_area, legend_area) = root.split_horizontally(split_at);

    let mut chart = ChartBuilder::on(&grid_area)
        .caption("Mean Price by Departure Hour", CAPTION_FONT)
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(110)
        .build_cartesian_2d(0..columns, rows..0)
        .map_err(|e| chart_err(&e))?;

    let cell_w = (split_at - 140).max(columns) / columns;
    let cell_h = (size.1 as i32 - 130).max(rows) / rows;
    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_labels(columns as usize + 1)
        .y_labels(rows as usize + 1)
        .x_label_offset(cell_w / 2)
        .y_label_offset(cell_h / 2)
        .x_label_formatter(&|x| {
            grid.hours
                .get(*x as usize)
                .map(|hour| hour.to_string())
                .unwrap_or_default()
        })
        .y_label_formatter(&|y| grid.airlines.get(*y as usize).cloned().unwrap_or_default())
        .x_desc("Departure Hour")
        .label_style(LABEL_FONT)
        .draw()
        .map_err(|e| chart_err(&e))?;

    let cells = grid.cells.iter().enumerate().flat_map(|(row, values)| {
        values
            .iter()
            .enumerate()
            .filter_map(move |(column, value)| value.map(|v| (column as i32, row as i32, v)))
    });
    chart
        .draw_series(cells.map(|(x, y, value)| {
            Rectangle::new([(x, y), (x + 1, y + 1)], scale.color(value).filled())
        }))
        .map_err(|e| chart_err(&e))?;

    draw_legend(&legend_area, &scale, min, max).map_err(|e| chart_err(&e))?;

    root.present().map_err(|e| chart_err(&e))?;
    debug!(
        "Rendered {}x{} heatmap to {}",
        grid.airlines.len(),
        grid.hours.len(),
        artifact
    );
    Ok(())
}

fn draw_legend<DB: DrawingBackend>(
    area: &DrawingArea<DB, plotters::coord::Shift>,
    scale: &ColorScale,
    min: f64,
    max: f64,
) -> std::result::Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    let top = if max > min { max } else { min + 1.0 };
    let steps = 64;
    let step = (top - min) / steps as f64;

    let mut legend = ChartBuilder::on(area)
        .margin_top(60)
        .margin_bottom(60)
        .margin_right(10)
        .y_label_area_size(80)
        .build_cartesian_2d(0f64..1f64, min..top)?;

    legend
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_labels(0)
        .y_labels(6)
        .y_desc("Mean Price")
        .label_style(LABEL_FONT)
        .draw()?;

    legend.draw_series((0..steps).map(|i| {
        let lo = min + step * i as f64;
        Rectangle::new(
            [(0.0, lo), (1.0, lo + step)],
            scale.color(lo + step / 2.0).filled(),
        )
    }))?;

    Ok(())
}
