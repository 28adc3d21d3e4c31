//! Core data structures for flight analysis.
//!
//! Raw listing rows, their normalized form, and the typed rows produced by
//! each report. Nothing here is mutated after construction; every stage
//! derives a new structure from the previous one.

use crate::parsers::{parse_departure, parse_duration, parse_price};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One listing row as read from an input file, all text
///
/// `None` means the cell was absent (a short row), which is distinct from
/// an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    pub airline: Option<String>,
    pub price: Option<String>,
    pub departure_time: Option<String>,
    pub arrival_time: Option<String>,
    pub duration: Option<String>,
    pub stops: Option<String>,
}

/// A listing row after field normalization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightRecord {
    /// Airline name; an absent cell becomes the empty string
    pub airline: String,
    pub price: Option<String>,
    pub departure_time: Option<String>,
    pub arrival_time: Option<String>,
    pub duration: Option<String>,
    pub stops: Option<String>,
    pub price_num: Option<i64>,
    pub dep_time: Option<NaiveTime>,
    pub dep_hour: Option<u32>,
    pub duration_min: Option<i64>,
}

impl From<RawRecord> for FlightRecord {
    fn from(raw: RawRecord) -> Self {
        let price_num = raw.price.as_deref().and_then(parse_price);
        let departure = raw.departure_time.as_deref().and_then(parse_departure);
        let duration_min = raw.duration.as_deref().and_then(parse_duration);

        Self {
            airline: raw.airline.unwrap_or_default(),
            price: raw.price,
            departure_time: raw.departure_time,
            arrival_time: raw.arrival_time,
            duration: raw.duration,
            stops: raw.stops,
            price_num,
            dep_time: departure.map(|d| d.time),
            dep_hour: departure.map(|d| d.hour),
            duration_min,
        }
    }
}

/// Price aggregates for one airline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirlineStat {
    pub airline: String,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    pub mean_price: Option<f64>,
}

/// Mean price per (airline, departure hour), airlines and hours ascending
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HourlyGrid {
    pub airlines: Vec<String>,
    pub hours: Vec<u32>,
    /// Row-major: `cells[airline_index][hour_index]`
    pub cells: Vec<Vec<Option<f64>>>,
}

impl HourlyGrid {
    /// Grid dimensions as (airlines, hours)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.airlines.len(), self.hours.len())
    }

    pub fn is_empty(&self) -> bool {
        self.airlines.is_empty() || self.hours.is_empty()
    }

    /// Cell value for an airline and hour, `None` if absent or undefined
    pub fn get(&self, airline: &str, hour: u32) -> Option<f64> {
        let row = self.airlines.iter().position(|a| a == airline)?;
        let column = self.hours.iter().position(|&h| h == hour)?;
        self.cells[row][column]
    }

    /// Smallest and largest defined cell values
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.cells
            .iter()
            .flatten()
            .flatten()
            .fold(None, |range, &value| match range {
                None => Some((value, value)),
                Some((lo, hi)) => Some((f64::min(lo, value), f64::max(hi, value))),
            })
    }
}

/// A listing that passed the ranking filter, with its score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedFlight {
    pub airline: String,
    pub price_num: i64,
    pub duration_min: i64,
    pub departure_time: String,
    pub arrival_time: String,
    pub stops: String,
    pub score: f64,
}

/// Everything a completed run produced
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisReport {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub files_discovered: usize,
    pub files_loaded: usize,
    pub files_skipped: usize,
    pub total_rows: usize,
    pub airline_stats: Vec<AirlineStat>,
    pub hourly_grid: HourlyGrid,
    pub ranking: Vec<RankedFlight>,
    pub artifacts: Vec<PathBuf>,
    pub processing_time_ms: u128,
}

/// Result of a pipeline run
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisOutcome {
    /// No matching files, or every matching file was empty; nothing written
    Empty { files_discovered: usize },
    Report(AnalysisReport),
}

impl AnalysisOutcome {
    pub fn is_empty(&self) -> bool {
        matches!(self, AnalysisOutcome::Empty { .. })
    }

    pub fn report(&self) -> Option<&AnalysisReport> {
        match self {
            AnalysisOutcome::Report(report) => Some(report),
            AnalysisOutcome::Empty { .. } => None,
        }
    }
}
