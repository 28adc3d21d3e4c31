//! Flight Analysis Library
//!
//! A Rust library for summarizing scraped flight listing CSV files into
//! price reports.
//!
//! This library provides tools for:
//! - Discovering and reading listing files from a directory
//! - Normalizing free-text price, time and duration fields
//! - Per-airline price statistics
//! - Mean price by airline and departure hour (heatmap)
//! - Ranking listings by combined price and duration
//! - Writing CSV tables and PNG charts

pub mod cli;
pub mod config;
pub mod constants;
pub mod dataset;
pub mod error;
pub mod models;
pub mod parsers;
pub mod pipeline;
pub mod reports;

// Re-export commonly used types
pub use config::AnalysisConfig;
pub use dataset::{Dataset, DatasetLoader};
pub use error::{AnalysisError, Result};
pub use models::{
    AirlineStat, AnalysisOutcome, AnalysisReport, FlightRecord, HourlyGrid, RankedFlight,
    RawRecord,
};
pub use pipeline::AnalysisPipeline;
