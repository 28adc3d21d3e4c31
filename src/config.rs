//! Configuration management and validation.
//!
//! Provides the settings shared by the loader, the reports and the chart
//! renderer, with builder-style overrides used by the CLI and tests.

use crate::constants::{
    DEFAULT_CHART_HEIGHT, DEFAULT_CHART_WIDTH, DEFAULT_FILE_PATTERN, DEFAULT_TOP_N,
};
use crate::error::{AnalysisError, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Global configuration for a flight analysis run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Glob pattern matched against file names in the input directory
    pub file_pattern: String,

    /// Number of rows kept in the cost-effectiveness ranking
    pub top_n: usize,

    /// Render PNG charts next to the CSV tables
    pub render_charts: bool,

    /// Show a progress bar while loading files
    pub show_progress: bool,

    /// Chart width in pixels
    pub chart_width: u32,

    /// Chart height in pixels
    pub chart_height: u32,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            file_pattern: DEFAULT_FILE_PATTERN.to_string(),
            top_n: DEFAULT_TOP_N,
            render_charts: true,
            show_progress: true,
            chart_width: DEFAULT_CHART_WIDTH,
            chart_height: DEFAULT_CHART_HEIGHT,
        }
    }
}

impl AnalysisConfig {
    /// Set the input file pattern
    pub fn with_file_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.file_pattern = pattern.into();
        self
    }

    /// Set the ranking size
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Disable PNG chart rendering
    pub fn without_charts(mut self) -> Self {
        self.render_charts = false;
        self
    }

    /// Disable the loading progress bar
    pub fn without_progress(mut self) -> Self {
        self.show_progress = false;
        self
    }

    /// Set chart dimensions in pixels
    pub fn with_chart_size(mut self, width: u32, height: u32) -> Self {
        self.chart_width = width;
        self.chart_height = height;
        self
    }

    /// Check the settings before a run
    pub fn validate(&self) -> Result<()> {
        if self.file_pattern.trim().is_empty() {
            return Err(AnalysisError::configuration("file pattern must not be empty"));
        }
        if self.top_n == 0 {
            return Err(AnalysisError::configuration(
                "ranking size must be at least 1",
            ));
        }
        if self.chart_width == 0 || self.chart_height == 0 {
            return Err(AnalysisError::configuration(format!(
                "chart size must be non-zero, got {}x{}",
                self.chart_width, self.chart_height
            )));
        }

        debug!("Configuration validated: {:?}", self);
        Ok(())
    }
}
