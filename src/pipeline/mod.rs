//! Analysis pipeline
//!
//! Orchestrates a run: load the unified dataset, then derive the airline
//! statistics, the hourly heatmap and the cost-effectiveness ranking from
//! it, writing each report's artifacts into the output directory.

#[cfg(test)]
pub mod tests;

use crate::config::AnalysisConfig;
use crate::constants::{
    AIRLINE_STATS_CSV, AIRLINE_STATS_PNG, HEATMAP_CSV, HEATMAP_PNG, RANKING_CSV,
};
use crate::dataset::{Dataset, DatasetLoader};
use crate::error::Result;
use crate::models::{AirlineStat, AnalysisOutcome, AnalysisReport, HourlyGrid, RankedFlight};
use crate::reports::{airline_stats, charts, heatmap, ranking, writer};

use colored::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, warn};

/// Main processor for a flight listing directory
#[derive(Debug)]
pub struct AnalysisPipeline {
    input_dir: PathBuf,
    output_dir: PathBuf,
    config: AnalysisConfig,
}

impl AnalysisPipeline {
    /// Create a new pipeline with the default configuration
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            config: AnalysisConfig::default(),
        }
    }

    /// Configure the pipeline
    pub fn with_config(mut self, config: AnalysisConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Main processing entry point
    pub fn run(&self) -> Result<AnalysisOutcome> {
        let start_time = Instant::now();
        self.config.validate()?;

        self.say(format!(
            "{}\n  {} {}\n  {} {}",
            "Starting flight listing analysis".bright_green().bold(),
            "Input:".bright_cyan(),
            self.input_dir.display(),
            "Output:".bright_cyan(),
            self.output_dir.display()
        ));

        fs::create_dir_all(&self.output_dir)?;

        // Step 1: Load and normalize every listing file
        self.say(format!("\n{}", "Loading listing files...".bright_yellow()));
        let dataset = DatasetLoader::new(&self.input_dir, &self.config).load()?;

        if dataset.is_empty() {
            warn!(
                "No data rows in {} ({} files matched)",
                self.input_dir.display(),
                dataset.files_discovered()
            );
            return Ok(AnalysisOutcome::Empty {
                files_discovered: dataset.files_discovered(),
            });
        }

        self.say(format!(
            "  {} {} rows from {} files",
            "Loaded".bright_green(),
            dataset.len().to_string().bright_white().bold(),
            dataset.files_loaded().to_string().bright_white().bold()
        ));

        // Step 2: Reports, each reading the same dataset
        self.say(format!("\n{}", "Building reports...".bright_yellow()));
        let mut artifacts = Vec::new();
        let airline_stats = self.airline_statistics(&dataset, &mut artifacts)?;
        let hourly_grid = self.hourly_heatmap(&dataset, &mut artifacts)?;
        let ranking = self.cost_effective_ranking(&dataset, &mut artifacts)?;

        let report = AnalysisReport {
            input_dir: self.input_dir.clone(),
            output_dir: self.output_dir.clone(),
            files_discovered: dataset.files_discovered(),
            files_loaded: dataset.files_loaded(),
            files_skipped: dataset.files_skipped(),
            total_rows: dataset.len(),
            airline_stats,
            hourly_grid,
            ranking,
            artifacts,
            processing_time_ms: start_time.elapsed().as_millis(),
        };
        self.print_summary(&report);

        Ok(AnalysisOutcome::Report(report))
    }

    fn airline_statistics(
        &self,
        dataset: &Dataset,
        artifacts: &mut Vec<PathBuf>,
    ) -> Result<Vec<AirlineStat>> {
        let mut table = airline_stats::airline_price_stats(dataset.frame())?;
        let rows = airline_stats::stat_rows(&table)?;

        let csv_path = self.artifact_path(AIRLINE_STATS_CSV);
        writer::write_table(&mut table, &csv_path)?;
        artifacts.push(csv_path);

        if self.config.render_charts {
            let png_path = self.artifact_path(AIRLINE_STATS_PNG);
            charts::render_mean_price_bars(&rows, &png_path, self.chart_size())?;
            artifacts.push(png_path);
        }

        info!("Airline statistics: {} airlines", rows.len());
        Ok(rows)
    }

    fn hourly_heatmap(
        &self,
        dataset: &Dataset,
        artifacts: &mut Vec<PathBuf>,
    ) -> Result<HourlyGrid> {
        let mut table = heatmap::hourly_price_table(dataset.frame())?;
        let grid = heatmap::grid_from_table(&table)?;

        if self.config.render_charts {
            let png_path = self.artifact_path(HEATMAP_PNG);
            charts::render_heatmap(&grid, &png_path, self.chart_size())?;
            artifacts.push(png_path);
        }

        let csv_path = self.artifact_path(HEATMAP_CSV);
        writer::write_table(&mut table, &csv_path)?;
        artifacts.push(csv_path);

        let (airlines, hours) = grid.dimensions();
        info!("Hourly heatmap: {} airlines x {} hours", airlines, hours);
        Ok(grid)
    }

    fn cost_effective_ranking(
        &self,
        dataset: &Dataset,
        artifacts: &mut Vec<PathBuf>,
    ) -> Result<Vec<RankedFlight>> {
        let mut table = ranking::rank_cost_effective(dataset.frame(), self.config.top_n)?;
        let rows = ranking::ranked_rows(&table)?;

        if rows.is_empty() {
            warn!("Ranking is empty; {} not written", RANKING_CSV);
            return Ok(rows);
        }

        let csv_path = self.artifact_path(RANKING_CSV);
        writer::write_table(&mut table, &csv_path)?;
        artifacts.push(csv_path);

        info!("Cost-effectiveness ranking: {} rows", rows.len());
        Ok(rows)
    }

    fn artifact_path(&self, name: &str) -> PathBuf {
        self.output_dir.join(name)
    }

    fn chart_size(&self) -> (u32, u32) {
        (self.config.chart_width, self.config.chart_height)
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    fn say(&self, message: String) {
        if self.config.show_progress {
            println!("{}", message);
        }
    }

    fn print_summary(&self, report: &AnalysisReport) {
        self.say(format!("\n{}", "Analysis Summary".bright_green().bold()));
        self.say(format!(
            "  {} {}ms",
            "Time elapsed:".bright_cyan(),
            report.processing_time_ms.to_string().bright_white()
        ));
        self.say(format!(
            "  {} {}",
            "Files loaded:".bright_cyan(),
            report.files_loaded.to_string().bright_white()
        ));
        if report.files_skipped > 0 {
            self.say(format!(
                "  {} {}",
                "Empty files skipped:".bright_yellow(),
                report.files_skipped.to_string().bright_yellow()
            ));
        }
        self.say(format!(
            "  {} {}",
            "Airlines:".bright_cyan(),
            report.airline_stats.len().to_string().bright_white().bold()
        ));
        self.say(format!(
            "  {} {}",
            "Ranked listings:".bright_cyan(),
            report.ranking.len().to_string().bright_white().bold()
        ));
        self.say(format!(
            "  {} {}",
            "Artifacts written:".bright_cyan(),
            report.artifacts.len().to_string().bright_white()
        ));
    }
}
