//! Command-line interface components.

use crate::config::AnalysisConfig;
use crate::constants::{DEFAULT_FILE_PATTERN, DEFAULT_OUTPUT_DIR, DEFAULT_TOP_N};

use clap::Parser;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser, Debug, Clone)]
#[command(name = "flight-analysis")]
#[command(about = "Summarize scraped flight listing CSV files into price reports")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Directory containing the flight listing CSV files
    ///
    /// Files directly inside this directory matching --pattern are read;
    /// subdirectories are not searched.
    #[arg(
        long = "csv-dir",
        value_name = "PATH",
        help = "Directory containing flight listing CSV files"
    )]
    pub csv_dir: PathBuf,

    /// Output directory for tables and charts
    ///
    /// Created if it doesn't exist. Existing artifacts are overwritten.
    #[arg(
        long = "out",
        value_name = "PATH",
        default_value = DEFAULT_OUTPUT_DIR,
        help = "Output directory for generated artifacts"
    )]
    pub out: PathBuf,

    /// Number of listings kept in the cost-effectiveness ranking
    #[arg(
        long = "top",
        value_name = "N",
        default_value_t = DEFAULT_TOP_N,
        help = "Number of listings in the cost-effectiveness ranking"
    )]
    pub top: usize,

    /// Glob pattern selecting listing files inside --csv-dir
    #[arg(
        long = "pattern",
        value_name = "GLOB",
        default_value = DEFAULT_FILE_PATTERN,
        help = "File name pattern for listing files"
    )]
    pub pattern: String,

    /// Write only the CSV tables, skipping PNG charts
    #[arg(long = "no-charts", help = "Skip rendering PNG charts")]
    pub no_charts: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

impl Args {
    /// Get the log level based on verbosity settings
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show progress bars (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }

    /// Build the analysis configuration from the command line
    pub fn to_config(&self) -> AnalysisConfig {
        let mut config = AnalysisConfig::default()
            .with_file_pattern(self.pattern.clone())
            .with_top_n(self.top);
        if self.no_charts {
            config = config.without_charts();
        }
        if !self.show_progress() {
            config = config.without_progress();
        }
        config
    }
}

/// Initialize the tracing subscriber on stderr
///
/// `RUST_LOG` takes precedence over the verbosity flags.
pub fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("flight_analysis={}", log_level)));

    if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
}
