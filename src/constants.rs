//! Application constants for the flight analysis tool
//!
//! Column names, output artifact names and default values shared by the
//! loader, the reports and the CLI.

// =============================================================================
// Input Columns
// =============================================================================

pub const COL_AIRLINE: &str = "airline";
pub const COL_PRICE: &str = "price";
pub const COL_DEPARTURE_TIME: &str = "departure_time";
pub const COL_ARRIVAL_TIME: &str = "arrival_time";
pub const COL_DURATION: &str = "duration";
pub const COL_STOPS: &str = "stops";

/// Columns every non-empty input file must carry, in lookup order
pub const REQUIRED_COLUMNS: &[&str] = &[
    COL_AIRLINE,
    COL_PRICE,
    COL_DEPARTURE_TIME,
    COL_ARRIVAL_TIME,
    COL_DURATION,
    COL_STOPS,
];

// =============================================================================
// Derived Columns
// =============================================================================

pub const COL_PRICE_NUM: &str = "price_num";
pub const COL_DEP_HOUR: &str = "dep_hour";
pub const COL_DURATION_MIN: &str = "duration_min";
pub const COL_SCORE: &str = "score";

pub const COL_MIN: &str = "min";
pub const COL_MAX: &str = "max";
pub const COL_MEAN: &str = "mean";
pub const COL_MEAN_PRICE: &str = "mean_price";

/// Columns a record needs for the cost-effectiveness ranking
pub const RANKING_COLUMNS: &[&str] = &[
    COL_AIRLINE,
    COL_PRICE_NUM,
    COL_DURATION_MIN,
    COL_DEPARTURE_TIME,
    COL_ARRIVAL_TIME,
    COL_STOPS,
];

// =============================================================================
// Output Artifacts
// =============================================================================

pub const AIRLINE_STATS_CSV: &str = "airline_price_stats.csv";
pub const AIRLINE_STATS_PNG: &str = "airline_mean_price.png";
pub const HEATMAP_CSV: &str = "hourly_heatmap_data.csv";
pub const HEATMAP_PNG: &str = "hourly_heatmap.png";
pub const RANKING_CSV: &str = "top_cost_effective.csv";

// =============================================================================
// Defaults
// =============================================================================

pub const DEFAULT_FILE_PATTERN: &str = "*.csv";
pub const DEFAULT_OUTPUT_DIR: &str = "analysis/output";
pub const DEFAULT_TOP_N: usize = 10;
pub const DEFAULT_CHART_WIDTH: u32 = 1024;
pub const DEFAULT_CHART_HEIGHT: u32 = 768;

/// Unit markers normalized by the duration parser ("saat"/"dakika" abbreviations)
pub mod duration_markers {
    pub const HOURS: &str = "sa";
    pub const MINUTES: &str = "dk";
}
