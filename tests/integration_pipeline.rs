//! Integration tests for the analysis pipeline
//!
//! These tests drive the public API the way the binary does: a directory of
//! listing files in, a directory of report tables out.

use flight_analysis::constants::{AIRLINE_STATS_CSV, HEATMAP_CSV, RANKING_CSV};
use flight_analysis::dataset::records_to_frame;
use flight_analysis::reports::{airline_stats, heatmap, ranking};
use flight_analysis::{
    AnalysisConfig, AnalysisError, AnalysisOutcome, AnalysisPipeline, DatasetLoader, FlightRecord,
    RawRecord,
};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const HEADER: &str = "airline,price,departure_time,arrival_time,duration,stops";

/// A day of scraped listings across three carriers, in mixed formats
fn realistic_listing() -> String {
    [
        HEADER,
        "Pegasus,\"1.249 TL\",06:15,07:30,1sa 15dk,Aktarmasız",
        "Pegasus,\"1.899 TL\",18:40,19:55,1sa 15dk,Aktarmasız",
        "THY,\"2.450 TL\",08:00,09:20,1sa 20dk,Aktarmasız",
        "THY,\"3.100 TL\",08:45,12:10,3sa 25dk,1 Aktarma",
        "AJet,\"999 TL\",06:50,08:05,1sa 15dk,Aktarmasız",
        "AJet,Fiyat yok,21:30,22:45,1sa 15dk,Aktarmasız",
    ]
    .join("\n")
}

fn setup(files: &[(&str, &str)]) -> (TempDir, PathBuf, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let csv_dir = temp_dir.path().join("csv");
    let out_dir = temp_dir.path().join("analysis").join("output");
    fs::create_dir_all(&csv_dir).unwrap();
    for (name, content) in files {
        fs::write(csv_dir.join(name), content).unwrap();
    }
    (temp_dir, csv_dir, out_dir)
}

fn config() -> AnalysisConfig {
    AnalysisConfig::default().without_charts().without_progress()
}

fn lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(String::from)
        .collect()
}

#[test]
fn test_realistic_listing_reports() {
    let listing = realistic_listing();
    let (_temp_dir, csv_dir, out_dir) = setup(&[("ist_ank_2024-05-01.csv", &listing)]);

    let outcome = AnalysisPipeline::new(&csv_dir, &out_dir)
        .with_config(config())
        .run()
        .unwrap();

    let report = match outcome {
        AnalysisOutcome::Report(report) => report,
        AnalysisOutcome::Empty { .. } => panic!("Expected a report"),
    };

    assert_eq!(report.total_rows, 6);
    assert_eq!(report.output_dir, out_dir);

    // AJet mean covers only its parseable price
    let order: Vec<_> = report
        .airline_stats
        .iter()
        .map(|s| s.airline.as_str())
        .collect();
    assert_eq!(order, vec!["AJet", "Pegasus", "THY"]);
    assert_eq!(report.airline_stats[0].min_price, Some(999));
    assert_eq!(report.airline_stats[0].mean_price, Some(999.0));
    assert_eq!(report.airline_stats[1].mean_price, Some(1574.0));
    assert_eq!(report.airline_stats[2].max_price, Some(3100));

    assert_eq!(report.hourly_grid.hours, vec![6, 8, 18, 21]);
    assert_eq!(report.hourly_grid.get("THY", 8), Some(2775.0));
    assert_eq!(report.hourly_grid.get("AJet", 21), None);

    // The unpriced AJet listing cannot be ranked
    assert_eq!(report.ranking.len(), 5);
    assert!(report.ranking.windows(2).all(|w| w[0].score <= w[1].score));
    assert_eq!(report.ranking[0].airline, "AJet");
    assert_eq!(report.ranking.last().unwrap().duration_min, 205);

    assert_eq!(lines(&out_dir.join(HEATMAP_CSV))[0], "airline,6,8,18,21");
    assert_eq!(lines(&out_dir.join(RANKING_CSV)).len(), 6);
    assert_eq!(lines(&out_dir.join(AIRLINE_STATS_CSV)).len(), 4);
}

#[test]
fn test_report_functions_agree_with_pipeline() {
    let listing = realistic_listing();
    let (_temp_dir, csv_dir, out_dir) = setup(&[("listing.csv", &listing)]);

    let dataset = DatasetLoader::new(&csv_dir, &config()).load().unwrap();
    let stats = airline_stats::stat_rows(&airline_stats::airline_price_stats(dataset.frame()).unwrap())
        .unwrap();
    let grid = heatmap::hourly_mean_prices(dataset.frame()).unwrap();
    let ranked = ranking::ranked_rows(&ranking::rank_cost_effective(dataset.frame(), 10).unwrap())
        .unwrap();

    let outcome = AnalysisPipeline::new(&csv_dir, &out_dir)
        .with_config(config())
        .run()
        .unwrap();
    let report = outcome.report().unwrap();

    assert_eq!(report.airline_stats, stats);
    assert_eq!(report.hourly_grid, grid);
    assert_eq!(report.ranking, ranked);
}

#[test]
fn test_reports_from_in_memory_records() {
    let records: Vec<FlightRecord> = [
        ("AirX", "$100", "08:00", "2:00"),
        ("AirY", "150 TL", "09:30", "1sa 30dk"),
    ]
    .into_iter()
    .map(|(airline, price, departure, duration)| {
        FlightRecord::from(RawRecord {
            airline: Some(airline.to_string()),
            price: Some(price.to_string()),
            departure_time: Some(departure.to_string()),
            arrival_time: Some("11:00".to_string()),
            duration: Some(duration.to_string()),
            stops: Some("0".to_string()),
        })
    })
    .collect();

    assert_eq!(records[1].duration_min, Some(90));
    assert_eq!(records[1].dep_hour, Some(9));

    let frame = records_to_frame(&records).unwrap();
    let grid = heatmap::hourly_mean_prices(&frame).unwrap();
    assert_eq!(grid.dimensions(), (2, 2));
    assert_eq!(grid.get("AirX", 9), None);
}

#[test]
fn test_empty_directory_is_not_an_error() {
    let (_temp_dir, csv_dir, out_dir) = setup(&[]);

    let outcome = AnalysisPipeline::new(&csv_dir, &out_dir)
        .with_config(config())
        .run()
        .unwrap();

    assert_eq!(outcome, AnalysisOutcome::Empty { files_discovered: 0 });
    assert!(!out_dir.join(AIRLINE_STATS_CSV).exists());
    assert!(!out_dir.join(HEATMAP_CSV).exists());
    assert!(!out_dir.join(RANKING_CSV).exists());
}

#[test]
fn test_nested_output_directory_created() {
    let listing = realistic_listing();
    let (_temp_dir, csv_dir, out_dir) = setup(&[("listing.csv", &listing)]);
    assert!(!out_dir.exists());

    AnalysisPipeline::new(&csv_dir, &out_dir)
        .with_config(config())
        .run()
        .unwrap();

    assert!(out_dir.is_dir());
}

#[test]
fn test_missing_input_directory_is_empty_outcome() {
    let temp_dir = TempDir::new().unwrap();
    let outcome = AnalysisPipeline::new(temp_dir.path().join("nope"), temp_dir.path().join("out"))
        .with_config(config())
        .run()
        .unwrap();

    assert_eq!(outcome, AnalysisOutcome::Empty { files_discovered: 0 });
}

#[test]
fn test_missing_column_error_names_file() {
    let (_temp_dir, csv_dir, out_dir) = setup(&[("fares.csv", "airline,price\nAirX,100\n")]);

    let error = AnalysisPipeline::new(&csv_dir, &out_dir)
        .with_config(config())
        .run()
        .unwrap_err();

    assert!(matches!(error, AnalysisError::MissingColumn { .. }));
    assert!(error.to_string().contains("fares.csv"));
}
