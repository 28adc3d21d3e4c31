use anyhow::Context;
use clap::Parser;
use colored::*;
use flight_analysis::cli::{Args, setup_logging};
use flight_analysis::{AnalysisOutcome, AnalysisPipeline};
use std::process;

fn main() {
    let args = Args::parse();
    setup_logging(&args);

    match run(&args) {
        Ok(AnalysisOutcome::Empty { .. }) => {
            println!("{}", "No CSV files found or data is empty.".bright_yellow());
        }
        Ok(AnalysisOutcome::Report(report)) => {
            if !args.quiet {
                println!(
                    "\n{} {}",
                    "Analysis complete. Outputs:".bright_green().bold(),
                    report.output_dir.display()
                );
            }
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

fn run(args: &Args) -> anyhow::Result<AnalysisOutcome> {
    let pipeline = AnalysisPipeline::new(&args.csv_dir, &args.out).with_config(args.to_config());

    pipeline
        .run()
        .with_context(|| format!("Failed to analyze {}", args.csv_dir.display()))
}
