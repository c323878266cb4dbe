use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use colored::Colorize;
use data_loader::{cleaned_output_path, read_listings, write_listings};
use pipeline::{CategoryCount, CleaningConfig, FilterPipeline, RunReport};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// alf-clean - Assisted living listing cleaner
#[derive(Parser)]
#[command(name = "alf-clean")]
#[command(version)]
#[command(about = "Clean scraped assisted living listings down to complete, unique, in-region facilities", long_about = None)]
struct Cli {
    /// Scraped listings CSV; output goes to <input>_cleaned.csv
    input: PathBuf,
}

fn main() -> Result<()> {
    // Initialize tracing on stderr so the report on stdout stays readable
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                // Usage errors exit with 1 before any file is touched
                let _ = e.print();
                std::process::exit(1);
            }
        },
    };

    run(&cli.input)
}

/// Load, clean, save, report
fn run(input: &Path) -> Result<()> {
    println!("Loading data from {}...", input.display());
    let start = Instant::now();
    let listings = read_listings(input)
        .with_context(|| format!("Failed to load listings from {}", input.display()))?;
    println!("  Loaded {} rows", listings.len());

    println!("\nStarting cleaning pipeline...");
    let config = CleaningConfig::default();
    let outcome = FilterPipeline::standard(&config).apply(listings)?;
    print_stage_counts(&outcome.report);

    let output = cleaned_output_path(input);
    write_listings(&output, &outcome.records)
        .with_context(|| format!("Failed to write cleaned listings to {}", output.display()))?;
    tracing::info!("Cleaning finished in {:?}", start.elapsed());

    print_summary(&outcome.report, &output);
    Ok(())
}

/// One "Removed N ..." line per stage, printed before anything is written
fn print_stage_counts(report: &RunReport) {
    for stage in &report.stages {
        println!("  Removed {} {}", stage.removed_count(), stage.removal_label);
    }
}

/// Helper function to format and print the end-of-run summary
fn print_summary(report: &RunReport, output: &Path) {
    // 1. Totals and where the file went
    println!("\n{} {}", "✓".green(), "Cleaning complete!".bold());
    println!("  Original: {} rows", report.original_count);
    println!("  Final: {} rows", report.final_count);
    println!("  Saved to: {}", output.display());

    // 2. Category summary, if the data has categories at all
    if let Some(top) = &report.top_categories {
        println!("\n  {}", "Top categories in cleaned data:".bold().blue());
        let width = category_column_width(top);
        for entry in top {
            println!(
                "  {:<width$}  {}",
                entry.category,
                entry.count.to_string().cyan(),
                width = width
            );
        }
    }
}

/// Width of the category column, in characters (`{:<width$}` pads by chars)
fn category_column_width(top: &[CategoryCount]) -> usize {
    top.iter()
        .map(|c| c.category.chars().count())
        .max()
        .unwrap_or(0)
}
