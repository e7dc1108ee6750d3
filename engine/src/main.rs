// carne-leao: command line entry point for the conversion engine
use anyhow::{Context, Result};
use clap::Parser;
use engine::config::ConverterSettings;
use engine::services::{ConversionReport, ConversionService};
use shared::utils::brazilian_format::format_currency;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "carne-leao")]
#[command(about = "Generates the Carnê-Leão import CSV from the standard income spreadsheet")]
#[command(version)]
struct Cli {
    /// Spreadsheet (.xlsx, .xls, .ods) or ';' separated .csv with data from row 9, columns B to F
    input: PathBuf,

    /// Fiscal year written into every exported date
    #[arg(long)]
    year: Option<i32>,

    /// Directory that receives the generated files
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// JSON file replacing the built-in settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of exported lines to print after the run
    #[arg(long)]
    preview: Option<usize>,
}

fn load_settings(cli: &Cli) -> Result<ConverterSettings> {
    let mut settings = match &cli.config {
        Some(path) => ConverterSettings::load_from_file(path)?,
        None => ConverterSettings::load_default()?,
    };
    if let Some(year) = cli.year {
        settings.target_year = year;
    }
    if let Some(dir) = &cli.output_dir {
        settings.output_dir = dir.clone();
    }
    if let Some(rows) = cli.preview {
        settings.preview_rows = rows;
    }
    settings.validate()?;
    Ok(settings)
}

fn print_report(report: &ConversionReport, preview_rows: usize) {
    let outcome = &report.outcome;
    let summary = &outcome.summary;

    if let Some(path) = &report.invalid_report_path {
        println!("⚠️  Invalid CPFs found. {} row(s) were excluded from the final CSV.", summary.invalid_rows);
        println!("   Correction report: {}", path.display());
    }
    if summary.dropped_dates > 0 {
        println!("⚠️  {} row(s) with unreadable dates were left out.", summary.dropped_dates);
    }

    if preview_rows > 0 && !outcome.export_rows.is_empty() {
        println!("\nPreview:");
        for row in outcome.export_rows.iter().take(preview_rows) {
            println!("   {}", row.fields().join(";"));
        }
        if outcome.export_rows.len() > preview_rows {
            println!("   ... {} more", outcome.export_rows.len() - preview_rows);
        }
    }

    println!("\nTotal lines processed: {}", summary.exported_rows);
    println!("Total amount: {}", format_currency(summary.total_amount));
    println!("Carnê-Leão CSV: {}", report.export_path.display());
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let settings = load_settings(&cli)?;
    let preview_rows = settings.preview_rows;
    info!(input = %cli.input.display(), target_year = settings.target_year, "Starting Carnê-Leão conversion");

    let service = ConversionService::new(settings);
    let report = service
        .run(&cli.input)
        .with_context(|| format!("Failed to convert '{}'", cli.input.display()))?;

    if report.outcome.summary.non_numeric_amounts > 0 {
        warn!(
            count = report.outcome.summary.non_numeric_amounts,
            "Some amounts are not numbers; they were exported as typed and counted as zero in the total"
        );
    }
    print_report(&report, preview_rows);
    Ok(())
}
