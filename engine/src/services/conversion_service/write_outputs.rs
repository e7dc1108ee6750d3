// Writes the export (always) and the invalid report (only when needed).
use super::{ConversionOutcome, ConversionReport};
use crate::config::ConverterSettings;
use crate::data::csv_writer::{write_export, write_invalid_report};
use crate::error::EngineResult;
use std::fs::{self, File};
use std::io::BufWriter;
use tracing::info;

pub fn handle_write_outputs(
    outcome: ConversionOutcome,
    settings: &ConverterSettings,
) -> EngineResult<ConversionReport> {
    fs::create_dir_all(&settings.output_dir)?;

    let export_path = settings.export_path();
    write_export(&outcome.export_rows, BufWriter::new(File::create(&export_path)?))?;
    info!(path = %export_path.display(), lines = outcome.export_rows.len(), "Wrote Carnê-Leão CSV");

    let report_path = settings.invalid_report_path();
    let invalid_report_path = if outcome.invalid_rows.is_empty() {
        // A report left over from an earlier run would contradict this one.
        if report_path.exists() {
            fs::remove_file(&report_path)?;
        }
        None
    } else {
        write_invalid_report(&outcome.invalid_rows, BufWriter::new(File::create(&report_path)?))?;
        info!(path = %report_path.display(), rows = outcome.invalid_rows.len(), "Wrote invalid CPF report");
        Some(report_path)
    };

    Ok(ConversionReport {
        outcome,
        export_path,
        invalid_report_path,
    })
}
