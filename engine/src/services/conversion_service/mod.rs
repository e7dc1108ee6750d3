// engine/src/services/conversion_service/mod.rs
// ConversionService runs one input file through the whole pipeline:
// load -> partition -> re-date -> map -> write.
use crate::config::ConverterSettings;
use crate::data::spreadsheet_loader::SpreadsheetLoader;
use crate::error::EngineResult;
use shared::models::{ConversionSummary, ExportRow, RawRow, ValidatedRow};
use std::path::{Path, PathBuf};

pub mod convert_rows;
pub mod helpers;
pub mod write_outputs;

/// In-memory result of a run, before anything touches the disk.
#[derive(Debug, Clone)]
pub struct ConversionOutcome {
    pub export_rows: Vec<ExportRow>,
    pub invalid_rows: Vec<ValidatedRow>,
    pub summary: ConversionSummary,
}

#[derive(Debug, Clone)]
pub struct ConversionReport {
    pub outcome: ConversionOutcome,
    pub export_path: PathBuf,
    /// Present only when at least one row failed CPF validation.
    pub invalid_report_path: Option<PathBuf>,
}

pub struct ConversionService {
    settings: ConverterSettings,
}

impl ConversionService {
    pub fn new(settings: ConverterSettings) -> Self {
        ConversionService { settings }
    }

    pub fn settings(&self) -> &ConverterSettings {
        &self.settings
    }

    pub fn convert_rows(&self, rows: Vec<RawRow>) -> ConversionOutcome {
        tracing::info!(
            rows = rows.len(),
            target_year = self.settings.target_year,
            "Converting rows"
        );
        convert_rows::handle_convert_rows(rows, self.settings.target_year)
    }

    pub fn run(&self, input: &Path) -> EngineResult<ConversionReport> {
        tracing::info!(path = %input.display(), "Received input file");
        let rows = SpreadsheetLoader::load_rows(input)?;
        let outcome = self.convert_rows(rows);
        write_outputs::handle_write_outputs(outcome, &self.settings)
    }
}
