use crate::error::{EngineError, EngineResult};
use anyhow::{anyhow, Context};
use calamine::{open_workbook_auto, Data, DataType, Reader};
use csv::ReaderBuilder;
use encoding_rs::WINDOWS_1252;
use shared::models::RawRow;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::{debug, info};

// Fixed template: data starts on spreadsheet row 9, columns B..F hold
// Data, CPF_Titular, CPF_Beneficiario, Descricao, Valor.
pub mod layout {
    pub const FIRST_DATA_ROW: usize = 8;
    pub const FIRST_COLUMN: usize = 1;
    pub const COLUMN_COUNT: usize = 5;
}

// Text rendering of native date cells, picked up by the date normalizer.
pub const NATIVE_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Workbook,
    Csv,
}

impl InputKind {
    pub fn from_path(path: &Path) -> EngineResult<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("xlsx" | "xlsm" | "xlsb" | "xls" | "ods") => Ok(InputKind::Workbook),
            Some("csv") => Ok(InputKind::Csv),
            _ => Err(EngineError::UnsupportedInput(path.display().to_string())),
        }
    }
}

pub struct SpreadsheetLoader;

impl SpreadsheetLoader {
    pub fn load_rows(path: &Path) -> EngineResult<Vec<RawRow>> {
        let rows = match InputKind::from_path(path)? {
            InputKind::Workbook => Self::load_rows_from_workbook(path)?,
            InputKind::Csv => Self::load_rows_from_csv(path)?,
        };
        info!(path = %path.display(), rows = rows.len(), "Loaded input rows");
        Ok(rows)
    }

    /// Reads the first worksheet of an Excel or OpenDocument workbook.
    pub fn load_rows_from_workbook(path: &Path) -> EngineResult<Vec<RawRow>> {
        let mut workbook = open_workbook_auto(path)?;
        let range = workbook.worksheet_range_at(0).ok_or_else(|| {
            EngineError::InputLayoutError(format!("No worksheet found in '{}'", path.display()))
        })??;

        let row_count = match range.end() {
            Some((last_row, _)) => last_row as usize + 1,
            None => return Ok(Vec::new()),
        };

        // get_value takes absolute coordinates, so the window stays anchored on
        // row 9 / column B even when the used range starts elsewhere.
        Ok(Self::extract_window(row_count, |row, col| {
            range
                .get_value((row as u32, col as u32))
                .and_then(Self::cell_text)
        }))
    }

    /// Reads a `;` separated export of the same template. Row and column
    /// positions match the spreadsheet: line 9, second field onwards.
    /// Cells are decoded one by one, so bytes outside the window never matter.
    pub fn load_rows_from_csv(path: &Path) -> anyhow::Result<Vec<RawRow>> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open CSV file '{}'", path.display()))?;
        let mut rdr = ReaderBuilder::new()
            .delimiter(b';')
            .has_headers(false)
            .flexible(true)
            .from_reader(BufReader::new(file));

        let mut records = Vec::new();
        for (idx, result) in rdr.byte_records().enumerate() {
            let record = result.map_err(|e| anyhow!("Error reading CSV record at line {}: {}", idx + 1, e))?;
            records.push(record);
        }

        Ok(Self::extract_window(records.len(), |row, col| {
            records
                .get(row)
                .and_then(|record| record.get(col))
                .filter(|bytes| !bytes.is_empty())
                .map(Self::decode_field)
        }))
    }

    // Excel on Windows saves "CSV (separado por ponto e vírgula)" as Windows-1252.
    fn decode_field(bytes: &[u8]) -> String {
        match std::str::from_utf8(bytes) {
            Ok(text) => text.to_string(),
            Err(_) => WINDOWS_1252.decode_without_bom_handling(bytes).0.into_owned(),
        }
    }

    /// Cuts the B..F window out of a grid, starting at the first data row.
    /// Rows with every window cell empty are skipped.
    pub fn extract_window<F>(row_count: usize, mut cell: F) -> Vec<RawRow>
    where
        F: FnMut(usize, usize) -> Option<String>,
    {
        let mut rows = Vec::new();
        let mut blank = 0usize;
        for row in layout::FIRST_DATA_ROW..row_count {
            let mut fields = (layout::FIRST_COLUMN..layout::FIRST_COLUMN + layout::COLUMN_COUNT)
                .map(|col| cell(row, col));
            let raw = RawRow {
                date: fields.next().flatten(),
                payer_id: fields.next().flatten(),
                beneficiary_id: fields.next().flatten(),
                description: fields.next().flatten(),
                amount: fields.next().flatten(),
            };
            if raw.is_blank() {
                blank += 1;
            } else {
                rows.push(raw);
            }
        }
        if blank > 0 {
            debug!(blank, "Skipped blank rows inside the data window");
        }
        rows
    }

    // Strings stay verbatim, numbers use their shortest rendering (12345678909,
    // 150.5) and date cells become NATIVE_DATE_FORMAT text.
    fn cell_text(cell: &Data) -> Option<String> {
        if cell.is_empty() {
            return None;
        }
        if let Some(text) = cell.get_string() {
            return Some(text.to_string()).filter(|t| !t.is_empty());
        }
        if cell.is_datetime() {
            if let Some(datetime) = cell.as_datetime() {
                return Some(datetime.format(NATIVE_DATE_FORMAT).to_string());
            }
        }
        Some(cell.to_string())
    }
}
