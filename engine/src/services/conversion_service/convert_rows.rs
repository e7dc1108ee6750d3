// Pure part of a run: partition, re-date, map.
use super::helpers::summarize;
use super::ConversionOutcome;
use crate::transform::{build_export_table, normalize_row_dates};
use crate::validation::partition;
use shared::models::RawRow;
use tracing::{info, warn};

pub fn handle_convert_rows(rows: Vec<RawRow>, target_year: i32) -> ConversionOutcome {
    let input_rows = rows.len();

    let (valid, invalid_rows) = partition(rows);
    if !invalid_rows.is_empty() {
        warn!(
            invalid = invalid_rows.len(),
            "Invalid CPFs found; those rows are excluded from the export"
        );
    }

    let (dated, dropped_dates) = normalize_row_dates(valid, target_year);
    if dropped_dates > 0 {
        warn!(dropped = dropped_dates, "Rows with unreadable dates were left out of the export");
    }

    let export_rows = build_export_table(&dated);
    let summary = summarize(input_rows, &export_rows, invalid_rows.len(), dropped_dates);
    info!(
        input = summary.input_rows,
        exported = summary.exported_rows,
        invalid = summary.invalid_rows,
        target_year,
        "Conversion finished"
    );

    ConversionOutcome {
        export_rows,
        invalid_rows,
        summary,
    }
}
