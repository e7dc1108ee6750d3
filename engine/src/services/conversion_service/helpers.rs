// Helper functions shared by the conversion handlers
use shared::models::{ConversionSummary, ExportRow};
use shared::utils::brazilian_format::parse_amount;

/// Totals for a run. Amounts that are not plain numbers count as zero in the
/// total but are left untouched in the export itself.
pub fn summarize(
    input_rows: usize,
    export_rows: &[ExportRow],
    invalid_rows: usize,
    dropped_dates: usize,
) -> ConversionSummary {
    let mut total_amount = 0.0;
    let mut non_numeric_amounts = 0;
    for row in export_rows {
        match parse_amount(row.amount()) {
            Some(value) => total_amount += value,
            None => non_numeric_amounts += 1,
        }
    }

    ConversionSummary {
        input_rows,
        exported_rows: export_rows.len(),
        invalid_rows,
        dropped_dates,
        non_numeric_amounts,
        total_amount,
    }
}
