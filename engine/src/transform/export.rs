// Maps validated, re-dated rows onto the Carnê-Leão import layout.
use shared::models::{ExportRow, ValidatedRow};

pub fn to_export_row(row: &ValidatedRow) -> ExportRow {
    ExportRow::new(
        row.date.clone().unwrap_or_default(),
        row.amount.clone().unwrap_or_default(),
        row.description.clone().unwrap_or_default(),
        row.payer_id.clone(),
        row.beneficiary_id.clone(),
    )
}

/// One export line per row, same order. Expects the valid partition after
/// `normalize_row_dates`; amounts are copied as text without coercion.
pub fn build_export_table(rows: &[ValidatedRow]) -> Vec<ExportRow> {
    rows.iter().map(to_export_row).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(date: &str, amount: Option<&str>, description: Option<&str>) -> ValidatedRow {
        ValidatedRow {
            date: Some(date.to_string()),
            payer_id: "12345678909".to_string(),
            beneficiary_id: "11144477735".to_string(),
            description: description.map(str::to_string),
            amount: amount.map(str::to_string),
            payer_id_valid: true,
            beneficiary_id_valid: true,
        }
    }

    #[test]
    fn test_export_row_layout() {
        let table = build_export_table(&[row("15/03/2024", Some("150.00"), Some("Consulta"))]);
        assert_eq!(table.len(), 1);
        assert_eq!(
            table[0].fields(),
            [
                "15/03/2024",
                "R01.001.001",
                "255",
                "150.00",
                "",
                "Consulta",
                "PF",
                "12345678909",
                "11144477735",
                "",
            ]
        );
    }

    #[test]
    fn test_absent_amount_and_description_become_empty() {
        let table = build_export_table(&[row("01/01/2024", None, None)]);
        assert_eq!(table[0].amount(), "");
        assert_eq!(table[0].description(), "");
    }

    #[test]
    fn test_amount_is_not_coerced() {
        let table = build_export_table(&[row("01/01/2024", Some("1.234,56"), Some("x"))]);
        assert_eq!(table[0].amount(), "1.234,56");
    }

    #[test]
    fn test_mapping_preserves_length_and_order() {
        let rows: Vec<ValidatedRow> = (1..=12)
            .map(|m| row(&format!("01/{:02}/2024", m), Some("1"), Some(&m.to_string())))
            .collect();
        let table = build_export_table(&rows);
        assert_eq!(table.len(), rows.len());
        for (m, export) in (1..=12).zip(&table) {
            assert_eq!(export.description(), m.to_string());
            assert_eq!(export.date(), format!("01/{:02}/2024", m));
        }
    }

    #[test]
    fn test_empty_input_gives_empty_table() {
        assert!(build_export_table(&[]).is_empty());
    }
}
