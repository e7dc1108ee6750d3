// Splits loaded rows into the exportable set and the set that goes to the
// invalid-CPF report.
use super::cpf::{is_valid_cpf, normalize_cpf};
use shared::models::{RawRow, ValidatedRow};

/// Row with both identifiers normalized and the beneficiary defaulted to the payer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRow {
    pub raw: RawRow,
    pub payer_id: String,
    pub beneficiary_id: String,
}

/// When the beneficiary column is blank the payer is also the beneficiary.
pub fn fill_beneficiary(raw: RawRow) -> NormalizedRow {
    let payer_id = normalize_cpf(raw.payer_id.as_deref());
    let beneficiary_id = match normalize_cpf(raw.beneficiary_id.as_deref()) {
        id if id.is_empty() => payer_id.clone(),
        id => id,
    };
    NormalizedRow {
        raw,
        payer_id,
        beneficiary_id,
    }
}

pub fn validate_row(row: NormalizedRow) -> ValidatedRow {
    let payer_id_valid = is_valid_cpf(&row.payer_id);
    let beneficiary_id_valid = is_valid_cpf(&row.beneficiary_id);
    ValidatedRow {
        date: row.raw.date,
        payer_id: row.payer_id,
        beneficiary_id: row.beneficiary_id,
        description: row.raw.description,
        amount: row.raw.amount,
        payer_id_valid,
        beneficiary_id_valid,
    }
}

/// Returns `(valid, invalid)`, both in input order.
pub fn partition(rows: Vec<RawRow>) -> (Vec<ValidatedRow>, Vec<ValidatedRow>) {
    rows.into_iter()
        .map(fill_beneficiary)
        .map(validate_row)
        .partition(ValidatedRow::is_valid)
}
