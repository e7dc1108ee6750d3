use serde::Serialize;

/// Fixed account code for self-employed income ("trabalho não assalariado").
pub const ACCOUNT_CODE: &str = "R01.001.001";
/// Fixed history code used by the Carnê-Leão import.
pub const HISTORY_CODE: &str = "255";
/// Payer kind: natural person.
pub const PAYER_KIND: &str = "PF";

/// One spreadsheet line, as read from columns B–F. Every field is kept as text
/// because the source spreadsheets are hand-filled and unreliable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    pub date: Option<String>,
    pub payer_id: Option<String>,
    pub beneficiary_id: Option<String>,
    pub description: Option<String>,
    pub amount: Option<String>,
}

impl RawRow {
    pub fn is_blank(&self) -> bool {
        [
            &self.date,
            &self.payer_id,
            &self.beneficiary_id,
            &self.description,
            &self.amount,
        ]
        .iter()
        .all(|field| field.as_deref().map_or(true, |s| s.trim().is_empty()))
    }
}

/// A row after CPF normalization, carrying the outcome of both checksum checks.
/// `payer_id` and `beneficiary_id` hold normalized digit strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRow {
    pub date: Option<String>,
    pub payer_id: String,
    pub beneficiary_id: String,
    pub description: Option<String>,
    pub amount: Option<String>,
    pub payer_id_valid: bool,
    pub beneficiary_id_valid: bool,
}

impl ValidatedRow {
    pub fn is_valid(&self) -> bool {
        self.payer_id_valid && self.beneficiary_id_valid
    }
}

/// One line of the Carnê-Leão import file. Written through `fields()`, which
/// adds the fixed codes and empty columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRow {
    date: String,
    amount: String,
    description: String,
    payer_cpf: String,
    beneficiary_cpf: String,
}

impl ExportRow {
    pub fn new(
        date: String,
        amount: String,
        description: String,
        payer_cpf: String,
        beneficiary_cpf: String,
    ) -> Self {
        ExportRow {
            date,
            amount,
            description,
            payer_cpf,
            beneficiary_cpf,
        }
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn amount(&self) -> &str {
        &self.amount
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn payer_cpf(&self) -> &str {
        &self.payer_cpf
    }

    pub fn beneficiary_cpf(&self) -> &str {
        &self.beneficiary_cpf
    }

    /// The ten columns in import order. Columns 5 and 10 are always empty.
    pub fn fields(&self) -> [&str; 10] {
        [
            self.date.as_str(),
            ACCOUNT_CODE,
            HISTORY_CODE,
            self.amount.as_str(),
            "",
            self.description.as_str(),
            PAYER_KIND,
            self.payer_cpf.as_str(),
            self.beneficiary_cpf.as_str(),
            "",
        ]
    }
}

/// Row of the invalid-CPF report. Column names follow the spreadsheet template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvalidRowRecord {
    #[serde(rename = "Data")]
    pub date: String,
    #[serde(rename = "CPF_Titular")]
    pub payer_id: String,
    #[serde(rename = "CPF_Beneficiario")]
    pub beneficiary_id: String,
    #[serde(rename = "Descricao")]
    pub description: String,
    #[serde(rename = "Valor")]
    pub amount: String,
    #[serde(rename = "CPF_Titular_Valido")]
    pub payer_id_valid: bool,
    #[serde(rename = "CPF_Beneficiario_Valido")]
    pub beneficiary_id_valid: bool,
}

impl From<&ValidatedRow> for InvalidRowRecord {
    fn from(row: &ValidatedRow) -> Self {
        InvalidRowRecord {
            date: row.date.clone().unwrap_or_default(),
            payer_id: row.payer_id.clone(),
            beneficiary_id: row.beneficiary_id.clone(),
            description: row.description.clone().unwrap_or_default(),
            amount: row.amount.clone().unwrap_or_default(),
            payer_id_valid: row.payer_id_valid,
            beneficiary_id_valid: row.beneficiary_id_valid,
        }
    }
}

/// Counters and totals for one conversion run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConversionSummary {
    pub input_rows: usize,
    pub exported_rows: usize,
    pub invalid_rows: usize,
    pub dropped_dates: usize,
    pub non_numeric_amounts: usize,
    pub total_amount: f64,
}
