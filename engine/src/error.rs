use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Configuration file format error: {source}")]
    ConfigFormatError {
        #[from]
        source: serde_json::Error,
    },

    #[error("CSV system error: {source}")]
    CsvSystemError {
        #[from]
        source: csv::Error,
    },

    #[error("Spreadsheet error: {source}")]
    SpreadsheetError {
        #[from]
        source: calamine::Error,
    },

    #[error("I/O error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    #[error("Unsupported input file '{0}': expected .xlsx, .xlsm, .xls, .ods or .csv")]
    UnsupportedInput(String),

    #[error("Input layout error: {0}")]
    InputLayoutError(String),

    #[error(transparent)]
    AnyhowError(#[from] anyhow::Error),
}

pub type EngineResult<T> = Result<T, EngineError>;
