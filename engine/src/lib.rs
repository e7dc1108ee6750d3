// Engine library root: the Carnê-Leão conversion pipeline.

pub mod config;
pub mod data;
pub mod error;
pub mod services;
pub mod transform;
pub mod validation;

pub use config::ConverterSettings;
pub use error::{EngineError, EngineResult};
pub use services::{ConversionOutcome, ConversionReport, ConversionService};
pub use transform::{build_export_table, normalize_date};
pub use validation::{is_valid_cpf, normalize_cpf, partition};
