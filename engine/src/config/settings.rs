// Converter settings: embedded defaults, optionally replaced by a JSON file and
// then by command line flags. Loading never validates; call `validate` once the
// final values are known.
use crate::error::{EngineError, EngineResult};
use chrono::{Datelike, Local};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const MIN_TARGET_YEAR: i32 = 2019;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ConverterSettings {
    /// Fiscal year every exported date is moved into.
    pub target_year: i32,
    pub output_dir: PathBuf,
    pub export_file_name: String,
    pub invalid_report_file_name: String,
    /// Export lines echoed by the CLI after a run.
    pub preview_rows: usize,
}

impl Default for ConverterSettings {
    fn default() -> Self {
        ConverterSettings {
            target_year: 2024,
            output_dir: PathBuf::from("."),
            export_file_name: "CSV_Carne_Leao_DeclaraPsi.csv".to_string(),
            invalid_report_file_name: "linhas_invalidas.csv".to_string(),
            preview_rows: 10,
        }
    }
}

impl ConverterSettings {
    pub fn load_default() -> EngineResult<Self> {
        let config_str = include_str!("../../config/default.json");
        Self::from_json(config_str)
    }

    pub fn load_from_file(path: &Path) -> EngineResult<Self> {
        let config_str = fs::read_to_string(path).map_err(|e| {
            EngineError::ConfigError(format!("Cannot read config file '{}': {}", path.display(), e))
        })?;
        Self::from_json(&config_str)
    }

    pub fn from_json(config_str: &str) -> EngineResult<Self> {
        let settings: ConverterSettings = serde_json::from_str(config_str)?;
        Ok(settings)
    }

    pub fn max_target_year() -> i32 {
        Local::now().year()
    }

    pub fn validate(&self) -> EngineResult<()> {
        let max_year = Self::max_target_year();
        if !(MIN_TARGET_YEAR..=max_year).contains(&self.target_year) {
            return Err(EngineError::ConfigError(format!(
                "target year {} outside supported range {}..={}",
                self.target_year, MIN_TARGET_YEAR, max_year
            )));
        }
        if self.export_file_name.trim().is_empty() {
            return Err(EngineError::ConfigError("export file name is empty".to_string()));
        }
        if self.invalid_report_file_name.trim().is_empty() {
            return Err(EngineError::ConfigError(
                "invalid report file name is empty".to_string(),
            ));
        }
        if self.export_file_name == self.invalid_report_file_name {
            return Err(EngineError::ConfigError(
                "export and invalid report would be written to the same file".to_string(),
            ));
        }
        Ok(())
    }

    pub fn export_path(&self) -> PathBuf {
        self.output_dir.join(&self.export_file_name)
    }

    pub fn invalid_report_path(&self) -> PathBuf {
        self.output_dir.join(&self.invalid_report_file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_embedded_defaults_match_default_impl() {
        assert_eq!(ConverterSettings::load_default().unwrap(), ConverterSettings::default());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = ConverterSettings::from_json(r#"{ "target_year": 2022 }"#).unwrap();
        assert_eq!(settings.target_year, 2022);
        assert_eq!(settings.export_file_name, "CSV_Carne_Leao_DeclaraPsi.csv");
    }

    #[test]
    fn test_year_range_is_enforced() {
        let too_old = ConverterSettings::from_json(r#"{ "target_year": 2018 }"#).unwrap();
        assert!(matches!(too_old.validate(), Err(EngineError::ConfigError(_))));

        let future = ConverterSettings {
            target_year: ConverterSettings::max_target_year() + 1,
            ..ConverterSettings::default()
        };
        assert!(future.validate().is_err());

        let current = ConverterSettings {
            target_year: ConverterSettings::max_target_year(),
            ..ConverterSettings::default()
        };
        assert!(current.validate().is_ok());
    }

    #[test]
    fn test_same_output_names_rejected() {
        let settings = ConverterSettings {
            invalid_report_file_name: "out.csv".to_string(),
            export_file_name: "out.csv".to_string(),
            ..ConverterSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_malformed_json_is_format_error() {
        let result = ConverterSettings::from_json("{ target_year: }");
        assert!(matches!(result, Err(EngineError::ConfigFormatError { .. })));
    }

    #[test]
    fn test_file_year_can_be_overridden_before_validation() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{ "target_year": 2018 }}"#).unwrap();
        let mut settings = ConverterSettings::load_from_file(file.path()).unwrap();
        assert!(settings.validate().is_err());

        settings.target_year = 2022;
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{ "target_year": 2020, "output_dir": "/tmp/out" }}"#).unwrap();
        let settings = ConverterSettings::load_from_file(file.path()).unwrap();
        assert_eq!(settings.target_year, 2020);
        assert_eq!(settings.export_path(), PathBuf::from("/tmp/out/CSV_Carne_Leao_DeclaraPsi.csv"));
    }
}
