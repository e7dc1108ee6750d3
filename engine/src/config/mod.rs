// Converter configuration
pub mod settings;

pub use settings::ConverterSettings;
