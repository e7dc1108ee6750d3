// Services exposed by the engine. Each service module keeps its handlers as
// sibling submodules.
pub mod conversion_service;

pub use conversion_service::{ConversionOutcome, ConversionReport, ConversionService};
