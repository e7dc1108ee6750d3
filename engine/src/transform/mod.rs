// Transforms applied to the valid partition before export.
pub mod dates;
pub mod export;

pub use dates::{normalize_date, normalize_row_dates};
pub use export::build_export_table;
