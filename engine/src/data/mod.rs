// Input loading and output writing
pub mod csv_writer;
pub mod spreadsheet_loader;
