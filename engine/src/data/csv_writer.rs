// Writers for the two run outputs.
use crate::error::EngineResult;
use csv::{Terminator, WriterBuilder};
use shared::models::{ExportRow, InvalidRowRecord, ValidatedRow};
use std::io::Write;

pub const DELIMITER: u8 = b';';

/// Carnê-Leão import file: no header, ten fields per line, `\n` terminated.
pub fn write_export<W: Write>(rows: &[ExportRow], writer: W) -> EngineResult<()> {
    let mut wtr = WriterBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(false)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);
    for row in rows {
        wtr.write_record(row.fields())?;
    }
    wtr.flush()?;
    Ok(())
}

/// Report of rejected rows with their CPF flags, header included.
pub fn write_invalid_report<W: Write>(rows: &[ValidatedRow], writer: W) -> EngineResult<()> {
    let mut wtr = WriterBuilder::new()
        .delimiter(DELIMITER)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);
    for row in rows {
        wtr.serialize(InvalidRowRecord::from(row))?;
    }
    wtr.flush()?;
    Ok(())
}
