//! CSV output

use std::io::Write;

use crate::error::Result;
use crate::inventory::ExportRecord;

/// Write a header row plus one row per record
pub fn write_csv<W: Write>(writer: W, records: &[ExportRecord]) -> Result<()> {
    let mut csv_writer = ::csv::Writer::from_writer(writer);
    csv_writer.write_record(ExportRecord::COLUMNS)?;
    for record in records {
        csv_writer.write_record(record.values())?;
    }
    csv_writer.flush()?;
    Ok(())
}
