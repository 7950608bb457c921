//! Table output to stdout

use comfy_table::{presets::NOTHING, Table};

use super::ExportSink;
use crate::error::Result;
use crate::inventory::ExportRecord;

/// Sink that prints records as an ASCII table
pub struct TableExporter;

fn build_table(records: &[ExportRecord]) -> Table {
    let mut table = Table::new();
    table.load_preset(NOTHING).set_header(ExportRecord::COLUMNS);
    for record in records {
        table.add_row(record.values());
    }
    table
}

impl ExportSink for TableExporter {
    fn export(&self, records: &[ExportRecord]) -> Result<String> {
        println!("{}", build_table(records));
        Ok("stdout".to_string())
    }
}
