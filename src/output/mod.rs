//! Export sinks
//!
//! Handles the export formats: CSV, JSON and YAML files, or a table on stdout

mod csv;
mod file;
mod json;
mod table;

use chrono::{DateTime, Local};
use std::path::Path;

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::inventory::ExportRecord;

pub use self::file::FileExporter;
pub use self::table::TableExporter;

/// Consumer of the finished record list
pub trait ExportSink {
    /// Persist `records`, returning a description of the artifact
    fn export(&self, records: &[ExportRecord]) -> Result<String>;
}

/// On-disk export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Csv,
    Json,
    Yaml,
}

impl FileFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            FileFormat::Csv => "csv",
            FileFormat::Json => "json",
            FileFormat::Yaml => "yaml",
        }
    }
}

/// `<prefix>_<YYYYmmdd_HHMMSS>.<extension>`
pub fn export_file_name(prefix: &str, timestamp: &DateTime<Local>, extension: &str) -> String {
    format!(
        "{}_{}.{}",
        prefix,
        timestamp.format("%Y%m%d_%H%M%S"),
        extension
    )
}

/// Pick the sink for a CLI output format
pub fn sink_for(format: OutputFormat, output_dir: &Path) -> Box<dyn ExportSink> {
    match format {
        OutputFormat::Csv => Box::new(FileExporter::new(output_dir, FileFormat::Csv)),
        OutputFormat::Json => Box::new(FileExporter::new(output_dir, FileFormat::Json)),
        OutputFormat::Yaml => Box::new(FileExporter::new(output_dir, FileFormat::Yaml)),
        OutputFormat::Table => Box::new(TableExporter),
    }
}
