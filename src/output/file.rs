//! Timestamped export files

use chrono::{DateTime, Local};
use log::info;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::PathBuf;

use super::{csv, export_file_name, json, ExportSink, FileFormat};
use crate::config::defaults;
use crate::error::Result;
use crate::inventory::ExportRecord;

/// Sink that writes `<prefix>_<YYYYmmdd_HHMMSS>.<ext>` into a directory
#[derive(Debug, Clone)]
pub struct FileExporter {
    output_dir: PathBuf,
    format: FileFormat,
    prefix: String,
    /// Fixed timestamp for the file name; `None` uses the time of export
    timestamp: Option<DateTime<Local>>,
}

impl FileExporter {
    pub fn new(output_dir: impl Into<PathBuf>, format: FileFormat) -> Self {
        Self {
            output_dir: output_dir.into(),
            format,
            prefix: defaults::FILE_PREFIX.to_string(),
            timestamp: None,
        }
    }

    /// Pin the timestamp used in the file name
    pub fn with_timestamp(mut self, timestamp: DateTime<Local>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }
}

impl ExportSink for FileExporter {
    fn export(&self, records: &[ExportRecord]) -> Result<String> {
        fs::create_dir_all(&self.output_dir)?;

        let timestamp = self.timestamp.unwrap_or_else(Local::now);
        let path = self.output_dir.join(export_file_name(
            &self.prefix,
            &timestamp,
            self.format.extension(),
        ));

        match self.format {
            FileFormat::Csv => csv::write_csv(BufWriter::new(File::create(&path)?), records)?,
            FileFormat::Json => fs::write(&path, json::render_json(records)?)?,
            FileFormat::Yaml => fs::write(&path, json::render_yaml(records)?)?,
        }

        info!("Wrote {} records to {}", records.len(), path.display());
        Ok(path.display().to_string())
    }
}
