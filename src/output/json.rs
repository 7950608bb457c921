//! JSON and YAML output

use crate::error::{Result, WxError};
use crate::inventory::ExportRecord;

/// Render records as a pretty-printed JSON array
pub fn render_json(records: &[ExportRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Render records as a YAML sequence
pub fn render_yaml(records: &[ExportRecord]) -> Result<String> {
    serde_yml::to_string(records).map_err(|e| WxError::Export(format!("YAML: {}", e)))
}
