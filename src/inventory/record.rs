//! Flat export row

use serde::Serialize;

use crate::webex::{Device, Workspace};

use super::resolver::WorkspaceEnrichment;

/// One exported row: a device joined with its workspace, location and floor
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ExportRecord {
    pub device_id: String,
    pub device_name: String,
    pub workspace_id: String,
    pub workspace_name: String,
    pub location_name: String,
    pub location_address: String,
    pub floor_number: String,
}

impl ExportRecord {
    /// Column titles for tabular exports, in field order
    pub const COLUMNS: [&'static str; 7] = [
        "Device ID",
        "Device Name",
        "Workspace ID",
        "Workspace Name",
        "Location Name",
        "Location Address",
        "Floor Number",
    ];

    /// Build a row for `device` enumerated under `workspace`
    ///
    /// The workspace ID always comes from the enumerating workspace, not from
    /// the device payload.
    pub fn new(device: &Device, workspace: &Workspace, enrichment: &WorkspaceEnrichment) -> Self {
        Self {
            device_id: device.id.clone(),
            device_name: device.display_name.clone(),
            workspace_id: workspace.id.clone(),
            workspace_name: workspace.display_name.clone(),
            location_name: enrichment.location_name.clone(),
            location_address: enrichment.address.clone(),
            floor_number: enrichment.floor_number.clone(),
        }
    }

    /// Field values in [`ExportRecord::COLUMNS`] order
    pub fn values(&self) -> [&str; 7] {
        [
            self.device_id.as_str(),
            self.device_name.as_str(),
            self.workspace_id.as_str(),
            self.workspace_name.as_str(),
            self.location_name.as_str(),
            self.location_address.as_str(),
            self.floor_number.as_str(),
        ]
    }
}
