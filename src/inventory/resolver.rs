//! Per-workspace lookups: devices, location, floor

use log::debug;

use crate::error::Result;
use crate::webex::{Device, Floor, Location, WebexClient, WebexResource, Workspace};

/// Location-derived fields shared by every device of one workspace
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkspaceEnrichment {
    pub location_name: String,
    pub address: String,
    pub floor_number: String,
}

/// Resolves the records hanging off a workspace
///
/// Every call is a fresh request; nothing is cached between workspaces.
pub struct EnrichmentResolver<'a> {
    client: &'a WebexClient,
}

impl<'a> EnrichmentResolver<'a> {
    pub fn new(client: &'a WebexClient) -> Self {
        Self { client }
    }

    /// Devices registered to a workspace (may be empty)
    pub async fn devices_for(&self, workspace_id: &str) -> Result<Vec<Device>> {
        self.client.get_devices_for_workspace(workspace_id).await
    }

    pub async fn location_for(&self, location_id: &str) -> Result<Location> {
        self.client.get_location(location_id).await
    }

    pub async fn floor_for(&self, location_id: &str, floor_id: &str) -> Result<Floor> {
        self.client.get_floor(location_id, floor_id).await
    }

    /// Resolve location name, address and floor number for a workspace
    ///
    /// No location ID means no lookups at all, even if a floor ID is set.
    pub async fn enrich(&self, workspace: &Workspace) -> Result<WorkspaceEnrichment> {
        let mut enrichment = WorkspaceEnrichment::default();

        let Some(location_id) = workspace.location() else {
            if workspace.floor().is_some() {
                debug!(
                    "Workspace {} has a floor but no location, skipping floor lookup",
                    workspace.label()
                );
            }
            return Ok(enrichment);
        };

        let location = self.location_for(location_id).await?;
        enrichment.location_name = location.name.clone();
        enrichment.address = format_address(&location);

        if let Some(floor_id) = workspace.floor() {
            let floor = self.floor_for(location_id, floor_id).await?;
            enrichment.floor_number = floor.floor_number_label();
        }

        Ok(enrichment)
    }
}

/// Join street, city, state, postal code and country with ", "
///
/// Blank or missing components are skipped, so the result never has leading,
/// trailing or doubled separators. No address at all yields "".
pub fn format_address(location: &Location) -> String {
    let Some(address) = location.address.as_ref() else {
        return String::new();
    };

    address
        .components()
        .into_iter()
        .flatten()
        .filter(|part| !part.trim().is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}
