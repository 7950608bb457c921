//! Device API operations

use log::debug;

use crate::config::api;
use crate::error::Result;
use crate::webex::traits::ApiListResponse;
use crate::webex::WebexClient;

use super::models::Device;

impl WebexClient {
    /// Get the devices registered to a workspace (single request)
    pub async fn get_devices_for_workspace(&self, workspace_id: &str) -> Result<Vec<Device>> {
        let path = format!(
            "/{}?workspaceId={}",
            api::DEVICES,
            urlencoding::encode(workspace_id)
        );
        let response: ApiListResponse<Device> = self
            .fetch_resource_by_path(&path, &format!("devices for workspace '{}'", workspace_id))
            .await?;

        let devices = response.into_items();
        debug!("Workspace '{}' has {} devices", workspace_id, devices.len());
        Ok(devices)
    }
}
