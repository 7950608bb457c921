//! Workspace API operations

use crate::config::api;
use crate::error::Result;
use crate::webex::WebexClient;

use super::models::Workspace;

impl WebexClient {
    /// List every workspace visible to the token, in API order
    ///
    /// Drains `/workspaces` with `max=200` pages; see
    /// [`WebexClient::fetch_all_pages`] for the termination rule.
    pub async fn list_workspaces(&self) -> Result<Vec<Workspace>> {
        let path = format!("/{}", api::WORKSPACES);
        self.fetch_all_pages::<Workspace>(&path, "workspaces").await
    }
}
