//! Device data models

use serde::Deserialize;

use crate::webex::traits::{null_as_empty, WebexResource};

/// Device data from the Webex API
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub display_name: String,
    /// Owning workspace; personal devices have none
    #[serde(default)]
    pub workspace_id: Option<String>,
}

impl WebexResource for Device {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.display_name
    }
}
