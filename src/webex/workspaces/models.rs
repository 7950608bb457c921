//! Workspace data models

use serde::Deserialize;

use crate::webex::traits::{null_as_empty, WebexResource};

/// Workspace data from the Webex API
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Workspace {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub display_name: String,
    #[serde(default)]
    pub location_id: Option<String>,
    #[serde(default)]
    pub floor_id: Option<String>,
}

impl WebexResource for Workspace {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.display_name
    }
}

impl Workspace {
    /// Location ID, if present and non-empty
    pub fn location(&self) -> Option<&str> {
        self.location_id.as_deref().filter(|id| !id.is_empty())
    }

    /// Floor ID, if present and non-empty
    ///
    /// Floor IDs are scoped to a location; see [`Workspace::location_and_floor`].
    pub fn floor(&self) -> Option<&str> {
        self.floor_id.as_deref().filter(|id| !id.is_empty())
    }

    /// (location ID, floor ID) when both are set
    pub fn location_and_floor(&self) -> Option<(&str, &str)> {
        self.location().zip(self.floor())
    }
}
