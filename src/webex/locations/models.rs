//! Location and floor data models

use serde::{Deserialize, Deserializer};

use crate::webex::traits::{null_as_empty, WebexResource};

/// Location data from the Webex API
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default)]
    pub address: Option<Address>,
}

/// Postal address of a location; any field may be missing
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default)]
    pub address1: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

impl Address {
    /// Components in export order: street, city, state, postal code, country
    pub fn components(&self) -> [Option<&str>; 5] {
        [
            self.address1.as_deref(),
            self.city.as_deref(),
            self.state.as_deref(),
            self.postal_code.as_deref(),
            self.country.as_deref(),
        ]
    }
}

impl WebexResource for Location {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Floor data from the Webex API, scoped to a location
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Floor {
    pub id: String,
    #[serde(default)]
    pub location_id: Option<String>,
    /// Floor number as text; the API sends an integer, older payloads a string
    #[serde(default, deserialize_with = "floor_number")]
    pub floor_number: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
}

impl Floor {
    /// Floor number for export, empty when unknown
    pub fn floor_number_label(&self) -> String {
        self.floor_number.clone().unwrap_or_default()
    }
}

fn floor_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        Some(serde_json::Value::String(s)) if !s.is_empty() => Some(s),
        _ => None,
    })
}
