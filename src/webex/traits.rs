//! Common traits for Webex resources

use serde::{Deserialize, Deserializer};

/// Common trait for Webex resources (workspaces, devices, locations)
pub trait WebexResource {
    /// Get the resource ID
    fn id(&self) -> &str;

    /// Get the human-readable name
    fn name(&self) -> &str;

    /// Short label for log lines: `'name' (id)`
    fn label(&self) -> String {
        format!("'{}' ({})", self.name(), self.id())
    }
}

/// Generic list response for Webex collection endpoints
///
/// Webex wraps every collection in `{"items": [...]}`. A missing key is read
/// as an empty collection.
#[derive(Deserialize, Debug)]
pub struct ApiListResponse<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

impl<T> ApiListResponse<T> {
    /// Consume self and return the items
    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

/// Read a string field that the API may send as `null`, as `""`
pub(crate) fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
