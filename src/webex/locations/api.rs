//! Location and floor API operations

use crate::config::api;
use crate::error::Result;
use crate::webex::WebexClient;

use super::models::{Floor, Location};

impl WebexClient {
    /// Get a single location by ID
    pub async fn get_location(&self, location_id: &str) -> Result<Location> {
        let path = format!(
            "/{}/{}",
            api::LOCATIONS,
            urlencoding::encode(location_id)
        );
        self.fetch_resource_by_path(&path, &format!("location '{}'", location_id))
            .await
    }

    /// Get a floor; floor IDs are only unique within their location
    pub async fn get_floor(&self, location_id: &str, floor_id: &str) -> Result<Floor> {
        let path = format!(
            "/{}/{}/{}/{}",
            api::LOCATIONS,
            urlencoding::encode(location_id),
            api::FLOORS,
            urlencoding::encode(floor_id)
        );
        self.fetch_resource_by_path(
            &path,
            &format!("floor '{}' of location '{}'", floor_id, location_id),
        )
        .await
    }
}
