// Ports for geocoding and for the directory of service locations.
//
// Boundaries
// - No concrete input or output here. Adapters implement these traits in adapters/outbound.
// - `Geocoder::lookup` separates "unknown postcode" (Ok(None)) from "could not ask" (Err).

use async_trait::async_trait;
use thiserror::Error;

use crate::modules::service_areas::core::geo::GeoPoint;
use crate::modules::service_areas::core::location::ServiceLocation;

#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("geocoder unreachable: {0}")]
    Transport(String),

    #[error("unexpected geocoder response: {0}")]
    UnexpectedResponse(String),
}

#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn lookup(&self, postcode: &str) -> Result<Option<GeoPoint>, GeocodeError>;
}

#[async_trait]
pub trait LocationsDirectory: Send + Sync {
    async fn all_locations(&self) -> anyhow::Result<Vec<ServiceLocation>>;

    async fn find(&self, location_id: &str) -> anyhow::Result<Option<ServiceLocation>> {
        Ok(self
            .all_locations()
            .await?
            .into_iter()
            .find(|location| location.id == location_id))
    }
}
