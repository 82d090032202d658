// Service-area handler orchestrates geocoding and resolution.
//
// Responsibilities
// - Load the locations directory and find the selected location.
// - Await the geocoder, then hand its answer to the pure resolver.
// - Turn an unreachable geocoder into a retriable validation result.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::modules::service_areas::core::ports::{Geocoder, LocationsDirectory};
use crate::modules::service_areas::core::postcode::normalize_postcode;
use crate::modules::service_areas::core::validation::ValidationResult;
use crate::modules::service_areas::use_cases::resolve_service_area::query::ResolveServiceArea;
use crate::modules::service_areas::use_cases::resolve_service_area::resolve::resolve;
use crate::shared::application::errors::ApplicationError;

pub struct ResolveServiceAreaHandler<TGeocoder, TDirectory>
where
    TGeocoder: Geocoder + ?Sized + 'static,
    TDirectory: LocationsDirectory + ?Sized + 'static,
{
    geocoder: Arc<TGeocoder>,
    directory: Arc<TDirectory>,
}

impl<TGeocoder, TDirectory> ResolveServiceAreaHandler<TGeocoder, TDirectory>
where
    TGeocoder: Geocoder + ?Sized + 'static,
    TDirectory: LocationsDirectory + ?Sized + 'static,
{
    pub fn new(geocoder: Arc<TGeocoder>, directory: Arc<TDirectory>) -> Self {
        Self {
            geocoder,
            directory,
        }
    }

    pub async fn handle(&self, query: ResolveServiceArea) -> Result<ValidationResult, ApplicationError> {
        let locations = self
            .directory
            .all_locations()
            .await
            .map_err(|error| ApplicationError::Unexpected(error.to_string()))?;

        let selected = locations
            .iter()
            .find(|location| location.id == query.location_id)
            .cloned()
            .ok_or_else(|| ApplicationError::LocationNotFound(query.location_id.clone()))?;

        if selected.coordinates.is_none() {
            warn!(location_id = %selected.id, "selected location has no coordinates");
            return Ok(resolve(&query.postcode, &selected, &locations, |_| None));
        }

        let point = match self.geocoder.lookup(&normalize_postcode(&query.postcode)).await {
            Ok(point) => point,
            Err(error) => {
                warn!(%error, "geocoder failed, location not validated");
                return Ok(ValidationResult::unable_to_validate());
            }
        };

        let result = resolve(&query.postcode, &selected, &locations, |_| point);
        debug!(
            location_id = %selected.id,
            is_valid = result.is_valid,
            distance_miles = ?result.distance_miles,
            "service area resolved"
        );
        Ok(result)
    }
}
