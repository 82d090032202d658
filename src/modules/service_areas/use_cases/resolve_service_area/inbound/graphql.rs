use async_graphql::{Context, Enum, Object, Result as GqlResult, SimpleObject};

use crate::modules::service_areas::core::location::ServiceLocation;
use crate::modules::service_areas::core::validation::{ServiceAreaRejection, ValidationResult};
use crate::modules::service_areas::use_cases::resolve_service_area::query::ResolveServiceArea;
use crate::shell::state::AppState;

#[derive(Enum, Copy, Clone, Eq, PartialEq)]
pub enum GqlServiceAreaRejection {
    NoCoordinatesForLocation,
    GeocodeUnavailable,
    OutOfServiceArea,
}

impl From<ServiceAreaRejection> for GqlServiceAreaRejection {
    fn from(rejection: ServiceAreaRejection) -> Self {
        match rejection {
            ServiceAreaRejection::NoCoordinatesForLocation => Self::NoCoordinatesForLocation,
            ServiceAreaRejection::GeocodeUnavailable => Self::GeocodeUnavailable,
            ServiceAreaRejection::OutOfServiceArea => Self::OutOfServiceArea,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlServiceLocation {
    pub id: String,
    pub name: String,
    pub postcode: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub service_radius_miles: f64,
}

impl From<ServiceLocation> for GqlServiceLocation {
    fn from(location: ServiceLocation) -> Self {
        Self {
            service_radius_miles: location.radius_miles(),
            latitude: location.coordinates.map(|c| c.latitude),
            longitude: location.coordinates.map(|c| c.longitude),
            id: location.id,
            name: location.name,
            postcode: location.postcode,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlValidationResult {
    pub is_valid: bool,
    pub distance_miles: Option<f64>,
    pub error_message: Option<String>,
    pub suggested_locations: Option<Vec<GqlServiceLocation>>,
    pub rejection: Option<GqlServiceAreaRejection>,
}

impl From<ValidationResult> for GqlValidationResult {
    fn from(result: ValidationResult) -> Self {
        Self {
            is_valid: result.is_valid,
            distance_miles: result.distance_miles,
            error_message: result.error_message,
            suggested_locations: result
                .suggested_locations
                .map(|locations| locations.into_iter().map(Into::into).collect()),
            rejection: result.rejection.map(Into::into),
        }
    }
}

#[derive(Default)]
pub struct ServiceAreaQuery;

#[Object]
impl ServiceAreaQuery {
    async fn validate_service_area(
        &self,
        context: &Context<'_>,
        postcode: String,
        location_id: Option<String>,
    ) -> GqlResult<GqlValidationResult> {
        let state = context.data_unchecked::<AppState>();
        let location_id = state
            .select_location
            .current(location_id)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        let result = state
            .service_area
            .handle(ResolveServiceArea {
                postcode,
                location_id,
            })
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(result.into())
    }
}
