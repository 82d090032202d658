// Outcome of checking a postcode against a service location.
//
// Notes
// - Every outcome is a value. Rejections carry a message for people and a kind for code.

use serde::{Deserialize, Serialize};

use crate::modules::service_areas::core::location::ServiceLocation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceAreaRejection {
    /// The selected location has no coordinates on record.
    NoCoordinatesForLocation,
    /// The postcode could not be geocoded, or the geocoder could not be reached.
    GeocodeUnavailable,
    OutOfServiceArea,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_miles: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_locations: Option<Vec<ServiceLocation>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection: Option<ServiceAreaRejection>,
}

impl ValidationResult {
    pub fn covered(distance_miles: f64) -> Self {
        Self {
            is_valid: true,
            distance_miles: Some(distance_miles),
            error_message: None,
            suggested_locations: None,
            rejection: None,
        }
    }

    pub fn rejected(rejection: ServiceAreaRejection, error_message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            distance_miles: None,
            error_message: Some(error_message.into()),
            suggested_locations: None,
            rejection: Some(rejection),
        }
    }

    pub fn no_coordinates(location_name: &str) -> Self {
        Self::rejected(
            ServiceAreaRejection::NoCoordinatesForLocation,
            format!("coordinates unavailable for {location_name}"),
        )
    }

    pub fn postcode_not_found(postcode: &str) -> Self {
        Self::rejected(
            ServiceAreaRejection::GeocodeUnavailable,
            format!("could not find postcode {postcode}"),
        )
    }

    pub fn unable_to_validate() -> Self {
        Self::rejected(
            ServiceAreaRejection::GeocodeUnavailable,
            "unable to validate location, please try again",
        )
    }

    pub fn out_of_area(
        distance_miles: f64,
        error_message: impl Into<String>,
        suggested_locations: Vec<ServiceLocation>,
    ) -> Self {
        Self {
            is_valid: false,
            distance_miles: Some(distance_miles),
            error_message: Some(error_message.into()),
            suggested_locations: Some(suggested_locations),
            rejection: Some(ServiceAreaRejection::OutOfServiceArea),
        }
    }
}
