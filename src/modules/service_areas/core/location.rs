use serde::{Deserialize, Serialize};

use crate::modules::service_areas::core::geo::{GeoPoint, haversine_miles};

pub const DEFAULT_SERVICE_RADIUS_MILES: f64 = 5.0;

/// A place the platform serves bookings from, as listed by the locations directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceLocation {
    pub id: String,
    pub name: String,
    pub postcode: String,
    #[serde(default)]
    pub coordinates: Option<GeoPoint>,
    #[serde(default)]
    pub service_radius_miles: Option<f64>,
}

impl ServiceLocation {
    pub fn radius_miles(&self) -> f64 {
        self.service_radius_miles
            .unwrap_or(DEFAULT_SERVICE_RADIUS_MILES)
    }

    /// Distance from `point`, or `None` when this location has no coordinates.
    pub fn distance_from(&self, point: GeoPoint) -> Option<f64> {
        self.coordinates
            .map(|coordinates| haversine_miles(point, coordinates))
    }
}
