// Shared location fixtures around Derby and Nottingham.
//
// Derby South sits 7.9 miles due south of the city centre, so a point 12 miles
// south of the centre is 4.1 miles from Derby South and inside its radius.

use crate::modules::service_areas::core::geo::{EARTH_RADIUS_MILES, GeoPoint};
use crate::modules::service_areas::core::location::ServiceLocation;

pub const DERBY_CITY_CENTRE_ID: &str = "loc-derby-city-centre";
pub const DERBY_SOUTH_ID: &str = "loc-derby-south";
pub const NOTTINGHAM_ID: &str = "loc-nottingham";
pub const UNMAPPED_LOCATION_ID: &str = "loc-derby-pop-up";

fn miles_per_degree_of_latitude() -> f64 {
    EARTH_RADIUS_MILES * std::f64::consts::PI / 180.0
}

pub fn miles_north_of(point: GeoPoint, miles: f64) -> GeoPoint {
    GeoPoint::new(
        point.latitude + miles / miles_per_degree_of_latitude(),
        point.longitude,
    )
}

pub fn miles_south_of(point: GeoPoint, miles: f64) -> GeoPoint {
    miles_north_of(point, -miles)
}

pub fn derby_city_centre() -> ServiceLocation {
    ServiceLocation {
        id: DERBY_CITY_CENTRE_ID.into(),
        name: "Derby City Centre".into(),
        postcode: "DE1 3AH".into(),
        coordinates: Some(GeoPoint::new(52.9225, -1.4746)),
        service_radius_miles: Some(5.0),
    }
}

pub fn derby_south() -> ServiceLocation {
    let centre = GeoPoint::new(52.9225, -1.4746);
    ServiceLocation {
        id: DERBY_SOUTH_ID.into(),
        name: "Derby South".into(),
        postcode: "DE24 8UX".into(),
        coordinates: Some(miles_south_of(centre, 7.9)),
        service_radius_miles: Some(5.0),
    }
}

pub fn nottingham() -> ServiceLocation {
    ServiceLocation {
        id: NOTTINGHAM_ID.into(),
        name: "Nottingham".into(),
        postcode: "NG1 5FS".into(),
        coordinates: Some(GeoPoint::new(52.9548, -1.1581)),
        service_radius_miles: Some(5.0),
    }
}

pub fn unmapped_location() -> ServiceLocation {
    ServiceLocation {
        id: UNMAPPED_LOCATION_ID.into(),
        name: "Derby Pop-up".into(),
        postcode: "DE22 3LN".into(),
        coordinates: None,
        service_radius_miles: None,
    }
}

pub fn directory() -> Vec<ServiceLocation> {
    vec![
        derby_city_centre(),
        derby_south(),
        nottingham(),
        unmapped_location(),
    ]
}
