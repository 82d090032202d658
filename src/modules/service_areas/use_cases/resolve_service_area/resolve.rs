// Pure service-area resolution for one postcode.
//
// Responsibilities
// - Reject a selected location that has no coordinates before geocoding anything.
// - Accept the postcode when it lies within the selected location's radius.
// - Otherwise list the other locations whose own radius covers it, closest first.
// - Never perform input or output. Geocoding is handed in as a function.

use crate::modules::service_areas::core::geo::{GeoPoint, haversine_miles, round_to_tenth};
use crate::modules::service_areas::core::location::ServiceLocation;
use crate::modules::service_areas::core::postcode::normalize_postcode;
use crate::modules::service_areas::core::validation::ValidationResult;

pub fn resolve<F>(
    postcode: &str,
    selected: &ServiceLocation,
    all_locations: &[ServiceLocation],
    geocode: F,
) -> ValidationResult
where
    F: FnOnce(&str) -> Option<GeoPoint>,
{
    let Some(origin) = selected.coordinates else {
        return ValidationResult::no_coordinates(&selected.name);
    };

    let postcode = normalize_postcode(postcode);
    let Some(point) = geocode(&postcode) else {
        return ValidationResult::postcode_not_found(&postcode);
    };

    let distance = haversine_miles(point, origin);
    if distance <= selected.radius_miles() {
        return ValidationResult::covered(round_to_tenth(distance));
    }

    let alternatives = covering_alternatives(point, selected, all_locations);
    let message = match alternatives.first() {
        Some((nearest, miles)) => format!(
            "{postcode} is {:.1} miles from {}, outside its {} mile service area. {} is {:.1} miles away and covers this postcode.",
            distance,
            selected.name,
            selected.radius_miles(),
            nearest.name,
            miles
        ),
        None => format!("{postcode} is outside all of our service areas"),
    };

    ValidationResult::out_of_area(
        round_to_tenth(distance),
        message,
        alternatives
            .into_iter()
            .map(|(location, _)| location)
            .collect(),
    )
}

fn covering_alternatives(
    point: GeoPoint,
    selected: &ServiceLocation,
    all_locations: &[ServiceLocation],
) -> Vec<(ServiceLocation, f64)> {
    let mut alternatives: Vec<(ServiceLocation, f64)> = all_locations
        .iter()
        .filter(|location| location.id != selected.id)
        .filter_map(|location| {
            let miles = location.distance_from(point)?;
            (miles <= location.radius_miles()).then(|| (location.clone(), miles))
        })
        .collect();
    alternatives.sort_by(|a, b| a.1.total_cmp(&b.1));
    alternatives
}
