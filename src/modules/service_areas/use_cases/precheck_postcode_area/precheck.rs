// Cheap, non-authoritative guess whether a postcode is near a served area.
//
// Responsibilities
// - Compare the postcode area with the selected location's area, or with every known area.
// - Answer "likely" whenever the comparison cannot be made. The geocoded resolver decides.

use std::collections::HashSet;

use crate::modules::service_areas::core::location::ServiceLocation;
use crate::modules::service_areas::core::postcode::postcode_area;

pub fn is_likely_serviceable(
    postcode: &str,
    selected: Option<&ServiceLocation>,
    all_locations: &[ServiceLocation],
) -> bool {
    let Some(area) = postcode_area(postcode) else {
        return true;
    };

    match selected {
        Some(location) => postcode_area(&location.postcode).is_none_or(|known| known == area),
        None => {
            let known_areas: HashSet<String> = all_locations
                .iter()
                .filter_map(|location| postcode_area(&location.postcode))
                .collect();
            known_areas.is_empty() || known_areas.contains(&area)
        }
    }
}
