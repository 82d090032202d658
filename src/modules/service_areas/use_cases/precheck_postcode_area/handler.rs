// Pre-check handler. Never blocks a booking on its own: any failure answers "likely".

use std::sync::Arc;

use tracing::warn;

use crate::modules::service_areas::core::ports::LocationsDirectory;
use crate::modules::service_areas::use_cases::precheck_postcode_area::precheck::is_likely_serviceable;

pub struct PrecheckPostcodeAreaHandler<TDirectory>
where
    TDirectory: LocationsDirectory + ?Sized + 'static,
{
    directory: Arc<TDirectory>,
}

impl<TDirectory> PrecheckPostcodeAreaHandler<TDirectory>
where
    TDirectory: LocationsDirectory + ?Sized + 'static,
{
    pub fn new(directory: Arc<TDirectory>) -> Self {
        Self { directory }
    }

    pub async fn handle(&self, postcode: &str, location_id: Option<&str>) -> bool {
        let locations = match self.directory.all_locations().await {
            Ok(locations) => locations,
            Err(error) => {
                warn!(%error, "locations directory unavailable, postcode pre-check passes");
                return true;
            }
        };

        let selected = match location_id {
            Some(id) => match locations.iter().find(|location| location.id == id) {
                Some(location) => Some(location),
                None => {
                    warn!(location_id = %id, "unknown location in postcode pre-check, passing");
                    return true;
                }
            },
            None => None,
        };

        is_likely_serviceable(postcode, selected, &locations)
    }
}

#[cfg(test)]
mod precheck_postcode_area_handler_tests {
    use super::*;
    use crate::modules::service_areas::adapters::outbound::in_memory::InMemoryLocationsDirectory;
    use crate::tests::fixtures::locations::{DERBY_CITY_CENTRE_ID, directory};
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn it_should_compare_against_the_selected_location() {
        let handler =
            PrecheckPostcodeAreaHandler::new(Arc::new(InMemoryLocationsDirectory::new(directory())));
        assert!(handler.handle("DE22 1AB", Some(DERBY_CITY_CENTRE_ID)).await);
        assert!(!handler.handle("NG1 5FS", Some(DERBY_CITY_CENTRE_ID)).await);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_compare_against_all_areas_without_a_selection() {
        let handler =
            PrecheckPostcodeAreaHandler::new(Arc::new(InMemoryLocationsDirectory::new(directory())));
        assert!(handler.handle("NG1 5FS", None).await);
        assert!(!handler.handle("S1 2HE", None).await);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_pass_when_the_directory_is_offline() {
        let mut directory = InMemoryLocationsDirectory::new(directory());
        directory.toggle_offline();
        let handler = PrecheckPostcodeAreaHandler::new(Arc::new(directory));
        assert!(handler.handle("S1 2HE", Some(DERBY_CITY_CENTRE_ID)).await);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_pass_for_an_unknown_location() {
        let handler =
            PrecheckPostcodeAreaHandler::new(Arc::new(InMemoryLocationsDirectory::new(directory())));
        assert!(handler.handle("S1 2HE", Some("loc-missing")).await);
    }
}
