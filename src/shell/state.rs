use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use crate::modules::availability::adapters::outbound::backend::{
    BackendBookingsProvider, BackendScheduleProvider,
};
use crate::modules::availability::adapters::outbound::in_memory::{
    InMemoryBookingsProvider, InMemoryScheduleProvider,
};
use crate::modules::availability::core::ports::{BookingsProvider, ScheduleProvider};
use crate::modules::availability::use_cases::generate_time_slots::handler::GenerateTimeSlotsHandler;
use crate::modules::service_areas::adapters::outbound::backend::BackendLocationsDirectory;
use crate::modules::service_areas::adapters::outbound::in_memory::InMemoryLocationsDirectory;
use crate::modules::service_areas::adapters::outbound::postcodes_io::PostcodesIoGeocoder;
use crate::modules::service_areas::core::ports::{Geocoder, LocationsDirectory};
use crate::modules::service_areas::use_cases::precheck_postcode_area::handler::PrecheckPostcodeAreaHandler;
use crate::modules::service_areas::use_cases::resolve_service_area::handler::ResolveServiceAreaHandler;
use crate::modules::session::use_cases::select_location::handler::SelectLocationHandler;
use crate::shared::infrastructure::http_client::build_client;
use crate::shared::infrastructure::session_store::in_memory::InMemorySessionStore;
use crate::shared::infrastructure::session_store::{SessionKey, SessionStore};
use crate::shell::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub time_slots: Arc<GenerateTimeSlotsHandler<dyn ScheduleProvider, dyn BookingsProvider>>,
    pub service_area: Arc<ResolveServiceAreaHandler<dyn Geocoder, dyn LocationsDirectory>>,
    pub precheck: Arc<PrecheckPostcodeAreaHandler<dyn LocationsDirectory>>,
    pub select_location: Arc<SelectLocationHandler<dyn LocationsDirectory, dyn SessionStore>>,
    pub session: Arc<dyn SessionStore>,
}

impl AppState {
    pub fn new(
        schedules: Arc<dyn ScheduleProvider>,
        bookings: Arc<dyn BookingsProvider>,
        geocoder: Arc<dyn Geocoder>,
        directory: Arc<dyn LocationsDirectory>,
        session: Arc<dyn SessionStore>,
    ) -> Self {
        Self {
            time_slots: Arc::new(GenerateTimeSlotsHandler::new(schedules, bookings)),
            service_area: Arc::new(ResolveServiceAreaHandler::new(geocoder, directory.clone())),
            precheck: Arc::new(PrecheckPostcodeAreaHandler::new(directory.clone())),
            select_location: Arc::new(SelectLocationHandler::new(directory, session.clone())),
            session,
        }
    }

    /// Wires concrete adapters from configuration.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let client = build_client(config.http_timeout)?;
        let seed = [
            config
                .default_location_id
                .clone()
                .map(|id| (SessionKey::SelectedLocationId, id)),
            config
                .backend_auth_token
                .clone()
                .map(|token| (SessionKey::AuthToken, token)),
        ];
        let session: Arc<dyn SessionStore> =
            Arc::new(InMemorySessionStore::load(seed.into_iter().flatten()));
        let geocoder: Arc<dyn Geocoder> = Arc::new(PostcodesIoGeocoder::new(
            client.clone(),
            config.geocoder_base_url.clone(),
        ));

        let (schedules, bookings, directory): (
            Arc<dyn ScheduleProvider>,
            Arc<dyn BookingsProvider>,
            Arc<dyn LocationsDirectory>,
        ) = match &config.backend_base_url {
            Some(base_url) => {
                info!(%base_url, "using platform backend adapters");
                let schedules: Arc<dyn ScheduleProvider> = Arc::new(BackendScheduleProvider::new(
                    client.clone(),
                    base_url.clone(),
                    session.clone(),
                ));
                let bookings: Arc<dyn BookingsProvider> = Arc::new(BackendBookingsProvider::new(
                    client.clone(),
                    base_url.clone(),
                    session.clone(),
                ));
                let directory: Arc<dyn LocationsDirectory> = Arc::new(
                    BackendLocationsDirectory::new(client, base_url.clone(), session.clone()),
                );
                (schedules, bookings, directory)
            }
            None => {
                info!("no backend configured, using in-memory adapters");
                let directory = match &config.locations_file {
                    Some(path) => InMemoryLocationsDirectory::from_json_file(path)
                        .context("Failed to seed the locations directory")?,
                    None => InMemoryLocationsDirectory::default(),
                };
                let schedules: Arc<dyn ScheduleProvider> = Arc::new(InMemoryScheduleProvider::new());
                let bookings: Arc<dyn BookingsProvider> = Arc::new(InMemoryBookingsProvider::new());
                let directory: Arc<dyn LocationsDirectory> = Arc::new(directory);
                (schedules, bookings, directory)
            }
        };

        Ok(Self::new(schedules, bookings, geocoder, directory, session))
    }
}
