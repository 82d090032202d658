// Select location handler.
//
// Responsibilities
// - Remember the location the user picked, after checking the directory knows it.
// - Resolve which location a request is about: the explicit one, else the remembered one.

use std::sync::Arc;

use tracing::info;

use crate::modules::service_areas::core::location::ServiceLocation;
use crate::modules::service_areas::core::ports::LocationsDirectory;
use crate::shared::application::errors::ApplicationError;
use crate::shared::infrastructure::session_store::{SessionKey, SessionStore};

pub struct SelectLocationHandler<TDirectory, TSession>
where
    TDirectory: LocationsDirectory + ?Sized + 'static,
    TSession: SessionStore + ?Sized + 'static,
{
    directory: Arc<TDirectory>,
    session: Arc<TSession>,
}

impl<TDirectory, TSession> SelectLocationHandler<TDirectory, TSession>
where
    TDirectory: LocationsDirectory + ?Sized + 'static,
    TSession: SessionStore + ?Sized + 'static,
{
    pub fn new(directory: Arc<TDirectory>, session: Arc<TSession>) -> Self {
        Self { directory, session }
    }

    pub async fn handle(&self, location_id: &str) -> Result<ServiceLocation, ApplicationError> {
        let location = self
            .directory
            .find(location_id)
            .await
            .map_err(|error| ApplicationError::Unexpected(error.to_string()))?
            .ok_or_else(|| ApplicationError::LocationNotFound(location_id.to_string()))?;

        self.session
            .set(SessionKey::SelectedLocationId, location.id.clone())
            .await
            .map_err(|error| ApplicationError::Unexpected(error.to_string()))?;
        info!(location_id = %location.id, "service location selected");
        Ok(location)
    }

    pub async fn current(&self, explicit: Option<String>) -> Result<String, ApplicationError> {
        if let Some(location_id) = explicit {
            return Ok(location_id);
        }
        self.session
            .get(SessionKey::SelectedLocationId)
            .await
            .map_err(|error| ApplicationError::Unexpected(error.to_string()))?
            .ok_or(ApplicationError::NoLocationSelected)
    }
}
