// HTTP locations directory against the platform backend.
//
// Responsibilities
// - Load `GET {base}/locations`.
// - Normalize every accepted body shape into canonical `ServiceLocation`s.

use std::sync::Arc;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::RequestBuilder;
use serde::Deserialize;

use crate::modules::service_areas::core::geo::GeoPoint;
use crate::modules::service_areas::core::location::ServiceLocation;
use crate::modules::service_areas::core::ports::LocationsDirectory;
use crate::shared::infrastructure::http_client::{endpoint_url, get_request, send_json};
use crate::shared::infrastructure::session_store::{SessionStore, current_auth_token};

#[derive(Debug, Deserialize)]
pub struct LocationRecord {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub postcode: String,
    #[serde(default)]
    pub coordinates: Option<GeoPoint>,
    #[serde(default, alias = "lat")]
    pub latitude: Option<f64>,
    #[serde(default, alias = "lng", alias = "lon")]
    pub longitude: Option<f64>,
    #[serde(
        default,
        alias = "serviceRadiusMiles",
        alias = "serviceRadius",
        alias = "radius"
    )]
    pub service_radius_miles: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum LocationsResponse {
    Locations { locations: Vec<LocationRecord> },
    Data { data: Vec<LocationRecord> },
    Bare(Vec<LocationRecord>),
}

impl From<LocationRecord> for ServiceLocation {
    fn from(record: LocationRecord) -> Self {
        let coordinates = record.coordinates.or(match (record.latitude, record.longitude) {
            (Some(latitude), Some(longitude)) => Some(GeoPoint::new(latitude, longitude)),
            _ => None,
        });
        Self {
            id: record.id,
            name: record.name,
            postcode: record.postcode,
            coordinates,
            service_radius_miles: record.service_radius_miles,
        }
    }
}

pub fn normalize_locations(response: LocationsResponse) -> Vec<ServiceLocation> {
    let records = match response {
        LocationsResponse::Locations { locations } => locations,
        LocationsResponse::Data { data } => data,
        LocationsResponse::Bare(records) => records,
    };
    records.into_iter().map(Into::into).collect()
}

pub struct BackendLocationsDirectory {
    client: reqwest::Client,
    base_url: String,
    session: Arc<dyn SessionStore>,
}

impl BackendLocationsDirectory {
    pub fn new(
        client: reqwest::Client,
        base_url: impl Into<String>,
        session: Arc<dyn SessionStore>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            session,
        }
    }

    async fn locations_request(&self) -> anyhow::Result<RequestBuilder> {
        let url = endpoint_url(&self.base_url, &["locations"])?;
        let token = current_auth_token(&*self.session).await;
        Ok(get_request(&self.client, url, token.as_deref()))
    }
}

#[async_trait]
impl LocationsDirectory for BackendLocationsDirectory {
    async fn all_locations(&self) -> anyhow::Result<Vec<ServiceLocation>> {
        let request = self.locations_request().await?;
        let response = send_json::<LocationsResponse>(request)
            .await
            .context("Failed to load service locations")?;
        Ok(normalize_locations(response))
    }
}
