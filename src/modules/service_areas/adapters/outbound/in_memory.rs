// In memory implementations of the geocoder and the locations directory.
//
// Purpose
// - Support handler tests and local development without external services.
//
// Responsibilities
// - Geocode from a fixed postcode table keyed by normalized postcode.
// - Serve locations from memory, optionally seeded from a JSON file.
// - Simulate an unreachable service with `toggle_offline`.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, bail};
use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::modules::service_areas::core::geo::GeoPoint;
use crate::modules::service_areas::core::location::ServiceLocation;
use crate::modules::service_areas::core::ports::{GeocodeError, Geocoder, LocationsDirectory};
use crate::modules::service_areas::core::postcode::normalize_postcode;

#[derive(Default)]
pub struct InMemoryGeocoder {
    points: HashMap<String, GeoPoint>,
    is_offline: bool,
}

impl InMemoryGeocoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, postcode: &str, point: GeoPoint) -> Self {
        self.points.insert(normalize_postcode(postcode), point);
        self
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }
}

#[async_trait]
impl Geocoder for InMemoryGeocoder {
    async fn lookup(&self, postcode: &str) -> Result<Option<GeoPoint>, GeocodeError> {
        if self.is_offline {
            return Err(GeocodeError::Transport("Geocoder offline".into()));
        }
        Ok(self.points.get(&normalize_postcode(postcode)).copied())
    }
}

#[derive(Debug, Default)]
pub struct InMemoryLocationsDirectory {
    locations: RwLock<Vec<ServiceLocation>>,
    is_offline: bool,
}

impl InMemoryLocationsDirectory {
    pub fn new(locations: Vec<ServiceLocation>) -> Self {
        Self {
            locations: RwLock::new(locations),
            is_offline: false,
        }
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read locations file {}", path.display()))?;
        let locations: Vec<ServiceLocation> = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse locations file {}", path.display()))?;
        Ok(Self::new(locations))
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub async fn upsert(&self, location: ServiceLocation) {
        let mut locations = self.locations.write().await;
        match locations.iter_mut().find(|l| l.id == location.id) {
            Some(existing) => *existing = location,
            None => locations.push(location),
        }
    }
}

#[async_trait]
impl LocationsDirectory for InMemoryLocationsDirectory {
    async fn all_locations(&self) -> anyhow::Result<Vec<ServiceLocation>> {
        if self.is_offline {
            bail!("Locations directory offline");
        }
        Ok(self.locations.read().await.clone())
    }
}
