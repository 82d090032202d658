// HTTP geocoder for a postcodes.io compatible API.
//
// Responsibilities
// - Look up `GET {base}/postcodes/{postcode}`.
// - Normalize the found and not-found body shapes into `Option<GeoPoint>`.
// - Report transport failures and 5xx answers as errors so the handler can ask for a retry.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::debug;

use crate::modules::service_areas::core::geo::GeoPoint;
use crate::modules::service_areas::core::ports::{GeocodeError, Geocoder};
use crate::shared::infrastructure::http_client::endpoint_url;

#[derive(Debug, Deserialize)]
pub struct PostcodeResult {
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum PostcodeLookupResponse {
    Found { result: PostcodeResult },
    Failed { error: String },
}

pub fn normalize_lookup(response: PostcodeLookupResponse) -> Option<GeoPoint> {
    match response {
        PostcodeLookupResponse::Found {
            result:
                PostcodeResult {
                    latitude: Some(latitude),
                    longitude: Some(longitude),
                },
        } => Some(GeoPoint::new(latitude, longitude)),
        PostcodeLookupResponse::Found { .. } => None,
        PostcodeLookupResponse::Failed { error } => {
            debug!(%error, "postcode lookup failed");
            None
        }
    }
}

/// Keeps only the characters a postcode can hold so it is safe as a path segment.
fn path_segment(postcode: &str) -> String {
    postcode
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect()
}

pub struct PostcodesIoGeocoder {
    client: reqwest::Client,
    base_url: String,
}

impl PostcodesIoGeocoder {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl Geocoder for PostcodesIoGeocoder {
    async fn lookup(&self, postcode: &str) -> Result<Option<GeoPoint>, GeocodeError> {
        let segment = path_segment(postcode);
        if segment.is_empty() {
            return Ok(None);
        }
        let url = endpoint_url(&self.base_url, &["postcodes", segment.as_str()])
            .map_err(|error| GeocodeError::Transport(format!("{error:#}")))?;

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|error| GeocodeError::Transport(error.to_string()))?;

        let status = response.status();
        if status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS {
            return Err(GeocodeError::Transport(format!("{url} answered {status}")));
        }

        let body = response
            .json::<PostcodeLookupResponse>()
            .await
            .map_err(|error| GeocodeError::UnexpectedResponse(error.to_string()))?;
        Ok(normalize_lookup(body))
    }
}
