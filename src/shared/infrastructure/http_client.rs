use std::time::Duration;

use anyhow::{Context, anyhow};
use reqwest::{RequestBuilder, Url};
use serde::de::DeserializeOwned;

pub fn build_client(timeout: Duration) -> anyhow::Result<reqwest::Client> {
    reqwest::Client::builder()
        .pool_max_idle_per_host(50)
        .connect_timeout(Duration::from_secs(5))
        .timeout(timeout)
        .build()
        .context("Failed to build HTTP client")
}

/// Appends `segments` to the path of `base_url`. Each segment is percent-encoded,
/// so caller supplied ids can never add path levels or a query string.
pub fn endpoint_url(base_url: &str, segments: &[&str]) -> anyhow::Result<Url> {
    let mut url =
        Url::parse(base_url).with_context(|| format!("Invalid base URL {base_url:?}"))?;
    url.path_segments_mut()
        .map_err(|_| anyhow!("Base URL {base_url:?} cannot carry a path"))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

pub fn get_request(
    client: &reqwest::Client,
    url: Url,
    bearer_token: Option<&str>,
) -> RequestBuilder {
    let request = client.get(url);
    match bearer_token {
        Some(token) => request.bearer_auth(token),
        None => request,
    }
}

/// Sends `request` and decodes a successful JSON body. Non-2xx statuses are errors.
pub async fn send_json<T: DeserializeOwned>(request: RequestBuilder) -> anyhow::Result<T> {
    let response = request
        .send()
        .await
        .context("Request failed")?
        .error_for_status()
        .context("Request returned an error status")?;
    response
        .json::<T>()
        .await
        .context("Request returned an unexpected body")
}
