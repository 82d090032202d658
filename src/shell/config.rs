use std::env;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

pub const DEFAULT_GEOCODER_BASE_URL: &str = "https://api.postcodes.io";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub geocoder_base_url: String,
    /// Platform backend. In-memory adapters are used when unset.
    pub backend_base_url: Option<String>,
    /// Bearer token for the backend, seeded into the session at startup.
    pub backend_auth_token: Option<String>,
    pub locations_file: Option<PathBuf>,
    pub default_location_id: Option<String>,
    pub http_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let host = lookup("SERVER_HOST")
            .unwrap_or_else(|| "0.0.0.0".to_string())
            .parse::<IpAddr>()
            .context("Failed to parse SERVER_HOST")?;

        let port = lookup("SERVER_PORT")
            .unwrap_or_else(|| "8080".to_string())
            .parse::<u16>()
            .context("Failed to parse SERVER_PORT")?;

        let http_timeout_secs = lookup("HTTP_TIMEOUT_SECS")
            .unwrap_or_else(|| "10".to_string())
            .parse::<u64>()
            .context("Failed to parse HTTP_TIMEOUT_SECS")?;

        let geocoder_base_url = lookup("GEOCODER_BASE_URL")
            .unwrap_or_else(|| DEFAULT_GEOCODER_BASE_URL.to_string());

        Ok(Config {
            server: ServerConfig { host, port },
            geocoder_base_url,
            backend_base_url: lookup("BACKEND_BASE_URL").filter(|url| !url.is_empty()),
            backend_auth_token: lookup("BACKEND_AUTH_TOKEN").filter(|token| !token.is_empty()),
            locations_file: lookup("LOCATIONS_FILE").map(PathBuf::from),
            default_location_id: lookup("DEFAULT_LOCATION_ID"),
            http_timeout: Duration::from_secs(http_timeout_secs),
        })
    }

    pub fn server_addr(&self) -> SocketAddr {
        SocketAddr::new(self.server.host, self.server.port)
    }
}
