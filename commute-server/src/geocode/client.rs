//! Nominatim HTTP client.
//!
//! Forward search biased to Makati, and reverse lookup for dropped pins.

use std::sync::Arc;

use tokio::sync::Semaphore;
use tracing::{debug, warn};

use crate::domain::{Coordinate, Place, first_name_part};

use super::error::GeocodeError;
use super::types::{NominatimErrorBody, NominatimPlace};

/// Default base URL for the public Nominatim instance.
const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org";

/// Appended to every search so results stay in the service area.
const DEFAULT_QUERY_SUFFIX: &str = "Makati Philippines";

/// Nominatim's usage policy asks for a descriptive agent.
const USER_AGENT: &str = concat!("commute-server/", env!("CARGO_PKG_VERSION"));

/// Configuration for the geocoding client.
#[derive(Debug, Clone)]
pub struct GeocodeConfig {
    /// Base URL for the API
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Maximum number of candidates returned from a search
    pub max_results: usize,
    /// Text appended to every search query
    pub query_suffix: String,
    /// Maximum concurrent requests
    pub max_concurrent: usize,
}

impl GeocodeConfig {
    /// Create a config pointing at the public Nominatim instance.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 10,
            max_results: 5,
            query_suffix: DEFAULT_QUERY_SUFFIX.to_string(),
            max_concurrent: 1,
        }
    }

    /// Set a custom base URL (for testing or a self-hosted instance).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set the text appended to search queries.
    pub fn with_query_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.query_suffix = suffix.into();
        self
    }
}

impl Default for GeocodeConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Nominatim geocoding client.
#[derive(Debug, Clone)]
pub struct GeocodeClient {
    http: reqwest::Client,
    base_url: String,
    max_results: usize,
    query_suffix: String,
    semaphore: Arc<Semaphore>,
}

impl GeocodeClient {
    /// Create a new geocoding client.
    pub fn new(config: GeocodeConfig) -> Result<Self, GeocodeError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            max_results: config.max_results,
            query_suffix: config.query_suffix,
            semaphore: Arc::new(Semaphore::new(config.max_concurrent.max(1))),
        })
    }

    /// Search for places matching free text, best match first.
    ///
    /// Returns an empty list when nothing matches.
    pub async fn search(&self, query: &str) -> Result<Vec<Place>, GeocodeError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(GeocodeError::EmptyQuery);
        }

        let full_query = if self.query_suffix.is_empty() {
            query.to_string()
        } else {
            format!("{query} {}", self.query_suffix)
        };

        let url = format!("{}/search", self.base_url);
        debug!(%full_query, "geocoding search");

        let body = self
            .get_text(&url, &[("format", "json".to_string()), ("q", full_query)])
            .await?;

        let results: Vec<NominatimPlace> =
            serde_json::from_str(&body).map_err(|e| GeocodeError::Json {
                message: e.to_string(),
            })?;

        let total = results.len();
        let places: Vec<Place> = results
            .into_iter()
            .filter_map(NominatimPlace::into_place)
            .take(self.max_results)
            .collect();

        if places.len() < total.min(self.max_results) {
            warn!(total, kept = places.len(), "dropped malformed geocoding results");
        }

        Ok(places)
    }

    /// Name the place at a coordinate.
    ///
    /// Returns the first part of the provider's display name, e.g.
    /// "12 Jupiter Street" rather than the full address.
    pub async fn reverse(&self, coordinate: &Coordinate) -> Result<String, GeocodeError> {
        let url = format!("{}/reverse", self.base_url);
        debug!(%coordinate, "reverse geocoding");

        let body = self
            .get_text(
                &url,
                &[
                    ("format", "json".to_string()),
                    ("lat", coordinate.latitude().to_string()),
                    ("lon", coordinate.longitude().to_string()),
                ],
            )
            .await?;

        // Nominatim answers 200 with an error object when nothing is there
        if let Ok(err) = serde_json::from_str::<NominatimErrorBody>(&body) {
            debug!(error = %err.error, "reverse geocoding found nothing");
            return Err(GeocodeError::NotFound(coordinate.to_string()));
        }

        let place: NominatimPlace =
            serde_json::from_str(&body).map_err(|e| GeocodeError::Json {
                message: e.to_string(),
            })?;

        let name = place
            .display_name
            .as_deref()
            .map(first_name_part)
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .ok_or_else(|| GeocodeError::NotFound(coordinate.to_string()))?;

        Ok(name.to_string())
    }

    async fn get_text(&self, url: &str, query: &[(&str, String)]) -> Result<String, GeocodeError> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| GeocodeError::Api {
                status: 0,
                message: "Semaphore closed".to_string(),
            })?;

        let response = self.http.get(url).query(query).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(GeocodeError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeocodeError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(response.text().await?)
    }
}
