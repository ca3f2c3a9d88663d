//! OSRM HTTP client.

use tracing::debug;

use crate::domain::{Coordinate, RouteSummary};

use super::convert::convert_route_response;
use super::error::RouteError;
use super::types::OsrmRouteResponse;

/// Default base URL for the public OSRM demo server.
const DEFAULT_BASE_URL: &str = "https://router.project-osrm.org";

/// Routing profile; jeepneys and tricycles follow the road network.
const PROFILE: &str = "driving";

/// Configuration for the route provider client.
#[derive(Debug, Clone)]
pub struct RouteConfig {
    /// Base URL for the API
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl RouteConfig {
    /// Create a config pointing at the public OSRM server.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 10,
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
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// OSRM route service client.
#[derive(Debug, Clone)]
pub struct RouteClient {
    http: reqwest::Client,
    base_url: String,
}

impl RouteClient {
    /// Create a new route client.
    pub fn new(config: RouteConfig) -> Result<Self, RouteError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch the best driving route between two points.
    pub async fn route(
        &self,
        start: &Coordinate,
        end: &Coordinate,
    ) -> Result<RouteSummary, RouteError> {
        let url = route_url(&self.base_url, start, end);
        debug!(%start, %end, "requesting route");

        let response = self
            .http
            .get(&url)
            .query(&[
                ("overview", "full"),
                ("geometries", "geojson"),
                ("steps", "true"),
            ])
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(RouteError::RateLimited);
        }

        let body = response.text().await?;

        if !status.is_success() {
            // OSRM reports unroutable points (NoRoute, NoSegment) as 400 with a JSON code
            if let Ok(resp) = serde_json::from_str::<OsrmRouteResponse>(&body) {
                return convert_route_response(resp);
            }
            return Err(RouteError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let resp: OsrmRouteResponse =
            serde_json::from_str(&body).map_err(|e| RouteError::Json {
                message: e.to_string(),
            })?;

        let summary = convert_route_response(resp)?;
        debug!(
            distance_m = summary.distance_meters,
            steps = summary.steps.len(),
            "route received"
        );
        Ok(summary)
    }
}

/// OSRM wants `lng,lat` pairs separated by `;`.
fn route_url(base_url: &str, start: &Coordinate, end: &Coordinate) -> String {
    format!(
        "{}/route/v1/{}/{},{};{},{}",
        base_url,
        PROFILE,
        start.longitude(),
        start.latitude(),
        end.longitude(),
        end.latitude()
    )
}
