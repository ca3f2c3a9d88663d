//! Server configuration from the environment.

use std::net::SocketAddr;

use crate::geocode::GeocodeConfig;
use crate::routing::RouteConfig;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_NOMINATIM_BASE_URL: &str = "https://nominatim.openstreetmap.org";
const DEFAULT_OSRM_BASE_URL: &str = "https://router.project-osrm.org";
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_STATIC_DIR: &str = "static";

/// Error reading configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: {value}")]
    InvalidAddr { var: &'static str, value: String },

    #[error("{var} must be a positive number of seconds, got {value}")]
    InvalidTimeout { var: &'static str, value: String },

    #[error("{var} must be an http(s) URL, got {value}")]
    InvalidUrl { var: &'static str, value: String },
}

/// Top-level server configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub nominatim_base_url: String,
    pub osrm_base_url: String,
    pub http_timeout_secs: u64,
    pub static_dir: String,
}

impl AppConfig {
    /// Read configuration from process environment variables.
    ///
    /// | Variable | Default |
    /// |---|---|
    /// | `COMMUTE_BIND_ADDR` | `127.0.0.1:3000` |
    /// | `NOMINATIM_BASE_URL` | `https://nominatim.openstreetmap.org` |
    /// | `OSRM_BASE_URL` | `https://router.project-osrm.org` |
    /// | `COMMUTE_HTTP_TIMEOUT_SECS` | `10` |
    /// | `COMMUTE_STATIC_DIR` | `static` |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary lookup function.
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_var = "COMMUTE_BIND_ADDR";
        let bind_raw = get(bind_var).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidAddr {
                var: bind_var,
                value: bind_raw.clone(),
            })?;

        let timeout_var = "COMMUTE_HTTP_TIMEOUT_SECS";
        let http_timeout_secs = match get(timeout_var) {
            None => DEFAULT_TIMEOUT_SECS,
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    return Err(ConfigError::InvalidTimeout {
                        var: timeout_var,
                        value: raw,
                    });
                }
            },
        };

        let nominatim_base_url =
            base_url(get("NOMINATIM_BASE_URL"), "NOMINATIM_BASE_URL", DEFAULT_NOMINATIM_BASE_URL)?;
        let osrm_base_url = base_url(get("OSRM_BASE_URL"), "OSRM_BASE_URL", DEFAULT_OSRM_BASE_URL)?;

        let static_dir = get("COMMUTE_STATIC_DIR").unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string());

        Ok(Self {
            bind_addr,
            nominatim_base_url,
            osrm_base_url,
            http_timeout_secs,
            static_dir,
        })
    }

    /// Geocoding client configuration derived from this config.
    pub fn geocode_config(&self) -> GeocodeConfig {
        GeocodeConfig::new()
            .with_base_url(&self.nominatim_base_url)
            .with_timeout(self.http_timeout_secs)
    }

    /// Route client configuration derived from this config.
    pub fn route_config(&self) -> RouteConfig {
        RouteConfig::new()
            .with_base_url(&self.osrm_base_url)
            .with_timeout(self.http_timeout_secs)
    }
}

fn base_url(
    value: Option<String>,
    var: &'static str,
    default: &str,
) -> Result<String, ConfigError> {
    let Some(raw) = value else {
        return Ok(default.to_string());
    };
    let url = raw.trim().trim_end_matches('/');
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(url.to_string())
    } else {
        Err(ConfigError::InvalidUrl { var, value: raw })
    }
}
