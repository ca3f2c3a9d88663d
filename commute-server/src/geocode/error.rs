//! Geocoding error types.

/// Errors that can occur when talking to the geocoding service.
#[derive(Debug, thiserror::Error)]
pub enum GeocodeError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Rate limited by the provider
    #[error("rate limited by geocoding service")]
    RateLimited,

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// Nothing to search for
    #[error("search query is empty")]
    EmptyQuery,

    /// Reverse lookup found no place at the coordinate
    #[error("no place found at {0}")]
    NotFound(String),
}
