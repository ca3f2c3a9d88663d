//! OSRM route service response types.
//!
//! Only the fields the planner reads are modelled; serde ignores the rest.

use serde::Deserialize;

/// Top-level `/route/v1` response.
#[derive(Debug, Clone, Deserialize)]
pub struct OsrmRouteResponse {
    /// "Ok" on success, otherwise an error code such as "NoRoute"
    pub code: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub routes: Vec<OsrmRoute>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OsrmRoute {
    /// Metres
    pub distance: f64,
    pub geometry: OsrmGeometry,
    #[serde(default)]
    pub legs: Vec<OsrmLeg>,
}

/// GeoJSON LineString, requested with `geometries=geojson`.
#[derive(Debug, Clone, Deserialize)]
pub struct OsrmGeometry {
    /// `[longitude, latitude]` pairs
    pub coordinates: Vec<[f64; 2]>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OsrmLeg {
    #[serde(default)]
    pub steps: Vec<OsrmStep>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OsrmStep {
    /// Road name, empty when unnamed
    #[serde(default)]
    pub name: String,
    /// Metres
    pub distance: f64,
}
