//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Coordinate, DirectionStep, Endpoint, Place, TransportDecision};
use crate::planner::CommutePlan;

/// Prefix on labels produced by reverse geocoding a dropped pin.
pub const PIN_LABEL_PREFIX: &str = "📍 ";

/// Request to search for places.
#[derive(Debug, Deserialize)]
pub struct PlaceSearchRequest {
    /// Free-text query
    #[serde(default)]
    pub q: String,
}

/// A place in search results.
#[derive(Debug, Serialize)]
pub struct PlaceResult {
    /// Full provider name
    pub display_name: String,

    /// First two parts of the name, for list rows and labels
    pub short_name: String,

    pub lat: f64,
    pub lng: f64,
}

/// Response for place search.
#[derive(Debug, Serialize)]
pub struct PlaceSearchResponse {
    /// Candidates, best match first (at most five)
    pub places: Vec<PlaceResult>,
}

/// Request to name a dropped pin.
#[derive(Debug, Deserialize)]
pub struct ReverseRequest {
    pub lat: f64,
    pub lng: f64,
}

/// Response for reverse geocoding.
#[derive(Debug, Serialize)]
pub struct ReverseResponse {
    /// Pin label, e.g. "📍 Jupiter Street"
    pub label: String,
}

/// A trip endpoint as sent by the browser.
#[derive(Debug, Deserialize)]
pub struct EndpointRequest {
    pub label: String,
    pub lat: f64,
    pub lng: f64,
}

/// Request to plan a commute.
#[derive(Debug, Deserialize)]
pub struct PlanCommuteRequest {
    pub start: EndpointRequest,
    pub end: EndpointRequest,
}

/// The chosen transport mode.
#[derive(Debug, Serialize)]
pub struct DecisionResult {
    /// "walk", "tricycle" or "jeep"
    pub mode: String,

    /// Rides paid for (0 for walking)
    pub rides: u32,

    pub icon: String,
    pub label: String,

    /// Jeepney route zone, if one was assigned
    pub zone: Option<String>,
}

/// One instruction in the itinerary.
#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DirectionResult {
    Walk {
        headline: String,
        detail: String,
    },
    Ride {
        headline: String,
        cost_text: String,
        icon: String,
        /// Accent colour as hex
        color: String,
        /// Background colour as hex
        background: String,
    },
    Transfer {
        headline: String,
        detail: String,
    },
    Arrival {
        headline: String,
        detail: String,
    },
}

/// Response for commute planning.
#[derive(Debug, Serialize)]
pub struct CommutePlanResponse {
    pub distance_km: f64,
    pub decision: DecisionResult,

    /// Estimated door-to-door time, whole minutes
    pub eta_minutes: i64,

    /// Same estimate to the second, absent when out of range
    pub eta_seconds: Option<i64>,

    /// "Free" or "₱N"
    pub fare: String,

    pub directions: Vec<DirectionResult>,

    /// Route geometry as `[lat, lng]` pairs for playback
    pub path: Vec<[f64; 2]>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl PlaceResult {
    pub fn from_place(place: &Place) -> Self {
        Self {
            display_name: place.display_name.clone(),
            short_name: place.short_name.clone(),
            lat: place.coordinate.latitude(),
            lng: place.coordinate.longitude(),
        }
    }
}

impl ReverseResponse {
    pub fn from_name(name: &str) -> Self {
        Self {
            label: format!("{PIN_LABEL_PREFIX}{name}"),
        }
    }
}

impl EndpointRequest {
    /// Validate into a domain endpoint.
    ///
    /// `role` names the endpoint in error messages ("start" or "end").
    pub fn to_endpoint(&self, role: &str) -> Result<Endpoint, String> {
        let label = self.label.trim();
        if label.is_empty() {
            return Err(format!("{role} label must not be empty"));
        }
        let coordinate =
            Coordinate::new(self.lat, self.lng).map_err(|e| format!("{role}: {e}"))?;
        Ok(Endpoint::new(label, coordinate))
    }
}

impl DecisionResult {
    pub fn from_decision(decision: &TransportDecision) -> Self {
        Self {
            mode: decision.mode().as_str().to_string(),
            rides: decision.ride_count(),
            icon: decision.icon().to_string(),
            label: decision.label().to_string(),
            zone: decision.zone().map(|z| z.name().to_string()),
        }
    }
}

impl DirectionResult {
    pub fn from_step(step: &DirectionStep) -> Self {
        match step {
            DirectionStep::Walk { headline, detail } => DirectionResult::Walk {
                headline: headline.clone(),
                detail: detail.clone(),
            },
            DirectionStep::Ride {
                headline,
                cost_text,
                color,
                icon,
            } => DirectionResult::Ride {
                headline: headline.clone(),
                cost_text: cost_text.clone(),
                icon: icon.to_string(),
                color: color.hex().to_string(),
                background: color.background_hex().to_string(),
            },
            DirectionStep::Transfer { headline, detail } => DirectionResult::Transfer {
                headline: headline.clone(),
                detail: detail.clone(),
            },
            DirectionStep::Arrival { headline, detail } => DirectionResult::Arrival {
                headline: headline.clone(),
                detail: detail.clone(),
            },
        }
    }
}

impl CommutePlanResponse {
    pub fn from_plan(plan: &CommutePlan, path: &[Coordinate]) -> Self {
        Self {
            distance_km: plan.distance_km,
            decision: DecisionResult::from_decision(&plan.decision),
            eta_minutes: plan.estimate.eta_minutes_rounded(),
            eta_seconds: plan.estimate.eta().map(|eta| eta.num_seconds()),
            fare: plan.estimate.fare_display(),
            directions: plan.directions.iter().map(DirectionResult::from_step).collect(),
            path: path
                .iter()
                .map(|c| [c.latitude(), c.longitude()])
                .collect(),
        }
    }
}
