//! Geocoded places and trip endpoints.

use super::Coordinate;

/// A geocoding candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    /// Full provider display name.
    pub display_name: String,
    /// First two comma-separated parts of the display name.
    pub short_name: String,
    pub coordinate: Coordinate,
}

impl Place {
    /// Create a place, deriving the short name from the display name.
    pub fn new(display_name: impl Into<String>, coordinate: Coordinate) -> Self {
        let display_name = display_name.into();
        let short_name = short_name(&display_name);
        Self {
            display_name,
            short_name,
            coordinate,
        }
    }
}

/// "Greenbelt 5, Legazpi Street, Makati, ..." → "Greenbelt 5, Legazpi Street".
///
/// Parts are kept exactly as the provider wrote them, so the second part
/// keeps its leading space.
pub fn short_name(display_name: &str) -> String {
    let mut parts = display_name.split(',');
    let first = parts.next().unwrap_or_default();
    match parts.next() {
        Some(second) => format!("{first},{second}"),
        None => first.to_string(),
    }
}

/// "Greenbelt 5, Legazpi Street, ..." → "Greenbelt 5".
pub fn first_name_part(display_name: &str) -> &str {
    display_name.split(',').next().unwrap_or_default()
}

/// A labelled start or end point of a trip.
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoint {
    pub label: String,
    pub coordinate: Coordinate,
}

impl Endpoint {
    pub fn new(label: impl Into<String>, coordinate: Coordinate) -> Self {
        Self {
            label: label.into(),
            coordinate,
        }
    }
}

impl From<Place> for Endpoint {
    fn from(place: Place) -> Self {
        Endpoint::new(place.short_name, place.coordinate)
    }
}
