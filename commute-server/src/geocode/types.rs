//! Nominatim response types.
//!
//! Nominatim returns coordinates as strings; conversion to domain types
//! parses and validates them.

use serde::Deserialize;

use crate::domain::{Coordinate, Place};

/// One entry of a `/search` response, or the body of `/reverse`.
#[derive(Debug, Clone, Deserialize)]
pub struct NominatimPlace {
    pub lat: String,
    pub lon: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Body of a `/reverse` response that found nothing.
#[derive(Debug, Deserialize)]
pub struct NominatimErrorBody {
    pub error: String,
}

impl NominatimPlace {
    /// Parse the coordinate, `None` if it is malformed or out of range.
    pub fn coordinate(&self) -> Option<Coordinate> {
        let lat = self.lat.trim().parse().ok()?;
        let lon = self.lon.trim().parse().ok()?;
        Coordinate::new(lat, lon).ok()
    }

    /// Convert to a domain place; entries without a name or a valid
    /// coordinate are dropped.
    pub fn into_place(self) -> Option<Place> {
        let coordinate = self.coordinate()?;
        let display_name = self.display_name?;
        Some(Place::new(display_name, coordinate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_search_results() {
        let json = r#"[
            {"place_id": 1, "lat": "14.5508", "lon": "121.0240",
             "display_name": "Greenbelt 5, Legazpi Street, Makati, Metro Manila, Philippines"},
            {"place_id": 2, "lat": "14.5515", "lon": "121.0230",
             "display_name": "Greenbelt 3, Makati"}
        ]"#;
        let results: Vec<NominatimPlace> = serde_json::from_str(json).unwrap();
        assert_eq!(results.len(), 2);

        let place = results[0].clone().into_place().unwrap();
        assert_eq!(place.short_name, "Greenbelt 5, Legazpi Street");
        assert_eq!(place.coordinate.latitude(), 14.5508);
        assert_eq!(place.coordinate.longitude(), 121.0240);
    }

    #[test]
    fn empty_results() {
        let results: Vec<NominatimPlace> = serde_json::from_str("[]").unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn malformed_coordinates_are_dropped() {
        let place = NominatimPlace {
            lat: "north".into(),
            lon: "121.0".into(),
            display_name: Some("X".into()),
        };
        assert!(place.into_place().is_none());

        let place = NominatimPlace {
            lat: "95.0".into(),
            lon: "121.0".into(),
            display_name: Some("X".into()),
        };
        assert!(place.into_place().is_none());
    }

    #[test]
    fn missing_name_is_dropped() {
        let json = r#"{"lat": "14.55", "lon": "121.02"}"#;
        let place: NominatimPlace = serde_json::from_str(json).unwrap();
        assert!(place.coordinate().is_some());
        assert!(place.into_place().is_none());
    }

    #[test]
    fn reverse_error_body() {
        let json = r#"{"error": "Unable to geocode"}"#;
        let body: NominatimErrorBody = serde_json::from_str(json).unwrap();
        assert_eq!(body.error, "Unable to geocode");
    }
}
