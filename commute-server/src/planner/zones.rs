//! Geographic rule tables.
//!
//! The classifier asks two geographic questions: "does this trip start in
//! the central business district?" and "which jeepney zone serves this
//! destination?". Both answers come from here so the rules can be swapped
//! for test fixtures or another city.

use crate::domain::{Coordinate, JeepZone};

/// An axis-aligned latitude/longitude box with exclusive bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl BoundingBox {
    pub fn new(min_lat: f64, max_lat: f64, min_lng: f64, max_lng: f64) -> Self {
        Self {
            min_lat,
            max_lat,
            min_lng,
            max_lng,
        }
    }

    /// Strict containment: points on an edge are outside.
    pub fn contains(&self, point: &Coordinate) -> bool {
        let lat = point.latitude();
        let lng = point.longitude();
        lat > self.min_lat && lat < self.max_lat && lng > self.min_lng && lng < self.max_lng
    }
}

/// The Makati central business district.
pub fn makati_cbd() -> BoundingBox {
    BoundingBox::new(14.545, 14.562, 121.015, 121.035)
}

/// Maps a destination to the jeepney zone that serves it.
///
/// Implementations must be total: every coordinate gets a zone.
pub trait ZoneClassifier {
    fn zone_for(&self, destination: &Coordinate) -> JeepZone;
}

impl<F> ZoneClassifier for F
where
    F: Fn(&Coordinate) -> JeepZone,
{
    fn zone_for(&self, destination: &Coordinate) -> JeepZone {
        self(destination)
    }
}

/// Makati jeepney zones, tested in order, first match wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct MakatiZones;

impl ZoneClassifier for MakatiZones {
    fn zone_for(&self, destination: &Coordinate) -> JeepZone {
        let lat = destination.latitude();
        let lng = destination.longitude();

        if (lat - 14.5615).abs() < 0.0035 {
            return JeepZone::Guadalupe;
        }
        if lng > 121.0100 && lng < 121.0180 {
            return JeepZone::PrcMantrade;
        }
        if lat > 14.5640 {
            return JeepZone::LeonGuinto;
        }
        if lat > 14.5500 && lat < 14.5600 && lng > 121.0200 {
            return JeepZone::AyalaLoop;
        }
        JeepZone::MakatiLoop
    }
}
