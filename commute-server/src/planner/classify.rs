//! Rule-based transport classifier.
//!
//! A fixed cascade evaluated top to bottom, first match wins:
//!
//! 1. Short trips are walked.
//! 2. Short-to-medium trips starting outside the CBD take a tricycle.
//! 3. Long trips need two jeepneys.
//! 4. Everything else is one jeepney, zoned by destination.
//!
//! The cascade is total: every input, including non-finite distances,
//! falls through to some decision.

use crate::domain::{Coordinate, TransportDecision};

use super::config::PlannerConfig;
use super::zones::{BoundingBox, MakatiZones, ZoneClassifier, makati_cbd};

/// Transport classifier over a pluggable zone table.
#[derive(Debug, Clone)]
pub struct Classifier<Z> {
    cbd: BoundingBox,
    zones: Z,
    walk_max_km: f64,
    tricycle_max_km: f64,
    two_ride_min_km: f64,
}

impl Classifier<MakatiZones> {
    /// The Makati rule set with default thresholds.
    pub fn makati() -> Self {
        Self::new(&PlannerConfig::default(), makati_cbd(), MakatiZones)
    }
}

impl Default for Classifier<MakatiZones> {
    fn default() -> Self {
        Self::makati()
    }
}

impl<Z: ZoneClassifier> Classifier<Z> {
    /// Create a classifier with custom thresholds, CBD and zones.
    pub fn new(config: &PlannerConfig, cbd: BoundingBox, zones: Z) -> Self {
        Self {
            cbd,
            zones,
            walk_max_km: config.walk_max_km,
            tricycle_max_km: config.tricycle_max_km,
            two_ride_min_km: config.two_ride_min_km,
        }
    }

    /// Classify a trip.
    pub fn classify(
        &self,
        start: &Coordinate,
        end: &Coordinate,
        distance_km: f64,
    ) -> TransportDecision {
        if distance_km < self.walk_max_km {
            return TransportDecision::walk();
        }

        let short_hop = distance_km >= self.walk_max_km && distance_km < self.tricycle_max_km;
        if short_hop && !self.cbd.contains(start) {
            return TransportDecision::tricycle();
        }

        if distance_km > self.two_ride_min_km {
            return TransportDecision::two_rides();
        }

        TransportDecision::jeep(self.zones.zone_for(end))
    }
}

/// Classify a trip with the Makati rules.
///
/// # Examples
///
/// ```
/// use commute_server::domain::{Coordinate, TransportMode};
/// use commute_server::planner::classify;
///
/// let start = Coordinate::new(14.5547, 121.0244).unwrap();
/// let end = Coordinate::new(14.5600, 121.0300).unwrap();
///
/// assert_eq!(classify(&start, &end, 0.3).mode(), TransportMode::Walk);
/// assert_eq!(classify(&start, &end, 4.0).ride_count(), 2);
/// ```
pub fn classify(start: &Coordinate, end: &Coordinate, distance_km: f64) -> TransportDecision {
    Classifier::makati().classify(start, end, distance_km)
}
