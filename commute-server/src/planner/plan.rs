//! The commute pipeline: classify, estimate, describe.

use crate::domain::{
    Coordinate, DirectionStep, Endpoint, RouteSummary, TransportDecision,
};

use super::classify::Classifier;
use super::config::PlannerConfig;
use super::directions::DirectionsGenerator;
use super::estimate::{Estimate, Estimator};
use super::zones::{BoundingBox, MakatiZones, ZoneClassifier};

/// Error from commute planning.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlanError {
    /// Inputs the planner refuses to reason about
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Everything the presentation layer shows for one trip.
#[derive(Debug, Clone, PartialEq)]
pub struct CommutePlan {
    pub distance_km: f64,
    pub decision: TransportDecision,
    pub estimate: Estimate,
    pub directions: Vec<DirectionStep>,
}

/// Classifier, estimator and directions generator sharing one configuration.
///
/// Holds no per-trip state; each `plan` call stands alone.
#[derive(Debug, Clone)]
pub struct CommutePlanner<Z> {
    classifier: Classifier<Z>,
    estimator: Estimator,
    directions: DirectionsGenerator,
}

impl CommutePlanner<MakatiZones> {
    /// The Makati planner with default fares and thresholds.
    pub fn makati() -> Self {
        Self {
            classifier: Classifier::makati(),
            estimator: Estimator::default(),
            directions: DirectionsGenerator::default(),
        }
    }
}

impl Default for CommutePlanner<MakatiZones> {
    fn default() -> Self {
        Self::makati()
    }
}

impl<Z: ZoneClassifier> CommutePlanner<Z> {
    /// Create a planner for another rule set.
    pub fn new(config: PlannerConfig, cbd: BoundingBox, zones: Z) -> Self {
        Self {
            classifier: Classifier::new(&config, cbd, zones),
            directions: DirectionsGenerator::new(&config),
            estimator: Estimator::new(config),
        }
    }

    /// Classify after checking the distance is usable.
    pub fn try_classify(
        &self,
        start: &Coordinate,
        end: &Coordinate,
        distance_km: f64,
    ) -> Result<TransportDecision, PlanError> {
        validate_distance(distance_km)?;
        Ok(self.classifier.classify(start, end, distance_km))
    }

    /// Plan a trip over a provider route.
    pub fn plan(
        &self,
        start: &Endpoint,
        end: &Endpoint,
        route: &RouteSummary,
    ) -> Result<CommutePlan, PlanError> {
        let distance_km = route.distance_km();
        let decision = self.try_classify(&start.coordinate, &end.coordinate, distance_km)?;
        let estimate = self.estimator.estimate(&decision, distance_km);
        let directions = self.directions.generate(
            &decision,
            &start.label,
            &end.label,
            route.last_steps(),
            &estimate.fare,
        );

        Ok(CommutePlan {
            distance_km,
            decision,
            estimate,
            directions,
        })
    }
}

fn validate_distance(distance_km: f64) -> Result<(), PlanError> {
    if distance_km.is_nan() {
        return Err(PlanError::InvalidInput("distance is NaN".to_string()));
    }
    if distance_km.is_infinite() {
        return Err(PlanError::InvalidInput("distance is infinite".to_string()));
    }
    if distance_km < 0.0 {
        return Err(PlanError::InvalidInput(format!(
            "distance must not be negative, got {distance_km} km"
        )));
    }
    Ok(())
}

/// Classify with the Makati rules, rejecting unusable distances.
pub fn try_classify(
    start: &Coordinate,
    end: &Coordinate,
    distance_km: f64,
) -> Result<TransportDecision, PlanError> {
    CommutePlanner::makati().try_classify(start, end, distance_km)
}

/// Plan a trip with the Makati rules.
pub fn plan_commute(
    start: &Endpoint,
    end: &Endpoint,
    route: &RouteSummary,
) -> Result<CommutePlan, PlanError> {
    CommutePlanner::makati().plan(start, end, route)
}
