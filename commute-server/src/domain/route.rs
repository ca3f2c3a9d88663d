//! Route summary types produced by the route provider.

use super::Coordinate;

/// One manoeuvre of a provider route.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteStep {
    /// Road the step follows, if the provider named it.
    pub road_name: Option<String>,
    /// Length of the step in metres.
    pub distance_meters: f64,
}

impl RouteStep {
    /// Creates a new route step.
    pub fn new(road_name: Option<String>, distance_meters: f64) -> Self {
        Self {
            road_name,
            distance_meters,
        }
    }
}

/// A driving route between two points.
///
/// Read-only once built; the planner only looks at the total distance
/// and the trailing steps, the path is passed through for playback.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RouteSummary {
    /// Total route length in metres.
    pub distance_meters: f64,
    /// Ordered manoeuvres.
    pub steps: Vec<RouteStep>,
    /// Ordered path geometry.
    pub path: Vec<Coordinate>,
}

impl RouteSummary {
    /// Total distance in kilometres.
    pub fn distance_km(&self) -> f64 {
        self.distance_meters / 1000.0
    }

    /// The final two steps (fewer if the route is shorter).
    ///
    /// These drive the "last mile" walking instructions.
    pub fn last_steps(&self) -> &[RouteStep] {
        let start = self.steps.len().saturating_sub(2);
        &self.steps[start..]
    }
}
