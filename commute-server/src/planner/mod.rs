//! Commute planner.
//!
//! Pure, synchronous decision logic layered over a provider route:
//! a rule cascade picks the transit mode, a flat model estimates time and
//! fare, and a text generator turns the decision into directions. None of
//! it holds state between calls.

mod classify;
mod config;
mod directions;
mod estimate;
mod plan;
mod zones;

pub use classify::{Classifier, classify};
pub use config::PlannerConfig;
pub use directions::{DirectionsGenerator, generate_directions};
pub use estimate::{Estimate, Estimator, Fare, estimate};
pub use plan::{CommutePlan, CommutePlanner, PlanError, plan_commute, try_classify};
pub use zones::{BoundingBox, MakatiZones, ZoneClassifier, makati_cbd};
