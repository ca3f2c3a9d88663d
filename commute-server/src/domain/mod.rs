//! Domain types for the commute planner.
//!
//! Coordinates, provider routes, transport decisions and direction steps.
//! Types that carry invariants validate them at construction, so the
//! planner can trust whatever it receives.

mod coordinate;
mod directions;
mod place;
mod route;
mod transport;

pub use coordinate::{Coordinate, InvalidCoordinate};
pub use directions::{DirectionStep, RideColor};
pub use place::{Endpoint, Place, first_name_part, short_name};
pub use route::{RouteStep, RouteSummary};
pub use transport::{
    JEEP_ICON, JeepZone, MAIN_ROAD_PICKUP, TRANSFER_ICON, TRICYCLE_ICON, TransportDecision,
    TransportMode, WALK_ICON,
};
