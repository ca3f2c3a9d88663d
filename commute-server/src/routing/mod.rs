//! Route provider.
//!
//! Fetches road routes from OSRM and converts them into `RouteSummary`
//! values for the planner.

mod client;
mod convert;
mod error;
mod types;

pub use client::{RouteClient, RouteConfig};
pub use convert::{convert_route, convert_route_response};
pub use error::RouteError;
pub use types::{OsrmGeometry, OsrmLeg, OsrmRoute, OsrmRouteResponse, OsrmStep};
