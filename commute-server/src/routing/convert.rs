//! Conversion from OSRM responses to domain route summaries.

use crate::domain::{Coordinate, RouteStep, RouteSummary};

use super::error::RouteError;
use super::types::{OsrmRoute, OsrmRouteResponse};

/// Convert a route response, taking the provider's first (best) route.
pub fn convert_route_response(resp: OsrmRouteResponse) -> Result<RouteSummary, RouteError> {
    if resp.code != "Ok" {
        return Err(RouteError::NoRoute(resp.message.unwrap_or(resp.code)));
    }

    let route = resp
        .routes
        .into_iter()
        .next()
        .ok_or_else(|| RouteError::NoRoute("provider returned no routes".to_string()))?;

    convert_route(route)
}

/// Convert a single route.
///
/// Steps are flattened across legs in order. Unnamed roads become `None`.
pub fn convert_route(route: OsrmRoute) -> Result<RouteSummary, RouteError> {
    if !route.distance.is_finite() || route.distance < 0.0 {
        return Err(RouteError::Json {
            message: format!("invalid route distance {}", route.distance),
        });
    }

    let steps = route
        .legs
        .into_iter()
        .flat_map(|leg| leg.steps)
        .map(|step| {
            let name = step.name.trim();
            let road_name = (!name.is_empty()).then(|| name.to_string());
            RouteStep::new(road_name, step.distance)
        })
        .collect();

    let path = route
        .geometry
        .coordinates
        .into_iter()
        .map(|[lng, lat]| {
            Coordinate::new(lat, lng).map_err(|e| RouteError::Json {
                message: e.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(RouteSummary {
        distance_meters: route.distance,
        steps,
        path,
    })
}
