//! Stub Nominatim and OSRM servers for integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::{Value, json};

use commute_server::cache::{CacheConfig, CachedGeocoder, CachedRouter};
use commute_server::geocode::{GeocodeClient, GeocodeConfig};
use commute_server::planner::CommutePlanner;
use commute_server::routing::{RouteClient, RouteConfig};
use commute_server::web::{AppState, create_router};

/// What the stub route provider answers.
#[derive(Debug, Clone, Copy)]
pub enum RouteReply {
    /// A route of this many metres
    Meters(f64),
    /// 400 with code "NoRoute"
    NoRoute,
    /// 400 with code "NoSegment", a point too far from any road
    NoSegment,
    /// 500 with a plain text body
    ServerError,
}

#[derive(Default)]
pub struct Calls {
    pub search_queries: Mutex<Vec<String>>,
    pub reverse: AtomicUsize,
    pub route: AtomicUsize,
}

impl Calls {
    pub fn searches(&self) -> Vec<String> {
        self.search_queries.lock().unwrap().clone()
    }

    pub fn route_count(&self) -> usize {
        self.route.load(Ordering::SeqCst)
    }

    pub fn reverse_count(&self) -> usize {
        self.reverse.load(Ordering::SeqCst)
    }
}

#[derive(Clone)]
struct StubState {
    calls: Arc<Calls>,
    route: RouteReply,
}

pub struct Upstream {
    pub addr: SocketAddr,
    pub calls: Arc<Calls>,
}

impl Upstream {
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

/// Start a stub that serves both providers on one port.
pub async fn spawn_upstream(route: RouteReply) -> Upstream {
    let calls = Arc::new(Calls::default());
    let state = StubState {
        calls: calls.clone(),
        route,
    };

    let app = Router::new()
        .route("/search", get(search))
        .route("/reverse", get(reverse))
        .route("/route/v1/driving/:coords", get(route_handler))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    Upstream { addr, calls }
}

async fn search(
    State(state): State<StubState>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    let q = params.get("q").cloned().unwrap_or_default();
    state.calls.search_queries.lock().unwrap().push(q.clone());

    if q.to_lowercase().starts_with("nowhere") {
        return Json(json!([]));
    }

    let places: Vec<Value> = (1..=6)
        .map(|i| {
            json!({
                "place_id": i,
                "lat": format!("14.55{i}"),
                "lon": "121.0244",
                "display_name": format!("Greenbelt {i}, Legazpi Street, Makati, Metro Manila, Philippines"),
            })
        })
        .collect();
    Json(Value::Array(places))
}

async fn reverse(
    State(state): State<StubState>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    state.calls.reverse.fetch_add(1, Ordering::SeqCst);

    let lat: f64 = params.get("lat").and_then(|v| v.parse().ok()).unwrap_or(0.0);
    if lat < 0.0 {
        return Json(json!({"error": "Unable to geocode"}));
    }
    Json(json!({
        "lat": params.get("lat"),
        "lon": params.get("lon"),
        "display_name": "12 Jupiter Street, Bel-Air, Makati, Metro Manila, Philippines",
    }))
}

async fn route_handler(State(state): State<StubState>, Path(coords): Path<String>) -> Response {
    state.calls.route.fetch_add(1, Ordering::SeqCst);

    let points: Vec<[f64; 2]> = coords
        .split(';')
        .filter_map(|pair| {
            let (lng, lat) = pair.split_once(',')?;
            Some([lng.parse().ok()?, lat.parse().ok()?])
        })
        .collect();

    match state.route {
        RouteReply::Meters(distance) => Json(json!({
            "code": "Ok",
            "routes": [{
                "distance": distance,
                "duration": distance / 10.0,
                "geometry": {"type": "LineString", "coordinates": points},
                "legs": [{
                    "steps": [
                        {"name": "Ayala Avenue", "distance": distance - 530.0},
                        {"name": "Paseo de Roxas", "distance": 480.0},
                        {"name": "", "distance": 50.0}
                    ]
                }]
            }],
            "waypoints": []
        }))
        .into_response(),
        RouteReply::NoRoute => (
            StatusCode::BAD_REQUEST,
            Json(json!({"code": "NoRoute", "message": "Impossible route between points"})),
        )
            .into_response(),
        RouteReply::NoSegment => (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "code": "NoSegment",
                "message": "Could not find a matching segment for coordinate 0"
            })),
        )
            .into_response(),
        RouteReply::ServerError => {
            (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded").into_response()
        }
    }
}

pub fn geocode_client(upstream: &Upstream) -> GeocodeClient {
    GeocodeClient::new(GeocodeConfig::new().with_base_url(upstream.base_url()).with_timeout(5))
        .unwrap()
}

pub fn route_client(upstream: &Upstream) -> RouteClient {
    RouteClient::new(RouteConfig::new().with_base_url(upstream.base_url()).with_timeout(5)).unwrap()
}

/// The full application wired to a stub upstream.
pub fn test_app(upstream: &Upstream) -> Router {
    let cache_config = CacheConfig::default();
    let state = AppState::new(
        CachedGeocoder::new(geocode_client(upstream), &cache_config),
        CachedRouter::new(route_client(upstream), &cache_config),
        CommutePlanner::makati(),
    );
    create_router(state, "static")
}
