//! HTTP route handlers.

use askama::Template;
use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, Uri, header},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use tower_http::services::ServeDir;
use tracing::{debug, error, warn};

use crate::domain::Coordinate;
use crate::geocode::GeocodeError;
use crate::planner::PlanError;
use crate::routing::RouteError;

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/api/places/search", get(search_places))
        .route("/api/places/reverse", get(reverse_place))
        .route("/api/commute/plan", post(plan_commute))
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(not_found_page)
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page with map and search boxes.
async fn index_page() -> impl IntoResponse {
    Html(
        IndexTemplate
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}

/// Anything unrouted.
async fn not_found_page(uri: Uri) -> impl IntoResponse {
    let html = ErrorTemplate {
        title: "Not Found".to_string(),
        message: "There is nothing at this address.".to_string(),
        details: Some(uri.path().to_string()),
    }
    .render()
    .unwrap_or_else(|e| format!("Template error: {}", e));

    (StatusCode::NOT_FOUND, Html(html))
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Search places by free text.
async fn search_places(
    State(state): State<AppState>,
    Query(req): Query<PlaceSearchRequest>,
) -> Result<Json<PlaceSearchResponse>, AppError> {
    let places = state.geocoder.search(&req.q).await?;
    debug!(query = %req.q, results = places.len(), "place search");

    let places = places.iter().map(PlaceResult::from_place).collect();
    Ok(Json(PlaceSearchResponse { places }))
}

/// Name the place under a dropped pin.
async fn reverse_place(
    State(state): State<AppState>,
    Query(req): Query<ReverseRequest>,
) -> Result<Json<ReverseResponse>, AppError> {
    let coordinate = Coordinate::new(req.lat, req.lng).map_err(|e| AppError::BadRequest {
        message: e.to_string(),
    })?;

    let name = state.geocoder.reverse(&coordinate).await?;
    Ok(Json(ReverseResponse::from_name(&name)))
}

/// Plan a commute between two endpoints.
async fn plan_commute(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, AppError> {
    // Parse JSON manually so we can log the body on failure
    let req: PlanCommuteRequest = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, body = %String::from_utf8_lossy(&body), "invalid plan request");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })?;

    let start = req
        .start
        .to_endpoint("start")
        .map_err(|message| AppError::BadRequest { message })?;
    let end = req
        .end
        .to_endpoint("end")
        .map_err(|message| AppError::BadRequest { message })?;

    let route = state.router.route(&start.coordinate, &end.coordinate).await?;
    let plan = state.planner.plan(&start, &end, &route)?;

    debug!(
        start = %start.label,
        end = %end.label,
        distance_km = plan.distance_km,
        mode = %plan.decision.mode(),
        "planned commute"
    );

    // Return HTML or JSON based on Accept header
    if accepts_html(&headers) {
        let template = PlanResultsTemplate {
            plan: PlanView::from_plan(&plan, &route.path),
        };
        let html = template.render().map_err(|e| AppError::Internal {
            message: format!("Template error: {}", e),
        })?;

        Ok(Html(html).into_response())
    } else {
        Ok(Json(CommutePlanResponse::from_plan(&plan, &route.path)).into_response())
    }
}

// ============================================================================
// Error Handling
// ============================================================================

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    /// A provider failed or answered with something unusable
    Upstream { message: String },
    Internal { message: String },
}

impl From<GeocodeError> for AppError {
    fn from(e: GeocodeError) -> Self {
        match e {
            GeocodeError::EmptyQuery => AppError::BadRequest {
                message: e.to_string(),
            },
            GeocodeError::NotFound(_) => AppError::NotFound {
                message: e.to_string(),
            },
            _ => AppError::Upstream {
                message: e.to_string(),
            },
        }
    }
}

impl From<RouteError> for AppError {
    fn from(e: RouteError) -> Self {
        match e {
            RouteError::NoRoute(_) => AppError::NotFound {
                message: e.to_string(),
            },
            _ => AppError::Upstream {
                message: e.to_string(),
            },
        }
    }
}

impl From<PlanError> for AppError {
    fn from(e: PlanError) -> Self {
        match e {
            PlanError::InvalidInput(_) => AppError::BadRequest {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Upstream { message } => (StatusCode::BAD_GATEWAY, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
