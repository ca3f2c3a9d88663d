use std::error::Error;

use tracing::info;
use tracing_subscriber::EnvFilter;

use commute_server::cache::{CacheConfig, CachedGeocoder, CachedRouter};
use commute_server::config::AppConfig;
use commute_server::geocode::GeocodeClient;
use commute_server::planner::CommutePlanner;
use commute_server::routing::RouteClient;
use commute_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env()?;

    // Create provider clients
    let geocode_client = GeocodeClient::new(config.geocode_config())?;
    let route_client = RouteClient::new(config.route_config())?;

    // Wrap them in caches
    let cache_config = CacheConfig::default();
    let geocoder = CachedGeocoder::new(geocode_client, &cache_config);
    let router = CachedRouter::new(route_client, &cache_config);

    // Build app state
    let state = AppState::new(geocoder, router, CommutePlanner::makati());

    // Create router
    let app = create_router(state, &config.static_dir);

    // Bind and serve
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!(addr = %config.bind_addr, "Makati commute planner listening");
    info!(nominatim = %config.nominatim_base_url, osrm = %config.osrm_base_url, "providers");
    info!("API endpoints: GET /health, GET /api/places/search, GET /api/places/reverse, POST /api/commute/plan");

    axum::serve(listener, app).await?;
    Ok(())
}
