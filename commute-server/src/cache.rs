//! Caching layer for geocoding and routing responses.
//!
//! Both providers are public services with strict usage policies, and the
//! same searches and routes recur as a user adjusts pins. Coordinates are
//! rounded to five decimal places (about a metre) before keying so that
//! float noise from the map does not defeat the cache.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;
use tracing::debug;

use crate::domain::{Coordinate, Place, RouteSummary};
use crate::geocode::{GeocodeClient, GeocodeError};
use crate::routing::{RouteClient, RouteError};

/// Rounded (latitude, longitude) in units of 1e-5 degrees.
type CoordKey = (i64, i64);

/// Route key: (start, end).
type RouteKey = (CoordKey, CoordKey);

/// Configuration for the caches.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries per cache.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(600),
            max_capacity: 1000,
        }
    }
}

fn build_cache<K, V>(config: &CacheConfig) -> MokaCache<K, V>
where
    K: std::hash::Hash + Eq + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    MokaCache::builder()
        .time_to_live(config.ttl)
        .max_capacity(config.max_capacity)
        .build()
}

fn coord_key(c: &Coordinate) -> CoordKey {
    (
        (c.latitude() * 1e5).round() as i64,
        (c.longitude() * 1e5).round() as i64,
    )
}

/// Case- and whitespace-insensitive search key.
fn search_key(query: &str) -> String {
    query
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Geocoding client with caching.
///
/// Only successful lookups are cached; errors always go back to the provider
/// on the next call.
pub struct CachedGeocoder {
    client: GeocodeClient,
    searches: MokaCache<String, Arc<Vec<Place>>>,
    labels: MokaCache<CoordKey, Arc<str>>,
}

impl CachedGeocoder {
    /// Create a new cached client.
    pub fn new(client: GeocodeClient, config: &CacheConfig) -> Self {
        Self {
            client,
            searches: build_cache(config),
            labels: build_cache(config),
        }
    }

    /// Search for places, using cache if available.
    pub async fn search(&self, query: &str) -> Result<Arc<Vec<Place>>, GeocodeError> {
        let key = search_key(query);
        if key.is_empty() {
            return Err(GeocodeError::EmptyQuery);
        }

        if let Some(cached) = self.searches.get(&key).await {
            debug!(query = %key, "search cache hit");
            return Ok(cached);
        }

        let places = Arc::new(self.client.search(query).await?);
        self.searches.insert(key, places.clone()).await;

        Ok(places)
    }

    /// Name the place at a coordinate, using cache if available.
    pub async fn reverse(&self, coordinate: &Coordinate) -> Result<Arc<str>, GeocodeError> {
        let key = coord_key(coordinate);

        if let Some(cached) = self.labels.get(&key).await {
            debug!(%coordinate, "reverse cache hit");
            return Ok(cached);
        }

        let name: Arc<str> = self.client.reverse(coordinate).await?.into();
        self.labels.insert(key, name.clone()).await;

        Ok(name)
    }

    /// Get cache statistics.
    pub fn cache_entry_count(&self) -> u64 {
        self.searches.entry_count() + self.labels.entry_count()
    }
}

/// Route client with caching.
pub struct CachedRouter {
    client: RouteClient,
    routes: MokaCache<RouteKey, Arc<RouteSummary>>,
}

impl CachedRouter {
    /// Create a new cached client.
    pub fn new(client: RouteClient, config: &CacheConfig) -> Self {
        Self {
            client,
            routes: build_cache(config),
        }
    }

    /// Fetch a route, using cache if available.
    pub async fn route(
        &self,
        start: &Coordinate,
        end: &Coordinate,
    ) -> Result<Arc<RouteSummary>, RouteError> {
        let key = (coord_key(start), coord_key(end));

        if let Some(cached) = self.routes.get(&key).await {
            debug!(%start, %end, "route cache hit");
            return Ok(cached);
        }

        let route = Arc::new(self.client.route(start, end).await?);
        self.routes.insert(key, route.clone()).await;

        Ok(route)
    }

    /// Get cache statistics.
    pub fn cache_entry_count(&self) -> u64 {
        self.routes.entry_count()
    }
}
