//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::{CachedGeocoder, CachedRouter};
use crate::planner::{CommutePlanner, MakatiZones};

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Cached geocoding client
    pub geocoder: Arc<CachedGeocoder>,

    /// Cached route provider client
    pub router: Arc<CachedRouter>,

    /// Mode, fare and directions rules
    pub planner: Arc<CommutePlanner<MakatiZones>>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        geocoder: CachedGeocoder,
        router: CachedRouter,
        planner: CommutePlanner<MakatiZones>,
    ) -> Self {
        Self {
            geocoder: Arc::new(geocoder),
            router: Arc::new(router),
            planner: Arc::new(planner),
        }
    }
}
