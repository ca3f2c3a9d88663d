//! Web layer for the commute planner.
//!
//! Serves the map page, proxies place search and pin naming to the
//! geocoder, and plans commutes over provider routes.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::*;
