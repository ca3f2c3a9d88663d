//! Nominatim geocoding.
//!
//! Turns free text into ranked candidate places, and a dropped pin into a
//! short label. Results feed the planner as `Endpoint`s.

mod client;
mod error;
mod types;

pub use client::{GeocodeClient, GeocodeConfig};
pub use error::GeocodeError;
pub use types::NominatimPlace;
