//! Tunable constants for classification, timing and fares.

/// Configuration parameters for the commute planner.
///
/// The defaults describe Makati jeepney and tricycle service.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannerConfig {
    /// Trips shorter than this are walked (km).
    pub walk_max_km: f64,

    /// Trips shorter than this starting outside the CBD take a tricycle (km).
    pub tricycle_max_km: f64,

    /// Trips longer than this need two jeepneys (km).
    pub two_ride_min_km: f64,

    /// Walking speed (km/h).
    pub walk_speed_kmh: f64,

    /// Tricycle speed (km/h).
    pub tricycle_speed_kmh: f64,

    /// Fixed wait for a tricycle (minutes).
    pub tricycle_wait_mins: f64,

    /// Jeepney speed (km/h).
    pub jeep_speed_kmh: f64,

    /// Fixed wait and loading time for a jeepney (minutes).
    pub jeep_wait_mins: f64,

    /// Extra time when a second jeepney is needed (minutes).
    pub transfer_penalty_mins: f64,

    /// Flat tricycle fare (pesos).
    pub tricycle_fare: u32,

    /// Base fare per jeepney ride (pesos).
    pub jeep_base_fare: f64,

    /// Distance covered by the base fare (km).
    pub jeep_base_km: f64,

    /// Surcharge per km beyond the base distance (pesos).
    pub jeep_per_km: f64,

    /// Last-mile route steps this short or shorter are not worth a
    /// walking instruction (metres).
    pub last_mile_min_meters: f64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            walk_max_km: 0.5,
            tricycle_max_km: 1.5,
            two_ride_min_km: 2.5,
            walk_speed_kmh: 4.5,
            tricycle_speed_kmh: 15.0,
            tricycle_wait_mins: 5.0,
            jeep_speed_kmh: 12.0,
            jeep_wait_mins: 10.0,
            transfer_penalty_mins: 15.0,
            tricycle_fare: 20,
            jeep_base_fare: 13.0,
            jeep_base_km: 4.0,
            jeep_per_km: 2.0,
            last_mile_min_meters: 20.0,
        }
    }
}
