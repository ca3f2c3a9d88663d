//! Fare and travel-time estimation.
//!
//! Both models are deliberately rough: speeds are flat per mode, and the
//! jeepney fare charges the distance surcharge once against the whole trip
//! even when two rides are needed.

use std::fmt;

use chrono::Duration;

use crate::domain::{TransportDecision, TransportMode};

use super::config::PlannerConfig;

/// What the trip costs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fare {
    Free,
    Pesos(u32),
}

impl fmt::Display for Fare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fare::Free => f.write_str("Free"),
            Fare::Pesos(amount) => write!(f, "₱{amount}"),
        }
    }
}

/// Estimated travel time and fare.
#[derive(Debug, Clone, PartialEq)]
pub struct Estimate {
    /// Door-to-door time in minutes, unrounded.
    pub eta_minutes: f64,
    pub fare: Fare,
}

impl Estimate {
    /// ETA rounded to the nearest minute.
    pub fn eta_minutes_rounded(&self) -> i64 {
        self.eta_minutes.round() as i64
    }

    /// ETA as a Duration, to the nearest second.
    ///
    /// `None` when the estimate is not finite or too large to represent.
    pub fn eta(&self) -> Option<Duration> {
        let seconds = (self.eta_minutes * 60.0).round();
        if !seconds.is_finite() || seconds.abs() >= i64::MAX as f64 {
            return None;
        }
        Duration::try_seconds(seconds as i64)
    }

    /// The fare as display text ("Free", "₱20").
    pub fn fare_display(&self) -> String {
        self.fare.to_string()
    }
}

/// Fare and time estimator.
#[derive(Debug, Clone, Default)]
pub struct Estimator {
    config: PlannerConfig,
}

impl Estimator {
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    /// Estimate time and fare for a classified trip.
    pub fn estimate(&self, decision: &TransportDecision, distance_km: f64) -> Estimate {
        Estimate {
            eta_minutes: self.eta_minutes(decision, distance_km),
            fare: self.fare(decision, distance_km),
        }
    }

    fn eta_minutes(&self, decision: &TransportDecision, distance_km: f64) -> f64 {
        let c = &self.config;
        match decision.mode() {
            TransportMode::Walk => distance_km / c.walk_speed_kmh * 60.0,
            TransportMode::Tricycle => {
                distance_km / c.tricycle_speed_kmh * 60.0 + c.tricycle_wait_mins
            }
            TransportMode::Jeep => {
                let transfer = if decision.ride_count() > 1 {
                    c.transfer_penalty_mins
                } else {
                    0.0
                };
                distance_km / c.jeep_speed_kmh * 60.0 + c.jeep_wait_mins + transfer
            }
        }
    }

    fn fare(&self, decision: &TransportDecision, distance_km: f64) -> Fare {
        let c = &self.config;
        match decision.mode() {
            TransportMode::Walk => Fare::Free,
            TransportMode::Tricycle => Fare::Pesos(c.tricycle_fare),
            TransportMode::Jeep => {
                // A jeepney trip always has at least one ride to pay for
                let rides = decision.ride_count().max(1);
                let surcharge = (distance_km - c.jeep_base_km).max(0.0) * c.jeep_per_km;
                let total = c.jeep_base_fare * f64::from(rides) + surcharge;
                Fare::Pesos(total.round() as u32)
            }
        }
    }
}

/// Estimate a trip with the default Makati fares and speeds.
///
/// # Examples
///
/// ```
/// use commute_server::domain::{JeepZone, TransportDecision};
/// use commute_server::planner::estimate;
///
/// let jeep = TransportDecision::jeep(JeepZone::AyalaLoop);
/// assert_eq!(estimate(&jeep, 6.0).fare_display(), "₱17");
///
/// let trike = TransportDecision::tricycle();
/// assert_eq!(estimate(&trike, 3.0).eta_minutes_rounded(), 17);
/// ```
pub fn estimate(decision: &TransportDecision, distance_km: f64) -> Estimate {
    Estimator::default().estimate(decision, distance_km)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::JeepZone;

    fn one_ride() -> TransportDecision {
        TransportDecision::jeep(JeepZone::MakatiLoop)
    }

    #[test]
    fn walk_is_free() {
        let e = estimate(&TransportDecision::walk(), 0.45);
        assert_eq!(e.fare, Fare::Free);
        assert_eq!(e.fare_display(), "Free");
        assert_eq!(e.eta_minutes_rounded(), 6);
    }

    #[test]
    fn tricycle_flat_fare() {
        let e = estimate(&TransportDecision::tricycle(), 1.2);
        assert_eq!(e.fare_display(), "₱20");
    }

    #[test]
    fn tricycle_eta() {
        let e = estimate(&TransportDecision::tricycle(), 3.0);
        assert!((e.eta_minutes - 17.0).abs() < 1e-9);
        assert_eq!(e.eta_minutes_rounded(), 17);
    }

    #[test]
    fn jeep_fare_at_base_distance() {
        assert_eq!(estimate(&one_ride(), 4.0).fare_display(), "₱13");
    }

    #[test]
    fn jeep_fare_with_surcharge() {
        assert_eq!(estimate(&one_ride(), 6.0).fare_display(), "₱17");
    }

    #[test]
    fn jeep_fare_rounds() {
        // 13 + 0.3 * 2 = 13.6
        assert_eq!(estimate(&one_ride(), 4.3).fare, Fare::Pesos(14));
        // 13 + 0.2 * 2 = 13.4
        assert_eq!(estimate(&one_ride(), 4.2).fare, Fare::Pesos(13));
    }

    #[test]
    fn two_rides_base_fare() {
        let e = estimate(&TransportDecision::two_rides(), 3.0);
        assert_eq!(e.fare_display(), "₱26");
    }

    /// The distance surcharge is applied once against the whole trip, not per
    /// ride. A literal per-ride fare matrix would charge more; this keeps the
    /// single surcharge.
    #[test]
    fn two_rides_surcharge_applied_once() {
        let e = estimate(&TransportDecision::two_rides(), 6.0);
        assert_eq!(e.fare, Fare::Pesos(30));
    }

    #[test]
    fn jeep_with_zero_rides_pays_one_fare() {
        let d = TransportDecision::from_parts(TransportMode::Jeep, 0, "🚙", "Jeep", None);
        assert_eq!(estimate(&d, 2.0).fare, Fare::Pesos(13));
    }

    #[test]
    fn jeep_eta_single_ride() {
        // 2 / 12 * 60 + 10 = 20
        let e = estimate(&one_ride(), 2.0);
        assert_eq!(e.eta_minutes_rounded(), 20);
    }

    #[test]
    fn jeep_eta_includes_transfer_penalty() {
        // 6 / 12 * 60 + 10 + 15 = 55
        let e = estimate(&TransportDecision::two_rides(), 6.0);
        assert_eq!(e.eta_minutes_rounded(), 55);
        assert_eq!(e.eta(), Some(Duration::minutes(55)));
    }

    #[test]
    fn eta_out_of_range_is_none() {
        let d = TransportDecision::two_rides();
        assert_eq!(estimate(&d, f64::INFINITY).eta(), None);
        assert_eq!(estimate(&d, 1e15).eta(), None);
        assert_eq!(estimate(&d, f64::NAN).eta(), None);
    }

    #[test]
    fn custom_fares() {
        let estimator = Estimator::new(PlannerConfig {
            tricycle_fare: 30,
            ..Default::default()
        });
        let e = estimator.estimate(&TransportDecision::tricycle(), 1.0);
        assert_eq!(e.fare, Fare::Pesos(30));
    }

    #[test]
    fn idempotent() {
        let d = TransportDecision::two_rides();
        assert_eq!(estimate(&d, 7.3), estimate(&d, 7.3));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::JeepZone;
    use proptest::prelude::*;

    proptest! {
        /// Within the base distance a single ride always costs the base fare
        #[test]
        fn single_ride_base_fare(km in 0.0f64..=4.0) {
            let d = TransportDecision::jeep(JeepZone::Guadalupe);
            prop_assert_eq!(estimate(&d, km).fare, Fare::Pesos(13));
        }

        /// Longer trips never cost less
        #[test]
        fn jeep_fare_monotonic(km in 0.0f64..40.0, extra in 0.0f64..10.0) {
            let d = TransportDecision::two_rides();
            let (Fare::Pesos(a), Fare::Pesos(b)) =
                (estimate(&d, km).fare, estimate(&d, km + extra).fare)
            else {
                panic!("jeep fares are never free");
            };
            prop_assert!(b >= a);
        }

        /// Walking is always free
        #[test]
        fn walk_always_free(km in 0.0f64..0.5) {
            let walk = estimate(&TransportDecision::walk(), km);
            prop_assert_eq!(walk.fare, Fare::Free);
            prop_assert!(walk.eta_minutes >= 0.0);
        }

        /// Any distance, however extreme, yields an estimate without panicking
        #[test]
        fn eta_total(km in proptest::num::f64::ANY) {
            let e = estimate(&TransportDecision::two_rides(), km);
            if let Some(eta) = e.eta() {
                prop_assert!(eta.num_seconds() >= 0 || km < 0.0);
            }
        }
    }
}
