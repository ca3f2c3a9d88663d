//! Step-by-step direction text.
//!
//! Every itinerary has the same frame: a start step, a mode-specific middle
//! section, up to two "last mile" walking steps taken from the route
//! provider, and an arrival step.

use crate::domain::{
    DirectionStep, JEEP_ICON, MAIN_ROAD_PICKUP, RideColor, RouteStep, TransportDecision,
    TransportMode,
};

use super::config::PlannerConfig;
use super::estimate::Fare;

const TRICYCLE_PICKUP: &str = "Walk to Tricycle TODA/Corner";
const BOARDING_AREA: &str = "Boarding Area";
const ALIGHT: &str = "Alight at Destination Vicinity";
const ALIGHT_DETAIL: &str = "Check driver for stop";

/// Generates direction steps for a classified trip.
#[derive(Debug, Clone)]
pub struct DirectionsGenerator {
    last_mile_min_meters: f64,
}

impl Default for DirectionsGenerator {
    fn default() -> Self {
        Self::new(&PlannerConfig::default())
    }
}

impl DirectionsGenerator {
    pub fn new(config: &PlannerConfig) -> Self {
        Self {
            last_mile_min_meters: config.last_mile_min_meters,
        }
    }

    /// Build the itinerary.
    ///
    /// `fare` is the estimated total for the same trip and only appears in
    /// single-ride cost text. Only the final two of `route_steps` are used.
    pub fn generate(
        &self,
        decision: &TransportDecision,
        start_label: &str,
        end_label: &str,
        route_steps: &[RouteStep],
        fare: &Fare,
    ) -> Vec<DirectionStep> {
        let mut steps = vec![DirectionStep::walk(
            format!("Start at {start_label}"),
            "Head towards the road",
        )];

        if decision.needs_transfer() {
            push_two_rides(&mut steps);
        } else if decision.mode() != TransportMode::Walk {
            push_single_ride(&mut steps, decision, fare);
        }

        self.push_last_mile(&mut steps, route_steps);

        steps.push(DirectionStep::arrival(format!("Arrive at {end_label}")));
        steps
    }

    fn push_last_mile(&self, steps: &mut Vec<DirectionStep>, route_steps: &[RouteStep]) {
        let tail = &route_steps[route_steps.len().saturating_sub(2)..];
        for step in tail {
            if step.distance_meters > self.last_mile_min_meters {
                let road = step.road_name.as_deref().unwrap_or("road");
                steps.push(DirectionStep::walk(
                    format!("Walk along {road}"),
                    format!("{} meters", step.distance_meters.round() as i64),
                ));
            }
        }
    }
}

fn push_two_rides(steps: &mut Vec<DirectionStep>) {
    steps.push(DirectionStep::walk(
        "Walk to Nearest Jeepney Stop",
        BOARDING_AREA,
    ));
    steps.push(DirectionStep::ride(
        "RIDE 1: First Jeepney",
        "₱13.00",
        RideColor::Purple,
        JEEP_ICON,
    ));
    steps.push(DirectionStep::transfer(
        "TRANSFER",
        "Alight and wait for next jeep",
    ));
    steps.push(DirectionStep::ride(
        "RIDE 2: Second Jeepney",
        "₱13.00 (+ dist)",
        RideColor::Purple,
        JEEP_ICON,
    ));
    steps.push(DirectionStep::walk(ALIGHT, ALIGHT_DETAIL));
}

fn push_single_ride(steps: &mut Vec<DirectionStep>, decision: &TransportDecision, fare: &Fare) {
    let (pickup, color) = match decision.mode() {
        TransportMode::Tricycle => (TRICYCLE_PICKUP, RideColor::Orange),
        _ => (
            decision
                .zone()
                .map_or(MAIN_ROAD_PICKUP, |zone| zone.pickup_label()),
            RideColor::Purple,
        ),
    };

    steps.push(DirectionStep::walk(pickup, BOARDING_AREA));
    steps.push(DirectionStep::ride(
        format!("RIDE: {}", decision.label()),
        format!("Total: {fare}"),
        color,
        decision.icon(),
    ));
    steps.push(DirectionStep::walk(ALIGHT, ALIGHT_DETAIL));
}

/// Generate directions with the default last-mile threshold.
pub fn generate_directions(
    decision: &TransportDecision,
    start_label: &str,
    end_label: &str,
    route_steps: &[RouteStep],
    fare: &Fare,
) -> Vec<DirectionStep> {
    DirectionsGenerator::default().generate(decision, start_label, end_label, route_steps, fare)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::JeepZone;
    use proptest::prelude::*;

    fn any_decision() -> impl Strategy<Value = TransportDecision> {
        prop_oneof![
            Just(TransportDecision::walk()),
            Just(TransportDecision::tricycle()),
            Just(TransportDecision::two_rides()),
            Just(TransportDecision::jeep(JeepZone::Guadalupe)),
            Just(TransportDecision::jeep(JeepZone::PrcMantrade)),
            Just(TransportDecision::jeep(JeepZone::LeonGuinto)),
            Just(TransportDecision::jeep(JeepZone::AyalaLoop)),
            Just(TransportDecision::jeep(JeepZone::MakatiLoop)),
        ]
    }

    fn any_steps() -> impl Strategy<Value = Vec<RouteStep>> {
        proptest::collection::vec(
            (proptest::option::of("[A-Za-z ]{1,12}"), 0.0f64..500.0)
                .prop_map(|(name, m)| RouteStep::new(name, m)),
            0..6,
        )
    }

    proptest! {
        /// Two-ride trips have one transfer sitting between exactly two rides
        #[test]
        fn two_rides_have_one_transfer_between_rides(steps in any_steps()) {
            let out = generate_directions(
                &TransportDecision::two_rides(), "A", "B", &steps, &Fare::Pesos(26),
            );

            let rides: Vec<usize> = out.iter().enumerate()
                .filter(|(_, s)| s.is_ride()).map(|(i, _)| i).collect();
            let transfers: Vec<usize> = out.iter().enumerate()
                .filter(|(_, s)| s.is_transfer()).map(|(i, _)| i).collect();

            prop_assert_eq!(rides.len(), 2);
            prop_assert_eq!(transfers.len(), 1);
            prop_assert!(rides[0] < transfers[0] && transfers[0] < rides[1]);
        }

        /// Every itinerary starts walking and ends arriving
        #[test]
        fn framed_by_start_and_arrival(decision in any_decision(), steps in any_steps()) {
            let out = generate_directions(&decision, "A", "B", &steps, &Fare::Pesos(13));
            prop_assert!(out.first().is_some_and(DirectionStep::is_walk));
            prop_assert!(out.last().is_some_and(DirectionStep::is_arrival));
            prop_assert_eq!(out.iter().filter(|s| s.is_arrival()).count(), 1);
        }

        /// Jeepney decisions always describe a ride, whatever their count
        #[test]
        fn jeep_always_rides(rides in 0u32..10, steps in any_steps()) {
            let d = TransportDecision::from_parts(TransportMode::Jeep, rides, "🚙", "Jeep", None);
            let out = generate_directions(&d, "A", "B", &steps, &Fare::Pesos(13));
            let expected = if rides == 2 { 2 } else { 1 };
            prop_assert_eq!(out.iter().filter(|s| s.is_ride()).count(), expected);
        }

        /// Walking trips never ride
        #[test]
        fn walk_never_rides(steps in any_steps()) {
            let out = generate_directions(&TransportDecision::walk(), "A", "B", &steps, &Fare::Free);
            prop_assert!(!out.iter().any(|s| s.is_ride() || s.is_transfer()));
        }

        /// Last-mile steps are the tail steps longer than 20 m, rounded
        #[test]
        fn last_mile_matches_tail(steps in any_steps()) {
            let out = generate_directions(&TransportDecision::walk(), "A", "B", &steps, &Fare::Free);

            let tail = &steps[steps.len().saturating_sub(2)..];
            let expected: Vec<DirectionStep> = tail
                .iter()
                .filter(|s| s.distance_meters > 20.0)
                .map(|s| DirectionStep::walk(
                    format!("Walk along {}", s.road_name.as_deref().unwrap_or("road")),
                    format!("{} meters", s.distance_meters.round() as i64),
                ))
                .collect();

            prop_assert_eq!(&out[1..out.len() - 1], expected.as_slice());
        }

        /// Same inputs, same output
        #[test]
        fn deterministic(decision in any_decision(), steps in any_steps()) {
            let a = generate_directions(&decision, "A", "B", &steps, &Fare::Pesos(13));
            let b = generate_directions(&decision, "A", "B", &steps, &Fare::Pesos(13));
            prop_assert_eq!(a, b);
        }
    }
}
