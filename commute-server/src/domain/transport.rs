//! Transport mode decisions.
//!
//! A `TransportDecision` is the classifier's verdict for one trip: which
//! informal transit mode to take, how many rides it needs and, for
//! single-ride jeepney trips, which jeepney zone serves the destination.

use std::fmt;

/// Icon shown for walking trips.
pub const WALK_ICON: &str = "🚶";
/// Icon shown for tricycle trips.
pub const TRICYCLE_ICON: &str = "🛺";
/// Icon shown for single jeepney rides.
pub const JEEP_ICON: &str = "🚙";
/// Icon shown for trips needing a transfer.
pub const TRANSFER_ICON: &str = "🔄";

/// Local public-transport mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransportMode {
    Walk,
    Tricycle,
    Jeep,
}

impl TransportMode {
    /// Lowercase identifier used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportMode::Walk => "walk",
            TransportMode::Tricycle => "tricycle",
            TransportMode::Jeep => "jeep",
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named jeepney service area, keyed by destination.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum JeepZone {
    Guadalupe,
    PrcMantrade,
    LeonGuinto,
    AyalaLoop,
    MakatiLoop,
    /// A zone without a known terminal. Produced only by custom zone tables.
    Other(String),
}

impl JeepZone {
    /// Display name of the zone.
    pub fn name(&self) -> &str {
        match self {
            JeepZone::Guadalupe => "Guadalupe",
            JeepZone::PrcMantrade => "PRC - Mantrade",
            JeepZone::LeonGuinto => "Leon Guinto",
            JeepZone::AyalaLoop => "Ayala Loop",
            JeepZone::MakatiLoop => "Makati Loop",
            JeepZone::Other(name) => name,
        }
    }

    /// Where to walk to board this zone's jeepney.
    pub fn pickup_label(&self) -> &'static str {
        match self {
            JeepZone::Guadalupe => "Walk to Guadalupe Market Terminal",
            JeepZone::PrcMantrade => "Walk to Circuit/PRC Terminal",
            JeepZone::AyalaLoop => "Walk to Ayala Triangle Loading Zone",
            JeepZone::LeonGuinto => "Walk to JP Rizal Loading Bay",
            JeepZone::MakatiLoop => "Walk to Landmark Jeep Terminal",
            JeepZone::Other(_) => MAIN_ROAD_PICKUP,
        }
    }
}

impl fmt::Display for JeepZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Pickup label when no zone terminal applies.
pub const MAIN_ROAD_PICKUP: &str = "Walk to Main Road Loading Zone";

/// The classifier's decision for a single trip.
///
/// # Examples
///
/// ```
/// use commute_server::domain::{JeepZone, TransportDecision, TransportMode};
///
/// let d = TransportDecision::jeep(JeepZone::Guadalupe);
/// assert_eq!(d.mode(), TransportMode::Jeep);
/// assert_eq!(d.ride_count(), 1);
/// assert_eq!(d.label(), "Jeep: Guadalupe");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportDecision {
    mode: TransportMode,
    ride_count: u32,
    icon: &'static str,
    label: String,
    zone: Option<JeepZone>,
}

impl TransportDecision {
    /// Short enough to walk.
    pub fn walk() -> Self {
        Self {
            mode: TransportMode::Walk,
            ride_count: 0,
            icon: WALK_ICON,
            label: "Walking Distance".to_string(),
            zone: None,
        }
    }

    /// A single local tricycle hop.
    pub fn tricycle() -> Self {
        Self {
            mode: TransportMode::Tricycle,
            ride_count: 1,
            icon: TRICYCLE_ICON,
            label: "Tricycle (Local)".to_string(),
            zone: None,
        }
    }

    /// A long trip needing two jeepneys and one transfer.
    pub fn two_rides() -> Self {
        Self {
            mode: TransportMode::Jeep,
            ride_count: 2,
            icon: TRANSFER_ICON,
            label: "2 Rides Needed".to_string(),
            zone: None,
        }
    }

    /// A single jeepney ride within a zone.
    pub fn jeep(zone: JeepZone) -> Self {
        Self {
            mode: TransportMode::Jeep,
            ride_count: 1,
            icon: JEEP_ICON,
            label: format!("Jeep: {}", zone.name()),
            zone: Some(zone),
        }
    }

    /// Build a decision from raw parts.
    ///
    /// Used when a decision arrives from outside the classifier (for example
    /// a client replaying an earlier plan). The label is taken verbatim.
    pub fn from_parts(
        mode: TransportMode,
        ride_count: u32,
        icon: &'static str,
        label: impl Into<String>,
        zone: Option<JeepZone>,
    ) -> Self {
        Self {
            mode,
            ride_count,
            icon,
            label: label.into(),
            zone,
        }
    }

    pub fn mode(&self) -> TransportMode {
        self.mode
    }

    pub fn ride_count(&self) -> u32 {
        self.ride_count
    }

    pub fn icon(&self) -> &'static str {
        self.icon
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Jeepney zone, only set for single-ride jeepney trips.
    pub fn zone(&self) -> Option<&JeepZone> {
        self.zone.as_ref()
    }

    /// True when the trip needs two jeepneys.
    pub fn needs_transfer(&self) -> bool {
        self.mode == TransportMode::Jeep && self.ride_count == 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walk_decision() {
        let d = TransportDecision::walk();
        assert_eq!(d.mode(), TransportMode::Walk);
        assert_eq!(d.ride_count(), 0);
        assert_eq!(d.icon(), "🚶");
        assert_eq!(d.label(), "Walking Distance");
        assert!(d.zone().is_none());
    }

    #[test]
    fn tricycle_decision() {
        let d = TransportDecision::tricycle();
        assert_eq!(d.mode(), TransportMode::Tricycle);
        assert_eq!(d.ride_count(), 1);
        assert_eq!(d.icon(), "🛺");
        assert_eq!(d.label(), "Tricycle (Local)");
    }

    #[test]
    fn two_rides_decision() {
        let d = TransportDecision::two_rides();
        assert_eq!(d.mode(), TransportMode::Jeep);
        assert_eq!(d.ride_count(), 2);
        assert_eq!(d.icon(), "🔄");
        assert_eq!(d.label(), "2 Rides Needed");
        assert!(d.needs_transfer());
    }

    #[test]
    fn jeep_labels() {
        let cases = [
            (JeepZone::Guadalupe, "Jeep: Guadalupe"),
            (JeepZone::PrcMantrade, "Jeep: PRC - Mantrade"),
            (JeepZone::LeonGuinto, "Jeep: Leon Guinto"),
            (JeepZone::AyalaLoop, "Jeep: Ayala Loop"),
            (JeepZone::MakatiLoop, "Jeep: Makati Loop"),
            (JeepZone::Other("Bel-Air".into()), "Jeep: Bel-Air"),
        ];
        for (zone, label) in cases {
            let d = TransportDecision::jeep(zone);
            assert_eq!(d.label(), label);
            assert_eq!(d.icon(), "🚙");
            assert!(!d.needs_transfer());
        }
    }

    #[test]
    fn pickup_labels() {
        assert_eq!(
            JeepZone::Guadalupe.pickup_label(),
            "Walk to Guadalupe Market Terminal"
        );
        assert_eq!(
            JeepZone::PrcMantrade.pickup_label(),
            "Walk to Circuit/PRC Terminal"
        );
        assert_eq!(
            JeepZone::AyalaLoop.pickup_label(),
            "Walk to Ayala Triangle Loading Zone"
        );
        assert_eq!(
            JeepZone::LeonGuinto.pickup_label(),
            "Walk to JP Rizal Loading Bay"
        );
        assert_eq!(
            JeepZone::MakatiLoop.pickup_label(),
            "Walk to Landmark Jeep Terminal"
        );
    }

    /// Unknown zones keep the generic fallback rather than guessing a terminal.
    #[test]
    fn unknown_zone_falls_back_to_main_road() {
        let zone = JeepZone::Other("Poblacion".into());
        assert_eq!(zone.pickup_label(), "Walk to Main Road Loading Zone");
    }

    #[test]
    fn mode_display() {
        assert_eq!(TransportMode::Walk.to_string(), "walk");
        assert_eq!(TransportMode::Tricycle.to_string(), "tricycle");
        assert_eq!(TransportMode::Jeep.to_string(), "jeep");
    }
}
