//! Human-readable direction steps.

/// Secondary line of every arrival step.
const DESTINATION_REACHED: &str = "Destination reached";

/// Accent colour of a ride step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RideColor {
    /// Jeepney rides.
    Purple,
    /// Tricycle rides.
    Orange,
}

impl RideColor {
    /// Foreground hex colour.
    pub fn hex(&self) -> &'static str {
        match self {
            RideColor::Purple => "#7c3aed",
            RideColor::Orange => "#f59e0b",
        }
    }

    /// Background hex colour.
    pub fn background_hex(&self) -> &'static str {
        match self {
            RideColor::Purple => "#fdf4ff",
            RideColor::Orange => "#fffbeb",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RideColor::Purple => "purple",
            RideColor::Orange => "orange",
        }
    }
}

/// One instruction in a generated itinerary.
///
/// Sequences are rendered in the order they were generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectionStep {
    Walk {
        headline: String,
        detail: String,
    },
    Ride {
        headline: String,
        cost_text: String,
        color: RideColor,
        icon: &'static str,
    },
    Transfer {
        headline: String,
        detail: String,
    },
    Arrival {
        headline: String,
        detail: String,
    },
}

impl DirectionStep {
    pub fn walk(headline: impl Into<String>, detail: impl Into<String>) -> Self {
        DirectionStep::Walk {
            headline: headline.into(),
            detail: detail.into(),
        }
    }

    pub fn ride(
        headline: impl Into<String>,
        cost_text: impl Into<String>,
        color: RideColor,
        icon: &'static str,
    ) -> Self {
        DirectionStep::Ride {
            headline: headline.into(),
            cost_text: cost_text.into(),
            color,
            icon,
        }
    }

    pub fn transfer(headline: impl Into<String>, detail: impl Into<String>) -> Self {
        DirectionStep::Transfer {
            headline: headline.into(),
            detail: detail.into(),
        }
    }

    pub fn arrival(headline: impl Into<String>) -> Self {
        DirectionStep::Arrival {
            headline: headline.into(),
            detail: DESTINATION_REACHED.to_string(),
        }
    }

    /// The main line of text for this step.
    pub fn headline(&self) -> &str {
        match self {
            DirectionStep::Walk { headline, .. }
            | DirectionStep::Ride { headline, .. }
            | DirectionStep::Transfer { headline, .. }
            | DirectionStep::Arrival { headline, .. } => headline,
        }
    }

    pub fn is_walk(&self) -> bool {
        matches!(self, DirectionStep::Walk { .. })
    }

    pub fn is_ride(&self) -> bool {
        matches!(self, DirectionStep::Ride { .. })
    }

    pub fn is_transfer(&self) -> bool {
        matches!(self, DirectionStep::Transfer { .. })
    }

    pub fn is_arrival(&self) -> bool {
        matches!(self, DirectionStep::Arrival { .. })
    }
}
