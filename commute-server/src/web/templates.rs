//! Askama templates for the web frontend.

use askama::Template;

use crate::domain::{Coordinate, DirectionStep, WALK_ICON, TRANSFER_ICON};
use crate::planner::CommutePlan;

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Home page with the map and search boxes.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate;

/// Error page.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub title: String,
    pub message: String,
    pub details: Option<String>,
}

// ============================================================================
// Fragment Templates (AJAX responses, no base.html)
// ============================================================================

/// Commute plan fragment: summary card plus directions timeline.
#[derive(Template)]
#[template(path = "plan_results.html")]
pub struct PlanResultsTemplate {
    pub plan: PlanView,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// Plan view model for templates.
#[derive(Debug, Clone)]
pub struct PlanView {
    pub icon: String,
    pub label: String,
    pub eta: String,
    pub fare: String,
    pub distance: String,
    pub steps: Vec<StepView>,
    /// Route geometry as a JSON array of `[lat, lng]` pairs
    pub path_json: String,
}

impl PlanView {
    pub fn from_plan(plan: &CommutePlan, path: &[Coordinate]) -> Self {
        let pairs: Vec<[f64; 2]> = path.iter().map(|c| [c.latitude(), c.longitude()]).collect();
        Self {
            icon: plan.decision.icon().to_string(),
            label: plan.decision.label().to_string(),
            eta: format!("{} mins", plan.estimate.eta_minutes_rounded()),
            fare: plan.estimate.fare_display(),
            distance: format!("{:.1} km", plan.distance_km),
            steps: plan.directions.iter().map(StepView::from_step).collect(),
            path_json: serde_json::to_string(&pairs).unwrap_or_else(|_| "[]".to_string()),
        }
    }
}

/// One timeline row.
#[derive(Debug, Clone)]
pub struct StepView {
    /// CSS modifier: walk, ride, transfer, arrival
    pub kind: &'static str,
    pub icon: String,
    pub headline: String,
    /// Secondary line, empty when absent
    pub detail: String,
    /// Ride accent class (purple/orange), empty for non-ride steps
    pub color: &'static str,
}

impl StepView {
    pub fn from_step(step: &DirectionStep) -> Self {
        match step {
            DirectionStep::Walk { headline, detail } => Self {
                kind: "walk",
                icon: WALK_ICON.to_string(),
                headline: headline.clone(),
                detail: detail.clone(),
                color: "",
            },
            DirectionStep::Ride {
                headline,
                cost_text,
                color,
                icon,
            } => Self {
                kind: "ride",
                icon: icon.to_string(),
                headline: headline.clone(),
                detail: cost_text.clone(),
                color: color.as_str(),
            },
            DirectionStep::Transfer { headline, detail } => Self {
                kind: "transfer",
                icon: TRANSFER_ICON.to_string(),
                headline: headline.clone(),
                detail: detail.clone(),
                color: "",
            },
            DirectionStep::Arrival { headline, detail } => Self {
                kind: "arrival",
                icon: "🏁".to_string(),
                headline: headline.clone(),
                detail: detail.clone(),
                color: "",
            },
        }
    }
}
