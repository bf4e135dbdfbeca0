//! Production line handlers: static topology and the load of the current plan.

use axum::{extract::State, Json};
use finplan_core::{
    line_view, FlowStep, FlowStepLoad, Machine, MACHINE_CAPACITIES, PRODUCTION_LINE,
};
use serde::Serialize;
use std::sync::Arc;

use super::handlers::{no_plan, ApiError};
use crate::state::AppState;

/// Directed link between two stages.
#[derive(Debug, Serialize)]
pub struct Edge {
    pub from: &'static str,
    pub to: &'static str,
}

/// Response for the static line description
#[derive(Debug, Serialize)]
pub struct LineResponse {
    pub steps: &'static [FlowStep],
    pub stages: Vec<&'static str>,
    pub edges: Vec<Edge>,
    pub highlighted: &'static [&'static str],
    pub machines: Vec<Machine>,
}

/// Response for the line joined with the current workload
#[derive(Debug, Serialize)]
pub struct LineLoadResponse {
    pub generation: u64,
    pub meters_per_minute: f64,
    pub steps: Vec<FlowStepLoad>,
}

/// Get the line topology and machine capacities
pub async fn get_line() -> Json<LineResponse> {
    Json(LineResponse {
        steps: PRODUCTION_LINE.steps(),
        stages: PRODUCTION_LINE.stage_names(),
        edges: PRODUCTION_LINE
            .edges()
            .into_iter()
            .map(|(from, to)| Edge { from, to })
            .collect(),
        highlighted: PRODUCTION_LINE.highlighted(),
        machines: MACHINE_CAPACITIES.machines().collect(),
    })
}

/// Get per-stage utilization for the current plan
pub async fn get_line_load(
    State(state): State<Arc<AppState>>,
) -> Result<Json<LineLoadResponse>, ApiError> {
    let snapshot = state.store().snapshot().await.ok_or_else(no_plan)?;
    let meters_per_minute = state.meters_per_minute();

    Ok(Json(LineLoadResponse {
        generation: snapshot.generation,
        meters_per_minute,
        steps: line_view(
            &PRODUCTION_LINE,
            &snapshot.plan.machine_workload,
            meters_per_minute,
        ),
    }))
}
