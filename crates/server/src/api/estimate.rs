//! What-if estimate handler.

use axum::{extract::State, http::StatusCode, Json};
use finplan_core::{estimate_fulfillment, FulfillmentEstimate, NewOrderForm};
use std::sync::Arc;
use tracing::debug;

use super::handlers::{api_error, no_plan, ApiError};
use crate::state::AppState;

/// Estimate when a hypothetical order would be fulfilled behind the
/// current queue
pub async fn estimate(
    State(state): State<Arc<AppState>>,
    Json(form): Json<NewOrderForm>,
) -> Result<Json<FulfillmentEstimate>, ApiError> {
    let data = form
        .validate()
        .map_err(|e| api_error(StatusCode::UNPROCESSABLE_ENTITY, e.to_string()))?;

    let snapshot = state.store().snapshot().await.ok_or_else(no_plan)?;
    let minutes = estimate_fulfillment(&snapshot.plan.orders, data.processing_time);
    debug!(
        client = %data.client,
        processing_time = data.processing_time,
        minutes,
        "Estimated fulfillment"
    );

    Ok(Json(FulfillmentEstimate::new(minutes)))
}
