//! Plan API handlers: upload, status, reset and the per-order views.

use axum::{
    extract::{multipart::MultipartError, Multipart, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use finplan_core::{
    time_left_label, MemorySource, Order, OrderTicket, PipelineError, PlanSnapshot, PlanState,
    ReadError, UploadOutcome, UrgencyBucket,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::handlers::{api_error, no_plan, ApiError};
use crate::metrics::{PLAN_ORDERS, UPLOADS_TOTAL, UPLOAD_DURATION};
use crate::state::AppState;

/// Multipart field carrying the spreadsheet.
const FILE_FIELD: &str = "file";

/// Name used when the client sends no file name.
const DEFAULT_FILE_NAME: &str = "upload.xlsx";

// ============================================================================
// Request/Response Types
// ============================================================================

/// Current contents of the plan slot.
#[derive(Debug, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum PlanStatusResponse {
    Empty,
    Processing { generation: u64 },
    Ready { snapshot: PlanSnapshot },
    Failed { generation: u64, error: String },
}

impl From<PlanState> for PlanStatusResponse {
    fn from(state: PlanState) -> Self {
        match state {
            PlanState::Empty => Self::Empty,
            PlanState::Processing { generation } => Self::Processing { generation },
            PlanState::Ready(snapshot) => Self::Ready {
                snapshot: PlanSnapshot::clone(&snapshot),
            },
            PlanState::Failed {
                generation,
                message,
            } => Self::Failed {
                generation,
                error: message,
            },
        }
    }
}

/// Response for reset
#[derive(Debug, Serialize)]
pub struct ResetResponse {
    pub generation: u64,
}

/// One row of the schedule.
#[derive(Debug, Serialize)]
pub struct OrderView {
    pub order: Order,
    pub urgency: UrgencyBucket,
    pub time_left: String,
}

impl From<&Order> for OrderView {
    fn from(order: &Order) -> Self {
        Self {
            urgency: UrgencyBucket::for_minutes(order.minutes_to_complete),
            time_left: time_left_label(order.minutes_to_complete),
            order: order.clone(),
        }
    }
}

/// Response for listing orders
#[derive(Debug, Serialize)]
pub struct ListOrdersResponse {
    pub generation: u64,
    pub orders: Vec<OrderView>,
    pub total: usize,
}

// ============================================================================
// Handlers
// ============================================================================

/// Upload a spreadsheet and derive a new plan from it
///
/// The upload takes its generation before the body is read, so the previous
/// plan is cleared immediately and a slow body can never publish over a
/// newer upload.
pub async fn upload_plan(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Json<PlanSnapshot>, ApiError> {
    let generation = state.store().begin().await;
    PLAN_ORDERS.set(0);

    let timer = UPLOAD_DURATION.start_timer();
    let (outcome, rejected) = match receive_file(multipart).await {
        Ok(source) => {
            let outcome = state
                .store()
                .process(generation, state.pipeline(), &source)
                .await;
            (outcome, None)
        }
        Err((status, e)) => {
            debug!(generation, "Upload body rejected: {}", e);
            let outcome = state.store().complete(generation, Err(e.into())).await;
            (outcome, Some(status))
        }
    };
    timer.observe_duration();
    UPLOADS_TOTAL.with_label_values(&[outcome.label()]).inc();

    match outcome {
        UploadOutcome::Ready(snapshot) => {
            PLAN_ORDERS.set(snapshot.plan.orders.len() as i64);
            Ok(Json(PlanSnapshot::clone(&snapshot)))
        }
        UploadOutcome::Failed(e) => {
            let status = rejected.unwrap_or(match e {
                PipelineError::FileRead(_) => StatusCode::BAD_REQUEST,
                PipelineError::FileParse(_) | PipelineError::NoValidData(_) => {
                    StatusCode::UNPROCESSABLE_ENTITY
                }
            });
            Err(api_error(status, e.user_message()))
        }
        UploadOutcome::Superseded {
            generation,
            current,
        } => Err(api_error(
            StatusCode::CONFLICT,
            format!(
                "Upload {} was superseded by a newer request ({})",
                generation, current
            ),
        )),
    }
}

/// Reads the `file` field of the upload into memory.
///
/// Errors carry the HTTP status the multipart layer assigned to them.
async fn receive_file(
    mut multipart: Multipart,
) -> Result<MemorySource, (StatusCode, ReadError)> {
    let transfer = |e: MultipartError| (e.status(), ReadError::Transfer(e.body_text()));

    while let Some(field) = multipart.next_field().await.map_err(transfer)? {
        if field.name() != Some(FILE_FIELD) {
            debug!("Skipping multipart field {:?}", field.name());
            continue;
        }
        let name = field
            .file_name()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(DEFAULT_FILE_NAME)
            .to_string();
        let bytes = field.bytes().await.map_err(transfer)?;
        return Ok(MemorySource::new(name, bytes.to_vec()));
    }

    Err((
        StatusCode::BAD_REQUEST,
        ReadError::MissingField(FILE_FIELD.to_string()),
    ))
}

/// Get the current plan state
pub async fn get_plan(State(state): State<Arc<AppState>>) -> Json<PlanStatusResponse> {
    Json(PlanStatusResponse::from(state.store().state().await))
}

/// Clear the plan and discard any upload in flight
pub async fn delete_plan(State(state): State<Arc<AppState>>) -> Json<ResetResponse> {
    let generation = state.store().reset().await;
    PLAN_ORDERS.set(0);
    info!("Plan cleared via API");
    Json(ResetResponse { generation })
}

/// List the prioritized orders of the current plan
pub async fn list_orders(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ListOrdersResponse>, ApiError> {
    let snapshot = state.store().snapshot().await.ok_or_else(no_plan)?;
    let orders: Vec<OrderView> = snapshot.plan.orders.iter().map(OrderView::from).collect();

    Ok(Json(ListOrdersResponse {
        generation: snapshot.generation,
        total: orders.len(),
        orders,
    }))
}

/// Download the printable ticket of one order
pub async fn get_ticket(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let snapshot = state.store().snapshot().await.ok_or_else(no_plan)?;
    let order = snapshot.plan.order(&id).ok_or_else(|| {
        warn!("Ticket requested for unknown order {}", id);
        api_error(StatusCode::NOT_FOUND, format!("Order not found: {}", id))
    })?;

    let ticket = OrderTicket::new(order);
    Ok((
        [
            (
                header::CONTENT_TYPE,
                "text/plain; charset=utf-8".to_string(),
            ),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", ticket.file_name()),
            ),
        ],
        ticket.render_text(),
    ))
}
