//! Prometheus metrics for observability.
//!
//! This module provides metrics for monitoring the planning service:
//! - HTTP request metrics (latency, counts, in flight)
//! - Upload outcomes and decode latency
//! - Size of the published plan (collected dynamically)

use once_cell::sync::Lazy;
use prometheus::{
    self, Encoder, Histogram, HistogramOpts, HistogramVec, IntCounterVec, IntGauge, Opts,
    Registry, TextEncoder,
};
use regex_lite::Regex;
use tracing::warn;

/// Global metrics registry.
pub static REGISTRY: Lazy<Registry> = Lazy::new(|| {
    let registry = Registry::new();
    register_metrics(&registry);
    registry
});

// =============================================================================
// HTTP Request Metrics
// =============================================================================

/// HTTP request duration in seconds.
pub static HTTP_REQUEST_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    HistogramVec::new(
        HistogramOpts::new(
            "finplan_http_request_duration_seconds",
            "HTTP request duration in seconds",
        )
        .buckets(vec![
            0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
        ]),
        &["method", "path", "status"],
    )
    .expect("valid metric descriptor")
});

/// HTTP requests total count.
pub static HTTP_REQUESTS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("finplan_http_requests_total", "Total HTTP requests"),
        &["method", "path", "status"],
    )
    .expect("valid metric descriptor")
});

/// HTTP requests currently in flight.
pub static HTTP_REQUESTS_IN_FLIGHT: Lazy<IntGauge> = Lazy::new(|| {
    IntGauge::new(
        "finplan_http_requests_in_flight",
        "Number of HTTP requests currently being processed",
    )
    .expect("valid metric descriptor")
});

// =============================================================================
// Upload Metrics
// =============================================================================

/// Uploads by outcome: ok, file_read, file_parse, no_valid_data, superseded.
pub static UPLOADS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("finplan_uploads_total", "Spreadsheet uploads by outcome"),
        &["outcome"],
    )
    .expect("valid metric descriptor")
});

/// Time from upload received to plan published or rejected.
pub static UPLOAD_DURATION: Lazy<Histogram> = Lazy::new(|| {
    Histogram::with_opts(
        HistogramOpts::new(
            "finplan_upload_duration_seconds",
            "Time to read, decode and derive an uploaded spreadsheet",
        )
        .buckets(vec![0.01, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0]),
    )
    .expect("valid metric descriptor")
});

// =============================================================================
// Plan Metrics (collected dynamically)
// =============================================================================

/// Orders in the published plan.
pub static PLAN_ORDERS: Lazy<IntGauge> = Lazy::new(|| {
    IntGauge::new("finplan_plan_orders", "Orders in the published plan")
        .expect("valid metric descriptor")
});

/// Orders in the published plan without a usable duration.
pub static PLAN_UNSCHEDULABLE_ORDERS: Lazy<IntGauge> = Lazy::new(|| {
    IntGauge::new(
        "finplan_plan_unschedulable_orders",
        "Orders in the published plan with no remaining-time estimate",
    )
    .expect("valid metric descriptor")
});

// =============================================================================
// Registration
// =============================================================================

fn register_metrics(registry: &Registry) {
    let metrics: Vec<Box<dyn prometheus::core::Collector>> = vec![
        // HTTP
        Box::new(HTTP_REQUEST_DURATION.clone()),
        Box::new(HTTP_REQUESTS_TOTAL.clone()),
        Box::new(HTTP_REQUESTS_IN_FLIGHT.clone()),
        // Uploads
        Box::new(UPLOADS_TOTAL.clone()),
        Box::new(UPLOAD_DURATION.clone()),
        // Plan
        Box::new(PLAN_ORDERS.clone()),
        Box::new(PLAN_UNSCHEDULABLE_ORDERS.clone()),
    ];
    for metric in metrics {
        if let Err(e) = registry.register(metric) {
            warn!("Failed to register metric: {}", e);
        }
    }
}

/// Encode all metrics as Prometheus text format.
pub fn encode_metrics() -> String {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        warn!("Failed to encode metrics: {}", e);
    }
    String::from_utf8_lossy(&buffer).into_owned()
}

/// Collect dynamic metrics from current application state.
pub async fn collect_dynamic_metrics(state: &crate::state::AppState) {
    match state.store().snapshot().await {
        Some(snapshot) => {
            let orders = &snapshot.plan.orders;
            PLAN_ORDERS.set(orders.len() as i64);
            PLAN_UNSCHEDULABLE_ORDERS
                .set(orders.iter().filter(|o| !o.is_schedulable()).count() as i64);
        }
        None => {
            PLAN_ORDERS.set(0);
            PLAN_UNSCHEDULABLE_ORDERS.set(0);
        }
    }
}

static ORDER_TICKET_PATH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(.*/plan/orders/)[^/]+(/ticket)$").expect("ticket path pattern is valid")
});

/// Normalize a path for metric labels (replace order ids with a placeholder).
pub fn normalize_path(path: &str) -> String {
    ORDER_TICKET_PATH.replace(path, "${1}{id}${2}").into_owned()
}
