use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};

use super::{estimate, handlers, line, middleware::metrics_middleware, plan};
use crate::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    let max_upload = state.config().upload.max_bytes;

    // Uploads get their own body limit from config
    let upload_routes = Router::new()
        .route(
            "/plan",
            post(plan::upload_plan)
                .get(plan::get_plan)
                .delete(plan::delete_plan),
        )
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(max_upload));

    // API routes
    let api_routes = Router::new()
        // Health, config and metrics
        .route("/health", get(handlers::health))
        .route("/config", get(handlers::get_config))
        .route("/metrics", get(handlers::get_metrics))
        // Plan views
        .route("/plan/orders", get(plan::list_orders))
        .route("/plan/orders/{id}/ticket", get(plan::get_ticket))
        .route("/plan/line", get(line::get_line_load))
        // What-if
        .route("/estimate", post(estimate::estimate))
        // Static line description
        .route("/line", get(line::get_line))
        .merge(upload_routes)
        .with_state(state)
        .layer(middleware::from_fn(metrics_middleware));

    Router::new()
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
