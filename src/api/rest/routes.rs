//! # REST Routes
//!
//! Router construction for the planner API.

use crate::api::rest::handlers::{self, AppState};
use axum::Router;
use axum::routing::get;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Path prefix of every API route.
pub const API_PREFIX: &str = "/api/v1";

/// Builds the API router.
///
/// Routes:
/// - `GET /api/v1/execution-plan`
/// - `GET /api/v1/execution-plan/exchange-count`
/// - `GET /api/v1/health`
#[must_use]
pub fn create_router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .route("/execution-plan", get(handlers::get_execution_plan))
        .route(
            "/execution-plan/exchange-count",
            get(handlers::get_exchange_count),
        )
        .route("/health", get(handlers::health_check));

    Router::new()
        .nest(API_PREFIX, api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
