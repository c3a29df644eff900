//! # REST API
//!
//! REST endpoints using axum.
//!
//! # Endpoints
//!
//! ## Execution plans
//! - `GET /api/v1/execution-plan?orderType=<Buy|Sell>&amount=<decimal>` - Best execution plan
//! - `GET /api/v1/execution-plan/exchange-count` - Number of exchange sources
//!
//! ## Health
//! - `GET /api/v1/health` - Health check endpoint
//!
//! Invalid input yields `400`, an unreadable exchange source `500`. Every
//! error body is an [`ErrorResponse`].
//!
//! # Usage
//!
//! ```ignore
//! use execution_planner::api::rest::{create_router, AppState};
//! use std::sync::Arc;
//!
//! let state = Arc::new(AppState::new(planner));
//! let router = create_router(state);
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
//! axum::serve(listener, router).await?;
//! ```

pub mod handlers;
pub mod routes;

pub use handlers::{
    ApiError, AppState, ErrorResponse, ExchangeCountResponse, ExchangeExecutionResponse,
    ExecutionPlanQuery, ExecutionPlanResponse, HealthResponse, OrderMatchResponse,
};
pub use routes::{API_PREFIX, create_router};
