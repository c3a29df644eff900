//! # REST Handlers
//!
//! Request handlers, query types and response DTOs.
//!
//! Response bodies use camelCase keys and encode every decimal as a
//! normalized string (`4000`, not `4000.0`).

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::services::ExecutionPlanner;
use crate::domain::entities::{ExchangeExecution, ExecutionPlan, OrderMatch};
use crate::domain::value_objects::{OrderSide, Quantity};
use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;
use tracing::{error, warn};

/// Shared state for all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Planner serving every request.
    pub planner: Arc<ExecutionPlanner>,
}

impl AppState {
    /// Creates the handler state.
    #[must_use]
    pub fn new(planner: Arc<ExecutionPlanner>) -> Self {
        Self { planner }
    }
}

// ============================================================================
// Requests
// ============================================================================

/// Query string of `GET /execution-plan`.
///
/// Both fields are taken as raw strings so that a missing or malformed value
/// produces the API's own error body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionPlanQuery {
    /// `Buy` or `Sell`, case-insensitive.
    pub order_type: Option<String>,
    /// Requested quantity of the base asset.
    pub amount: Option<String>,
}

impl ExecutionPlanQuery {
    /// Validates the query into a side and a positive quantity.
    ///
    /// The amount is checked before the order type.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Validation` if the amount is missing,
    /// unparseable or not positive, or if the order type is not buy or sell.
    pub fn validate(&self) -> ApplicationResult<(OrderSide, Quantity)> {
        let amount = self
            .amount
            .as_deref()
            .and_then(parse_decimal)
            .and_then(|amount| Quantity::positive(amount).ok())
            .ok_or_else(|| ApplicationError::validation("Amount must be a positive number."))?;

        let side = self
            .order_type
            .as_deref()
            .filter(|raw| !raw.trim().is_empty())
            .and_then(|raw| OrderSide::from_str(raw).ok())
            .ok_or_else(|| ApplicationError::validation("OrderType must be 'Buy' or 'Sell'."))?;

        Ok((side, amount))
    }
}

fn parse_decimal(raw: &str) -> Option<Decimal> {
    let raw = raw.trim();
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .ok()
}

// ============================================================================
// Responses
// ============================================================================

/// A fill against one resting order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderMatchResponse {
    /// Resting order ID.
    pub order_id: String,
    /// Matched quantity.
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    /// Price of the resting order.
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
}

impl From<&OrderMatch> for OrderMatchResponse {
    fn from(m: &OrderMatch) -> Self {
        Self {
            order_id: m.order_id().to_string(),
            amount: m.quantity().get().normalize(),
            price: m.price().get().normalize(),
        }
    }
}

/// Fills taken from one exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeExecutionResponse {
    /// Exchange ID.
    pub exchange_id: String,
    /// Quantity filled on this exchange.
    #[serde(with = "rust_decimal::serde::str")]
    pub filled_amount: Decimal,
    /// Quote currency spent (buy) or received (sell) on this exchange.
    #[serde(with = "rust_decimal::serde::str")]
    pub cost_or_proceeds: Decimal,
    /// Matches in consumption order.
    pub matches: Vec<OrderMatchResponse>,
}

impl From<&ExchangeExecution> for ExchangeExecutionResponse {
    fn from(execution: &ExchangeExecution) -> Self {
        Self {
            exchange_id: execution.exchange_id().to_string(),
            filled_amount: execution.filled_quantity().get().normalize(),
            cost_or_proceeds: execution.cost_or_proceeds().normalize(),
            matches: execution.matches().iter().map(Into::into).collect(),
        }
    }
}

/// Body of a successful `GET /execution-plan`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionPlanResponse {
    /// `Buy` or `Sell`.
    pub order_type: String,
    /// Requested quantity.
    #[serde(with = "rust_decimal::serde::str")]
    pub requested_amount: Decimal,
    /// Total filled quantity.
    #[serde(with = "rust_decimal::serde::str")]
    pub filled_amount: Decimal,
    /// Total quote currency spent (buy) or received (sell).
    #[serde(with = "rust_decimal::serde::str")]
    pub total_cost_or_proceeds: Decimal,
    /// Volume-weighted average price, zero when nothing filled.
    #[serde(with = "rust_decimal::serde::str")]
    pub average_price: Decimal,
    /// True if the filled quantity equals the requested quantity.
    pub is_fully_filled: bool,
    /// Per-exchange executions.
    pub exchanges: Vec<ExchangeExecutionResponse>,
}

impl From<&ExecutionPlan> for ExecutionPlanResponse {
    fn from(plan: &ExecutionPlan) -> Self {
        Self {
            order_type: plan.side().to_string(),
            requested_amount: plan.requested_quantity().get().normalize(),
            filled_amount: plan.filled_quantity().get().normalize(),
            total_cost_or_proceeds: plan.total_cost_or_proceeds().normalize(),
            average_price: plan.average_price().get().normalize(),
            is_fully_filled: plan.is_fully_filled(),
            exchanges: plan.exchange_executions().iter().map(Into::into).collect(),
        }
    }
}

/// Body of `GET /execution-plan/exchange-count`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeCountResponse {
    /// Number of exchange sources found.
    pub count: i64,
}

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `ok` while the process serves requests.
    pub status: String,
    /// Crate version.
    pub version: String,
}

/// Error body returned with every non-2xx response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Machine-readable error code.
    pub code: String,
    /// Human-readable message.
    pub message: String,
}

impl ErrorResponse {
    /// Creates an error body.
    #[must_use]
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Handler error carrying its HTTP status.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorResponse,
}

impl ApiError {
    /// Creates an error with an explicit status.
    #[must_use]
    pub fn new(status: StatusCode, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ErrorResponse::new(code, message),
        }
    }

    /// Returns the HTTP status.
    #[inline]
    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Validation(message) => {
                Self::new(StatusCode::BAD_REQUEST, "VALIDATION_ERROR", message)
            }
            ApplicationError::Repository(e) => {
                error!(error = %e, "Exchange snapshot unavailable");
                Self::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "SNAPSHOT_UNAVAILABLE",
                    "Could not load exchange data.",
                )
            }
            other => {
                error!(error = %other, "Request failed");
                Self::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "Internal server error.",
                )
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// `GET /execution-plan?orderType=&amount=`
///
/// # Errors
///
/// Returns 400 on invalid input and 500 if the snapshot cannot be loaded.
pub async fn get_execution_plan(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ExecutionPlanQuery>,
) -> Result<Json<ExecutionPlanResponse>, ApiError> {
    let (side, amount) = query.validate().inspect_err(|e| {
        warn!(
            order_type = ?query.order_type,
            amount = ?query.amount,
            error = %e,
            "Rejected execution plan request"
        );
    })?;

    let plan = state.planner.plan(side, amount).await?;
    Ok(Json(ExecutionPlanResponse::from(&plan)))
}

/// `GET /execution-plan/exchange-count`
///
/// # Errors
///
/// Returns 500 if the exchange source cannot be read.
pub async fn get_exchange_count(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ExchangeCountResponse>, ApiError> {
    let count = state.planner.exchange_count().await;
    if count < 0 {
        return Err(ApiError::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "SNAPSHOT_UNAVAILABLE",
            "Could not load exchange count.",
        ));
    }
    Ok(Json(ExchangeCountResponse { count }))
}

/// `GET /health`
#[allow(clippy::unused_async)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::errors::DomainError;
    use crate::infrastructure::persistence::RepositoryError;
    use rust_decimal_macros::dec;

    fn query(order_type: Option<&str>, amount: Option<&str>) -> ExecutionPlanQuery {
        ExecutionPlanQuery {
            order_type: order_type.map(str::to_string),
            amount: amount.map(str::to_string),
        }
    }

    mod validate {
        use super::*;

        #[test]
        fn accepts_case_insensitive_side() {
            let (side, amount) = query(Some("sELl"), Some("0.25")).validate().unwrap();
            assert_eq!(side, OrderSide::Sell);
            assert_eq!(amount.get(), dec!(0.25));
        }

        #[test]
        fn rejects_non_positive_amount() {
            for raw in ["0", "-1", "abc", ""] {
                let err = query(Some("Buy"), Some(raw)).validate().unwrap_err();
                assert!(err.is_validation(), "amount {raw:?} should be rejected");
            }
            assert!(query(Some("Buy"), None).validate().unwrap_err().is_validation());
        }

        #[test]
        fn rejects_numeric_and_unknown_sides() {
            for raw in ["0", "1", "Hold", "  "] {
                let err = query(Some(raw), Some("1")).validate().unwrap_err();
                assert!(err.to_string().contains("OrderType"), "side {raw:?} should be rejected");
            }
            assert!(query(None, Some("1")).validate().is_err());
        }

        #[test]
        fn amount_checked_before_side() {
            let err = query(Some("Hold"), Some("-1")).validate().unwrap_err();
            assert!(err.to_string().contains("Amount"));
        }

        #[test]
        fn accepts_scientific_amount() {
            let (_, amount) = query(Some("buy"), Some("1e-3")).validate().unwrap();
            assert_eq!(amount.get(), dec!(0.001));
        }
    }

    mod errors {
        use super::*;

        #[test]
        fn validation_maps_to_bad_request() {
            let err: ApiError = ApplicationError::validation("bad").into();
            assert_eq!(err.status(), StatusCode::BAD_REQUEST);
            assert_eq!(err.body.code, "VALIDATION_ERROR");
        }

        #[test]
        fn repository_maps_to_internal_error() {
            let err: ApiError = ApplicationError::from(RepositoryError::io("disk")).into();
            assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        }

        #[test]
        fn domain_maps_to_internal_error() {
            let err: ApiError =
                ApplicationError::from(DomainError::InvalidPrice("overflow".to_string())).into();
            assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(err.body.code, "INTERNAL_ERROR");
        }
    }

    #[test]
    fn plan_response_uses_camel_case_and_string_decimals() {
        let plan = ExecutionPlan::empty(OrderSide::Buy, Quantity::new(dec!(1.5)));
        let json = serde_json::to_value(ExecutionPlanResponse::from(&plan)).unwrap();

        assert_eq!(json["orderType"], "Buy");
        assert_eq!(json["requestedAmount"], "1.5");
        assert_eq!(json["filledAmount"], "0");
        assert_eq!(json["isFullyFilled"], false);
        assert!(json["exchanges"].as_array().unwrap().is_empty());
    }
}
