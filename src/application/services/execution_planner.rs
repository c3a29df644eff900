//! # Execution Planner
//!
//! Best-execution planning across the order books of several exchanges.
//!
//! For a buy the planner walks every eligible ask from cheapest to dearest;
//! for a sell it walks every eligible bid from highest to lowest. Each fill is
//! capped by the resting order's quantity, by what the owning exchange can
//! still fund, and by what is left of the request.
//!
//! Funding is tracked per exchange for the duration of a single call:
//!
//! - a buy spends the exchange's quote balance (`fill × price`)
//! - a sell spends the exchange's base balance (`fill`)
//!
//! # Examples
//!
//! ```
//! use execution_planner::application::services::execution_planner::ExecutionPlanner;
//! use execution_planner::domain::entities::{AvailableFunds, Exchange, Order, OrderBook};
//! use execution_planner::domain::value_objects::{OrderSide, Price, Quantity};
//! use execution_planner::infrastructure::persistence::InMemoryExchangeRepository;
//! use rust_decimal::Decimal;
//! use std::sync::Arc;
//!
//! # tokio_test::block_on(async {
//! let exchange = Exchange::new(
//!     "ex-1",
//!     AvailableFunds::new(Decimal::new(4000, 0), Decimal::ZERO),
//!     OrderBook::new().with_ask(Order::new(
//!         "ask-1",
//!         OrderSide::Sell,
//!         Quantity::new(Decimal::ONE),
//!         Price::new(Decimal::new(8000, 0)),
//!     )),
//! );
//! let repository = Arc::new(InMemoryExchangeRepository::with_exchanges([exchange]));
//! let planner = ExecutionPlanner::with_defaults(repository);
//!
//! let plan = planner.plan(OrderSide::Buy, Quantity::new(Decimal::ONE)).await.unwrap();
//! assert_eq!(plan.filled_quantity().get(), Decimal::new(5, 1));
//! assert!(!plan.is_fully_filled());
//! # });
//! ```

use crate::application::error::ApplicationResult;
use crate::domain::entities::{ExchangeExecution, Exchange, ExecutionPlan, Order, OrderMatch};
use crate::domain::value_objects::{
    CheckedArithmetic, ExchangeId, OrderSide, ParseEnumError, Quantity,
};
use crate::infrastructure::persistence::ExchangeRepository;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Ordering applied between orders quoted at the same price.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Keep snapshot order: exchange order first, then book order.
    #[default]
    InputOrder,
    /// Order by exchange ID, then snapshot order.
    ExchangeId,
}

impl TieBreak {
    /// Returns the configuration name of this tie-break.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InputOrder => "input_order",
            Self::ExchangeId => "exchange_id",
        }
    }
}

impl fmt::Display for TieBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TieBreak {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "input_order" => Ok(Self::InputOrder),
            "exchange_id" => Ok(Self::ExchangeId),
            _ => Err(ParseEnumError::InvalidValue("TieBreak", s.to_string())),
        }
    }
}

/// Configuration for the execution planner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Ordering between equally priced orders.
    #[serde(default)]
    pub tie_break: TieBreak,
}

impl PlannerConfig {
    /// Sets the tie-break rule.
    #[must_use]
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }
}

/// A resting order eligible for matching, tagged with its exchange.
#[derive(Debug, Clone, Copy)]
struct Candidate<'a> {
    exchange_id: &'a ExchangeId,
    order: &'a Order,
}

/// Plans best execution over the snapshot supplied by an [`ExchangeRepository`].
///
/// The planner holds no mutable state; one instance can serve concurrent
/// requests behind an `Arc`.
#[derive(Debug, Clone)]
pub struct ExecutionPlanner {
    repository: Arc<dyn ExchangeRepository>,
    config: PlannerConfig,
}

impl ExecutionPlanner {
    /// Creates a new planner.
    #[must_use]
    pub fn new(repository: Arc<dyn ExchangeRepository>, config: PlannerConfig) -> Self {
        Self { repository, config }
    }

    /// Creates a planner with default configuration.
    #[must_use]
    pub fn with_defaults(repository: Arc<dyn ExchangeRepository>) -> Self {
        Self::new(repository, PlannerConfig::default())
    }

    /// Returns the planner configuration.
    #[inline]
    #[must_use]
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Builds the best execution plan for `requested_quantity` on `side`.
    ///
    /// A non-positive request returns an empty plan without reading the
    /// snapshot. Missing liquidity or funds is not an error: the plan is
    /// simply partially filled or empty.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Repository` if the snapshot cannot be
    /// loaded, or `ApplicationError::Domain` on decimal overflow.
    pub async fn plan(
        &self,
        side: OrderSide,
        requested_quantity: Quantity,
    ) -> ApplicationResult<ExecutionPlan> {
        if !requested_quantity.is_positive() {
            debug!(%side, requested = %requested_quantity, "Non-positive request, returning empty plan");
            return Ok(ExecutionPlan::empty(side, requested_quantity));
        }

        let exchanges = self.repository.load_all().await?;
        let plan = self.plan_snapshot(&exchanges, side, requested_quantity)?;

        info!(
            %side,
            requested = %plan.requested_quantity(),
            filled = %plan.filled_quantity(),
            unfilled = %plan.unfilled_quantity(),
            total = %plan.total_cost_or_proceeds(),
            exchanges = plan.exchange_executions().len(),
            fully_filled = plan.is_fully_filled(),
            "Execution plan built"
        );
        Ok(plan)
    }

    /// Builds a plan over an already loaded snapshot.
    ///
    /// The same snapshot always produces the same plan.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Domain` on decimal overflow.
    pub fn plan_snapshot(
        &self,
        exchanges: &[Exchange],
        side: OrderSide,
        requested_quantity: Quantity,
    ) -> ApplicationResult<ExecutionPlan> {
        if !requested_quantity.is_positive() {
            return Ok(ExecutionPlan::empty(side, requested_quantity));
        }

        let mut candidates = collect_candidates(exchanges, side);
        sort_candidates(&mut candidates, side, self.config.tie_break);

        let mut balances: HashMap<&ExchangeId, Decimal> = HashMap::new();
        for exchange in exchanges {
            balances
                .entry(exchange.id())
                .or_insert_with(|| exchange.available_funds().spendable(side));
        }
        let mut executions: HashMap<&ExchangeId, ExchangeExecution> = HashMap::new();
        let mut discovery: Vec<&ExchangeId> = Vec::new();
        let mut remaining = requested_quantity;

        for candidate in candidates {
            if !remaining.is_positive() {
                break;
            }

            let Some(balance) = balances.get_mut(candidate.exchange_id) else {
                continue;
            };
            let order = candidate.order;

            let affordable = match side {
                OrderSide::Buy => order.price().affordable(*balance)?,
                OrderSide::Sell => Quantity::new(*balance),
            };
            let fill = order.quantity().min(affordable).min(remaining);
            if !fill.is_positive() {
                continue;
            }

            let order_match = OrderMatch::new(order.id().clone(), fill, order.price())?;
            let consumed = match side {
                OrderSide::Buy => order_match.notional()?,
                OrderSide::Sell => fill.get(),
            };
            *balance = balance.safe_sub(consumed)?;
            remaining = remaining.safe_sub(fill)?;

            executions
                .entry(candidate.exchange_id)
                .or_insert_with(|| {
                    discovery.push(candidate.exchange_id);
                    ExchangeExecution::new(candidate.exchange_id.clone())
                })
                .record(order_match)?;
        }

        let ordered: Vec<ExchangeExecution> = discovery
            .into_iter()
            .filter_map(|id| executions.remove(id))
            .collect();

        Ok(ExecutionPlan::from_executions(
            side,
            requested_quantity,
            ordered,
        )?)
    }

    /// Returns the number of exchanges the source holds, or `-1` if the
    /// source cannot be read.
    pub async fn exchange_count(&self) -> i64 {
        match self.repository.count().await {
            Ok(count) => i64::try_from(count).unwrap_or(i64::MAX),
            Err(e) => {
                error!(error = %e, "Failed to count exchanges");
                -1
            }
        }
    }
}

/// Flattens the orders a request on `side` may consume, in snapshot order.
///
/// Exchanges without a positive balance for `side` contribute nothing, and
/// orders with a non-positive price or quantity are dropped. Only the first
/// exchange carrying a given ID is used.
fn collect_candidates(exchanges: &[Exchange], side: OrderSide) -> Vec<Candidate<'_>> {
    let mut candidates = Vec::new();
    let mut seen: HashSet<&ExchangeId> = HashSet::new();

    for exchange in exchanges {
        if !seen.insert(exchange.id()) {
            warn!(exchange = %exchange.id(), "Ignoring exchange with duplicate ID");
            continue;
        }
        if !exchange.can_fund(side) {
            debug!(exchange = %exchange.id(), %side, "Exchange has no funds for side");
            continue;
        }

        for order in exchange.order_book().matchable_orders(side) {
            if !order.is_tradeable() {
                debug!(
                    exchange = %exchange.id(),
                    order = %order.id(),
                    price = %order.price(),
                    quantity = %order.quantity(),
                    "Skipping order with non-positive price or quantity"
                );
                continue;
            }
            candidates.push(Candidate {
                exchange_id: exchange.id(),
                order,
            });
        }
    }

    candidates
}

/// Sorts best price first. The sort is stable, so ties keep snapshot order
/// after the tie-break key.
fn sort_candidates(candidates: &mut [Candidate<'_>], side: OrderSide, tie_break: TieBreak) {
    candidates.sort_by(|a, b| {
        let by_price = match side {
            OrderSide::Buy => a.order.price().cmp(&b.order.price()),
            OrderSide::Sell => b.order.price().cmp(&a.order.price()),
        };
        by_price.then_with(|| match tie_break {
            TieBreak::InputOrder => Ordering::Equal,
            TieBreak::ExchangeId => a.exchange_id.cmp(b.exchange_id),
        })
    });
}
