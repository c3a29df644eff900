//! # Execution Plan Entity
//!
//! The result of matching a request against the liquidity of all exchanges.
//!
//! An [`ExecutionPlan`] is built from its [`ExchangeExecution`]s, so the plan
//! totals are always the sums of the per-exchange figures.
//!
//! # Examples
//!
//! ```
//! use execution_planner::domain::entities::execution_plan::{
//!     ExchangeExecution, ExecutionPlan, OrderMatch,
//! };
//! use execution_planner::domain::value_objects::{OrderSide, Price, Quantity};
//! use rust_decimal::Decimal;
//!
//! let mut execution = ExchangeExecution::new("ex-1");
//! execution
//!     .record(OrderMatch::new(
//!         "ask-1",
//!         Quantity::new(Decimal::new(5, 1)),
//!         Price::new(Decimal::new(8000, 0)),
//!     ).unwrap())
//!     .unwrap();
//!
//! let plan = ExecutionPlan::from_executions(
//!     OrderSide::Buy,
//!     Quantity::new(Decimal::ONE),
//!     vec![execution],
//! ).unwrap();
//!
//! assert_eq!(plan.total_cost_or_proceeds(), Decimal::new(4000, 0));
//! assert_eq!(plan.average_price().get(), Decimal::new(8000, 0));
//! assert!(!plan.is_fully_filled());
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::{
    CheckedArithmetic, ExchangeId, OrderId, OrderSide, Price, Quantity,
};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

/// A fill against one resting order.
///
/// # Invariants
///
/// - `quantity` is positive
/// - `price` is positive
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderMatch {
    order_id: OrderId,
    quantity: Quantity,
    price: Price,
}

impl OrderMatch {
    /// Creates a match with validation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidQuantity` if quantity is not positive.
    /// Returns `DomainError::InvalidPrice` if price is not positive.
    pub fn new(order_id: impl Into<OrderId>, quantity: Quantity, price: Price) -> DomainResult<Self> {
        if !quantity.is_positive() {
            return Err(DomainError::InvalidQuantity(
                "matched quantity must be positive".to_string(),
            ));
        }
        if !price.is_positive() {
            return Err(DomainError::InvalidPrice(
                "match price must be positive".to_string(),
            ));
        }
        Ok(Self {
            order_id: order_id.into(),
            quantity,
            price,
        })
    }

    /// Returns the matched order ID.
    #[inline]
    #[must_use]
    pub fn order_id(&self) -> &OrderId {
        &self.order_id
    }

    /// Returns the matched quantity.
    #[inline]
    #[must_use]
    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Returns the price of the resting order.
    #[inline]
    #[must_use]
    pub fn price(&self) -> Price {
        self.price
    }

    /// Returns the quote-currency value of this match.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Arithmetic` if the product overflows.
    pub fn notional(&self) -> DomainResult<Decimal> {
        Ok(self.price.notional(self.quantity)?)
    }
}

impl fmt::Display for OrderMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "OrderMatch(order={}, qty={}, price={})",
            self.order_id, self.quantity, self.price
        )
    }
}

/// All fills taken from one exchange, in the order they were consumed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExchangeExecution {
    exchange_id: ExchangeId,
    filled_quantity: Quantity,
    cost_or_proceeds: Decimal,
    matches: Vec<OrderMatch>,
}

impl ExchangeExecution {
    /// Creates an execution with no fills yet.
    #[must_use]
    pub fn new(exchange_id: impl Into<ExchangeId>) -> Self {
        Self {
            exchange_id: exchange_id.into(),
            filled_quantity: Quantity::zero(),
            cost_or_proceeds: Decimal::ZERO,
            matches: Vec::new(),
        }
    }

    /// Appends a match and updates the running totals.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Arithmetic` if a running total overflows.
    pub fn record(&mut self, order_match: OrderMatch) -> DomainResult<()> {
        let notional = order_match.notional()?;
        self.filled_quantity = self.filled_quantity.safe_add(order_match.quantity())?;
        self.cost_or_proceeds = self.cost_or_proceeds.safe_add(notional)?;
        self.matches.push(order_match);
        Ok(())
    }

    /// Returns the exchange ID.
    #[inline]
    #[must_use]
    pub fn exchange_id(&self) -> &ExchangeId {
        &self.exchange_id
    }

    /// Returns the quantity filled on this exchange.
    #[inline]
    #[must_use]
    pub fn filled_quantity(&self) -> Quantity {
        self.filled_quantity
    }

    /// Returns the quote-currency cost (buy) or proceeds (sell) on this exchange.
    #[inline]
    #[must_use]
    pub fn cost_or_proceeds(&self) -> Decimal {
        self.cost_or_proceeds
    }

    /// Returns the matches in consumption order.
    #[inline]
    #[must_use]
    pub fn matches(&self) -> &[OrderMatch] {
        &self.matches
    }
}

/// Best-execution plan for one request.
///
/// # Invariants
///
/// - `filled_quantity` is the sum of the executions' filled quantities
/// - `total_cost_or_proceeds` is the sum of the executions' cost or proceeds
/// - `average_price` is `total / filled`, or zero when nothing filled
/// - `fully_filled` is `filled == requested`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExecutionPlan {
    side: OrderSide,
    requested_quantity: Quantity,
    filled_quantity: Quantity,
    total_cost_or_proceeds: Decimal,
    average_price: Price,
    fully_filled: bool,
    exchange_executions: Vec<ExchangeExecution>,
}

impl ExecutionPlan {
    /// Creates a plan with no fills.
    #[must_use]
    pub fn empty(side: OrderSide, requested_quantity: Quantity) -> Self {
        Self {
            side,
            requested_quantity,
            filled_quantity: Quantity::zero(),
            total_cost_or_proceeds: Decimal::ZERO,
            average_price: Price::zero(),
            fully_filled: false,
            exchange_executions: Vec::new(),
        }
    }

    /// Builds a plan from per-exchange executions, deriving all totals.
    ///
    /// Executions without matches are dropped.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Arithmetic` if a total overflows.
    pub fn from_executions(
        side: OrderSide,
        requested_quantity: Quantity,
        executions: Vec<ExchangeExecution>,
    ) -> DomainResult<Self> {
        let exchange_executions: Vec<ExchangeExecution> = executions
            .into_iter()
            .filter(|execution| !execution.matches.is_empty())
            .collect();

        let mut filled_quantity = Quantity::zero();
        let mut total_cost_or_proceeds = Decimal::ZERO;
        for execution in &exchange_executions {
            filled_quantity = filled_quantity.safe_add(execution.filled_quantity)?;
            total_cost_or_proceeds = total_cost_or_proceeds.safe_add(execution.cost_or_proceeds)?;
        }

        let average_price = if filled_quantity.is_positive() {
            Price::new(total_cost_or_proceeds.safe_div(filled_quantity.get())?)
        } else {
            Price::zero()
        };

        Ok(Self {
            side,
            requested_quantity,
            filled_quantity,
            total_cost_or_proceeds,
            average_price,
            fully_filled: filled_quantity == requested_quantity,
            exchange_executions,
        })
    }

    /// Returns the requested side.
    #[inline]
    #[must_use]
    pub fn side(&self) -> OrderSide {
        self.side
    }

    /// Returns the requested quantity.
    #[inline]
    #[must_use]
    pub fn requested_quantity(&self) -> Quantity {
        self.requested_quantity
    }

    /// Returns the total filled quantity.
    #[inline]
    #[must_use]
    pub fn filled_quantity(&self) -> Quantity {
        self.filled_quantity
    }

    /// Returns the quote-currency total spent (buy) or received (sell).
    #[inline]
    #[must_use]
    pub fn total_cost_or_proceeds(&self) -> Decimal {
        self.total_cost_or_proceeds
    }

    /// Returns the volume-weighted average price.
    #[inline]
    #[must_use]
    pub fn average_price(&self) -> Price {
        self.average_price
    }

    /// Returns true if the filled quantity equals the requested quantity.
    #[inline]
    #[must_use]
    pub fn is_fully_filled(&self) -> bool {
        self.fully_filled
    }

    /// Returns the per-exchange executions in discovery order.
    #[inline]
    #[must_use]
    pub fn exchange_executions(&self) -> &[ExchangeExecution] {
        &self.exchange_executions
    }

    /// Returns the quantity left unfilled.
    #[must_use]
    pub fn unfilled_quantity(&self) -> Quantity {
        Quantity::new(self.requested_quantity.get() - self.filled_quantity.get())
    }
}

impl fmt::Display for ExecutionPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ExecutionPlan(side={}, requested={}, filled={}, total={}, avg={}, exchanges={})",
            self.side,
            self.requested_quantity,
            self.filled_quantity,
            self.total_cost_or_proceeds,
            self.average_price,
            self.exchange_executions.len(),
        )
    }
}
