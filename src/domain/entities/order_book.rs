//! # Order Book Entity
//!
//! Resting bids and asks published by a single exchange.
//!
//! The serde layout mirrors the exchange data files: PascalCase keys, each
//! book entry wrapping its order in an `Order` object. camelCase and
//! snake_case keys are accepted as aliases and unknown keys are ignored.
//!
//! ```json
//! {
//!   "Bids": [],
//!   "Asks": [
//!     { "Order": { "Id": "a-1", "Time": "2024-03-01T10:15:00",
//!                  "Type": "Sell", "Kind": "Limit",
//!                  "Amount": 0.405, "Price": 57299.73 } }
//!   ]
//! }
//! ```

use crate::domain::value_objects::{OrderId, OrderSide, Price, Quantity, Timestamp};
use serde::{Deserialize, Deserializer, Serialize};

/// Exchange feeds publish `"Id": null` for anonymous orders.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A resting order on an exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Order {
    #[serde(default, alias = "id", deserialize_with = "null_as_default")]
    id: OrderId,
    #[serde(default, alias = "time", skip_serializing_if = "Option::is_none")]
    time: Option<Timestamp>,
    #[serde(rename = "Type", alias = "type", alias = "side", alias = "Side")]
    side: OrderSide,
    #[serde(default, alias = "kind", skip_serializing_if = "Option::is_none")]
    kind: Option<String>,
    #[serde(rename = "Amount", alias = "amount", alias = "quantity")]
    quantity: Quantity,
    #[serde(alias = "price")]
    price: Price,
}

impl Order {
    /// Creates an order with no timestamp or kind.
    #[must_use]
    pub fn new(id: impl Into<OrderId>, side: OrderSide, quantity: Quantity, price: Price) -> Self {
        Self {
            id: id.into(),
            time: None,
            side,
            kind: None,
            quantity,
            price,
        }
    }

    /// Returns the order ID.
    #[inline]
    #[must_use]
    pub fn id(&self) -> &OrderId {
        &self.id
    }

    /// Returns when the order was placed, if recorded.
    #[inline]
    #[must_use]
    pub fn time(&self) -> Option<Timestamp> {
        self.time
    }

    /// Returns the side recorded on the order.
    #[inline]
    #[must_use]
    pub fn side(&self) -> OrderSide {
        self.side
    }

    /// Returns the order kind, if recorded.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    /// Returns the offered quantity.
    #[inline]
    #[must_use]
    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Returns the unit price.
    #[inline]
    #[must_use]
    pub fn price(&self) -> Price {
        self.price
    }

    /// Returns true if price and quantity are both strictly positive.
    #[must_use]
    pub fn is_tradeable(&self) -> bool {
        self.price.is_positive() && self.quantity.is_positive()
    }
}

/// One slot of an order book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OrderEntry {
    #[serde(alias = "order")]
    order: Order,
}

impl OrderEntry {
    /// Wraps an order into a book entry.
    #[must_use]
    pub fn new(order: Order) -> Self {
        Self { order }
    }

    /// Returns the wrapped order.
    #[inline]
    #[must_use]
    pub fn order(&self) -> &Order {
        &self.order
    }
}

impl From<Order> for OrderEntry {
    fn from(order: Order) -> Self {
        Self::new(order)
    }
}

/// Bids and asks of one exchange.
///
/// No ordering is assumed within either list.
///
/// # Examples
///
/// ```
/// use execution_planner::domain::entities::order_book::{Order, OrderBook};
/// use execution_planner::domain::value_objects::{OrderSide, Price, Quantity};
/// use rust_decimal::Decimal;
///
/// let book = OrderBook::new().with_ask(Order::new(
///     "ask-1",
///     OrderSide::Sell,
///     Quantity::new(Decimal::ONE),
///     Price::new(Decimal::new(10000, 0)),
/// ));
///
/// // A buy request consumes asks, which must be sell orders.
/// assert_eq!(book.matchable_orders(OrderSide::Buy).count(), 1);
/// assert_eq!(book.matchable_orders(OrderSide::Sell).count(), 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OrderBook {
    #[serde(default, alias = "bids")]
    bids: Vec<OrderEntry>,
    #[serde(default, alias = "asks")]
    asks: Vec<OrderEntry>,
}

impl OrderBook {
    /// Creates an empty order book.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a resting bid.
    #[must_use]
    pub fn with_bid(mut self, order: Order) -> Self {
        self.bids.push(order.into());
        self
    }

    /// Appends a resting ask.
    #[must_use]
    pub fn with_ask(mut self, order: Order) -> Self {
        self.asks.push(order.into());
        self
    }

    /// Returns the bid entries.
    #[inline]
    #[must_use]
    pub fn bids(&self) -> &[OrderEntry] {
        &self.bids
    }

    /// Returns the ask entries.
    #[inline]
    #[must_use]
    pub fn asks(&self) -> &[OrderEntry] {
        &self.asks
    }

    /// Returns the entries a request on `side` consumes: asks for a buy,
    /// bids for a sell.
    #[must_use]
    pub fn opposing_entries(&self, side: OrderSide) -> &[OrderEntry] {
        match side {
            OrderSide::Buy => &self.asks,
            OrderSide::Sell => &self.bids,
        }
    }

    /// Returns the orders a request on `side` may match, in book order.
    ///
    /// Entries whose recorded side disagrees with their book position are
    /// skipped: every ask must be a sell order and every bid a buy order.
    pub fn matchable_orders(&self, side: OrderSide) -> impl Iterator<Item = &Order> {
        let expected = side.opposite();
        self.opposing_entries(side)
            .iter()
            .map(OrderEntry::order)
            .filter(move |order| order.side() == expected)
    }

    /// Returns true if both sides are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bids.is_empty() && self.asks.is_empty()
    }
}
