//! # Exchange Entity
//!
//! An exchange as captured in a snapshot: its settlement funds and its
//! order book.
//!
//! ```json
//! {
//!   "Id": "exchange-01",
//!   "AvailableFunds": { "Crypto": 10.8503, "Euro": 117520.12 },
//!   "OrderBook": { "Bids": [], "Asks": [] }
//! }
//! ```

use crate::domain::entities::order_book::OrderBook;
use crate::domain::value_objects::{ExchangeId, OrderSide};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Settlement balances held on an exchange.
///
/// The two balances are independent: `quote` pays for buys, `base` is
/// delivered on sells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailableFunds {
    /// Quote-currency balance (EUR in exchange data files).
    #[serde(default, rename = "Euro", alias = "euro", alias = "quote")]
    pub quote: Decimal,
    /// Base-asset balance (crypto in exchange data files).
    #[serde(default, rename = "Crypto", alias = "crypto", alias = "base")]
    pub base: Decimal,
}

impl AvailableFunds {
    /// Creates a funds record.
    #[must_use]
    pub const fn new(quote: Decimal, base: Decimal) -> Self {
        Self { quote, base }
    }

    /// Returns the balance a request on `side` draws down.
    ///
    /// Buys spend the quote balance, sells spend the base balance.
    #[must_use]
    pub const fn spendable(&self, side: OrderSide) -> Decimal {
        match side {
            OrderSide::Buy => self.quote,
            OrderSide::Sell => self.base,
        }
    }
}

/// An exchange in a planning snapshot.
///
/// # Examples
///
/// ```
/// use execution_planner::domain::entities::exchange::{AvailableFunds, Exchange};
/// use execution_planner::domain::entities::order_book::OrderBook;
/// use execution_planner::domain::value_objects::OrderSide;
/// use rust_decimal::Decimal;
///
/// let exchange = Exchange::new(
///     "ex-1",
///     AvailableFunds::new(Decimal::new(12000, 0), Decimal::ZERO),
///     OrderBook::new(),
/// );
///
/// assert!(exchange.can_fund(OrderSide::Buy));
/// assert!(!exchange.can_fund(OrderSide::Sell));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Exchange {
    #[serde(alias = "id")]
    id: ExchangeId,
    #[serde(alias = "availableFunds", alias = "available_funds")]
    available_funds: AvailableFunds,
    #[serde(alias = "orderBook", alias = "order_book")]
    order_book: OrderBook,
}

impl Exchange {
    /// Creates an exchange snapshot.
    #[must_use]
    pub fn new(id: impl Into<ExchangeId>, available_funds: AvailableFunds, order_book: OrderBook) -> Self {
        Self {
            id: id.into(),
            available_funds,
            order_book,
        }
    }

    /// Returns the exchange ID.
    #[inline]
    #[must_use]
    pub fn id(&self) -> &ExchangeId {
        &self.id
    }

    /// Returns the available funds.
    #[inline]
    #[must_use]
    pub fn available_funds(&self) -> &AvailableFunds {
        &self.available_funds
    }

    /// Returns the order book.
    #[inline]
    #[must_use]
    pub fn order_book(&self) -> &OrderBook {
        &self.order_book
    }

    /// Returns true if the exchange holds a positive balance for `side`.
    #[must_use]
    pub fn can_fund(&self, side: OrderSide) -> bool {
        self.available_funds.spendable(side) > Decimal::ZERO
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn spendable_selects_balance_by_side() {
        let funds = AvailableFunds::new(dec!(5000), dec!(2.0));
        assert_eq!(funds.spendable(OrderSide::Buy), dec!(5000));
        assert_eq!(funds.spendable(OrderSide::Sell), dec!(2.0));
    }

    #[test]
    fn zero_balance_cannot_fund() {
        let exchange = Exchange::new("ex", AvailableFunds::default(), OrderBook::new());
        assert!(!exchange.can_fund(OrderSide::Buy));
        assert!(!exchange.can_fund(OrderSide::Sell));
    }

    #[test]
    fn reads_exchange_file_layout() {
        let json = r#"{
            "Id": "exchange-1",
            "AvailableFunds": { "Crypto": 2.0, "Euro": 5000 },
            "OrderBook": { "Bids": [], "Asks": [] }
        }"#;
        let exchange: Exchange = serde_json::from_str(json).unwrap();

        assert_eq!(exchange.id().as_str(), "exchange-1");
        assert_eq!(exchange.available_funds().quote, dec!(5000));
        assert_eq!(exchange.available_funds().base, dec!(2.0));
        assert!(exchange.order_book().is_empty());
    }

    #[test]
    fn reads_camel_case_layout() {
        let json = r#"{
            "id": "exchange-2",
            "availableFunds": { "crypto": 1, "euro": 0 },
            "orderBook": {}
        }"#;
        let exchange: Exchange = serde_json::from_str(json).unwrap();
        assert_eq!(exchange.id().as_str(), "exchange-2");
        assert!(exchange.can_fund(OrderSide::Sell));
    }

    #[test]
    fn missing_id_is_rejected() {
        let json = r#"{ "AvailableFunds": { "Crypto": 1, "Euro": 1 }, "OrderBook": {} }"#;
        assert!(serde_json::from_str::<Exchange>(json).is_err());
    }

    #[test]
    fn serde_roundtrip() {
        let exchange = Exchange::new(
            "ex-rt",
            AvailableFunds::new(dec!(10.5), dec!(0.25)),
            OrderBook::new(),
        );
        let json = serde_json::to_string(&exchange).unwrap();
        let back: Exchange = serde_json::from_str(&json).unwrap();
        assert_eq!(exchange, back);
    }
}
