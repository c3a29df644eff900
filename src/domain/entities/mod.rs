//! # Domain Entities
//!
//! Snapshot inputs and planning results.
//!
//! ## Snapshot
//!
//! - [`Exchange`]: An exchange with its funds and order book
//! - [`OrderBook`]: Resting bids and asks
//! - [`Order`]: A single resting order
//!
//! ## Results
//!
//! - [`ExecutionPlan`]: Aggregated best-execution result
//! - [`ExchangeExecution`]: Fills taken from one exchange
//! - [`OrderMatch`]: A fill against one resting order

pub mod exchange;
pub mod execution_plan;
pub mod order_book;

pub use exchange::{AvailableFunds, Exchange};
pub use execution_plan::{ExchangeExecution, ExecutionPlan, OrderMatch};
pub use order_book::{Order, OrderBook, OrderEntry};
