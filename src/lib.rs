//! # Execution Planner
//!
//! Best-execution planning across the order books of several exchanges.
//!
//! Given a side and a quantity, the planner gathers every eligible resting
//! order from every exchange, ranks them by price and fills greedily while
//! respecting each exchange's own settlement balance.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ api::rest        axum router and handlers    │
//! ├──────────────────────────────────────────────┤
//! │ application      ExecutionPlanner            │
//! ├──────────────────────────────────────────────┤
//! │ domain           exchanges, orders, plans    │
//! ├──────────────────────────────────────────────┤
//! │ infrastructure   JSON and in-memory sources  │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```no_run
//! use execution_planner::application::services::ExecutionPlanner;
//! use execution_planner::domain::value_objects::{OrderSide, Quantity};
//! use execution_planner::infrastructure::persistence::JsonExchangeRepository;
//! use rust_decimal::Decimal;
//! use std::sync::Arc;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let repository = Arc::new(JsonExchangeRepository::new("data/exchanges"));
//! let planner = ExecutionPlanner::with_defaults(repository);
//!
//! let plan = planner.plan(OrderSide::Buy, Quantity::new(Decimal::ONE)).await?;
//! println!("{plan}");
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod logging;
