//! # Application Services
//!
//! Services that orchestrate domain logic and infrastructure.
//!
//! - [`ExecutionPlanner`]: Best-execution planning over an exchange snapshot

pub mod execution_planner;

pub use execution_planner::{ExecutionPlanner, PlannerConfig, TieBreak};
