//! # Infrastructure Layer
//!
//! Adapters that feed exchange snapshots to the application layer.
//!
//! - [`persistence`]: Repository port and its JSON and in-memory adapters

pub mod persistence;
