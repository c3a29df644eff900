//! # API Layer
//!
//! External interfaces of the planner.
//!
//! - [`rest`]: HTTP endpoints built on axum

pub mod rest;
