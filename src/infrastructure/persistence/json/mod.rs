//! # JSON Repositories
//!
//! File-backed repositories reading one JSON document per record.

pub mod exchange_repository;

pub use exchange_repository::JsonExchangeRepository;
