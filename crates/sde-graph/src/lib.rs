//! # SDE Graph
//!
//! Neo4j store adapter for the sequence editor backend.
//!
//! Owns the lazily-established connection to the graph database and
//! exposes per-call session acquisition plus query helpers.

pub mod client;
pub mod error;

pub use client::{GraphConfig, GraphStore};
pub use error::StoreError;
