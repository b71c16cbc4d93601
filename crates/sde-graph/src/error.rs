//! Store adapter error types.

use thiserror::Error;

/// Errors raised by the graph store adapter.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to connect to graph database: {0}")]
    Connection(String),

    #[error("Graph query failed: {0}")]
    Query(#[from] neo4rs::Error),
}
