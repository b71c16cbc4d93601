//! Application state.

use sde_graph::GraphStore;
use std::sync::Arc;

/// Application state shared across handlers.
///
/// The store is constructed by the process entry point and injected here;
/// handlers never reach for global connection state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<GraphStore>,
}

impl AppState {
    pub fn new(store: Arc<GraphStore>) -> Self {
        Self { store }
    }
}
