//! Neo4j connection management.

use neo4rs::{ConfigBuilder, Graph, Query, Row};
use serde::Deserialize;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::error::StoreError;

/// Configuration for connecting to Neo4j.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphConfig {
    pub uri: String,
    pub user: String,
    pub password: String,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            uri: "bolt://localhost:7687".to_string(),
            user: "neo4j".to_string(),
            password: "password".to_string(),
        }
    }
}

impl GraphConfig {
    /// Build a config from `NEO4J_URI`, `NEO4J_USER` and `NEO4J_PASSWORD`,
    /// falling back to the defaults for anything unset.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            uri: std::env::var("NEO4J_URI").unwrap_or(defaults.uri),
            user: std::env::var("NEO4J_USER").unwrap_or(defaults.user),
            password: std::env::var("NEO4J_PASSWORD").unwrap_or(defaults.password),
        }
    }
}

/// Store adapter owning the one connection to the graph database.
///
/// Construction never touches the network; the connection is established
/// on the first [`connect`](GraphStore::connect) or session acquisition.
pub struct GraphStore {
    config: GraphConfig,
    graph: RwLock<Option<Graph>>,
}

impl GraphStore {
    /// Create a store for the given config without connecting.
    pub fn new(config: GraphConfig) -> Self {
        Self {
            config,
            graph: RwLock::new(None),
        }
    }

    /// Establish the connection. No-op when already connected.
    ///
    /// Note: neo4rs uses a lazy deadpool — `Graph::connect` only creates the
    /// pool object and does NOT establish a real bolt connection yet. We run
    /// a cheap `RETURN 1` ping immediately so that callers get a fast failure
    /// when Neo4j is unreachable instead of hanging silently.
    pub async fn connect(&self) -> Result<(), StoreError> {
        let mut guard = self.graph.write().await;
        if guard.is_some() {
            return Ok(());
        }

        let neo4j_config = ConfigBuilder::default()
            .uri(&self.config.uri)
            .user(&self.config.user)
            .password(&self.config.password)
            .db("neo4j")
            .max_connections(4)
            .fetch_size(20)
            .build()
            .map_err(|e| StoreError::Connection(e.to_string()))?;

        let graph = Graph::connect(neo4j_config)
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;

        // Ping to force an actual TCP+bolt handshake.
        graph
            .run(Query::new("RETURN 1".to_string()))
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;

        info!(uri = %self.config.uri, "Connected to Neo4j");
        *guard = Some(graph);
        Ok(())
    }

    /// Release the connection. No-op when not connected.
    pub async fn close(&self) {
        let mut guard = self.graph.write().await;
        if guard.take().is_some() {
            info!("Closed Neo4j connection");
        }
    }

    /// Acquire an independent session handle, connecting first if needed.
    ///
    /// The handle is a cheap clone over the driver's pool; it is released
    /// on drop, so every exit path (including errors mid-query) returns the
    /// underlying resources.
    pub async fn session(&self) -> Result<Graph, StoreError> {
        {
            let guard = self.graph.read().await;
            if let Some(graph) = guard.as_ref() {
                return Ok(graph.clone());
            }
        }

        self.connect().await?;
        let guard = self.graph.read().await;
        guard
            .as_ref()
            .cloned()
            .ok_or_else(|| StoreError::Connection("connection closed during acquisition".to_string()))
    }

    /// Execute a Cypher query that returns no results.
    pub async fn execute(&self, query: Query) -> Result<(), StoreError> {
        let session = self.session().await?;
        session.run(query).await?;
        Ok(())
    }

    /// Execute a Cypher query and collect the resulting rows.
    pub async fn query(&self, query: Query) -> Result<Vec<Row>, StoreError> {
        let session = self.session().await?;
        let mut result = session.execute(query).await?;

        let mut rows = Vec::new();
        while let Ok(Some(row)) = result.next().await {
            rows.push(row);
        }
        debug!(rows = rows.len(), "Graph query returned");
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_points_at_local_bolt() {
        let config = GraphConfig::default();
        assert_eq!(config.uri, "bolt://localhost:7687");
        assert_eq!(config.user, "neo4j");
    }

    #[tokio::test]
    async fn close_before_connect_is_a_noop() {
        let store = GraphStore::new(GraphConfig::default());
        store.close().await;
        store.close().await;
    }
}
