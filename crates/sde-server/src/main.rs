//! Sequence editor backend server.
//!
//! Owns the store lifecycle: connect at startup, serve until a shutdown
//! signal, then close the connection.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use sde_graph::{GraphConfig, GraphStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "sde-server", about = "Sequence editor backend server")]
struct Args {
    /// Address to bind.
    #[arg(long, env = "SDE_BIND", default_value = "127.0.0.1")]
    bind: String,

    /// Port to listen on.
    #[arg(long, env = "SDE_PORT", default_value_t = 8000)]
    port: u16,

    /// CORS origin allow-list, comma separated.
    #[arg(
        long,
        env = "SDE_CORS_ORIGINS",
        value_delimiter = ',',
        default_values_t = [
            "http://localhost:5173".to_string(),
            "http://localhost:3000".to_string(),
        ]
    )]
    cors_origins: Vec<String>,
}

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "sde_server=info,sde_web=debug,sde_core=debug,sde_graph=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let store = Arc::new(GraphStore::new(GraphConfig::from_env()));

    // Try to establish the connection up front so misconfiguration shows up
    // in the logs immediately. A failure here is not fatal: requests will
    // reattempt the connection and surface store errors as 500s.
    match tokio::time::timeout(Duration::from_secs(5), store.connect()).await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => tracing::warn!("Neo4j not reachable at startup: {}", e),
        Err(_) => tracing::warn!("Neo4j connection attempt timed out at startup"),
    }

    sde_web::run_server(store.clone(), &args.bind, args.port, &args.cors_origins).await?;

    store.close().await;
    Ok(())
}
