//! # SDE Web
//!
//! Axum-based REST surface for the sequence editor backend.

pub mod routes;
pub mod state;

use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use sde_graph::GraphStore;
use std::sync::Arc;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use state::AppState;

/// Build the CORS layer from the configured origin allow-list.
///
/// Credentials are allowed, so wildcards are off the table; methods and
/// headers mirror whatever the browser asks for in preflight.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
}

/// Create the application router.
pub fn create_router(state: AppState, allowed_origins: &[String]) -> Router {
    let api_routes = Router::new()
        // Participants
        .route("/participants", get(routes::participants::list_participants))
        .route("/participants", post(routes::participants::create_participant))
        // Packages
        .route("/packages", get(routes::packages::list_packages))
        .route("/packages", post(routes::packages::create_package))
        // Classes
        .route("/classes", get(routes::classes::list_classes))
        .route("/classes", post(routes::classes::create_class))
        // DAOs
        .route("/daos", get(routes::daos::list_daos))
        .route("/daos", post(routes::daos::create_dao))
        .with_state(state.clone());

    Router::new()
        .route("/", get(routes::health::index))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(allowed_origins))
        .with_state(state)
}

/// Run the web server until a shutdown signal arrives.
pub async fn run_server(
    store: Arc<GraphStore>,
    bind: &str,
    port: u16,
    allowed_origins: &[String],
) -> anyhow::Result<()> {
    let state = AppState::new(store);
    let app = create_router(state, allowed_origins);

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", bind, port)).await?;
    tracing::info!("Web server listening on http://{}:{}", bind, port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

/// Resolve on ctrl-c or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install ctrl-c handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use sde_graph::GraphConfig;
    use tower::ServiceExt;

    // The store is lazy, so building state never opens a connection; only
    // routes that reach the repository layer would try to connect.
    fn test_router() -> Router {
        let store = Arc::new(GraphStore::new(GraphConfig::default()));
        let origins = vec!["http://localhost:5173".to_string()];
        create_router(AppState::new(store), &origins)
    }

    #[tokio::test]
    async fn health_route_reports_service_name() {
        let response = test_router()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["service"], "Sequence Editor Backend");
    }

    #[tokio::test]
    async fn create_with_empty_name_is_rejected_before_the_store() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/participants")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"name": "   "}"#))
            .unwrap();

        let response = test_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn create_with_missing_name_dies_in_the_extractor() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/packages")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"description": "no name"}"#))
            .unwrap();

        let response = test_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn unknown_routes_are_not_found() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/api/diagrams")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
