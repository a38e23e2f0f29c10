// SPDX-FileCopyrightText: 2026 Issuetrack Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP server built on axum.
//!
//! Sets up routes, middleware, and shared state for the GraphQL endpoint.

use std::future::Future;
use std::sync::Arc;
use std::time::Instant;

use axum::{
    routing::{get, post},
    Router,
};
use issuetrack_core::{StorageAdapter, TrackerError};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::schema::IssuetrackSchema;

/// Shared state for axum request handlers.
#[derive(Clone)]
pub struct GatewayState {
    /// Executable GraphQL schema.
    pub schema: IssuetrackSchema,
    /// Storage backend, probed by the health endpoint.
    pub storage: Arc<dyn StorageAdapter>,
    /// Process start time for uptime calculation.
    pub start_time: Instant,
    /// Path the GraphQL endpoint is mounted at.
    pub graphql_path: String,
}

impl GatewayState {
    pub fn new(
        schema: IssuetrackSchema,
        storage: Arc<dyn StorageAdapter>,
        graphql_path: impl Into<String>,
    ) -> Self {
        Self {
            schema,
            storage,
            start_time: Instant::now(),
            graphql_path: graphql_path.into(),
        }
    }
}

/// Server configuration (mirrors `ServerConfig` from issuetrack-config to
/// keep this crate free of the config dependency).
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host address to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
    /// Path of the GraphQL endpoint.
    pub graphql_path: String,
    /// Serve GraphiQL on GET requests to the GraphQL path.
    pub playground: bool,
}

/// Build the application router.
///
/// Routes:
/// - POST {graphql_path}: GraphQL execution
/// - GET {graphql_path}: GraphiQL, when `playground` is enabled
/// - GET /health
pub fn build_router(config: &ServerConfig, state: GatewayState) -> Router {
    let graphql = if config.playground {
        get(handlers::get_playground).post(handlers::post_graphql)
    } else {
        post(handlers::post_graphql)
    };

    Router::new()
        .route(&config.graphql_path, graphql)
        .route("/health", get(handlers::get_health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind to the configured host:port and serve until `shutdown` resolves.
pub async fn start_server<F>(
    config: &ServerConfig,
    state: GatewayState,
    shutdown: F,
) -> Result<(), TrackerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| TrackerError::Internal(format!("failed to bind API server to {addr}: {e}")))?;

    serve(listener, build_router(config, state), shutdown).await
}

/// Serve `router` on an already-bound listener until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, router: Router, shutdown: F) -> Result<(), TrackerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let local = listener
        .local_addr()
        .map_err(|e| TrackerError::Internal(format!("listener has no local address: {e}")))?;
    tracing::info!(addr = %local, "API server started");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| TrackerError::Internal(format!("API server error: {e}")))?;

    tracing::info!("API server stopped");
    Ok(())
}
