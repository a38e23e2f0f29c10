// SPDX-FileCopyrightText: 2026 Issuetrack Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `issuetrack serve` implementation.
//!
//! Opens storage, builds the GraphQL schema and serves it over HTTP until
//! a shutdown signal arrives, then checkpoints the database.

use std::sync::Arc;

use issuetrack_config::IssuetrackConfig;
use issuetrack_core::{AboutMessage, IssueService, StorageAdapter, TrackerError};
use issuetrack_gateway::{build_schema, start_server, GatewayState, ServerConfig};
use issuetrack_storage::SqliteStorage;
use tracing::{info, warn};

use crate::shutdown;

/// Runs the API server until SIGINT/SIGTERM.
pub async fn run_serve(config: IssuetrackConfig) -> Result<(), TrackerError> {
    init_tracing(&config.service.log_level);

    info!(
        name = %config.service.name,
        version = env!("CARGO_PKG_VERSION"),
        "starting issuetrack"
    );

    let storage = SqliteStorage::new(config.storage.clone());
    storage.initialize().await?;
    info!(path = %config.storage.database_path, "connected to database");
    let storage: Arc<dyn StorageAdapter> = Arc::new(storage);

    let about = Arc::new(AboutMessage::new(config.service.about_message.clone()));
    let schema = build_schema(IssueService::new(storage.clone()), about);
    let state = GatewayState::new(schema, storage.clone(), config.server.graphql_path.clone());

    let token = shutdown::install_signal_handler();
    let result = start_server(&server_config(&config), state, async move {
        token.cancelled().await;
    })
    .await;

    if let Err(e) = storage.close().await {
        warn!(error = %e, "failed to close storage cleanly");
    }
    info!("issuetrack stopped");

    result
}

/// Server settings for the gateway, taken from `[server]`.
fn server_config(config: &IssuetrackConfig) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        graphql_path: config.server.graphql_path.clone(),
        playground: config.server.playground,
    }
}

/// Initialize the tracing subscriber with the configured log level.
///
/// `RUST_LOG` takes precedence when set.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("issuetrack={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .init();
}
