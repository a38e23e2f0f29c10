// SPDX-FileCopyrightText: 2026 Issuetrack Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP request handlers.
//!
//! Handles POST /graphql, GET /graphql (GraphiQL) and GET /health.

use async_graphql::http::GraphiQLSource;
use async_graphql::ServerError;
use axum::{extract::State, response::Html, Json};
use issuetrack_core::HealthStatus;
use serde::Serialize;
use tracing::{error, warn};

use crate::schema::errors::BAD_USER_INPUT;
use crate::server::GatewayState;

/// Response body for GET /health.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `ok` when storage is healthy, `degraded` otherwise.
    pub status: String,
    /// Binary version.
    pub version: String,
    /// Seconds since the server state was created.
    pub uptime_secs: u64,
    /// Storage health as reported by its adapter.
    pub storage: String,
}

/// POST /graphql
///
/// Executes one GraphQL request. Errors are logged before the response is
/// returned to the client.
pub async fn post_graphql(
    State(state): State<GatewayState>,
    Json(request): Json<async_graphql::Request>,
) -> Json<async_graphql::Response> {
    let response = state.schema.execute(request).await;
    for err in &response.errors {
        log_graphql_error(err);
    }
    Json(response)
}

/// GET /graphql
///
/// Serves the GraphiQL playground pointed at the configured endpoint.
pub async fn get_playground(State(state): State<GatewayState>) -> Html<String> {
    Html(
        GraphiQLSource::build()
            .endpoint(&state.graphql_path)
            .finish(),
    )
}

/// GET /health
pub async fn get_health(State(state): State<GatewayState>) -> Json<HealthResponse> {
    let storage = match state.storage.health_check().await {
        Ok(status) => status,
        Err(e) => HealthStatus::Unhealthy(e.to_string()),
    };
    let (status, storage) = match storage {
        HealthStatus::Healthy => ("ok", "healthy".to_string()),
        HealthStatus::Degraded(reason) => ("degraded", format!("degraded: {reason}")),
        HealthStatus::Unhealthy(reason) => ("degraded", format!("unhealthy: {reason}")),
    };

    Json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
        storage,
    })
}

/// The `code` extension of a GraphQL error, if it has one.
pub fn error_code(err: &ServerError) -> Option<String> {
    let extensions = serde_json::to_value(err.extensions.as_ref()?).ok()?;
    extensions.get("code")?.as_str().map(str::to_string)
}

fn log_graphql_error(err: &ServerError) {
    let code = error_code(err);
    let path: Vec<String> = err.path.iter().map(|segment| format!("{segment:?}")).collect();
    if code.as_deref() == Some(BAD_USER_INPUT) || code.is_none() {
        warn!(message = %err.message, code = ?code, path = ?path, "graphql request error");
    } else {
        error!(message = %err.message, code = ?code, path = ?path, "graphql request failed");
    }
}
