// SPDX-FileCopyrightText: 2026 Issuetrack Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test harness for end-to-end integration testing.
//!
//! `TestHarness` assembles the full API stack (storage, issue service,
//! about message, GraphQL schema) over a temp SQLite database or an
//! in-memory [`MockStorage`]. `execute()` drives a GraphQL request through
//! the schema and returns the response as JSON.

use std::sync::Arc;

use async_graphql::{Request, Variables};
use issuetrack_config::model::StorageConfig;
use issuetrack_core::about::DEFAULT_ABOUT_MESSAGE;
use issuetrack_core::{AboutMessage, IssueService, StorageAdapter, TrackerError};
use issuetrack_gateway::{build_router, build_schema, GatewayState, IssuetrackSchema, ServerConfig};
use issuetrack_storage::SqliteStorage;

use crate::mock_storage::MockStorage;

/// Builder for creating test environments with configurable options.
pub struct TestHarnessBuilder {
    about_message: String,
    mock_storage: Option<Arc<MockStorage>>,
}

impl TestHarnessBuilder {
    fn new() -> Self {
        Self {
            about_message: DEFAULT_ABOUT_MESSAGE.to_string(),
            mock_storage: None,
        }
    }

    /// Set the initial about message.
    pub fn with_about_message(mut self, message: impl Into<String>) -> Self {
        self.about_message = message.into();
        self
    }

    /// Use the given in-memory storage instead of a temp SQLite database.
    pub fn with_mock_storage(mut self, storage: Arc<MockStorage>) -> Self {
        self.mock_storage = Some(storage);
        self
    }

    /// Build the test harness, creating all required subsystems.
    pub async fn build(self) -> Result<TestHarness, TrackerError> {
        let temp_dir =
            tempfile::TempDir::new().map_err(|e| TrackerError::Storage { source: e.into() })?;

        let storage: Arc<dyn StorageAdapter> = match self.mock_storage {
            Some(mock) => mock as Arc<dyn StorageAdapter>,
            None => {
                let db_path = temp_dir.path().join("test.db");
                let storage = SqliteStorage::new(StorageConfig {
                    database_path: db_path.to_string_lossy().into_owned(),
                    ..StorageConfig::default()
                });
                storage.initialize().await?;
                Arc::new(storage)
            }
        };

        let service = IssueService::new(storage.clone());
        let about = Arc::new(AboutMessage::new(self.about_message));
        let schema = build_schema(service.clone(), about.clone());

        Ok(TestHarness {
            storage,
            service,
            about,
            schema,
            _temp_dir: temp_dir,
        })
    }
}

/// A complete test environment backed by temp storage.
pub struct TestHarness {
    /// Storage adapter (temp DB cleaned up on drop, or a mock).
    pub storage: Arc<dyn StorageAdapter>,
    /// Issue service over `storage`.
    pub service: IssueService,
    /// The shared about message.
    pub about: Arc<AboutMessage>,
    /// Executable GraphQL schema.
    pub schema: IssuetrackSchema,
    /// Temp directory kept alive for cleanup on drop.
    _temp_dir: tempfile::TempDir,
}

impl TestHarness {
    /// Create a new builder for configuring the test harness.
    pub fn builder() -> TestHarnessBuilder {
        TestHarnessBuilder::new()
    }

    /// Execute a GraphQL document and return the response as JSON.
    pub async fn execute(&self, query: &str) -> serde_json::Value {
        self.run(Request::new(query)).await
    }

    /// Execute a GraphQL document with JSON variables.
    pub async fn execute_with_variables(
        &self,
        query: &str,
        variables: serde_json::Value,
    ) -> serde_json::Value {
        self.run(Request::new(query).variables(Variables::from_json(variables)))
            .await
    }

    /// An HTTP router over this harness, serving GraphQL at `/graphql`.
    pub fn router(&self) -> axum::Router {
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            graphql_path: "/graphql".to_string(),
            playground: true,
        };
        let state = GatewayState::new(self.schema.clone(), self.storage.clone(), "/graphql");
        build_router(&config, state)
    }

    async fn run(&self, request: Request) -> serde_json::Value {
        let response = self.schema.execute(request).await;
        serde_json::to_value(&response).unwrap_or(serde_json::Value::Null)
    }
}
