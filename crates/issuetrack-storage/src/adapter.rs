// SPDX-FileCopyrightText: 2026 Issuetrack Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite implementation of the StorageAdapter trait.

use async_trait::async_trait;
use tokio::sync::OnceCell;
use tracing::debug;

use issuetrack_config::model::StorageConfig;
use issuetrack_core::types::{Issue, NewIssue};
use issuetrack_core::{HealthStatus, PluginAdapter, StorageAdapter, TrackerError};

use crate::database::{Database, DatabaseOptions};
use crate::queries;

/// SQLite-backed storage adapter.
///
/// Wraps a [`Database`] handle and delegates all query operations to the
/// typed query modules. The database is lazily initialized on the first
/// call to [`StorageAdapter::initialize`].
pub struct SqliteStorage {
    config: StorageConfig,
    db: OnceCell<Database>,
}

impl SqliteStorage {
    /// Create a new SqliteStorage with the given configuration.
    ///
    /// The database connection is not opened until [`initialize`] is called.
    ///
    /// [`initialize`]: StorageAdapter::initialize
    pub fn new(config: StorageConfig) -> Self {
        Self {
            config,
            db: OnceCell::new(),
        }
    }

    /// Path of the database file this adapter opens.
    pub fn database_path(&self) -> &str {
        &self.config.database_path
    }

    /// Returns a reference to the underlying Database, or an error if not initialized.
    fn db(&self) -> Result<&Database, TrackerError> {
        self.db.get().ok_or_else(|| TrackerError::Storage {
            source: "storage not initialized -- call initialize() first".into(),
        })
    }
}

#[async_trait]
impl PluginAdapter for SqliteStorage {
    fn name(&self) -> &str {
        "sqlite"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    async fn health_check(&self) -> Result<HealthStatus, TrackerError> {
        let Some(db) = self.db.get() else {
            return Ok(HealthStatus::Unhealthy("storage not initialized".into()));
        };
        match db.ping().await {
            Ok(()) => Ok(HealthStatus::Healthy),
            Err(e) => Ok(HealthStatus::Unhealthy(e.to_string())),
        }
    }

    async fn shutdown(&self) -> Result<(), TrackerError> {
        if let Some(db) = self.db.get() {
            db.checkpoint().await?;
            debug!("shutdown: WAL checkpoint complete");
        }
        Ok(())
    }
}

#[async_trait]
impl StorageAdapter for SqliteStorage {
    async fn initialize(&self) -> Result<(), TrackerError> {
        let options = DatabaseOptions::from(&self.config);
        let db = Database::open_with_options(&self.config.database_path, options).await?;
        self.db.set(db).map_err(|_| TrackerError::Storage {
            source: "storage already initialized".into(),
        })?;
        debug!(path = %self.config.database_path, "SQLite storage initialized");
        Ok(())
    }

    async fn close(&self) -> Result<(), TrackerError> {
        self.db()?.checkpoint().await?;
        debug!("WAL checkpoint complete");
        Ok(())
    }

    async fn get_issue(&self, id: i64) -> Result<Option<Issue>, TrackerError> {
        queries::issues::get_issue(self.db()?, id).await
    }

    async fn get_issue_by_row_id(&self, row_id: i64) -> Result<Option<Issue>, TrackerError> {
        queries::issues::get_issue_by_row_id(self.db()?, row_id).await
    }

    async fn list_issues(&self, status: Option<&str>) -> Result<Vec<Issue>, TrackerError> {
        queries::issues::list_issues(self.db()?, status).await
    }

    async fn insert_issue(&self, issue: &NewIssue) -> Result<i64, TrackerError> {
        queries::issues::insert_issue(self.db()?, issue).await
    }

    async fn next_sequence_value(&self, name: &str) -> Result<i64, TrackerError> {
        queries::counters::next_value(self.db()?, name).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use tempfile::tempdir;

    fn make_config(path: &str) -> StorageConfig {
        StorageConfig {
            database_path: path.to_string(),
            ..StorageConfig::default()
        }
    }

    #[tokio::test]
    async fn sqlite_storage_implements_plugin_adapter() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let storage = SqliteStorage::new(make_config(db_path.to_str().unwrap()));

        assert_eq!(storage.name(), "sqlite");
        assert_eq!(storage.version(), semver::Version::new(0, 1, 0));
    }

    #[tokio::test]
    async fn initialize_opens_database_at_configured_path() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("init_test.db");
        let storage = SqliteStorage::new(make_config(db_path.to_str().unwrap()));

        storage.initialize().await.unwrap();
        assert!(db_path.exists(), "database file should be created");
        assert_eq!(storage.database_path(), db_path.to_str().unwrap());
    }

    #[tokio::test]
    async fn initialize_twice_returns_error() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("double_init.db");
        let storage = SqliteStorage::new(make_config(db_path.to_str().unwrap()));

        storage.initialize().await.unwrap();
        let result = storage.initialize().await;
        assert!(result.is_err(), "second initialize should fail");
    }

    #[tokio::test]
    async fn health_check_reflects_initialization() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("health.db");
        let storage = SqliteStorage::new(make_config(db_path.to_str().unwrap()));

        assert!(matches!(
            storage.health_check().await.unwrap(),
            HealthStatus::Unhealthy(_)
        ));
        storage.initialize().await.unwrap();
        assert_eq!(storage.health_check().await.unwrap(), HealthStatus::Healthy);
    }

    #[tokio::test]
    async fn queries_fail_before_initialize() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("no_init.db");
        let storage = SqliteStorage::new(make_config(db_path.to_str().unwrap()));

        assert!(storage.get_issue(1).await.is_err());
        assert!(storage.next_sequence_value("issues").await.is_err());
    }

    #[tokio::test]
    async fn issue_lifecycle_through_adapter() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("lifecycle.db");
        let storage = SqliteStorage::new(make_config(db_path.to_str().unwrap()));
        storage.initialize().await.unwrap();

        let id = storage.next_sequence_value("issues").await.unwrap();
        assert_eq!(id, 1);

        let issue = NewIssue {
            id,
            title: "Missing bottom border on panel".to_string(),
            status: "New".to_string(),
            owner: None,
            effort: Some(2),
            created: Utc::now(),
            due: None,
        };
        let row_id = storage.insert_issue(&issue).await.unwrap();

        let saved = storage.get_issue_by_row_id(row_id).await.unwrap().unwrap();
        assert_eq!(saved.id, 1);
        assert_eq!(saved.title, issue.title);

        let listed = storage.list_issues(Some("New")).await.unwrap();
        assert_eq!(listed, vec![saved.clone()]);
        assert_eq!(storage.get_issue(1).await.unwrap(), Some(saved));

        storage.close().await.unwrap();
    }

    #[tokio::test]
    async fn shutdown_runs_checkpoint() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("shutdown.db");
        let storage = SqliteStorage::new(make_config(db_path.to_str().unwrap()));

        storage.shutdown().await.unwrap();
        storage.initialize().await.unwrap();
        storage.next_sequence_value("issues").await.unwrap();
        storage.shutdown().await.unwrap();
    }
}
