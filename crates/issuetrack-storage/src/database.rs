// SPDX-FileCopyrightText: 2026 Issuetrack Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Database connection management with PRAGMA setup, WAL mode, and lifecycle.
//!
//! All statements are serialized through tokio-rusqlite's single background
//! thread. The `Database` struct IS the single writer: query modules accept
//! `&Database` and go through [`Database::connection`]. Do NOT open
//! additional connections for writes inside one process; other processes
//! sharing the file are arbitrated by SQLite's own locking and the
//! configured busy timeout.

use std::time::Duration;

use issuetrack_config::model::StorageConfig;
use issuetrack_core::TrackerError;
use tracing::debug;

use crate::migrations;

/// Connection settings applied when the database is opened.
#[derive(Debug, Clone)]
pub struct DatabaseOptions {
    /// Switch the journal to write-ahead logging.
    pub wal_mode: bool,
    /// How long to wait on another connection's write lock.
    pub busy_timeout: Duration,
}

impl Default for DatabaseOptions {
    fn default() -> Self {
        Self {
            wal_mode: true,
            busy_timeout: Duration::from_millis(5000),
        }
    }
}

impl From<&StorageConfig> for DatabaseOptions {
    fn from(config: &StorageConfig) -> Self {
        Self {
            wal_mode: config.wal_mode,
            busy_timeout: Duration::from_millis(config.busy_timeout_ms),
        }
    }
}

/// Handle to the single shared SQLite connection.
#[derive(Clone)]
pub struct Database {
    conn: tokio_rusqlite::Connection,
}

impl Database {
    /// Open (or create) the database at `path` with default options.
    pub async fn open(path: &str) -> Result<Self, TrackerError> {
        Self::open_with_options(path, DatabaseOptions::default()).await
    }

    /// Open (or create) the database at `path`, apply PRAGMAs and run migrations.
    pub async fn open_with_options(
        path: &str,
        options: DatabaseOptions,
    ) -> Result<Self, TrackerError> {
        let conn = tokio_rusqlite::Connection::open(path)
            .await
            .map_err(|e| TrackerError::Storage {
                source: Box::new(e),
            })?;

        conn.call(move |conn| -> Result<(), rusqlite::Error> {
            conn.busy_timeout(options.busy_timeout)?;
            conn.pragma_update(None, "foreign_keys", "ON")?;
            if options.wal_mode {
                let _mode: String =
                    conn.query_row("PRAGMA journal_mode = WAL", [], |row| row.get(0))?;
                conn.pragma_update(None, "synchronous", "NORMAL")?;
            }
            Ok(())
        })
        .await
        .map_err(map_tr_err)?;

        conn.call(|conn| -> Result<(), refinery::Error> { migrations::run_migrations(conn) })
            .await
            .map_err(map_tr_err)?;

        debug!(path, wal = options.wal_mode, "database opened");
        Ok(Self { conn })
    }

    /// Returns the underlying async connection.
    pub fn connection(&self) -> &tokio_rusqlite::Connection {
        &self.conn
    }

    /// Runs a trivial statement to prove the connection is alive.
    pub async fn ping(&self) -> Result<(), TrackerError> {
        self.conn
            .call(|conn| -> Result<(), rusqlite::Error> {
                conn.execute_batch("SELECT 1;")?;
                Ok(())
            })
            .await
            .map_err(map_tr_err)
    }

    /// Folds the WAL back into the main database file.
    pub async fn checkpoint(&self) -> Result<(), TrackerError> {
        self.conn
            .call(|conn| -> Result<(), rusqlite::Error> {
                conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
                Ok(())
            })
            .await
            .map_err(map_tr_err)
    }

    /// Checkpoint and close the connection.
    pub async fn close(self) -> Result<(), TrackerError> {
        self.checkpoint().await?;
        self.conn.close().await.map_err(map_tr_err)
    }
}

/// Convert a tokio-rusqlite error into a storage error.
pub fn map_tr_err<E>(e: tokio_rusqlite::Error<E>) -> TrackerError
where
    tokio_rusqlite::Error<E>: std::error::Error + Send + Sync + 'static,
{
    TrackerError::Storage {
        source: Box::new(e),
    }
}
