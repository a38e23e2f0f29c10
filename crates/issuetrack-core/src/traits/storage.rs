// SPDX-FileCopyrightText: 2026 Issuetrack Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Storage adapter trait for persistence backends (SQLite, in-memory mocks).

use async_trait::async_trait;

use crate::error::TrackerError;
use crate::traits::adapter::PluginAdapter;
use crate::types::{Issue, NewIssue};

/// Adapter for the issue and counter collections.
///
/// Implementations own every issue and counter record; callers keep no
/// copies between requests.
#[async_trait]
pub trait StorageAdapter: PluginAdapter {
    /// Initializes the storage backend (connection, migrations).
    async fn initialize(&self) -> Result<(), TrackerError>;

    /// Closes the storage backend, flushing pending writes.
    async fn close(&self) -> Result<(), TrackerError>;

    /// Looks up an issue by its public `id`. A missing issue is `Ok(None)`.
    async fn get_issue(&self, id: i64) -> Result<Option<Issue>, TrackerError>;

    /// Looks up an issue by its storage-assigned row identifier.
    async fn get_issue_by_row_id(&self, row_id: i64) -> Result<Option<Issue>, TrackerError>;

    /// Lists issues whose status equals `status` exactly, or all issues when `None`.
    ///
    /// Ordering is whatever the backend returns.
    async fn list_issues(&self, status: Option<&str>) -> Result<Vec<Issue>, TrackerError>;

    /// Persists a new issue and returns its storage-assigned row identifier.
    async fn insert_issue(&self, issue: &NewIssue) -> Result<i64, TrackerError>;

    /// Atomically increments the named counter and returns the new value.
    ///
    /// The first call for a name returns `1`. The increment and read must be a
    /// single backend operation so concurrent callers never share a value.
    async fn next_sequence_value(&self, name: &str) -> Result<i64, TrackerError>;
}
