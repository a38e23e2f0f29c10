// SPDX-FileCopyrightText: 2026 Issuetrack Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory storage adapter for deterministic testing.
//!
//! `MockStorage` implements `StorageAdapter` over plain collections behind a
//! mutex, and can be told to fail writes so error paths can be exercised
//! without a real database.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;

use issuetrack_core::types::{HealthStatus, Issue, NewIssue};
use issuetrack_core::{PluginAdapter, StorageAdapter, TrackerError};

#[derive(Default)]
struct Inner {
    issues: Vec<Issue>,
    counters: HashMap<String, i64>,
    next_row_id: i64,
}

/// A storage adapter that keeps everything in memory.
#[derive(Default)]
pub struct MockStorage {
    inner: Mutex<Inner>,
    fail_inserts: AtomicBool,
}

impl MockStorage {
    /// Create an empty mock storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent `insert_issue` call fail with a storage error.
    pub fn fail_inserts(&self, fail: bool) {
        self.fail_inserts.store(fail, Ordering::SeqCst);
    }

    /// Number of issues currently stored.
    pub async fn issue_count(&self) -> usize {
        self.inner.lock().await.issues.len()
    }

    /// Last value handed out for the named counter.
    pub async fn counter_value(&self, name: &str) -> Option<i64> {
        self.inner.lock().await.counters.get(name).copied()
    }
}

#[async_trait]
impl PluginAdapter for MockStorage {
    fn name(&self) -> &str {
        "mock-storage"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    async fn health_check(&self) -> Result<HealthStatus, TrackerError> {
        Ok(HealthStatus::Healthy)
    }

    async fn shutdown(&self) -> Result<(), TrackerError> {
        Ok(())
    }
}

#[async_trait]
impl StorageAdapter for MockStorage {
    async fn initialize(&self) -> Result<(), TrackerError> {
        Ok(())
    }

    async fn close(&self) -> Result<(), TrackerError> {
        Ok(())
    }

    async fn get_issue(&self, id: i64) -> Result<Option<Issue>, TrackerError> {
        let inner = self.inner.lock().await;
        Ok(inner.issues.iter().find(|i| i.id == id).cloned())
    }

    async fn get_issue_by_row_id(&self, row_id: i64) -> Result<Option<Issue>, TrackerError> {
        let inner = self.inner.lock().await;
        Ok(inner.issues.iter().find(|i| i.row_id == row_id).cloned())
    }

    async fn list_issues(&self, status: Option<&str>) -> Result<Vec<Issue>, TrackerError> {
        let inner = self.inner.lock().await;
        Ok(inner
            .issues
            .iter()
            .filter(|i| status.is_none_or(|s| i.status == s))
            .cloned()
            .collect())
    }

    async fn insert_issue(&self, issue: &NewIssue) -> Result<i64, TrackerError> {
        if self.fail_inserts.load(Ordering::SeqCst) {
            return Err(TrackerError::Storage {
                source: "mock insert failure".into(),
            });
        }

        let mut inner = self.inner.lock().await;
        if inner.issues.iter().any(|i| i.id == issue.id) {
            return Err(TrackerError::Storage {
                source: format!("duplicate issue id {}", issue.id).into(),
            });
        }
        inner.next_row_id += 1;
        let row_id = inner.next_row_id;
        inner.issues.push(Issue {
            row_id,
            id: issue.id,
            title: issue.title.clone(),
            status: issue.status.clone(),
            owner: issue.owner.clone(),
            effort: issue.effort,
            created: issue.created,
            due: issue.due,
        });
        Ok(row_id)
    }

    async fn next_sequence_value(&self, name: &str) -> Result<i64, TrackerError> {
        let mut inner = self.inner.lock().await;
        let current = inner.counters.entry(name.to_string()).or_insert(0);
        *current += 1;
        Ok(*current)
    }
}
