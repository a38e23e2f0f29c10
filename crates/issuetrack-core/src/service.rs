// SPDX-FileCopyrightText: 2026 Issuetrack Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Issue operations composed from validation, sequence allocation and storage.

use std::sync::Arc;

use chrono::{SubsecRound, Utc};
use tracing::debug;

use crate::error::TrackerError;
use crate::traits::StorageAdapter;
use crate::types::{Issue, IssueInputs, NewIssue};
use crate::validation;

/// Counter name used to allocate issue ids.
pub const ISSUE_SEQUENCE: &str = "issues";

/// Read and write operations on issues.
///
/// Holds no state of its own beyond the shared storage handle, so it is
/// cheap to clone into every request.
#[derive(Clone)]
pub struct IssueService {
    storage: Arc<dyn StorageAdapter>,
}

impl IssueService {
    pub fn new(storage: Arc<dyn StorageAdapter>) -> Self {
        Self { storage }
    }

    /// Fetches a single issue. Absence is not an error.
    pub async fn get_issue(&self, id: i64) -> Result<Option<Issue>, TrackerError> {
        self.storage.get_issue(id).await
    }

    /// Lists issues, optionally restricted to one exact status.
    ///
    /// An empty filter string is treated the same as no filter.
    pub async fn list_issues(&self, status: Option<&str>) -> Result<Vec<Issue>, TrackerError> {
        let status = status.filter(|s| !s.is_empty());
        self.storage.list_issues(status).await
    }

    /// Validates, stamps, numbers and persists a new issue.
    ///
    /// The returned issue is re-read from storage after the insert, so it
    /// reflects exactly what was written.
    pub async fn add_issue(&self, inputs: IssueInputs) -> Result<Issue, TrackerError> {
        validation::ensure_valid(&inputs)?;

        // Stored dates carry milliseconds; stamp at that precision so the
        // persisted value is never earlier than the call.
        let created = Utc::now().trunc_subsecs(3);
        let id = self.storage.next_sequence_value(ISSUE_SEQUENCE).await?;
        let issue = NewIssue::from_inputs(inputs, id, created);

        let row_id = self.storage.insert_issue(&issue).await?;
        let saved = self
            .storage
            .get_issue_by_row_id(row_id)
            .await?
            .ok_or_else(|| {
                TrackerError::Internal(format!("issue {id} missing after insert (row {row_id})"))
            })?;

        debug!(id = saved.id, row_id, status = %saved.status, "issue added");
        Ok(saved)
    }
}
