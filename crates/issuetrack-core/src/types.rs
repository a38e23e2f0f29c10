// SPDX-FileCopyrightText: 2026 Issuetrack Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared by the storage adapters, the issue service and the API layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Well-known issue statuses.
///
/// Issues store their status as free text and filters compare it verbatim,
/// so these variants name the conventional values rather than restricting them.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, AsRefStr, Serialize, Deserialize,
)]
pub enum IssueStatus {
    New,
    Assigned,
    Fixed,
    Closed,
}

/// Caller-supplied fields for a new issue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueInputs {
    pub title: String,
    pub status: String,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub effort: Option<i32>,
    #[serde(default)]
    pub due: Option<DateTime<Utc>>,
}

/// A fully stamped issue, ready to be written to storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewIssue {
    pub id: i64,
    pub title: String,
    pub status: String,
    pub owner: Option<String>,
    pub effort: Option<i32>,
    pub created: DateTime<Utc>,
    pub due: Option<DateTime<Utc>>,
}

impl NewIssue {
    /// Attach the allocated `id` and the server-side `created` timestamp to caller input.
    pub fn from_inputs(inputs: IssueInputs, id: i64, created: DateTime<Utc>) -> Self {
        Self {
            id,
            title: inputs.title,
            status: inputs.status,
            owner: inputs.owner,
            effort: inputs.effort,
            created,
            due: inputs.due,
        }
    }
}

/// An issue as persisted by the storage backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    /// Storage-assigned internal identifier.
    pub row_id: i64,
    /// Sequence-allocated public identifier.
    pub id: i64,
    pub title: String,
    pub status: String,
    pub owner: Option<String>,
    pub effort: Option<i32>,
    pub created: DateTime<Utc>,
    pub due: Option<DateTime<Utc>>,
}

/// Health status reported by adapter health checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    /// Adapter is fully operational.
    Healthy,
    /// Adapter is operational but experiencing issues.
    Degraded(String),
    /// Adapter is not operational.
    Unhealthy(String),
}
