// SPDX-FileCopyrightText: 2026 Issuetrack Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for Issuetrack.
//!
//! Holds the domain types, the issue validator, the ISO-8601 date codec,
//! the process-wide about message, the storage adapter traits and the issue
//! service that ties them together. Storage backends and the GraphQL layer
//! depend on this crate; it depends on neither.

pub mod about;
pub mod date;
pub mod error;
pub mod service;
pub mod traits;
pub mod types;
pub mod validation;

// Re-export key items at crate root for ergonomic imports.
pub use about::AboutMessage;
pub use error::TrackerError;
pub use service::IssueService;
pub use traits::{PluginAdapter, StorageAdapter};
pub use types::{HealthStatus, Issue, IssueInputs, IssueStatus, NewIssue};
