// SPDX-FileCopyrightText: 2026 Issuetrack Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Field-level validation for issue payloads.
//!
//! Every rule is evaluated on each call so that callers receive the complete
//! list of problems in one round trip.

use crate::error::TrackerError;
use crate::types::{IssueInputs, IssueStatus};

/// Minimum number of characters in an issue title.
pub const MIN_TITLE_LEN: usize = 3;

/// Validate an issue payload, returning one message per failed rule.
///
/// An empty vector means the payload is valid.
pub fn validate_issue(issue: &IssueInputs) -> Vec<String> {
    let mut violations = Vec::new();

    if issue.title.chars().count() < MIN_TITLE_LEN {
        violations.push(format!(
            "Field \"title\" must be at least {MIN_TITLE_LEN} characters long."
        ));
    }

    let owner_missing = issue.owner.as_deref().is_none_or(str::is_empty);
    if issue.status == IssueStatus::Assigned.as_ref() && owner_missing {
        violations.push(format!(
            "Field \"owner\" is required when status is \"{}\"",
            IssueStatus::Assigned
        ));
    }

    violations
}

/// Validate an issue payload and convert any violations into a user-input error.
pub fn ensure_valid(issue: &IssueInputs) -> Result<(), TrackerError> {
    let violations = validate_issue(issue);
    if violations.is_empty() {
        Ok(())
    } else {
        Err(TrackerError::user_input(violations))
    }
}
