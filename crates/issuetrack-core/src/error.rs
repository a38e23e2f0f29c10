// SPDX-FileCopyrightText: 2026 Issuetrack Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for Issuetrack.

use thiserror::Error;

/// Message carried by every [`TrackerError::UserInput`] raised by the issue validator.
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input(s)";

/// The primary error type used across storage adapters, services, and the API layer.
#[derive(Debug, Error)]
pub enum TrackerError {
    /// Configuration errors (invalid TOML, missing required fields, type mismatches).
    #[error("configuration error: {0}")]
    Config(String),

    /// Storage backend errors (database connection, query failure, migration failure).
    #[error("storage error: {source}")]
    Storage {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// One or more validation rules rejected the caller's input.
    ///
    /// `violations` holds every failed rule, not just the first one.
    #[error("{message}")]
    UserInput {
        message: String,
        violations: Vec<String>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl TrackerError {
    /// Build a user-input error from a list of violation messages.
    pub fn user_input(violations: Vec<String>) -> Self {
        Self::UserInput {
            message: INVALID_INPUT_MESSAGE.to_string(),
            violations,
        }
    }

    /// Returns the violation list when this is a user-input error.
    pub fn violations(&self) -> Option<&[String]> {
        match self {
            Self::UserInput { violations, .. } => Some(violations),
            _ => None,
        }
    }
}
