// SPDX-FileCopyrightText: 2026 Issuetrack Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde attributes,
//! such as valid host names, non-empty paths and known log levels.

use crate::diagnostic::ConfigError;
use crate::model::IssuetrackConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &IssuetrackConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();
    let mut invalid = |message: String| errors.push(ConfigError::Validation { message });

    let host = config.server.host.trim();
    if host.is_empty() {
        invalid("server.host must not be empty".to_string());
    } else {
        let is_valid_ip = host.parse::<std::net::IpAddr>().is_ok();
        let is_valid_hostname = host
            .chars()
            .all(|c| c.is_alphanumeric() || c == '.' || c == '-' || c == ':');
        if !is_valid_ip && !is_valid_hostname {
            invalid(format!(
                "server.host `{host}` is not a valid IP address or hostname"
            ));
        }
    }

    if !config.server.graphql_path.starts_with('/') {
        invalid(format!(
            "server.graphql_path must start with `/`, got `{}`",
            config.server.graphql_path
        ));
    }

    if config.storage.database_path.trim().is_empty() {
        invalid("storage.database_path must not be empty".to_string());
    }

    let level = config.service.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        invalid(format!(
            "service.log_level must be one of {}, got `{}`",
            LOG_LEVELS.join(", "),
            config.service.log_level
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
