// SPDX-FileCopyrightText: 2026 Issuetrack Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./issuetrack.toml` > `~/.config/issuetrack/issuetrack.toml`
//! > `/etc/issuetrack/issuetrack.toml`, the legacy `DB_URL` / `API_SERVER_PORT`
//! variables, and overrides via the `ISSUETRACK_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::IssuetrackConfig;

/// Config sections addressable through `ISSUETRACK_<SECTION>_<KEY>` variables.
const ENV_SECTIONS: &[&str] = &["service", "server", "storage"];

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/issuetrack/issuetrack.toml` (system-wide)
/// 3. `~/.config/issuetrack/issuetrack.toml` (user XDG config)
/// 4. `./issuetrack.toml` (local directory)
/// 5. `DB_URL` and `API_SERVER_PORT`
/// 6. `ISSUETRACK_*` environment variables
pub fn load_config() -> Result<IssuetrackConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<IssuetrackConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(IssuetrackConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<IssuetrackConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(IssuetrackConfig::default()))
        .merge(Toml::file(path))
        .merge(legacy_env_provider())
        .merge(env_provider())
        .extract()
}

/// Build the Figment used internally for config loading (exposed for diagnostic use).
///
/// Returns the Figment before extraction so callers can inspect metadata.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(IssuetrackConfig::default()))
        .merge(Toml::file("/etc/issuetrack/issuetrack.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("issuetrack/issuetrack.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("issuetrack.toml"))
        .merge(legacy_env_provider())
        .merge(env_provider())
}

/// Map a lowercased, prefix-stripped variable name onto a dotted config key.
///
/// Only the first underscore after a known section name becomes a dot, so
/// `storage_database_path` maps to `storage.database_path`, not
/// `storage.database.path`. Unknown sections pass through unchanged and are
/// later rejected by `deny_unknown_fields`.
pub fn map_env_key(key: &str) -> String {
    for section in ENV_SECTIONS {
        if let Some(rest) = key
            .strip_prefix(section)
            .and_then(|rest| rest.strip_prefix('_'))
        {
            return format!("{section}.{rest}");
        }
    }
    key.to_string()
}

/// `ISSUETRACK_*` variables, e.g. `ISSUETRACK_SERVER_PORT` -> `server.port`.
fn env_provider() -> Env {
    Env::prefixed("ISSUETRACK_").map(|key| map_env_key(key.as_str()).into())
}

/// Variables understood by earlier deployments of the API server.
fn legacy_env_provider() -> Env {
    Env::raw()
        .only(&["DB_URL", "API_SERVER_PORT"])
        .map(|key| match key.as_str() {
            "db_url" => "storage.database_path".into(),
            "api_server_port" => "server.port".into(),
            other => other.to_string().into(),
        })
}
