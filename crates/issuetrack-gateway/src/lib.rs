// SPDX-FileCopyrightText: 2026 Issuetrack Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! GraphQL API layer for Issuetrack.
//!
//! Exposes the issue service over a single GraphQL endpoint served by axum,
//! plus a GraphiQL playground and a health endpoint.

pub mod handlers;
pub mod schema;
pub mod server;

pub use schema::{build_schema, schema_sdl, IssuetrackSchema};
pub use server::{build_router, serve, start_server, GatewayState, ServerConfig};
