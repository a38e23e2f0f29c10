// SPDX-FileCopyrightText: 2026 Issuetrack Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! GraphQL schema for the issue tracker.
//!
//! - [`QueryRoot`]: `about`, `issueList`, `issue`
//! - [`MutationRoot`]: `setAboutMessage`, `issueAdd`
//!
//! The schema is injected with an [`IssueService`] and the shared
//! [`AboutMessage`]; resolvers hold no state of their own.

pub mod errors;
pub mod mutation;
pub mod query;
pub mod scalar;
pub mod types;

use std::sync::Arc;

use async_graphql::{EmptySubscription, Schema};
use issuetrack_core::{AboutMessage, IssueService};

pub use mutation::MutationRoot;
pub use query::QueryRoot;
pub use scalar::GraphQLDate;
pub use types::{IssueInput, IssueObject};

/// The full GraphQL schema type.
pub type IssuetrackSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the executable schema around the given service and about message.
pub fn build_schema(service: IssueService, about: Arc<AboutMessage>) -> IssuetrackSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(service)
        .data(about)
        .finish()
}

/// The schema in SDL form. Needs no storage.
pub fn schema_sdl() -> String {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .finish()
        .sdl()
}
