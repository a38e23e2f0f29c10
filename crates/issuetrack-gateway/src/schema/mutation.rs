// SPDX-FileCopyrightText: 2026 Issuetrack Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! State-changing GraphQL operations.

use std::sync::Arc;

use async_graphql::{Context, Object, Result};
use issuetrack_core::{AboutMessage, IssueService};
use tracing::info;

use super::errors::ResultExt;
use super::types::{IssueInput, IssueObject};

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Replace the about message and echo the new value.
    async fn set_about_message(
        &self,
        ctx: &Context<'_>,
        message: String,
    ) -> Result<Option<String>> {
        let about = ctx.data::<Arc<AboutMessage>>()?;
        Ok(Some(about.set(message)))
    }

    /// Validate and store a new issue, returning it as persisted.
    async fn issue_add(
        &self,
        ctx: &Context<'_>,
        issue: IssueInput,
    ) -> Result<Option<IssueObject>> {
        let service = ctx.data::<IssueService>()?;
        let saved = service.add_issue(issue.into()).await.gql()?;
        info!(id = saved.id, "issue created");
        Ok(Some(saved.into()))
    }
}
