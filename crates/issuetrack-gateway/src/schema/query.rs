// SPDX-FileCopyrightText: 2026 Issuetrack Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Read-only GraphQL operations.

use std::sync::Arc;

use async_graphql::{Context, Object, Result};
use issuetrack_core::{AboutMessage, IssueService};

use super::errors::ResultExt;
use super::types::IssueObject;

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// The current about message.
    async fn about(&self, ctx: &Context<'_>) -> Result<Option<String>> {
        Ok(Some(ctx.data::<Arc<AboutMessage>>()?.get()))
    }

    /// All issues, optionally only those whose status matches exactly.
    async fn issue_list(
        &self,
        ctx: &Context<'_>,
        status: Option<String>,
    ) -> Result<Option<Vec<Option<IssueObject>>>> {
        let service = ctx.data::<IssueService>()?;
        let issues = service.list_issues(status.as_deref()).await.gql()?;
        Ok(Some(
            issues
                .into_iter()
                .map(|issue| Some(IssueObject::from(issue)))
                .collect(),
        ))
    }

    /// A single issue by its public id, or null.
    async fn issue(&self, ctx: &Context<'_>, id: i64) -> Result<Option<IssueObject>> {
        let service = ctx.data::<IssueService>()?;
        let issue = service.get_issue(id).await.gql()?;
        Ok(issue.map(IssueObject::from))
    }
}
