// SPDX-FileCopyrightText: 2026 Issuetrack Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! GraphQL object and input types.

use async_graphql::{InputObject, SimpleObject, ID};
use issuetrack_core::{Issue, IssueInputs};

use super::scalar::GraphQLDate;

/// An issue as returned to API clients.
#[derive(Debug, Clone, PartialEq, SimpleObject)]
#[graphql(name = "Issue")]
pub struct IssueObject {
    /// Storage-assigned identifier.
    #[graphql(name = "_id")]
    pub row_id: ID,
    pub id: i64,
    pub title: String,
    pub status: String,
    pub owner: Option<String>,
    pub effort: Option<i32>,
    pub created: GraphQLDate,
    pub due: Option<GraphQLDate>,
}

impl From<Issue> for IssueObject {
    fn from(issue: Issue) -> Self {
        Self {
            row_id: ID(issue.row_id.to_string()),
            id: issue.id,
            title: issue.title,
            status: issue.status,
            owner: issue.owner,
            effort: issue.effort,
            created: GraphQLDate(issue.created),
            due: issue.due.map(GraphQLDate),
        }
    }
}

/// Fields supplied by the client when creating an issue.
#[derive(Debug, Clone, InputObject)]
#[graphql(name = "IssueInputs")]
pub struct IssueInput {
    pub title: String,
    pub status: String,
    pub owner: Option<String>,
    pub effort: Option<i32>,
    pub due: Option<GraphQLDate>,
}

impl From<IssueInput> for IssueInputs {
    fn from(input: IssueInput) -> Self {
        Self {
            title: input.title,
            status: input.status,
            owner: input.owner,
            effort: input.effort,
            due: input.due.map(|d| d.0),
        }
    }
}
