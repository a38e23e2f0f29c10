// SPDX-FileCopyrightText: 2026 Issuetrack Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mapping from [`TrackerError`] to GraphQL errors.

use async_graphql::{ErrorExtensions, Value};
use issuetrack_core::TrackerError;

/// Error code for failures caused by the request's input.
pub const BAD_USER_INPUT: &str = "BAD_USER_INPUT";

/// Error code for every other failure.
pub const INTERNAL_SERVER_ERROR: &str = "INTERNAL_SERVER_ERROR";

/// Convert a domain error into a GraphQL error with a `code` extension.
///
/// Validation failures also carry their individual messages under
/// `exception.errors`.
pub fn to_graphql_error(err: TrackerError) -> async_graphql::Error {
    match err {
        TrackerError::UserInput {
            message,
            violations,
        } => {
            let exception = Value::from_json(serde_json::json!({ "errors": violations }))
                .unwrap_or(Value::Null);
            async_graphql::Error::new(message).extend_with(|_, e| {
                e.set("code", BAD_USER_INPUT);
                e.set("exception", exception);
            })
        }
        other => async_graphql::Error::new(other.to_string())
            .extend_with(|_, e| e.set("code", INTERNAL_SERVER_ERROR)),
    }
}

/// Extension trait to convert domain results at resolver boundaries.
pub trait ResultExt<T> {
    fn gql(self) -> async_graphql::Result<T>;
}

impl<T> ResultExt<T> for Result<T, TrackerError> {
    fn gql(self) -> async_graphql::Result<T> {
        self.map_err(to_graphql_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extension(err: &async_graphql::Error, key: &str) -> Option<Value> {
        let json = serde_json::to_value(err.extensions.as_ref()?).ok()?;
        Value::from_json(json.get(key)?.clone()).ok()
    }

    #[test]
    fn user_input_maps_to_bad_user_input_with_violations() {
        let err = to_graphql_error(TrackerError::user_input(vec![
            "first".to_string(),
            "second".to_string(),
        ]));
        assert_eq!(err.message, "Invalid input(s)");
        assert_eq!(
            extension(&err, "code"),
            Some(Value::String(BAD_USER_INPUT.to_string()))
        );
        let exception = serde_json::to_value(extension(&err, "exception").unwrap()).unwrap();
        assert_eq!(exception["errors"], serde_json::json!(["first", "second"]));
    }

    #[test]
    fn other_errors_keep_message_and_are_internal() {
        let err = to_graphql_error(TrackerError::Internal("disk on fire".into()));
        assert_eq!(err.message, "internal error: disk on fire");
        assert_eq!(
            extension(&err, "code"),
            Some(Value::String(INTERNAL_SERVER_ERROR.to_string()))
        );
        assert!(extension(&err, "exception").is_none());
    }
}
