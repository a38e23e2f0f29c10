// SPDX-FileCopyrightText: 2026 Issuetrack Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `GraphQLDate` custom scalar.

use async_graphql::{InputValueError, InputValueResult, Scalar, ScalarType, Value};
use chrono::{DateTime, Utc};
use issuetrack_core::date::{format_date, parse_date};

/// A UTC instant exchanged as an ISO-8601 string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphQLDate(pub DateTime<Utc>);

/// A Date() type in GraphQL as a scalar
#[Scalar(name = "GraphQLDate")]
impl ScalarType for GraphQLDate {
    fn parse(value: Value) -> InputValueResult<Self> {
        match &value {
            Value::String(text) => parse_date(text)
                .map(GraphQLDate)
                .ok_or_else(|| InputValueError::custom(format!("invalid date `{text}`"))),
            _ => Err(InputValueError::expected_type(value)),
        }
    }

    fn is_valid(value: &Value) -> bool {
        matches!(value, Value::String(text) if parse_date(text).is_some())
    }

    fn to_value(&self) -> Value {
        Value::String(format_date(&self.0))
    }
}

impl From<DateTime<Utc>> for GraphQLDate {
    fn from(value: DateTime<Utc>) -> Self {
        Self(value)
    }
}

impl From<GraphQLDate> for DateTime<Utc> {
    fn from(value: GraphQLDate) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn serializes_as_iso_string() {
        let date = GraphQLDate(Utc.with_ymd_and_hms(2019, 1, 15, 0, 0, 0).unwrap());
        assert_eq!(
            date.to_value(),
            Value::String("2019-01-15T00:00:00.000Z".to_string())
        );
    }

    #[test]
    fn parses_iso_strings() {
        let parsed =
            GraphQLDate::parse(Value::String("2019-01-15T10:20:30.400Z".to_string())).unwrap();
        assert_eq!(format_date(&parsed.0), "2019-01-15T10:20:30.400Z");

        let bare = GraphQLDate::parse(Value::String("2019-02-01".to_string())).unwrap();
        assert_eq!(bare.0, Utc.with_ymd_and_hms(2019, 2, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn rejects_unparsable_strings() {
        assert!(GraphQLDate::parse(Value::String("not a date".to_string())).is_err());
        assert!(GraphQLDate::parse(Value::String("2019-02-30".to_string())).is_err());
        assert!(!GraphQLDate::is_valid(&Value::String("tomorrow".to_string())));
    }

    #[test]
    fn rejects_non_string_values() {
        assert!(GraphQLDate::parse(Value::Number(1_547_510_400_000i64.into())).is_err());
        assert!(GraphQLDate::parse(Value::Boolean(true)).is_err());
        assert!(!GraphQLDate::is_valid(&Value::Null));
    }
}
