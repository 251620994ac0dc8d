//! Shared parsing helpers for inbound HTTP adapters.
//!
//! Path and query values arrive as text; these helpers turn them into
//! integers and report failures as `InvalidRequest` with field context.

use serde_json::json;

use crate::domain::Error;

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    InvalidInteger,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
            ErrorCode::InvalidInteger => "invalid_integer",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &str {
        self.0
    }
}

/// Builder for validation errors with field context.
struct ValidationError {
    field: String,
    message: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    fn with_code(self, code: ErrorCode) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "code": code.as_str(),
        }))
    }

    fn with_value(self, code: ErrorCode, value: impl Into<String>) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "value": value.into(),
            "code": code.as_str(),
        }))
    }

    fn with_index(self, code: ErrorCode, index: usize, value: impl Into<String>) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "index": index,
            "value": value.into(),
            "code": code.as_str(),
        }))
    }
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let field = field.as_str();
    ValidationError::new(field, format!("missing required field: {field}"))
        .with_code(ErrorCode::MissingField)
}

pub(crate) fn invalid_integer_error(field: FieldName, value: &str) -> Error {
    let field = field.as_str();
    ValidationError::new(field, format!("{field} must be an integer"))
        .with_value(ErrorCode::InvalidInteger, value)
}

pub(crate) fn invalid_integer_index_error(field: FieldName, index: usize, value: &str) -> Error {
    let field = field.as_str();
    ValidationError::new(field, format!("{field} must contain integers")).with_index(
        ErrorCode::InvalidInteger,
        index,
        value,
    )
}

/// Parse one decimal integer, e.g. the `{id}` path segment or `pageSize`.
pub(crate) fn parse_integer(value: &str, field: FieldName) -> Result<i64, Error> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| invalid_integer_error(field, value))
}

/// Parse a comma-separated id list such as `ids=1,2,3`.
///
/// A missing or blank parameter is a `missing_field` error; every element
/// must be an integer.
pub(crate) fn parse_id_list(value: Option<&str>, field: FieldName) -> Result<Vec<i64>, Error> {
    let raw = match value.map(str::trim) {
        Some(raw) if !raw.is_empty() => raw,
        _ => return Err(missing_field_error(field)),
    };
    raw.split(',')
        .enumerate()
        .map(|(index, item)| {
            item.trim()
                .parse::<i64>()
                .map_err(|_| invalid_integer_index_error(field, index, item))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::Value;

    use super::*;
    use crate::domain::ErrorCode as DomainCode;

    const IDS: FieldName = FieldName::new("ids");

    fn detail<'a>(err: &'a Error, key: &str) -> Option<&'a Value> {
        err.details().and_then(|details| details.get(key))
    }

    #[rstest]
    #[case("7", 7)]
    #[case(" 12 ", 12)]
    fn parse_integer_accepts_integers(#[case] raw: &str, #[case] expected: i64) {
        assert_eq!(parse_integer(raw, FieldName::new("id")).expect("valid id"), expected);
    }

    #[rstest]
    #[case("abc")]
    #[case("1.5")]
    #[case("")]
    fn parse_integer_rejects_non_numeric(#[case] raw: &str) {
        let err = parse_integer(raw, FieldName::new("id")).expect_err("invalid id");
        assert_eq!(err.code(), DomainCode::InvalidRequest);
        assert_eq!(detail(&err, "code").and_then(Value::as_str), Some("invalid_integer"));
        assert_eq!(detail(&err, "value").and_then(Value::as_str), Some(raw));
    }

    #[rstest]
    fn parse_id_list_splits_on_commas() {
        assert_eq!(
            parse_id_list(Some("1, 2,3"), IDS).expect("valid ids"),
            vec![1, 2, 3]
        );
    }

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    #[case(Some("  "))]
    fn parse_id_list_requires_a_value(#[case] raw: Option<&str>) {
        let err = parse_id_list(raw, IDS).expect_err("missing ids");
        assert_eq!(err.message(), "missing required field: ids");
        assert_eq!(
            detail(&err, "code").and_then(Value::as_str),
            Some("missing_field")
        );
    }

    #[rstest]
    fn parse_id_list_reports_offending_index() {
        let err = parse_id_list(Some("1,x,3"), IDS).expect_err("bad element");
        assert_eq!(detail(&err, "index").and_then(Value::as_u64), Some(1));
        assert_eq!(detail(&err, "value").and_then(Value::as_str), Some("x"));
    }
}
