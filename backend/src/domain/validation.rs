//! Declarative request validation.
//!
//! Request DTOs derive [`validator::Validate`]; [`validate_request`] runs the
//! derived rules and folds every violation into a single
//! [`ErrorCode::InvalidRequest`](super::ErrorCode::InvalidRequest) error.

use serde::Serialize;
use serde_json::json;
use validator::{Validate, ValidationError, ValidationErrors, ValidationErrorsKind};

use super::Error;

/// Minimum number of non-whitespace characters accepted by
/// [`min_non_whitespace`].
pub const MIN_NON_WHITESPACE: usize = 3;

/// One failed rule on one field.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Violation {
    /// Field path, `outer.inner` or `list[2]` for nested values.
    pub field: String,
    /// Rule code, e.g. `length`, `range`, `min_non_whitespace`.
    pub rule: String,
}

/// Run the declarative rules on `request`.
///
/// # Errors
///
/// Returns an invalid-request error listing every violation, sorted by field
/// then rule, as `field <name> failed rule <rule>` joined with `"; "`. The
/// same violations are attached as `details.violations`.
///
/// # Examples
/// ```
/// use idm::domain::{validate_request, CreateRoleRequest, ErrorCode};
///
/// let err = validate_request(&CreateRoleRequest { name: "x".into() })
///     .expect_err("name too short");
/// assert_eq!(err.code(), ErrorCode::InvalidRequest);
/// assert_eq!(err.message(), "field name failed rule length");
/// ```
pub fn validate_request<T: Validate>(request: &T) -> Result<(), Error> {
    request
        .validate()
        .map_err(|errors| violations_error(collect_violations(&errors)))
}

/// Flatten validator output into sorted, de-duplicated violations.
pub fn collect_violations(errors: &ValidationErrors) -> Vec<Violation> {
    let mut violations = Vec::new();
    collect_into(errors, "", &mut violations);
    violations.sort();
    violations.dedup();
    violations
}

fn collect_into(errors: &ValidationErrors, prefix: &str, out: &mut Vec<Violation>) {
    for (field, kind) in errors.errors() {
        let path = format!("{prefix}{field}");
        match kind {
            ValidationErrorsKind::Field(failures) => {
                out.extend(failures.iter().map(|failure| Violation {
                    field: path.clone(),
                    rule: failure.code.to_string(),
                }));
            }
            ValidationErrorsKind::Struct(nested) => {
                collect_into(nested, &format!("{path}."), out);
            }
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect_into(nested, &format!("{path}[{index}]."), out);
                }
            }
        }
    }
}

fn violations_error(violations: Vec<Violation>) -> Error {
    let message = violations
        .iter()
        .map(|v| format!("field {} failed rule {}", v.field, v.rule))
        .collect::<Vec<_>>()
        .join("; ");
    Error::invalid_request(message).with_details(json!({ "violations": violations }))
}

/// Custom rule: at least [`MIN_NON_WHITESPACE`] non-whitespace characters.
///
/// # Errors
///
/// Returns a `min_non_whitespace` validation error when the count is short.
pub fn min_non_whitespace(value: &str) -> Result<(), ValidationError> {
    let count = value.chars().filter(|c| !c.is_whitespace()).count();
    if count >= MIN_NON_WHITESPACE {
        Ok(())
    } else {
        Err(ValidationError::new("min_non_whitespace"))
    }
}
