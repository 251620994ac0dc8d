//! Employee entity and its request/response shapes.
//!
//! Employees are created only through the transactional save path, are never
//! updated, and are removed by id. Names are unique (exact, case-sensitive
//! match); the uniqueness check runs inside the creating transaction.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::RoleId;
use super::validation::min_non_whitespace;

/// Storage-assigned employee identifier.
pub type EmployeeId = i64;

/// Persisted employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    /// Storage-assigned identifier.
    pub id: EmployeeId,
    /// Unique display name.
    pub name: String,
    /// Role the employee holds.
    pub role_id: RoleId,
    /// When the row was inserted.
    pub created_at: DateTime<Utc>,
    /// When the row was last written.
    pub updated_at: DateTime<Utc>,
}

/// Employee values supplied on creation; storage assigns id and timestamps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    /// Name to store; must not already be taken.
    pub name: String,
    /// Role the employee holds.
    pub role_id: RoleId,
}

/// Body of `POST /api/v1/employees`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Validate, ToSchema)]
pub struct CreateEmployeeRequest {
    /// Employee name, 2 to 155 characters.
    #[validate(length(min = 2, max = 155))]
    #[schema(example = "Ada Lovelace", min_length = 2, max_length = 155)]
    pub name: String,
    /// Identifier of an existing role.
    #[validate(range(min = 1))]
    #[schema(example = 1, minimum = 1)]
    pub role_id: RoleId,
}

impl From<CreateEmployeeRequest> for NewEmployee {
    fn from(value: CreateEmployeeRequest) -> Self {
        Self {
            name: value.name,
            role_id: value.role_id,
        }
    }
}

/// Offset page query over employees.
///
/// `text_filter`, when present, must contain at least three non-whitespace
/// characters; it is matched case-insensitively as a substring of the name.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct PageRequest {
    /// Rows per page, 1 to 100.
    #[validate(range(min = 1, max = 100))]
    pub page_size: i64,
    /// Zero-based page index.
    #[validate(range(min = 0))]
    pub page_number: i64,
    /// Optional name substring.
    #[validate(custom(function = "min_non_whitespace"))]
    pub text_filter: Option<String>,
}

/// Employee as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EmployeeResponse {
    /// Employee identifier.
    #[schema(example = 42)]
    pub id: EmployeeId,
    /// Employee name.
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    /// Role the employee holds.
    #[schema(example = 1)]
    pub role_id: RoleId,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last write timestamp.
    pub updated_at: DateTime<Utc>,
}

impl From<Employee> for EmployeeResponse {
    fn from(value: Employee) -> Self {
        Self {
            id: value.id,
            name: value.name,
            role_id: value.role_id,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use rstest::rstest;

    use super::*;
    use crate::domain::validate_request;

    fn page(page_size: i64, page_number: i64, filter: Option<&str>) -> PageRequest {
        PageRequest {
            page_size,
            page_number,
            text_filter: filter.map(str::to_owned),
        }
    }

    #[rstest]
    #[case("A", 1, "field name failed rule length")]
    #[case(&"x".repeat(156), 1, "field name failed rule length")]
    #[case("Ada", 0, "field role_id failed rule range")]
    #[case("", -1, "field name failed rule length; field role_id failed rule range")]
    fn create_request_rules(#[case] name: &str, #[case] role_id: i64, #[case] message: &str) {
        let request = CreateEmployeeRequest {
            name: name.to_owned(),
            role_id,
        };
        let err = validate_request(&request).expect_err("invalid request");
        assert_eq!(err.message(), message);
    }

    #[rstest]
    #[case("Al")]
    #[case(&"x".repeat(155))]
    fn create_request_accepts_length_bounds(#[case] name: &str) {
        let request = CreateEmployeeRequest {
            name: name.to_owned(),
            role_id: 1,
        };
        assert!(validate_request(&request).is_ok());
    }

    #[rstest]
    #[case(page(0, 0, None), "field page_size failed rule range")]
    #[case(page(101, 0, None), "field page_size failed rule range")]
    #[case(page(50, -1, None), "field page_number failed rule range")]
    #[case(page(50, 1, Some("    ")), "field text_filter failed rule min_non_whitespace")]
    #[case(page(50, 1, Some("\n\n\n")), "field text_filter failed rule min_non_whitespace")]
    #[case(page(50, 1, Some("a  b ")), "field text_filter failed rule min_non_whitespace")]
    fn page_request_rules(#[case] request: PageRequest, #[case] message: &str) {
        let err = validate_request(&request).expect_err("invalid page");
        assert_eq!(err.message(), message);
    }

    #[rstest]
    #[case(page(1, 0, None))]
    #[case(page(100, 7, Some("abc")))]
    fn page_request_accepts_valid_values(#[case] request: PageRequest) {
        assert!(validate_request(&request).is_ok());
    }
}
