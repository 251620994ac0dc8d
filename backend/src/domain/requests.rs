//! Identifier-shaped requests and responses shared by employees and roles.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Single-identifier request; the id must be positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Validate)]
pub struct IdRequest {
    /// Target identifier.
    #[validate(range(min = 1))]
    pub id: i64,
}

impl IdRequest {
    /// Wrap `id` for validation.
    pub fn new(id: i64) -> Self {
        Self { id }
    }
}

/// Multi-identifier request; at least one id is required.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct IdsRequest {
    /// Target identifiers, in request order.
    #[validate(length(min = 1))]
    pub ids: Vec<i64>,
}

impl IdsRequest {
    /// Wrap `ids` for validation.
    pub fn new(ids: Vec<i64>) -> Self {
        Self { ids }
    }
}

/// Identifier of the entity a write created or removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct IdResponse {
    /// Affected identifier.
    #[schema(example = 42)]
    pub id: i64,
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::domain::validate_request;

    #[rstest]
    #[case(0)]
    #[case(-5)]
    fn id_request_rejects_non_positive(#[case] id: i64) {
        let err = validate_request(&IdRequest::new(id)).expect_err("invalid id");
        assert_eq!(err.message(), "field id failed rule range");
    }

    #[rstest]
    fn ids_request_requires_one_element() {
        let err = validate_request(&IdsRequest::new(Vec::new())).expect_err("empty ids");
        assert_eq!(err.message(), "field ids failed rule length");
        assert!(validate_request(&IdsRequest::new(vec![0])).is_ok());
    }
}
