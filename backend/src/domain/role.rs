//! Role entity and its request/response shapes.
//!
//! Unlike employees, role names carry no uniqueness check on creation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Storage-assigned role identifier.
pub type RoleId = i64;

/// Persisted role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role {
    /// Storage-assigned identifier.
    pub id: RoleId,
    /// Role name.
    pub name: String,
    /// When the row was inserted.
    pub created_at: DateTime<Utc>,
    /// When the row was last written.
    pub updated_at: DateTime<Utc>,
}

/// Role values supplied on creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRole {
    /// Name to store.
    pub name: String,
}

/// Body of `POST /api/v1/roles`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Validate, ToSchema)]
pub struct CreateRoleRequest {
    /// Role name, 2 to 155 characters.
    #[validate(length(min = 2, max = 155))]
    #[schema(example = "engineering", min_length = 2, max_length = 155)]
    pub name: String,
}

impl From<CreateRoleRequest> for NewRole {
    fn from(value: CreateRoleRequest) -> Self {
        Self { name: value.name }
    }
}

/// Role as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RoleResponse {
    /// Role identifier.
    #[schema(example = 1)]
    pub id: RoleId,
    /// Role name.
    #[schema(example = "engineering")]
    pub name: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last write timestamp.
    pub updated_at: DateTime<Utc>,
}

impl From<Role> for RoleResponse {
    fn from(value: Role) -> Self {
        Self {
            id: value.id,
            name: value.name,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}
