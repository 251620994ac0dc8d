//! Driving port for role mutations.

use async_trait::async_trait;

use crate::domain::{
    CreateRoleRequest, Error, IdRequest, IdResponse, IdsRequest, RequestContext,
};

/// Driving port for creating and deleting roles.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoleCommand: Send + Sync {
    /// Validate and create a role.
    async fn save(
        &self,
        ctx: &RequestContext,
        request: CreateRoleRequest,
    ) -> Result<IdResponse, Error>;

    /// Delete one role.
    async fn delete_by_id(&self, ctx: &RequestContext, request: IdRequest) -> Result<(), Error>;

    /// Delete several roles at once.
    async fn delete_by_ids(&self, ctx: &RequestContext, request: IdsRequest)
    -> Result<(), Error>;
}
