//! Driving port for role reads.

use async_trait::async_trait;

use crate::domain::{Error, IdRequest, IdsRequest, RequestContext, RoleResponse};

/// Driving port for role lookups.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoleQuery: Send + Sync {
    /// Fetch one role by id.
    async fn find_by_id(&self, ctx: &RequestContext, request: IdRequest)
    -> Result<RoleResponse, Error>;

    /// Fetch every role ordered by id.
    async fn find_all(&self, ctx: &RequestContext) -> Result<Vec<RoleResponse>, Error>;

    /// Fetch the roles named by `request`, ordered by id.
    async fn find_by_ids(
        &self,
        ctx: &RequestContext,
        request: IdsRequest,
    ) -> Result<Vec<RoleResponse>, Error>;
}
