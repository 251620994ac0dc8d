//! Role domain service.
//!
//! Same shape as the employee service without the name uniqueness check.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use super::transaction::run_in_transaction;
use crate::domain::ports::{RoleCommand, RoleQuery, RoleRepository, RoleRepositoryError};
use crate::domain::{
    CreateRoleRequest, Error, IdRequest, IdResponse, IdsRequest, NewRole, RequestContext,
    RoleResponse, validate_request,
};

fn map_write_error(error: RoleRepositoryError) -> Error {
    match error {
        RoleRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("role repository unavailable: {message}"))
        }
        RoleRepositoryError::Query { message } => {
            Error::internal(format!("role repository error: {message}"))
        }
    }
}

fn collapse_to_not_found(ctx: &RequestContext, context: String, error: RoleRepositoryError) -> Error {
    warn!(trace_id = %ctx.trace_id(), error = %error, "{context}");
    ctx.attach(Error::not_found(format!("{context}: {error}")))
}

/// Role service implementing [`RoleCommand`] and [`RoleQuery`].
#[derive(Clone)]
pub struct RoleService<R> {
    role_repo: Arc<R>,
}

impl<R> RoleService<R> {
    /// Create a new service over the role repository.
    pub fn new(role_repo: Arc<R>) -> Self {
        Self { role_repo }
    }
}

#[async_trait]
impl<R> RoleCommand for RoleService<R>
where
    R: RoleRepository,
{
    async fn save(
        &self,
        ctx: &RequestContext,
        request: CreateRoleRequest,
    ) -> Result<IdResponse, Error> {
        validate_request(&request).map_err(|err| ctx.attach(err))?;

        let tx = self
            .role_repo
            .begin()
            .await
            .map_err(|err| ctx.attach(map_write_error(err)))?;

        let role = NewRole::from(request);
        let id = run_in_transaction(ctx, tx, move |tx| {
            Box::pin(async move { tx.insert(&role).await.map_err(map_write_error) })
        })
        .await
        .map_err(|err| ctx.attach(err))?;

        info!(trace_id = %ctx.trace_id(), role_id = id, "role created");
        Ok(IdResponse { id })
    }

    async fn delete_by_id(&self, ctx: &RequestContext, request: IdRequest) -> Result<(), Error> {
        validate_request(&request).map_err(|err| ctx.attach(err))?;
        self.role_repo.delete_by_id(request.id).await.map_err(|err| {
            collapse_to_not_found(ctx, format!("error deleting role with id {}", request.id), err)
        })?;
        info!(trace_id = %ctx.trace_id(), role_id = request.id, "role deleted");
        Ok(())
    }

    async fn delete_by_ids(
        &self,
        ctx: &RequestContext,
        request: IdsRequest,
    ) -> Result<(), Error> {
        validate_request(&request).map_err(|err| ctx.attach(err))?;
        self.role_repo.delete_by_ids(&request.ids).await.map_err(|err| {
            collapse_to_not_found(
                ctx,
                format!("error deleting roles with ids {:?}", request.ids),
                err,
            )
        })?;
        info!(trace_id = %ctx.trace_id(), count = request.ids.len(), "roles deleted");
        Ok(())
    }
}

#[async_trait]
impl<R> RoleQuery for RoleService<R>
where
    R: RoleRepository,
{
    async fn find_by_id(
        &self,
        ctx: &RequestContext,
        request: IdRequest,
    ) -> Result<RoleResponse, Error> {
        validate_request(&request).map_err(|err| ctx.attach(err))?;
        let role = self
            .role_repo
            .find_by_id(request.id)
            .await
            .map_err(|err| {
                collapse_to_not_found(ctx, format!("error finding role with id {}", request.id), err)
            })?
            .ok_or_else(|| {
                ctx.attach(Error::not_found(format!("role with id {} not found", request.id)))
            })?;
        Ok(role.into())
    }

    async fn find_all(&self, ctx: &RequestContext) -> Result<Vec<RoleResponse>, Error> {
        let roles = self
            .role_repo
            .find_all()
            .await
            .map_err(|err| collapse_to_not_found(ctx, "error finding all roles".to_owned(), err))?;
        Ok(roles.into_iter().map(Into::into).collect())
    }

    async fn find_by_ids(
        &self,
        ctx: &RequestContext,
        request: IdsRequest,
    ) -> Result<Vec<RoleResponse>, Error> {
        validate_request(&request).map_err(|err| ctx.attach(err))?;
        let roles = self
            .role_repo
            .find_by_ids(&request.ids)
            .await
            .map_err(|err| collapse_to_not_found(ctx, "error finding roles by ids".to_owned(), err))?;
        Ok(roles.into_iter().map(Into::into).collect())
    }
}
