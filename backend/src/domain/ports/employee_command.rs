//! Driving port for employee mutations.

use async_trait::async_trait;

use crate::domain::{
    CreateEmployeeRequest, Error, IdRequest, IdResponse, IdsRequest, RequestContext,
};

/// Driving port for creating and deleting employees.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeCommand: Send + Sync {
    /// Validate and create an employee whose name is not yet taken.
    ///
    /// Fails with `InvalidRequest` on rule violations, `AlreadyExists` when
    /// the name is in use, and `ServiceUnavailable`/`InternalError` when the
    /// transaction cannot be opened, written, or committed.
    async fn save(
        &self,
        ctx: &RequestContext,
        request: CreateEmployeeRequest,
    ) -> Result<IdResponse, Error>;

    /// Delete one employee.
    async fn delete_by_id(&self, ctx: &RequestContext, request: IdRequest) -> Result<(), Error>;

    /// Delete several employees at once.
    async fn delete_by_ids(&self, ctx: &RequestContext, request: IdsRequest)
    -> Result<(), Error>;
}
