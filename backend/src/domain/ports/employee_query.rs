//! Driving port for employee reads.
//!
//! Read failures of any kind surface as `NotFound`; only request validation
//! produces `InvalidRequest`.

use async_trait::async_trait;
use pagination::Page;

use crate::domain::{EmployeeResponse, Error, IdRequest, IdsRequest, PageRequest, RequestContext};

/// Driving port for employee lookups and paged search.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeQuery: Send + Sync {
    /// Fetch one employee by id.
    async fn find_by_id(
        &self,
        ctx: &RequestContext,
        request: IdRequest,
    ) -> Result<EmployeeResponse, Error>;

    /// Fetch every employee ordered by id.
    async fn find_all(&self, ctx: &RequestContext) -> Result<Vec<EmployeeResponse>, Error>;

    /// Fetch the employees named by `request`, ordered by id.
    async fn find_by_ids(
        &self,
        ctx: &RequestContext,
        request: IdsRequest,
    ) -> Result<Vec<EmployeeResponse>, Error>;

    /// Fetch one page of employees, optionally filtered by name.
    async fn find_with_offset(
        &self,
        ctx: &RequestContext,
        request: PageRequest,
    ) -> Result<Page<EmployeeResponse>, Error>;
}
