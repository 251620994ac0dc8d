//! Employee domain service.
//!
//! Implements the employee driving ports on top of an
//! [`EmployeeRepository`]. Creation runs the name check and the insert in one
//! transaction; reads and deletes report any storage failure as `NotFound`.

use std::sync::Arc;

use async_trait::async_trait;
use pagination::{Page, PageParams};
use tracing::{info, warn};

use super::transaction::run_in_transaction;
use crate::domain::ports::{
    EmployeeCommand, EmployeeQuery, EmployeeRepository, EmployeeRepositoryError,
};
use crate::domain::{
    CreateEmployeeRequest, EmployeeResponse, Error, IdRequest, IdResponse, IdsRequest,
    NewEmployee, PageRequest, RequestContext, validate_request,
};

fn map_write_error(error: EmployeeRepositoryError) -> Error {
    match error {
        EmployeeRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("employee repository unavailable: {message}"))
        }
        EmployeeRepositoryError::Query { message } => {
            Error::internal(format!("employee repository error: {message}"))
        }
        EmployeeRepositoryError::Duplicate { name } => name_taken(&name),
    }
}

fn name_taken(name: &str) -> Error {
    Error::already_exists(format!("employee with name {name} already exists"))
}

fn collapse_to_not_found(
    ctx: &RequestContext,
    context: String,
    error: EmployeeRepositoryError,
) -> Error {
    warn!(trace_id = %ctx.trace_id(), error = %error, "{context}");
    ctx.attach(Error::not_found(format!("{context}: {error}")))
}

fn page_params(request: &PageRequest) -> Result<PageParams, Error> {
    let page_size = u32::try_from(request.page_size)
        .map_err(|_| Error::invalid_request("page_size is out of range"))?;
    let page_number = u64::try_from(request.page_number)
        .map_err(|_| Error::invalid_request("page_number is out of range"))?;
    PageParams::new(page_size, page_number).map_err(|err| Error::invalid_request(err.to_string()))
}

/// Employee service implementing [`EmployeeCommand`] and [`EmployeeQuery`].
#[derive(Clone)]
pub struct EmployeeService<R> {
    employee_repo: Arc<R>,
}

impl<R> EmployeeService<R> {
    /// Create a new service over the employee repository.
    pub fn new(employee_repo: Arc<R>) -> Self {
        Self { employee_repo }
    }
}

#[async_trait]
impl<R> EmployeeCommand for EmployeeService<R>
where
    R: EmployeeRepository,
{
    async fn save(
        &self,
        ctx: &RequestContext,
        request: CreateEmployeeRequest,
    ) -> Result<IdResponse, Error> {
        validate_request(&request).map_err(|err| ctx.attach(err))?;

        let tx = self
            .employee_repo
            .begin()
            .await
            .map_err(|err| ctx.attach(map_write_error(err)))?;

        let employee = NewEmployee::from(request);
        let id = run_in_transaction(ctx, tx, move |tx| {
            Box::pin(async move {
                let taken = tx
                    .exists_by_name(&employee.name)
                    .await
                    .map_err(map_write_error)?;
                if taken {
                    return Err(name_taken(&employee.name));
                }
                tx.insert(&employee).await.map_err(map_write_error)
            })
        })
        .await
        .map_err(|err| ctx.attach(err))?;

        info!(trace_id = %ctx.trace_id(), employee_id = id, "employee created");
        Ok(IdResponse { id })
    }

    async fn delete_by_id(&self, ctx: &RequestContext, request: IdRequest) -> Result<(), Error> {
        validate_request(&request).map_err(|err| ctx.attach(err))?;
        self.employee_repo
            .delete_by_id(request.id)
            .await
            .map_err(|err| {
                collapse_to_not_found(
                    ctx,
                    format!("error deleting employee with id {}", request.id),
                    err,
                )
            })?;
        info!(trace_id = %ctx.trace_id(), employee_id = request.id, "employee deleted");
        Ok(())
    }

    async fn delete_by_ids(
        &self,
        ctx: &RequestContext,
        request: IdsRequest,
    ) -> Result<(), Error> {
        validate_request(&request).map_err(|err| ctx.attach(err))?;
        self.employee_repo
            .delete_by_ids(&request.ids)
            .await
            .map_err(|err| {
                collapse_to_not_found(
                    ctx,
                    format!("error deleting employees with ids {:?}", request.ids),
                    err,
                )
            })?;
        info!(trace_id = %ctx.trace_id(), count = request.ids.len(), "employees deleted");
        Ok(())
    }
}

#[async_trait]
impl<R> EmployeeQuery for EmployeeService<R>
where
    R: EmployeeRepository,
{
    async fn find_by_id(
        &self,
        ctx: &RequestContext,
        request: IdRequest,
    ) -> Result<EmployeeResponse, Error> {
        validate_request(&request).map_err(|err| ctx.attach(err))?;
        let employee = self
            .employee_repo
            .find_by_id(request.id)
            .await
            .map_err(|err| {
                collapse_to_not_found(
                    ctx,
                    format!("error finding employee with id {}", request.id),
                    err,
                )
            })?
            .ok_or_else(|| {
                ctx.attach(Error::not_found(format!(
                    "employee with id {} not found",
                    request.id
                )))
            })?;
        Ok(employee.into())
    }

    async fn find_all(&self, ctx: &RequestContext) -> Result<Vec<EmployeeResponse>, Error> {
        let employees = self.employee_repo.find_all().await.map_err(|err| {
            collapse_to_not_found(ctx, "error finding all employees".to_owned(), err)
        })?;
        Ok(employees.into_iter().map(Into::into).collect())
    }

    async fn find_by_ids(
        &self,
        ctx: &RequestContext,
        request: IdsRequest,
    ) -> Result<Vec<EmployeeResponse>, Error> {
        validate_request(&request).map_err(|err| ctx.attach(err))?;
        let employees = self
            .employee_repo
            .find_by_ids(&request.ids)
            .await
            .map_err(|err| {
                collapse_to_not_found(ctx, "error finding employees by ids".to_owned(), err)
            })?;
        Ok(employees.into_iter().map(Into::into).collect())
    }

    async fn find_with_offset(
        &self,
        ctx: &RequestContext,
        request: PageRequest,
    ) -> Result<Page<EmployeeResponse>, Error> {
        validate_request(&request).map_err(|err| ctx.attach(err))?;
        let params = page_params(&request).map_err(|err| ctx.attach(err))?;
        let filter = request
            .text_filter
            .as_deref()
            .map(|text| text.trim().to_owned());

        let rows = self
            .employee_repo
            .find_with_offset(params.offset(), params.limit(), filter.clone())
            .await
            .map_err(|err| {
                collapse_to_not_found(ctx, "error finding employees page".to_owned(), err)
            })?;
        let total = self.employee_repo.count(filter).await.map_err(|err| {
            collapse_to_not_found(ctx, "error counting employees".to_owned(), err)
        })?;

        let total = u64::try_from(total).unwrap_or_default();
        Ok(Page::new(params, rows, total).map(EmployeeResponse::from))
    }
}

#[cfg(test)]
#[path = "employee_service_tests.rs"]
mod tests;
