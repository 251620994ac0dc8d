//! Employee API handlers.
//!
//! ```text
//! POST   /api/v1/employees                 {"name":"Ada Lovelace","role_id":1}
//! GET    /api/v1/employees
//! GET    /api/v1/employees/page?pageSize=10&pageNumber=0&textFilter=ada
//! GET    /api/v1/employees/find?ids=1,2,3
//! GET    /api/v1/employees/{id}
//! DELETE /api/v1/employees/delete?ids=1,2,3
//! DELETE /api/v1/employees/{id}
//! ```
//!
//! Creates and deletes require `IDM_ADMIN`; reads accept `IDM_ADMIN` or
//! `IDM_USER`.

use actix_web::{HttpResponse, delete, get, post, web};
use pagination::Page;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{
    CreateEmployeeRequest, EmployeeResponse, Error, IdRequest, IdResponse, IdsRequest, PageRequest,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::auth::{Authenticated, READERS, WRITERS};
use crate::inbound::http::envelope::{ApiErrorResponse, ApiResponse, ok};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_id_list, parse_integer};

/// Page size used when `pageSize` is omitted.
pub const DEFAULT_PAGE_SIZE: i64 = 100;

const ID: FieldName = FieldName::new("id");
const IDS: FieldName = FieldName::new("ids");
const PAGE_SIZE: FieldName = FieldName::new("pageSize");
const PAGE_NUMBER: FieldName = FieldName::new("pageNumber");

/// Query string of `GET /api/v1/employees/page`.
///
/// Values are kept as text so malformed numbers surface as
/// `invalid_request` envelopes rather than framework errors.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// Rows per page, 1 to 100. Defaults to 100.
    #[param(value_type = Option<i64>, example = 10)]
    pub page_size: Option<String>,
    /// Zero-based page index. Defaults to 0.
    #[param(value_type = Option<i64>, example = 0)]
    pub page_number: Option<String>,
    /// Case-insensitive name substring; at least three non-whitespace
    /// characters when present.
    pub text_filter: Option<String>,
}

/// Query string carrying a comma-separated id list.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct IdsQuery {
    /// Comma-separated ids, e.g. `1,2,3`.
    #[param(example = "1,2,3")]
    pub ids: Option<String>,
}

/// Page of employees as serialised to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EmployeePage {
    /// Employees on this page, in id order.
    pub result: Vec<EmployeeResponse>,
    /// Echo of the requested page size.
    pub page_size: u32,
    /// Echo of the requested page number.
    pub page_number: u64,
    /// Employees matching the filter across all pages.
    pub total: u64,
}

impl From<Page<EmployeeResponse>> for EmployeePage {
    fn from(page: Page<EmployeeResponse>) -> Self {
        Self {
            result: page.result,
            page_size: page.page_size,
            page_number: page.page_number,
            total: page.total,
        }
    }
}

pub(crate) fn page_request(query: PageQuery) -> Result<PageRequest, Error> {
    let page_size = query
        .page_size
        .as_deref()
        .map(|raw| parse_integer(raw, PAGE_SIZE))
        .transpose()?
        .unwrap_or(DEFAULT_PAGE_SIZE);
    let page_number = query
        .page_number
        .as_deref()
        .map(|raw| parse_integer(raw, PAGE_NUMBER))
        .transpose()?
        .unwrap_or(0);
    Ok(PageRequest {
        page_size,
        page_number,
        text_filter: query.text_filter.filter(|filter| !filter.is_empty()),
    })
}

/// Register employee routes; literal segments precede `{id}`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(create_employee)
        .service(list_employees)
        .service(page_employees)
        .service(find_employees)
        .service(delete_employees)
        .service(get_employee)
        .service(delete_employee);
}

/// Create an employee.
#[utoipa::path(
    post,
    path = "/api/v1/employees",
    request_body = CreateEmployeeRequest,
    responses(
        (status = 200, description = "Created", body = ApiResponse<IdResponse>),
        (status = 400, description = "Invalid request or duplicate name", body = ApiErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ApiErrorResponse),
        (status = 403, description = "Caller is not an administrator", body = ApiErrorResponse),
        (status = 503, description = "Storage unavailable", body = ApiErrorResponse),
        (status = 500, description = "Internal server error", body = ApiErrorResponse)
    ),
    tags = ["employees"],
    operation_id = "createEmployee",
    security(("bearer" = []))
)]
#[post("/employees")]
pub async fn create_employee(
    state: web::Data<HttpState>,
    auth: Authenticated,
    payload: web::Json<CreateEmployeeRequest>,
) -> ApiResult<HttpResponse> {
    let ctx = auth.require(WRITERS)?;
    let created = state.employees.save(&ctx, payload.into_inner()).await?;
    Ok(ok(created))
}

/// List every employee.
#[utoipa::path(
    get,
    path = "/api/v1/employees",
    responses(
        (status = 200, description = "Employees, or a not_found envelope", body = ApiResponse<Vec<EmployeeResponse>>),
        (status = 401, description = "Missing or invalid token", body = ApiErrorResponse),
        (status = 403, description = "Forbidden", body = ApiErrorResponse)
    ),
    tags = ["employees"],
    operation_id = "listEmployees",
    security(("bearer" = []))
)]
#[get("/employees")]
pub async fn list_employees(
    state: web::Data<HttpState>,
    auth: Authenticated,
) -> ApiResult<HttpResponse> {
    let ctx = auth.require(READERS)?;
    let employees = state.employees_query.find_all(&ctx).await?;
    Ok(ok(employees))
}

/// Page through employees, optionally filtered by name.
#[utoipa::path(
    get,
    path = "/api/v1/employees/page",
    params(PageQuery),
    responses(
        (status = 200, description = "One page of employees", body = ApiResponse<EmployeePage>),
        (status = 400, description = "Invalid page parameters", body = ApiErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ApiErrorResponse),
        (status = 403, description = "Forbidden", body = ApiErrorResponse)
    ),
    tags = ["employees"],
    operation_id = "pageEmployees",
    security(("bearer" = []))
)]
#[get("/employees/page")]
pub async fn page_employees(
    state: web::Data<HttpState>,
    auth: Authenticated,
    query: web::Query<PageQuery>,
) -> ApiResult<HttpResponse> {
    let ctx = auth.require(READERS)?;
    let request = page_request(query.into_inner()).map_err(|err| ctx.attach(err))?;
    let page = state.employees_query.find_with_offset(&ctx, request).await?;
    Ok(ok(EmployeePage::from(page)))
}

/// Fetch the employees named by `ids`.
#[utoipa::path(
    get,
    path = "/api/v1/employees/find",
    params(IdsQuery),
    responses(
        (status = 200, description = "Matching employees", body = ApiResponse<Vec<EmployeeResponse>>),
        (status = 400, description = "Missing or malformed ids", body = ApiErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ApiErrorResponse),
        (status = 403, description = "Forbidden", body = ApiErrorResponse)
    ),
    tags = ["employees"],
    operation_id = "findEmployees",
    security(("bearer" = []))
)]
#[get("/employees/find")]
pub async fn find_employees(
    state: web::Data<HttpState>,
    auth: Authenticated,
    query: web::Query<IdsQuery>,
) -> ApiResult<HttpResponse> {
    let ctx = auth.require(READERS)?;
    let ids = parse_id_list(query.ids.as_deref(), IDS).map_err(|err| ctx.attach(err))?;
    let employees = state
        .employees_query
        .find_by_ids(&ctx, IdsRequest::new(ids))
        .await?;
    Ok(ok(employees))
}

/// Fetch one employee.
#[utoipa::path(
    get,
    path = "/api/v1/employees/{id}",
    params(("id" = i64, Path, description = "Employee id")),
    responses(
        (status = 200, description = "Employee, or a not_found envelope", body = ApiResponse<EmployeeResponse>),
        (status = 400, description = "Malformed id", body = ApiErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ApiErrorResponse),
        (status = 403, description = "Forbidden", body = ApiErrorResponse)
    ),
    tags = ["employees"],
    operation_id = "getEmployee",
    security(("bearer" = []))
)]
#[get("/employees/{id}")]
pub async fn get_employee(
    state: web::Data<HttpState>,
    auth: Authenticated,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let ctx = auth.require(READERS)?;
    let id = parse_integer(&path, ID).map_err(|err| ctx.attach(err))?;
    let employee = state
        .employees_query
        .find_by_id(&ctx, IdRequest::new(id))
        .await?;
    Ok(ok(employee))
}

/// Delete the employees named by `ids`.
#[utoipa::path(
    delete,
    path = "/api/v1/employees/delete",
    params(IdsQuery),
    responses(
        (status = 200, description = "Requested ids", body = ApiResponse<Vec<i64>>),
        (status = 400, description = "Missing or malformed ids", body = ApiErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ApiErrorResponse),
        (status = 403, description = "Caller is not an administrator", body = ApiErrorResponse)
    ),
    tags = ["employees"],
    operation_id = "deleteEmployees",
    security(("bearer" = []))
)]
#[delete("/employees/delete")]
pub async fn delete_employees(
    state: web::Data<HttpState>,
    auth: Authenticated,
    query: web::Query<IdsQuery>,
) -> ApiResult<HttpResponse> {
    let ctx = auth.require(WRITERS)?;
    let ids = parse_id_list(query.ids.as_deref(), IDS).map_err(|err| ctx.attach(err))?;
    state
        .employees
        .delete_by_ids(&ctx, IdsRequest::new(ids.clone()))
        .await?;
    Ok(ok(ids))
}

/// Delete one employee.
#[utoipa::path(
    delete,
    path = "/api/v1/employees/{id}",
    params(("id" = i64, Path, description = "Employee id")),
    responses(
        (status = 200, description = "Requested id", body = ApiResponse<IdResponse>),
        (status = 400, description = "Malformed id", body = ApiErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ApiErrorResponse),
        (status = 403, description = "Caller is not an administrator", body = ApiErrorResponse)
    ),
    tags = ["employees"],
    operation_id = "deleteEmployee",
    security(("bearer" = []))
)]
#[delete("/employees/{id}")]
pub async fn delete_employee(
    state: web::Data<HttpState>,
    auth: Authenticated,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let ctx = auth.require(WRITERS)?;
    let id = parse_integer(&path, ID).map_err(|err| ctx.attach(err))?;
    state.employees.delete_by_id(&ctx, IdRequest::new(id)).await?;
    Ok(ok(IdResponse { id }))
}

#[cfg(test)]
#[path = "employees_tests.rs"]
mod tests;
