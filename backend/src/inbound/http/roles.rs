//! Role API handlers.
//!
//! ```text
//! POST   /api/v1/roles               {"name":"engineering"}
//! GET    /api/v1/roles
//! GET    /api/v1/roles/find?ids=1,2
//! GET    /api/v1/roles/{id}
//! DELETE /api/v1/roles/delete?ids=1,2
//! DELETE /api/v1/roles/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, web};

use crate::domain::{CreateRoleRequest, IdRequest, IdResponse, IdsRequest, RoleResponse};
use crate::inbound::http::ApiResult;
use crate::inbound::http::auth::{Authenticated, READERS, WRITERS};
use crate::inbound::http::employees::IdsQuery;
use crate::inbound::http::envelope::{ApiErrorResponse, ApiResponse, ok};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_id_list, parse_integer};

const ID: FieldName = FieldName::new("id");
const IDS: FieldName = FieldName::new("ids");

/// Register role routes; literal segments precede `{id}`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(create_role)
        .service(list_roles)
        .service(find_roles)
        .service(delete_roles)
        .service(get_role)
        .service(delete_role);
}

/// Create a role.
#[utoipa::path(
    post,
    path = "/api/v1/roles",
    request_body = CreateRoleRequest,
    responses(
        (status = 200, description = "Created", body = ApiResponse<IdResponse>),
        (status = 400, description = "Invalid request", body = ApiErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ApiErrorResponse),
        (status = 403, description = "Caller is not an administrator", body = ApiErrorResponse),
        (status = 503, description = "Storage unavailable", body = ApiErrorResponse),
        (status = 500, description = "Internal server error", body = ApiErrorResponse)
    ),
    tags = ["roles"],
    operation_id = "createRole",
    security(("bearer" = []))
)]
#[post("/roles")]
pub async fn create_role(
    state: web::Data<HttpState>,
    auth: Authenticated,
    payload: web::Json<CreateRoleRequest>,
) -> ApiResult<HttpResponse> {
    let ctx = auth.require(WRITERS)?;
    let created = state.roles.save(&ctx, payload.into_inner()).await?;
    Ok(ok(created))
}

/// List every role.
#[utoipa::path(
    get,
    path = "/api/v1/roles",
    responses(
        (status = 200, description = "Roles, or a not_found envelope", body = ApiResponse<Vec<RoleResponse>>),
        (status = 401, description = "Missing or invalid token", body = ApiErrorResponse),
        (status = 403, description = "Forbidden", body = ApiErrorResponse)
    ),
    tags = ["roles"],
    operation_id = "listRoles",
    security(("bearer" = []))
)]
#[get("/roles")]
pub async fn list_roles(
    state: web::Data<HttpState>,
    auth: Authenticated,
) -> ApiResult<HttpResponse> {
    let ctx = auth.require(READERS)?;
    Ok(ok(state.roles_query.find_all(&ctx).await?))
}

/// Fetch the roles named by `ids`.
#[utoipa::path(
    get,
    path = "/api/v1/roles/find",
    params(IdsQuery),
    responses(
        (status = 200, description = "Matching roles", body = ApiResponse<Vec<RoleResponse>>),
        (status = 400, description = "Missing or malformed ids", body = ApiErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ApiErrorResponse),
        (status = 403, description = "Forbidden", body = ApiErrorResponse)
    ),
    tags = ["roles"],
    operation_id = "findRoles",
    security(("bearer" = []))
)]
#[get("/roles/find")]
pub async fn find_roles(
    state: web::Data<HttpState>,
    auth: Authenticated,
    query: web::Query<IdsQuery>,
) -> ApiResult<HttpResponse> {
    let ctx = auth.require(READERS)?;
    let ids = parse_id_list(query.ids.as_deref(), IDS).map_err(|err| ctx.attach(err))?;
    let roles = state
        .roles_query
        .find_by_ids(&ctx, IdsRequest::new(ids))
        .await?;
    Ok(ok(roles))
}

/// Fetch one role.
#[utoipa::path(
    get,
    path = "/api/v1/roles/{id}",
    params(("id" = i64, Path, description = "Role id")),
    responses(
        (status = 200, description = "Role, or a not_found envelope", body = ApiResponse<RoleResponse>),
        (status = 400, description = "Malformed id", body = ApiErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ApiErrorResponse),
        (status = 403, description = "Forbidden", body = ApiErrorResponse)
    ),
    tags = ["roles"],
    operation_id = "getRole",
    security(("bearer" = []))
)]
#[get("/roles/{id}")]
pub async fn get_role(
    state: web::Data<HttpState>,
    auth: Authenticated,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let ctx = auth.require(READERS)?;
    let id = parse_integer(&path, ID).map_err(|err| ctx.attach(err))?;
    let role = state.roles_query.find_by_id(&ctx, IdRequest::new(id)).await?;
    Ok(ok(role))
}

/// Delete the roles named by `ids`.
#[utoipa::path(
    delete,
    path = "/api/v1/roles/delete",
    params(IdsQuery),
    responses(
        (status = 200, description = "Requested ids", body = ApiResponse<Vec<i64>>),
        (status = 400, description = "Missing or malformed ids", body = ApiErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ApiErrorResponse),
        (status = 403, description = "Caller is not an administrator", body = ApiErrorResponse)
    ),
    tags = ["roles"],
    operation_id = "deleteRoles",
    security(("bearer" = []))
)]
#[delete("/roles/delete")]
pub async fn delete_roles(
    state: web::Data<HttpState>,
    auth: Authenticated,
    query: web::Query<IdsQuery>,
) -> ApiResult<HttpResponse> {
    let ctx = auth.require(WRITERS)?;
    let ids = parse_id_list(query.ids.as_deref(), IDS).map_err(|err| ctx.attach(err))?;
    state
        .roles
        .delete_by_ids(&ctx, IdsRequest::new(ids.clone()))
        .await?;
    Ok(ok(ids))
}

/// Delete one role.
#[utoipa::path(
    delete,
    path = "/api/v1/roles/{id}",
    params(("id" = i64, Path, description = "Role id")),
    responses(
        (status = 200, description = "Requested id", body = ApiResponse<IdResponse>),
        (status = 400, description = "Malformed id", body = ApiErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ApiErrorResponse),
        (status = 403, description = "Caller is not an administrator", body = ApiErrorResponse)
    ),
    tags = ["roles"],
    operation_id = "deleteRole",
    security(("bearer" = []))
)]
#[delete("/roles/{id}")]
pub async fn delete_role(
    state: web::Data<HttpState>,
    auth: Authenticated,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let ctx = auth.require(WRITERS)?;
    let id = parse_integer(&path, ID).map_err(|err| ctx.attach(err))?;
    state.roles.delete_by_id(&ctx, IdRequest::new(id)).await?;
    Ok(ok(IdResponse { id }))
}
