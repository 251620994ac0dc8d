//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every `/api/v1` and `/internal` handler together with
//! the request and response schemas they exchange, plus the bearer token
//! security scheme. Swagger UI serves it at `/docs` in debug builds.

use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::{
    CreateEmployeeRequest, CreateRoleRequest, EmployeeResponse, Error, ErrorCode, IdResponse,
    RoleResponse,
};
use crate::inbound::http::employees::EmployeePage;
use crate::inbound::http::envelope::ApiErrorResponse;
use crate::inbound::http::info::AppInfo;

/// Enrich the generated document with the bearer token security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        let mut bearer = Http::new(HttpAuthScheme::Bearer);
        bearer.bearer_format = Some("JWT".to_owned());
        bearer.description =
            Some("Realm access token carrying IDM_ADMIN or IDM_USER in realm_access.roles.".to_owned());
        components.add_security_scheme("bearer", SecurityScheme::Http(bearer));
    }
}

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "IDM backend API",
        description = "Employee and role management behind a bearer token gate."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("bearer" = [])),
    paths(
        crate::inbound::http::employees::create_employee,
        crate::inbound::http::employees::list_employees,
        crate::inbound::http::employees::page_employees,
        crate::inbound::http::employees::find_employees,
        crate::inbound::http::employees::get_employee,
        crate::inbound::http::employees::delete_employees,
        crate::inbound::http::employees::delete_employee,
        crate::inbound::http::roles::create_role,
        crate::inbound::http::roles::list_roles,
        crate::inbound::http::roles::find_roles,
        crate::inbound::http::roles::get_role,
        crate::inbound::http::roles::delete_roles,
        crate::inbound::http::roles::delete_role,
        crate::inbound::http::info::info,
        crate::inbound::http::info::health,
    ),
    components(schemas(
        CreateEmployeeRequest,
        CreateRoleRequest,
        EmployeeResponse,
        EmployeePage,
        RoleResponse,
        IdResponse,
        Error,
        ErrorCode,
        ApiErrorResponse,
        AppInfo
    )),
    tags(
        (name = "employees", description = "Employee management"),
        (name = "roles", description = "Role management"),
        (name = "internal", description = "Service identity and health")
    )
)]
pub struct ApiDoc;
