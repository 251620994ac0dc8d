//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use idm::Trace;
#[cfg(debug_assertions)]
use idm::doc::ApiDoc;
use idm::domain::{EmployeeService, RoleService};
use idm::inbound::http::auth::JwtVerifier;
use idm::inbound::http::info::{self, InternalState};
use idm::inbound::http::state::HttpState;
use idm::inbound::http::{configure_api, json_config};
use idm::outbound::persistence::{
    DbPool, DieselEmployeeRepository, DieselHealthProbe, DieselRoleRepository,
};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

/// Wire the Diesel repositories into the domain services.
fn build_http_state(pool: &DbPool) -> HttpState {
    let employees = Arc::new(EmployeeService::new(Arc::new(
        DieselEmployeeRepository::new(pool.clone()),
    )));
    let roles = Arc::new(RoleService::new(Arc::new(DieselRoleRepository::new(
        pool.clone(),
    ))));
    HttpState::from_services(employees, roles)
}

#[derive(Clone)]
struct AppDependencies {
    http_state: web::Data<HttpState>,
    internal_state: web::Data<InternalState>,
    verifier: web::Data<JwtVerifier>,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        http_state,
        internal_state,
        verifier,
    } = deps;

    let app = App::new()
        .app_data(http_state)
        .app_data(internal_state)
        .app_data(verifier)
        .app_data(json_config())
        .wrap(Trace)
        .service(web::scope("/api/v1").configure(configure_api))
        .service(web::scope("/internal").configure(info::configure));

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    #[cfg(not(debug_assertions))]
    let app = app;

    app
}

/// Construct an Actix HTTP server from the provided configuration.
///
/// # Parameters
/// - `config`: pre-built [`ServerConfig`] carrying the pool, the token
///   verifier, the application identity, and the bind address.
///
/// # Returns
/// A spawned [`Server`] that must be awaited to drive the listener.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(config: ServerConfig) -> std::io::Result<Server> {
    let ServerConfig {
        bind_addr,
        db_pool,
        verifier,
        info,
    } = config;

    let http_state = web::Data::new(build_http_state(&db_pool));
    let internal_state = web::Data::new(InternalState::new(
        info,
        Arc::new(DieselHealthProbe::new(db_pool)),
    ));
    let verifier = web::Data::new(verifier);

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            http_state: http_state.clone(),
            internal_state: internal_state.clone(),
            verifier: verifier.clone(),
        })
    })
    .bind(bind_addr)?
    .run();

    Ok(server)
}
