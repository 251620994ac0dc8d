//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use serde_json::Value;

use super::auth::JwtVerifier;
use super::auth::test_tokens::SECRET;
use super::state::HttpState;
use super::{configure_api, json_config};
use crate::Trace;
use crate::domain::ports::{
    MockEmployeeCommand, MockEmployeeQuery, MockRoleCommand, MockRoleQuery,
};

/// Mocked driving ports; tests set expectations on the ones they exercise.
#[derive(Default)]
pub(crate) struct MockPorts {
    pub employees: MockEmployeeCommand,
    pub employees_query: MockEmployeeQuery,
    pub roles: MockRoleCommand,
    pub roles_query: MockRoleQuery,
}

impl MockPorts {
    pub(crate) fn into_state(self) -> HttpState {
        HttpState {
            employees: Arc::new(self.employees),
            employees_query: Arc::new(self.employees_query),
            roles: Arc::new(self.roles),
            roles_query: Arc::new(self.roles_query),
        }
    }
}

/// App mounting `/api/v1` over mocked ports with the test token secret.
pub(crate) fn test_app(
    ports: MockPorts,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(ports.into_state()))
        .app_data(web::Data::new(JwtVerifier::hmac(SECRET)))
        .app_data(json_config())
        .wrap(Trace)
        .service(web::scope("/api/v1").configure(configure_api))
}

/// Read a response body as JSON.
pub(crate) async fn body_json(res: ServiceResponse) -> Value {
    actix_web::test::read_body_json(res).await
}
