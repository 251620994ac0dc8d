//! HTTP inbound adapter exposing REST endpoints.

use actix_web::web;

use crate::domain::{Error, RequestContext};

pub mod auth;
pub mod employees;
pub mod envelope;
pub mod error;
pub mod info;
pub mod roles;
pub mod state;
#[cfg(test)]
pub(crate) mod test_utils;
pub(crate) mod validation;

pub use error::ApiResult;

/// JSON body settings rendering malformed bodies as `invalid_request`.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, req| {
        let ctx = RequestContext::new(auth::request_trace_id(req));
        ctx.attach(Error::invalid_request(format!("invalid JSON body: {err}")))
            .into()
    })
}

/// Register every `/api/v1` route on `cfg`.
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.configure(employees::configure)
        .configure(roles::configure);
}
