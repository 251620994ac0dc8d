//! Internal endpoints for operators and orchestrators.
//!
//! ```text
//! GET /internal/info    {"name":"idm","version":"0.1.0"}
//! GET /internal/health  OK
//! ```
//!
//! These routes sit outside `/api/v1` and carry no bearer gate.

use std::sync::Arc;
use std::time::Duration;

use actix_web::{HttpRequest, HttpResponse, get, web};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::domain::ports::HealthProbe;
use crate::domain::{Error, RequestContext};
use crate::inbound::http::ApiResult;
use crate::inbound::http::auth::request_trace_id;

/// Upper bound on one storage health probe.
pub const HEALTH_DEADLINE: Duration = Duration::from_secs(2);

/// Application identity reported by `/internal/info`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AppInfo {
    /// Application name.
    #[schema(example = "idm")]
    pub name: String,
    /// Application version.
    #[schema(example = "0.1.0")]
    pub version: String,
}

/// Dependencies of the internal endpoints.
#[derive(Clone)]
pub struct InternalState {
    info: AppInfo,
    health: Arc<dyn HealthProbe>,
    deadline: Duration,
}

impl InternalState {
    /// Build state reporting `app_info` and checking storage through `probe`.
    pub fn new(app_info: AppInfo, probe: Arc<dyn HealthProbe>) -> Self {
        Self {
            info: app_info,
            health: probe,
            deadline: HEALTH_DEADLINE,
        }
    }

    /// Override the probe deadline.
    #[must_use]
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = deadline;
        self
    }
}

/// Register `/internal` routes on `cfg`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(info).service(health);
}

/// Report the configured application name and version.
#[utoipa::path(
    get,
    path = "/internal/info",
    responses((status = 200, description = "Application identity", body = AppInfo)),
    tags = ["internal"],
    operation_id = "info",
    security([])
)]
#[get("/info")]
pub async fn info(state: web::Data<InternalState>) -> HttpResponse {
    HttpResponse::Ok().json(&state.info)
}

/// Check that the database answers within the deadline.
#[utoipa::path(
    get,
    path = "/internal/health",
    responses(
        (status = 200, description = "Database reachable", body = String),
        (status = 500, description = "Database unreachable or too slow")
    ),
    tags = ["internal"],
    operation_id = "health",
    security([])
)]
#[get("/health")]
pub async fn health(req: HttpRequest, state: web::Data<InternalState>) -> ApiResult<HttpResponse> {
    let ctx = RequestContext::new(request_trace_id(&req));
    match tokio::time::timeout(state.deadline, state.health.check()).await {
        Ok(Ok(())) => Ok(HttpResponse::Ok().content_type("text/plain").body("OK")),
        Ok(Err(err)) => {
            error!(trace_id = %ctx.trace_id(), error = %err, "health probe failed");
            Err(ctx.attach(Error::internal(err.to_string())))
        }
        Err(_) => {
            error!(
                trace_id = %ctx.trace_id(),
                deadline = ?state.deadline,
                "health probe timed out"
            );
            Err(ctx.attach(Error::internal("health probe timed out")))
        }
    }
}
