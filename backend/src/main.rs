//! Backend entry-point: loads settings, opens the pool, and serves the API.

mod server;

use std::io;

use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use idm::outbound::persistence::{DbPool, PoolConfig};
use idm::settings::AppSettings;
use server::{ServerConfig, create_server};

fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    if let Err(e) = fmt().with_env_filter(filter).json().try_init() {
        warn!(error = %e, "tracing init failed");
    }
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> io::Result<()> {
    let settings = AppSettings::load().map_err(|e| io::Error::other(e.to_string()))?;
    init_tracing(settings.log_level());

    let database_url = settings.database_url().map_err(io::Error::other)?;
    let bind_addr = settings.bind_addr().map_err(io::Error::other)?;
    let verifier = settings.verifier().map_err(io::Error::other)?;

    let pool_config = PoolConfig::new(database_url)
        .with_max_size(settings.db_max_connections)
        .with_min_idle(Some(settings.db_min_idle));
    let pool = DbPool::new(pool_config)
        .await
        .map_err(|e| io::Error::other(format!("database pool: {e}")))?;

    let config = ServerConfig::new(bind_addr, pool, verifier, settings.app_info());
    info!(bind_addr = %config.bind_addr(), "starting HTTP server");
    create_server(config)?.await
}
