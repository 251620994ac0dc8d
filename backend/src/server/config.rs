//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

use idm::inbound::http::auth::JwtVerifier;
use idm::inbound::http::info::AppInfo;
use idm::outbound::persistence::DbPool;

/// Configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: DbPool,
    pub(crate) verifier: JwtVerifier,
    pub(crate) info: AppInfo,
}

impl ServerConfig {
    /// Construct a server configuration from its required parts.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, db_pool: DbPool, verifier: JwtVerifier, info: AppInfo) -> Self {
        Self {
            bind_addr,
            db_pool,
            verifier,
            info,
        }
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
