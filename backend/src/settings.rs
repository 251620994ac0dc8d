//! Application settings loaded via OrthoConfig.
//!
//! Values come from `IDM_*` environment variables, an optional config file,
//! and command-line flags, in OrthoConfig's usual precedence.

use std::net::SocketAddr;
use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::inbound::http::auth::{JwtVerifier, VerifierConfigError};
use crate::inbound::http::info::AppInfo;

const DEFAULT_APP_NAME: &str = "idm";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_LOG_LEVEL: &str = "info";

/// Failures turning loaded settings into runtime values.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// No database URL was configured.
    #[error("IDM_DATABASE_URL is required")]
    MissingDatabaseUrl,
    /// The bind address does not parse as `host:port`.
    #[error("invalid bind address {value}: {source}")]
    InvalidBindAddr {
        /// Configured text.
        value: String,
        /// Parser failure.
        #[source]
        source: std::net::AddrParseError,
    },
    /// Neither a JWT secret nor a public key path was configured.
    #[error("either IDM_JWT_SECRET or IDM_JWT_PUBLIC_KEY_PATH is required")]
    MissingVerifierKey,
    /// The public key file could not be read.
    #[error("failed to read JWT public key at {path}: {source}")]
    ReadPublicKey {
        /// Configured key path.
        path: PathBuf,
        /// Read failure.
        #[source]
        source: std::io::Error,
    },
    /// The key material was rejected.
    #[error(transparent)]
    Verifier(#[from] VerifierConfigError),
}

/// Runtime configuration for the IDM service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "IDM")]
pub struct AppSettings {
    /// Name reported by `/internal/info`.
    pub app_name: Option<String>,
    /// Version reported by `/internal/info`; defaults to the crate version.
    pub app_version: Option<String>,
    /// PostgreSQL connection URL.
    pub database_url: Option<String>,
    /// Socket address the HTTP listener binds to.
    pub bind_addr: Option<String>,
    /// Default tracing filter when `RUST_LOG` is unset.
    pub log_level: Option<String>,
    /// Upper bound on pooled database connections.
    #[ortho_config(default = 20)]
    pub db_max_connections: u32,
    /// Idle connections the pool keeps warm.
    #[ortho_config(default = 5)]
    pub db_min_idle: u32,
    /// Shared secret for HS256 bearer tokens.
    pub jwt_secret: Option<String>,
    /// PEM file holding the RSA public key for RS256 bearer tokens.
    pub jwt_public_key_path: Option<PathBuf>,
}

impl AppSettings {
    /// Identity served by `/internal/info`.
    pub fn app_info(&self) -> AppInfo {
        AppInfo {
            name: self
                .app_name
                .clone()
                .unwrap_or_else(|| DEFAULT_APP_NAME.to_owned()),
            version: self
                .app_version
                .clone()
                .unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_owned()),
        }
    }

    /// Return the configured database URL.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::MissingDatabaseUrl`] when none is configured.
    pub fn database_url(&self) -> Result<&str, SettingsError> {
        self.database_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .ok_or(SettingsError::MissingDatabaseUrl)
    }

    /// Parse the listener address, falling back to `0.0.0.0:8080`.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidBindAddr`] when the value does not parse.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let value = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        value
            .parse()
            .map_err(|source| SettingsError::InvalidBindAddr {
                value: value.to_owned(),
                source,
            })
    }

    /// Return the configured log level, falling back to `info`.
    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }

    /// Build the bearer token verifier.
    ///
    /// An RSA public key takes precedence over a shared secret.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] when no key is configured, the key file
    /// cannot be read, or it does not hold an RSA public key.
    pub fn verifier(&self) -> Result<JwtVerifier, SettingsError> {
        if let Some(path) = &self.jwt_public_key_path {
            let pem = std::fs::read(path).map_err(|source| SettingsError::ReadPublicKey {
                path: path.clone(),
                source,
            })?;
            return Ok(JwtVerifier::rsa_pem(&pem)?);
        }
        match self.jwt_secret.as_deref() {
            Some(secret) if !secret.is_empty() => Ok(JwtVerifier::hmac(secret.as_bytes())),
            _ => Err(SettingsError::MissingVerifierKey),
        }
    }
}
