//! Port for checking that backing storage answers.

use async_trait::async_trait;

use super::define_port_error;

define_port_error! {
    /// Errors raised by health probe adapters.
    pub enum HealthProbeError {
        /// Storage could not be reached or rejected the probe.
        Unavailable { message: String } =>
            "storage unavailable: {message}",
    }
}

/// Liveness check against the storage backend.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HealthProbe: Send + Sync {
    /// Issue a trivial round trip to storage.
    async fn check(&self) -> Result<(), HealthProbeError>;
}
