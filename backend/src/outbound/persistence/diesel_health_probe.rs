//! Database round-trip probe backing `GET /internal/health`.

use async_trait::async_trait;

use crate::domain::ports::{HealthProbe, HealthProbeError};

use super::pool::DbPool;

/// Health probe that runs `SELECT 1` through the shared pool.
#[derive(Clone)]
pub struct DieselHealthProbe {
    pool: DbPool,
}

impl DieselHealthProbe {
    /// Create a probe over the given pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HealthProbe for DieselHealthProbe {
    async fn check(&self) -> Result<(), HealthProbeError> {
        self.pool
            .ping()
            .await
            .map_err(|err| HealthProbeError::unavailable(err.to_string()))
    }
}
