//! Port for role persistence.

use async_trait::async_trait;

use crate::domain::{NewRole, Role, RoleId};

use super::{Transaction, define_port_error};

define_port_error! {
    /// Errors raised by role repository adapters.
    pub enum RoleRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "role repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "role repository query failed: {message}",
    }
}

/// Writes scoped to one open transaction.
#[async_trait]
pub trait RoleTransaction: Transaction {
    /// Insert `role` and return the storage-assigned id.
    async fn insert(&mut self, role: &NewRole) -> Result<RoleId, RoleRepositoryError>;
}

/// Port for reading, creating, and deleting roles.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoleRepository: Send + Sync {
    /// Open a transaction for the create path.
    async fn begin(&self) -> Result<Box<dyn RoleTransaction>, RoleRepositoryError>;

    /// Find one role; `Ok(None)` when no row matches.
    async fn find_by_id(&self, id: RoleId) -> Result<Option<Role>, RoleRepositoryError>;

    /// Every role ordered by id.
    async fn find_all(&self) -> Result<Vec<Role>, RoleRepositoryError>;

    /// Roles whose id is in `ids`, ordered by id.
    async fn find_by_ids(&self, ids: &[RoleId]) -> Result<Vec<Role>, RoleRepositoryError>;

    /// Delete one role; absent ids are not an error.
    async fn delete_by_id(&self, id: RoleId) -> Result<(), RoleRepositoryError>;

    /// Delete every role in `ids`; absent ids are not an error.
    async fn delete_by_ids(&self, ids: &[RoleId]) -> Result<(), RoleRepositoryError>;
}

#[cfg(test)]
mockall::mock! {
    pub RoleTransaction {}

    #[async_trait]
    impl Transaction for RoleTransaction {
        async fn commit(&mut self) -> Result<(), crate::domain::ports::TransactionError>;
        async fn rollback(&mut self) -> Result<(), crate::domain::ports::TransactionError>;
    }

    #[async_trait]
    impl RoleTransaction for RoleTransaction {
        async fn insert(&mut self, role: &NewRole) -> Result<RoleId, RoleRepositoryError>;
    }
}
