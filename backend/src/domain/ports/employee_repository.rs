//! Port for employee persistence.
//!
//! Writes go through an [`EmployeeTransaction`] obtained from
//! [`EmployeeRepository::begin`] so the uniqueness check and the insert share
//! one transaction. Reads and deletes run on their own connection.

use async_trait::async_trait;

use crate::domain::{Employee, EmployeeId, NewEmployee};

use super::{Transaction, define_port_error};

define_port_error! {
    /// Errors raised by employee repository adapters.
    pub enum EmployeeRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "employee repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "employee repository query failed: {message}",
        /// The unique name index rejected an insert.
        Duplicate { name: String } =>
            "employee name already taken: {name}",
    }
}

/// Writes scoped to one open transaction.
#[async_trait]
pub trait EmployeeTransaction: Transaction {
    /// Whether an employee with exactly `name` already exists.
    async fn exists_by_name(&mut self, name: &str) -> Result<bool, EmployeeRepositoryError>;

    /// Insert `employee` and return the storage-assigned id.
    async fn insert(&mut self, employee: &NewEmployee)
    -> Result<EmployeeId, EmployeeRepositoryError>;
}

/// Port for reading, creating, and deleting employees.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Open a transaction for the create path.
    async fn begin(&self) -> Result<Box<dyn EmployeeTransaction>, EmployeeRepositoryError>;

    /// Find one employee; `Ok(None)` when no row matches.
    async fn find_by_id(&self, id: EmployeeId)
    -> Result<Option<Employee>, EmployeeRepositoryError>;

    /// Every employee ordered by id.
    async fn find_all(&self) -> Result<Vec<Employee>, EmployeeRepositoryError>;

    /// Employees whose id is in `ids`, ordered by id. Unknown ids are skipped.
    async fn find_by_ids(&self, ids: &[EmployeeId])
    -> Result<Vec<Employee>, EmployeeRepositoryError>;

    /// One window of employees ordered by id.
    ///
    /// When `filter` is present only names containing it, compared
    /// case-insensitively, are returned.
    async fn find_with_offset(
        &self,
        offset: i64,
        limit: i64,
        filter: Option<String>,
    ) -> Result<Vec<Employee>, EmployeeRepositoryError>;

    /// Number of employees matching `filter` (all employees when absent).
    async fn count(&self, filter: Option<String>) -> Result<i64, EmployeeRepositoryError>;

    /// Delete one employee; absent ids are not an error.
    async fn delete_by_id(&self, id: EmployeeId) -> Result<(), EmployeeRepositoryError>;

    /// Delete every employee in `ids`; absent ids are not an error.
    async fn delete_by_ids(&self, ids: &[EmployeeId]) -> Result<(), EmployeeRepositoryError>;
}

#[cfg(test)]
mockall::mock! {
    pub EmployeeTransaction {}

    #[async_trait]
    impl Transaction for EmployeeTransaction {
        async fn commit(&mut self) -> Result<(), crate::domain::ports::TransactionError>;
        async fn rollback(&mut self) -> Result<(), crate::domain::ports::TransactionError>;
    }

    #[async_trait]
    impl EmployeeTransaction for EmployeeTransaction {
        async fn exists_by_name(&mut self, name: &str) -> Result<bool, EmployeeRepositoryError>;
        async fn insert(
            &mut self,
            employee: &NewEmployee,
        ) -> Result<EmployeeId, EmployeeRepositoryError>;
    }
}
