//! Port for explicit storage transactions.
//!
//! A transaction handle is obtained from a repository's `begin` and owned by
//! the caller. Each handle is finalised exactly once, by either
//! [`Transaction::commit`] or [`Transaction::rollback`]; see
//! `domain::transaction::run_in_transaction` for the scoped helper services
//! use.

use async_trait::async_trait;

use super::define_port_error;

define_port_error! {
    /// Errors raised while finalising a transaction.
    pub enum TransactionError {
        /// The connection backing the transaction was lost.
        Connection { message: String } =>
            "transaction connection failed: {message}",
        /// The database rejected the commit or rollback.
        Query { message: String } =>
            "transaction finalisation failed: {message}",
    }
}

/// Finalisation half shared by every entity-specific transaction handle.
#[async_trait]
pub trait Transaction: Send {
    /// Make the transaction's writes durable.
    async fn commit(&mut self) -> Result<(), TransactionError>;

    /// Discard the transaction's writes.
    async fn rollback(&mut self) -> Result<(), TransactionError>;
}
