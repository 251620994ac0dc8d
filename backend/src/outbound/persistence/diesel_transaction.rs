//! Explicit transactions on an owned pooled connection.
//!
//! `diesel-async`'s closure-based `transaction` helper cannot hand a live
//! transaction across the port boundary, so entity transaction handles drive
//! `AnsiTransactionManager` directly: `BEGIN` on construction, then exactly
//! one `COMMIT` or `ROLLBACK` issued by the domain.

use diesel_async::pooled_connection::bb8::PooledConnection;
use diesel_async::{AnsiTransactionManager, AsyncPgConnection, TransactionManager};

use crate::domain::ports::TransactionError;

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::pool::DbPool;

/// An open transaction holding its pooled connection.
pub(crate) struct DieselTransaction {
    conn: PooledConnection<'static, AsyncPgConnection>,
}

impl DieselTransaction {
    /// Check out a connection and issue `BEGIN` on it.
    ///
    /// Failures are reported through the caller's port error constructors.
    pub(crate) async fn begin<E, Q, C>(pool: &DbPool, query: Q, connection: C) -> Result<Self, E>
    where
        Q: FnOnce(String) -> E,
        C: FnOnce(String) -> E,
    {
        let mut conn = match pool.get_owned().await {
            Ok(conn) => conn,
            Err(err) => return Err(map_basic_pool_error(err, connection)),
        };
        if let Err(err) = AnsiTransactionManager::begin_transaction(&mut *conn).await {
            return Err(map_basic_diesel_error(err, "begin", query, connection));
        }
        Ok(Self { conn })
    }

    /// Connection on which the transaction is open.
    pub(crate) fn conn(&mut self) -> &mut AsyncPgConnection {
        &mut *self.conn
    }

    pub(crate) async fn commit(&mut self) -> Result<(), TransactionError> {
        AnsiTransactionManager::commit_transaction(&mut *self.conn)
            .await
            .map_err(|err| map_transaction_error(err, "commit"))
    }

    pub(crate) async fn rollback(&mut self) -> Result<(), TransactionError> {
        AnsiTransactionManager::rollback_transaction(&mut *self.conn)
            .await
            .map_err(|err| map_transaction_error(err, "rollback"))
    }
}

fn map_transaction_error(error: diesel::result::Error, operation: &str) -> TransactionError {
    map_basic_diesel_error(
        error,
        operation,
        TransactionError::query,
        TransactionError::connection,
    )
}
