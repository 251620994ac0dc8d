//! Shared mapping from pool and Diesel failures to port error constructors.
//!
//! Every repository error enum exposes `connection(..)` and `query(..)`
//! constructors (see `define_port_error!`), so adapters pass those in here
//! rather than repeating the match per repository.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use super::pool::PoolError;

/// Map pool errors into a repository-specific connection error constructor.
pub(crate) fn map_basic_pool_error<E, C>(error: PoolError, connection: C) -> E
where
    C: FnOnce(String) -> E,
{
    let message = match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    };
    connection(message)
}

/// Map a Diesel error raised by `operation` into query/connection constructors.
///
/// Closed connections become connection errors; everything else, including
/// row decoding failures, becomes a query error.
pub(crate) fn map_basic_diesel_error<E, Q, C>(
    error: DieselError,
    operation: &str,
    query: Q,
    connection: C,
) -> E
where
    Q: FnOnce(String) -> E,
    C: FnOnce(String) -> E,
{
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), %operation, "diesel operation failed");
        }
        other => debug!(error = %other, %operation, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, info) => {
            connection(format!("{operation}: {}", info.message()))
        }
        DieselError::BrokenTransactionManager => {
            connection(format!("{operation}: broken transaction manager"))
        }
        other => query(format!("{operation}: {other}")),
    }
}
