//! Scoped execution of work inside an explicit transaction.

use std::panic::AssertUnwindSafe;

use futures_util::FutureExt;
use futures_util::future::BoxFuture;
use tracing::{error, warn};

use super::ports::{Transaction, TransactionError};
use super::{Error, RequestContext};

/// Map a finalisation failure onto the domain error taxonomy.
pub(crate) fn map_transaction_error(error: TransactionError) -> Error {
    match error {
        TransactionError::Connection { message } => {
            Error::service_unavailable(format!("database unavailable: {message}"))
        }
        TransactionError::Query { message } => {
            Error::internal(format!("transaction failed: {message}"))
        }
    }
}

/// Run `work` against `tx`, then finalise the transaction exactly once.
///
/// - `Ok` from `work` commits; a failed commit is returned as an error.
/// - `Err` from `work` rolls back and returns that error.
/// - A panic inside `work` rolls back and becomes an internal error.
///
/// A rollback failure is logged and never replaces the original error.
pub(crate) async fn run_in_transaction<Tx, T, F>(
    ctx: &RequestContext,
    mut tx: Box<Tx>,
    work: F,
) -> Result<T, Error>
where
    Tx: Transaction + ?Sized,
    T: Send,
    F: for<'a> FnOnce(&'a mut Tx) -> BoxFuture<'a, Result<T, Error>>,
{
    let outcome = AssertUnwindSafe(work(&mut *tx)).catch_unwind().await;
    match outcome {
        Ok(Ok(value)) => {
            tx.commit()
                .await
                .map_err(|err| ctx.attach(map_transaction_error(err)))?;
            Ok(value)
        }
        Ok(Err(err)) => {
            rollback(ctx, tx.as_mut()).await;
            Err(err)
        }
        Err(_) => {
            error!(trace_id = %ctx.trace_id(), "transaction work panicked; rolling back");
            rollback(ctx, tx.as_mut()).await;
            Err(ctx.attach(Error::internal("transaction aborted")))
        }
    }
}

async fn rollback<Tx>(ctx: &RequestContext, tx: &mut Tx)
where
    Tx: Transaction + ?Sized,
{
    if let Err(err) = tx.rollback().await {
        error!(trace_id = %ctx.trace_id(), error = %err, "transaction rollback failed");
    } else {
        warn!(trace_id = %ctx.trace_id(), "transaction rolled back");
    }
}
