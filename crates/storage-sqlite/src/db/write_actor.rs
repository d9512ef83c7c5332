use super::DbPool;
use crate::errors::StorageError;
use diesel::SqliteConnection;
use quoteshelf_core::errors::{DatabaseError, Error, Result};
use std::any::Any;
use tokio::sync::{mpsc, oneshot};

// A job executed on the writer's dedicated connection. Type erasure via
// `Box<dyn Any>` lets one channel carry jobs with different return types.
type Job<T> = Box<dyn FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static>;

/// Handle for sending jobs to the writer actor.
#[derive(Clone)]
pub struct WriteHandle {
    #[allow(clippy::type_complexity)]
    tx: mpsc::Sender<(
        Job<Box<dyn Any + Send + 'static>>,
        oneshot::Sender<Result<Box<dyn Any + Send + 'static>>>,
    )>,
}

impl WriteHandle {
    /// Executes a database job on the writer actor's dedicated connection,
    /// inside an immediate transaction.
    ///
    /// Errors returned by the job itself (e.g. `NotFound`) pass through
    /// unchanged; failures of the transaction machinery surface as
    /// `DatabaseError::TransactionFailed` after the rollback.
    pub async fn exec<F, T>(&self, job: F) -> Result<T>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static,
        T: Send + 'static + Any,
    {
        let (ret_tx, ret_rx) = oneshot::channel();

        self.tx
            .send((
                Box::new(move |c| job(c).map(|v| Box::new(v) as Box<dyn Any + Send>)),
                ret_tx,
            ))
            .await
            .map_err(|_| {
                Error::Database(DatabaseError::Internal(
                    "Writer actor is not running".to_string(),
                ))
            })?;

        ret_rx
            .await
            .map_err(|_| {
                Error::Database(DatabaseError::Internal(
                    "Writer actor dropped the reply channel".to_string(),
                ))
            })?
            .map(|boxed: Box<dyn Any + Send + 'static>| {
                *boxed
                    .downcast::<T>()
                    .unwrap_or_else(|_| panic!("Failed to downcast writer actor result."))
            })
    }
}

/// Spawns a background Tokio task that acts as the single writer to the
/// database. The actor owns one connection from the pool and processes write
/// jobs serially, each inside `immediate_transaction` so a failed statement
/// or commit leaves the table in its pre-operation state.
pub fn spawn_writer(pool: DbPool) -> WriteHandle {
    let (tx, mut rx) = mpsc::channel::<(
        Job<Box<dyn Any + Send + 'static>>,
        oneshot::Sender<Result<Box<dyn Any + Send + 'static>>>,
    )>(1024);

    tokio::spawn(async move {
        let mut conn = pool
            .get()
            .expect("Failed to get a connection from the DB pool for the writer actor.");

        while let Some((job, reply_tx)) = rx.recv().await {
            let result: Result<Box<dyn Any + Send + 'static>> = conn
                .immediate_transaction::<_, StorageError, _>(|c| job(c).map_err(StorageError::from))
                .map_err(|e| match e {
                    // The job's own error: keep its variant (NotFound stays 404)
                    StorageError::Core(inner) => inner,
                    // Anything else is the transaction failing to apply/commit
                    other => Error::Database(DatabaseError::TransactionFailed(other.to_string())),
                });

            // Ignore error if the receiver has dropped (request cancelled)
            let _ = reply_tx.send(result);
        }
        // rx.recv() returned None: all WriteHandles are gone, actor exits.
    });

    WriteHandle { tx }
}
