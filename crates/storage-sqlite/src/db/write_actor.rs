//! Single-writer actor for SQLite.
//!
//! SQLite allows one writer at a time. All writes are funneled through a
//! dedicated task that owns one connection and processes jobs serially,
//! each inside an immediate transaction, so an append either commits with
//! every field set or leaves no trace.

use std::any::Any;

use diesel::r2d2::{ConnectionManager, Pool};
use diesel::SqliteConnection;
use forex_core::errors::Result;
use tokio::sync::{mpsc, oneshot};

use crate::errors::StorageError;

/// A write job: runs against the actor's connection inside a transaction.
/// The return type is erased so one channel can carry every job shape.
type Job = Box<dyn FnOnce(&mut SqliteConnection) -> Result<Box<dyn Any + Send + 'static>> + Send>;

/// Handle for sending jobs to the writer actor.
#[derive(Clone)]
pub struct WriteHandle {
    tx: mpsc::Sender<(Job, oneshot::Sender<Result<Box<dyn Any + Send + 'static>>>)>,
}

impl WriteHandle {
    /// Executes a database job on the writer actor's dedicated connection.
    pub async fn exec<F, T>(&self, job: F) -> Result<T>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static,
        T: Send + Any + 'static,
    {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.tx
            .send((
                Box::new(move |conn| job(conn).map(|v| Box::new(v) as Box<dyn Any + Send>)),
                reply_tx,
            ))
            .await
            .expect("writer actor channel closed, the actor has stopped");

        reply_rx
            .await
            .expect("writer actor dropped the reply sender without a result")
            .map(|boxed| {
                *boxed
                    .downcast::<T>()
                    .unwrap_or_else(|_| panic!("writer actor returned an unexpected type"))
            })
    }
}

/// Spawns the background task that serializes all database writes.
///
/// The actor holds one pool connection for its lifetime and terminates when
/// every `WriteHandle` has been dropped.
pub fn spawn_writer(pool: Pool<ConnectionManager<SqliteConnection>>) -> WriteHandle {
    let (tx, mut rx) =
        mpsc::channel::<(Job, oneshot::Sender<Result<Box<dyn Any + Send + 'static>>>)>(1024);

    tokio::spawn(async move {
        let mut conn = pool
            .get()
            .expect("failed to acquire a connection for the writer actor");

        while let Some((job, reply_tx)) = rx.recv().await {
            let result = conn
                .immediate_transaction::<_, StorageError, _>(|c| job(c).map_err(StorageError::from))
                .map_err(Into::into);

            // The receiver may be gone if the request was cancelled.
            let _ = reply_tx.send(result);
        }
    });

    WriteHandle { tx }
}
