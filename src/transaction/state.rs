//! The state shared by the transaction route handlers.

use std::sync::{Arc, Mutex, MutexGuard};

use axum::extract::FromRef;
use rusqlite::Connection;

use crate::{AppState, Error};

/// The state needed to create, read, update and delete transactions.
#[derive(Debug, Clone)]
pub struct TransactionState {
    /// The database connection for managing transactions.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for TransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

impl TransactionState {
    /// Lock the database connection for a single query.
    ///
    /// The lock is released when the returned guard is dropped.
    ///
    /// # Errors
    /// Returns [Error::DatabaseLockError] if the lock is poisoned.
    pub fn connection(&self) -> Result<MutexGuard<'_, Connection>, Error> {
        self.db_connection.lock().map_err(|error| {
            tracing::error!("Could not acquire database lock: {error}");
            Error::DatabaseLockError
        })
    }
}
