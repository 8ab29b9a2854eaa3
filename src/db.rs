//! Sets up the application's SQLite database.

use rusqlite::{Connection, Transaction as SqlTransaction, TransactionBehavior};

use crate::transaction::create_transaction_table;

/// Create all of the database tables for the application.
///
/// Safe to call on a database that has already been initialized, existing
/// tables and rows are left untouched.
///
/// # Errors
/// This function may return a [rusqlite::Error] if something went wrong creating the tables.
pub fn initialize(connection: &Connection) -> Result<(), rusqlite::Error> {
    let transaction = SqlTransaction::new_unchecked(connection, TransactionBehavior::Exclusive)?;

    create_transaction_table(&transaction)?;

    transaction.commit()?;

    Ok(())
}
