//! Defines the core data models and database queries for transactions.

use rusqlite::{Connection, Row, params};
use serde::{Deserialize, Serialize};

use crate::{Error, database_id::TransactionId};

// ============================================================================
// MODELS
// ============================================================================

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// To store a new `Transaction`, build a [NewTransaction] and pass it to
/// [create_transaction].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction, assigned by the database.
    pub id: TransactionId,
    /// When the transaction happened, e.g. "2025-01-15".
    ///
    /// Stored and returned exactly as given, the date is not parsed.
    pub date: String,
    /// A free-form label for grouping transactions, e.g. "Groceries".
    pub category: String,
    /// The amount of money spent or earned in this transaction.
    pub amount: f64,
    /// Whether the transaction is "income" or an "expense".
    ///
    /// Any other value is stored as is, but is not counted in the
    /// [Summary](crate::Summary).
    #[serde(rename = "type")]
    pub type_: String,
    /// A text description of what the transaction was for.
    pub description: Option<String>,
}

/// The fields of a transaction that the client provides.
///
/// This is the request body for both creating and updating a transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTransaction {
    /// When the transaction happened, e.g. "2025-01-15".
    pub date: String,
    /// A free-form label for grouping transactions, e.g. "Groceries".
    pub category: String,
    /// The monetary amount of the transaction.
    ///
    /// The sign is not checked against `type_`, whether money came in or went
    /// out is given by `type_` alone.
    pub amount: f64,
    /// Either "income" or "expense", see [TransactionType].
    #[serde(rename = "type")]
    pub type_: String,
    /// An optional text description, may be omitted or `null`.
    #[serde(default)]
    pub description: Option<String>,
}

impl NewTransaction {
    /// Create a new transaction without a description.
    pub fn new(date: &str, category: &str, amount: f64, type_: TransactionType) -> Self {
        Self {
            date: date.to_owned(),
            category: category.to_owned(),
            amount,
            type_: type_.as_str().to_owned(),
            description: None,
        }
    }

    /// Set the description for the transaction.
    pub fn description(mut self, description: &str) -> Self {
        self.description = Some(description.to_owned());
        self
    }
}

/// The transaction types that are counted in the summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionType {
    /// Money that was earned.
    Income,
    /// Money that was spent.
    Expense,
}

impl TransactionType {
    /// The label used for this type on the wire and in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }

    /// Get the type matching `label` exactly, or `None` for any other label.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "income" => Some(TransactionType::Income),
            "expense" => Some(TransactionType::Expense),
            _ => None,
        }
    }
}

// ============================================================================
// DATABASE FUNCTIONS
// ============================================================================

/// Create a new transaction in the database.
///
/// The field values are stored as given, no validation is done.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn create_transaction(
    transaction: NewTransaction,
    connection: &Connection,
) -> Result<Transaction, Error> {
    let transaction = connection
        .prepare(
            "INSERT INTO \"transaction\" (date, category, amount, type, description)
             VALUES (?1, ?2, ?3, ?4, ?5)
             RETURNING id, date, category, amount, type, description",
        )?
        .query_row(
            params![
                transaction.date,
                transaction.category,
                transaction.amount,
                transaction.type_,
                transaction.description,
            ],
            map_transaction_row,
        )?;

    Ok(transaction)
}

/// Retrieve a transaction from the database by its `id`.
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if `id` does not refer to a valid transaction,
/// - or [Error::SqlError] there is some other SQL error.
pub fn get_transaction(id: TransactionId, connection: &Connection) -> Result<Transaction, Error> {
    let transaction = connection
        .prepare(
            "SELECT id, date, category, amount, type, description FROM \"transaction\" WHERE id = :id",
        )?
        .query_row(&[(":id", &id)], map_transaction_row)?;

    Ok(transaction)
}

/// Retrieve every transaction in the database, ordered by ID.
///
/// # Errors
/// This function will return a [Error::SqlError] there is some SQL error.
pub fn get_all_transactions(connection: &Connection) -> Result<Vec<Transaction>, Error> {
    connection
        .prepare(
            "SELECT id, date, category, amount, type, description FROM \"transaction\" ORDER BY id ASC",
        )?
        .query_map([], map_transaction_row)?
        .map(|maybe_transaction| maybe_transaction.map_err(Error::from))
        .collect()
}

/// Overwrite every field of the transaction `id` except the ID itself.
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if `id` does not refer to a valid transaction,
/// - or [Error::SqlError] there is some other SQL error.
pub fn update_transaction(
    id: TransactionId,
    transaction: NewTransaction,
    connection: &Connection,
) -> Result<Transaction, Error> {
    let transaction = connection
        .prepare(
            "UPDATE \"transaction\"
             SET date = ?1, category = ?2, amount = ?3, type = ?4, description = ?5
             WHERE id = ?6
             RETURNING id, date, category, amount, type, description",
        )?
        .query_row(
            params![
                transaction.date,
                transaction.category,
                transaction.amount,
                transaction.type_,
                transaction.description,
                id,
            ],
            map_transaction_row,
        )?;

    Ok(transaction)
}

/// Delete the transaction `id` from the database.
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if `id` does not refer to a valid transaction,
/// - or [Error::SqlError] there is some other SQL error.
pub fn delete_transaction(id: TransactionId, connection: &Connection) -> Result<(), Error> {
    let rows_affected = connection.execute(
        "DELETE FROM \"transaction\" WHERE id = :id",
        &[(":id", &id)],
    )?;

    match rows_affected {
        0 => Err(Error::NotFound),
        _ => Ok(()),
    }
}

/// Get the total number of transactions in the database.
///
/// # Errors
/// This function will return a [Error::SqlError] there is some SQL error.
pub fn count_transactions(connection: &Connection) -> Result<u32, Error> {
    connection
        .query_row("SELECT COUNT(id) FROM \"transaction\";", [], |row| {
            row.get(0)
        })
        .map_err(|error| error.into())
}

/// Create the transaction table in the database.
///
/// Does nothing if the table already exists.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_transaction_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    // AUTOINCREMENT stops the IDs of deleted transactions from being reused.
    connection.execute(
        "CREATE TABLE IF NOT EXISTS \"transaction\" (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                date TEXT NOT NULL,
                category TEXT NOT NULL,
                amount REAL NOT NULL,
                type TEXT NOT NULL,
                description TEXT
                )",
        (),
    )?;

    connection.execute(
        "CREATE INDEX IF NOT EXISTS idx_transaction_date ON \"transaction\"(date);",
        (),
    )?;

    connection.execute(
        "CREATE INDEX IF NOT EXISTS idx_transaction_category ON \"transaction\"(category);",
        (),
    )?;

    Ok(())
}

/// Map a database row to a Transaction.
pub fn map_transaction_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    let id = row.get(0)?;
    let date = row.get(1)?;
    let category = row.get(2)?;
    let amount = row.get(3)?;
    let type_ = row.get(4)?;
    let description = row.get(5)?;

    Ok(Transaction {
        id,
        date,
        category,
        amount,
        type_,
        description,
    })
}

// ============================================================================
// TESTS
// ============================================================================
