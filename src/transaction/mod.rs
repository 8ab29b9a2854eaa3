//! Transaction management for the ledger.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` and `NewTransaction` models
//! - Database functions for storing, querying, and managing transactions
//! - Route handlers for the transaction endpoints

mod core;
mod create_endpoint;
mod delete_endpoint;
mod edit_endpoint;
mod get_endpoint;
mod list_endpoint;
mod state;

#[cfg(test)]
pub(crate) mod test_utils;

pub use self::core::{
    NewTransaction, Transaction, TransactionType, count_transactions, create_transaction,
    create_transaction_table, get_all_transactions,
};
pub use create_endpoint::create_transaction_endpoint;
pub use delete_endpoint::delete_transaction_endpoint;
pub use edit_endpoint::edit_transaction_endpoint;
pub use get_endpoint::get_transaction_endpoint;
pub use list_endpoint::list_transactions_endpoint;
pub use state::TransactionState;

#[cfg(test)]
pub use self::core::{delete_transaction, get_transaction, update_transaction};
