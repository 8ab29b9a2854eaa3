//! Defines the endpoint for fetching a single transaction.

use axum::extract::State;

use crate::{
    Error,
    database_id::TransactionId,
    extract::{AppJson, AppPath},
    transaction::{Transaction, core::get_transaction, state::TransactionState},
};

/// A route handler that responds with the transaction `transaction_id`, or 404 if it does not exist.
pub async fn get_transaction_endpoint(
    State(state): State<TransactionState>,
    AppPath(transaction_id): AppPath<TransactionId>,
) -> Result<AppJson<Transaction>, Error> {
    let connection = state.connection()?;

    get_transaction(transaction_id, &connection).map(AppJson)
}
