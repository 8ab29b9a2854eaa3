//! Defines the endpoint for replacing the fields of an existing transaction.

use axum::extract::State;

use crate::{
    Error,
    database_id::TransactionId,
    extract::{AppJson, AppPath},
    transaction::{NewTransaction, Transaction, core::update_transaction, state::TransactionState},
};

/// A route handler for updating a transaction, responds with the updated transaction.
///
/// Every field except the ID is overwritten, including setting the description
/// to `null` when it is omitted.
pub async fn edit_transaction_endpoint(
    State(state): State<TransactionState>,
    AppPath(transaction_id): AppPath<TransactionId>,
    AppJson(new_transaction): AppJson<NewTransaction>,
) -> Result<AppJson<Transaction>, Error> {
    let connection = state.connection()?;

    let transaction = update_transaction(transaction_id, new_transaction, &connection)
        .inspect_err(|error| {
            tracing::debug!("Could not update transaction {transaction_id}: {error}")
        })?;

    Ok(AppJson(transaction))
}
