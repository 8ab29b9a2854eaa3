//! Defines the endpoint for creating a new transaction.

use axum::extract::State;

use crate::{
    Error,
    extract::AppJson,
    transaction::{NewTransaction, Transaction, core::create_transaction, state::TransactionState},
};

/// A route handler for creating a new transaction, responds with the stored transaction.
pub async fn create_transaction_endpoint(
    State(state): State<TransactionState>,
    AppJson(new_transaction): AppJson<NewTransaction>,
) -> Result<AppJson<Transaction>, Error> {
    let connection = state.connection()?;

    let transaction = create_transaction(new_transaction, &connection)?;
    tracing::debug!("Created transaction {}", transaction.id);

    Ok(AppJson(transaction))
}
