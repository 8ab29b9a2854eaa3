//! Defines the endpoint for deleting a transaction.

use axum::extract::State;
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    database_id::TransactionId,
    extract::{AppJson, AppPath},
    transaction::{core::delete_transaction, state::TransactionState},
};

/// The message sent to the client after a transaction is deleted.
pub const DELETED_MESSAGE: &str = "Transaction deleted successfully";

/// The response body for a successful delete.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct DeleteResponse {
    /// A human readable confirmation.
    pub message: String,
}

/// A route handler for deleting a transaction, responds with a confirmation message.
pub async fn delete_transaction_endpoint(
    State(state): State<TransactionState>,
    AppPath(transaction_id): AppPath<TransactionId>,
) -> Result<AppJson<DeleteResponse>, Error> {
    let connection = state.connection()?;

    delete_transaction(transaction_id, &connection)?;
    tracing::debug!("Deleted transaction {transaction_id}");

    Ok(AppJson(DeleteResponse {
        message: DELETED_MESSAGE.to_owned(),
    }))
}

#[cfg(test)]
mod tests {
    use crate::{
        Error,
        endpoints::{self, format_endpoint},
        transaction::{
            NewTransaction, TransactionType, create_transaction, get_transaction,
            test_utils::must_create_test_server,
        },
    };

    use super::{DELETED_MESSAGE, DeleteResponse};

    #[tokio::test]
    async fn deletes_transaction() {
        let (server, state) = must_create_test_server();
        let transaction = create_transaction(
            NewTransaction::new("2025-10-26", "Food", 1.23, TransactionType::Expense),
            &state.db_connection.lock().unwrap(),
        )
        .unwrap();

        let response = server
            .delete(&format_endpoint(endpoints::TRANSACTION, transaction.id))
            .await;

        response.assert_status_ok();
        assert_eq!(
            response.json::<DeleteResponse>(),
            DeleteResponse {
                message: DELETED_MESSAGE.to_owned()
            }
        );
        assert_eq!(
            get_transaction(transaction.id, &state.db_connection.lock().unwrap()),
            Err(Error::NotFound)
        );
    }

    #[tokio::test]
    async fn delete_missing_transaction_is_not_found() {
        let (server, _) = must_create_test_server();

        let response = server
            .delete(&format_endpoint(endpoints::TRANSACTION, 42))
            .await;

        response.assert_status_not_found();
        assert_eq!(
            response.json::<serde_json::Value>()["detail"],
            "Transaction not found"
        );
    }

    #[tokio::test]
    async fn delete_with_overflowing_id_is_rejected() {
        let (server, _) = must_create_test_server();

        let response = server.delete("/transactions/99999999999999999999").await;

        response.assert_status_bad_request();
        assert!(
            response.json::<serde_json::Value>()["detail"].is_string(),
            "want JSON detail for unparsable id"
        );
    }

    #[tokio::test]
    async fn get_after_delete_is_not_found() {
        let (server, state) = must_create_test_server();
        let transaction = create_transaction(
            NewTransaction::new("2025-10-26", "Food", 1.23, TransactionType::Expense),
            &state.db_connection.lock().unwrap(),
        )
        .unwrap();
        let uri = format_endpoint(endpoints::TRANSACTION, transaction.id);

        server.delete(&uri).await.assert_status_ok();

        server.get(&uri).await.assert_status_not_found();
        server.delete(&uri).await.assert_status_not_found();
    }
}
