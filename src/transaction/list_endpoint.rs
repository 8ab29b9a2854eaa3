//! Defines the endpoint for listing all transactions.

use axum::extract::State;

use crate::{
    Error,
    extract::AppJson,
    transaction::{Transaction, core::get_all_transactions, state::TransactionState},
};

/// A route handler that responds with every transaction, ordered by ID.
pub async fn list_transactions_endpoint(
    State(state): State<TransactionState>,
) -> Result<AppJson<Vec<Transaction>>, Error> {
    let connection = state.connection()?;

    get_all_transactions(&connection).map(AppJson)
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use crate::{
        endpoints,
        transaction::{
            NewTransaction, Transaction, TransactionType, create_transaction, delete_transaction,
            test_utils::must_create_test_server,
        },
    };

    #[tokio::test]
    async fn lists_nothing_for_empty_database() {
        let (server, _) = must_create_test_server();

        let response = server.get(endpoints::TRANSACTIONS).await;

        response.assert_status_ok();
        assert_eq!(response.json::<Vec<Transaction>>(), Vec::new());
    }

    #[tokio::test]
    async fn lists_remaining_transactions_after_delete() {
        let (server, state) = must_create_test_server();
        let mut want = {
            let connection = state.db_connection.lock().unwrap();
            let created: Vec<_> = (1..=5)
                .map(|i| {
                    create_transaction(
                        NewTransaction::new(
                            "2025-10-01",
                            "Food",
                            i as f64,
                            TransactionType::Expense,
                        ),
                        &connection,
                    )
                    .unwrap()
                })
                .collect();
            delete_transaction(created[2].id, &connection).unwrap();
            created
        };
        want.remove(2);

        let response = server.get(endpoints::TRANSACTIONS).await;

        response.assert_status_ok();
        assert_eq!(response.json::<Vec<Transaction>>(), want);
    }

    #[tokio::test]
    async fn storage_failure_is_500_without_details() {
        let (server, state) = must_create_test_server();
        state
            .db_connection
            .lock()
            .unwrap()
            .execute("DROP TABLE \"transaction\"", ())
            .unwrap();

        let response = server.get(endpoints::TRANSACTIONS).await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body = response.json::<serde_json::Value>();
        let detail = body["detail"].as_str().expect("detail should be a string");
        assert!(
            !detail.contains("no such table"),
            "internal details leaked to client: {body}"
        );
    }
}
