//! Totals of income, expenses and savings across all transactions.

use axum::extract::State;
use rusqlite::Connection;
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    extract::AppJson,
    transaction::{Transaction, TransactionState, TransactionType, get_all_transactions},
};

/// The total income and expenses, and their difference.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Summary {
    /// The sum of the amounts of all "income" transactions.
    pub income: f64,
    /// The sum of the amounts of all "expense" transactions.
    pub expenses: f64,
    /// Income minus expenses.
    pub savings: f64,
}

impl Summary {
    /// Add up `transactions` in the given order.
    ///
    /// Transactions with a type other than "income" or "expense" are not counted.
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        let (income, expenses) =
            transactions
                .iter()
                .fold((0.0, 0.0), |(income, expenses), transaction| {
                    match TransactionType::from_label(&transaction.type_) {
                        Some(TransactionType::Income) => (income + transaction.amount, expenses),
                        Some(TransactionType::Expense) => (income, expenses + transaction.amount),
                        None => (income, expenses),
                    }
                });

        Self {
            income,
            expenses,
            savings: income - expenses,
        }
    }
}

/// Get the summary of every transaction in the database.
///
/// # Errors
/// This function will return a [Error::SqlError] there is some SQL error.
pub fn get_summary(connection: &Connection) -> Result<Summary, Error> {
    let transactions = get_all_transactions(connection)?;

    Ok(Summary::from_transactions(&transactions))
}

/// A route handler that responds with the income, expenses and savings totals.
pub async fn get_summary_endpoint(
    State(state): State<TransactionState>,
) -> Result<AppJson<Summary>, Error> {
    let connection = state.connection()?;

    get_summary(&connection).map(AppJson)
}

#[cfg(test)]
mod summary_tests {
    use crate::transaction::Transaction;

    use super::Summary;

    fn transaction(amount: f64, type_: &str) -> Transaction {
        Transaction {
            id: 0,
            date: "2025-10-01".to_owned(),
            category: "Test".to_owned(),
            amount,
            type_: type_.to_owned(),
            description: None,
        }
    }

    #[test]
    fn empty_summary_is_zero() {
        let got = Summary::from_transactions(&[]);

        assert_eq!(
            got,
            Summary {
                income: 0.0,
                expenses: 0.0,
                savings: 0.0
            }
        );
    }

    #[test]
    fn savings_is_income_minus_expenses() {
        let transactions = [transaction(100.0, "income"), transaction(30.0, "expense")];

        let got = Summary::from_transactions(&transactions);

        assert_eq!(
            got,
            Summary {
                income: 100.0,
                expenses: 30.0,
                savings: 70.0
            }
        );
    }

    #[test]
    fn ignores_unrecognised_types() {
        let mut transactions = vec![transaction(100.0, "income"), transaction(30.0, "expense")];
        let want = Summary::from_transactions(&transactions);
        transactions.push(transaction(9999.0, "transfer"));
        transactions.push(transaction(5.0, "Income"));

        let got = Summary::from_transactions(&transactions);

        assert_eq!(got, want);
    }

    #[test]
    fn does_not_check_sign_of_amount() {
        let transactions = [transaction(-20.0, "expense"), transaction(10.0, "income")];

        let got = Summary::from_transactions(&transactions);

        assert_eq!(got.expenses, -20.0);
        assert_eq!(got.savings, 30.0);
    }

    #[test]
    fn savings_can_be_negative() {
        let transactions = [
            transaction(50.0, "income"),
            transaction(30.0, "expense"),
            transaction(45.0, "expense"),
        ];

        let got = Summary::from_transactions(&transactions);

        assert_eq!(got.income, 50.0);
        assert_eq!(got.expenses, 75.0);
        assert_eq!(got.savings, -25.0);
    }
}
