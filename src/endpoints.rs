//! The API endpoint URIs.
//!
//! Endpoints that take a parameter, e.g., '/transactions/{transaction_id}', use the
//! axum path syntax so they can be passed directly to the router.

/// The route for creating and listing transactions.
pub const TRANSACTIONS: &str = "/transactions/";
/// The route for getting, updating and deleting a single transaction.
pub const TRANSACTION: &str = "/transactions/{transaction_id}";
/// The route for the income, expenses and savings summary.
pub const SUMMARY: &str = "/summary/";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// Used by tests to build concrete URIs from [TRANSACTION].
#[cfg(test)]
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    match (endpoint_path.find('{'), endpoint_path.find('}')) {
        (Some(start), Some(end)) if start < end => format!(
            "{}{id}{}",
            &endpoint_path[..start],
            &endpoint_path[end + 1..]
        ),
        _ => endpoint_path.to_owned(),
    }
}
