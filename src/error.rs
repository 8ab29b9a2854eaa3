//! Defines the app level error type and its conversion to JSON error responses.
use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The requested transaction was not found.
    ///
    /// For HTTP request handlers, the client should check that the ID is
    /// correct and that the transaction has not already been deleted.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("Transaction not found")]
    NotFound,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,

    /// The request body could not be parsed as a transaction.
    ///
    /// Holds the status code chosen by axum for the rejection (e.g. 400 for
    /// invalid JSON syntax, 422 for a missing field) and a description of the
    /// problem that is safe to show to the client.
    #[error("invalid request body: {1}")]
    InvalidJson(StatusCode, String),

    /// The URL path parameters could not be parsed, e.g. a transaction ID
    /// that is not an integer.
    #[error("invalid URL: {1}")]
    InvalidPath(StatusCode, String),

    /// No route matches the requested path.
    #[error("Not Found")]
    RouteNotFound,

    /// The route exists but does not accept the request method.
    #[error("Method Not Allowed")]
    MethodNotAllowed,
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Error::InvalidJson(rejection.status(), rejection.body_text())
    }
}

impl From<PathRejection> for Error {
    fn from(rejection: PathRejection) -> Self {
        Error::InvalidPath(rejection.status(), rejection.body_text())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status_code, detail) = match self {
            Error::NotFound => (StatusCode::NOT_FOUND, Error::NotFound.to_string()),
            Error::InvalidJson(status_code, detail) | Error::InvalidPath(status_code, detail) => {
                (status_code, detail)
            }
            Error::RouteNotFound => (StatusCode::NOT_FOUND, Error::RouteNotFound.to_string()),
            Error::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                Error::MethodNotAllowed.to_string(),
            ),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred, check the server logs for more details."
                        .to_owned(),
                )
            }
        };

        (status_code, Json(json!({ "detail": detail }))).into_response()
    }
}
