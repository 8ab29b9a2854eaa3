//! Extractors that report rejections as [Error]s.

use axum::{
    extract::{FromRequest, FromRequestParts},
    response::{IntoResponse, Response},
};

use crate::Error;

/// Wraps [axum::Json] so that bodies which fail to deserialize produce the
/// same `{"detail": ...}` error shape as every other error in the app.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(Error))]
pub struct AppJson<T>(pub T);

impl<T> IntoResponse for AppJson<T>
where
    axum::Json<T>: IntoResponse,
{
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}

/// Wraps [axum::extract::Path] so that IDs which fail to parse produce a
/// `{"detail": ...}` error instead of a plain text response.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(Error))]
pub struct AppPath<T>(pub T);
