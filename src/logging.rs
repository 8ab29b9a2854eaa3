//! Middleware for logging requests and responses.

use axum::{
    body::{Body, Bytes},
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};

/// The maximum number of bytes of a body to log at the `info` level.
pub const LOG_BODY_LENGTH_LIMIT: usize = 64;

/// Log the request and response for each request.
///
/// Both the request and response are logged at the `info` level.
/// If the body is longer than [LOG_BODY_LENGTH_LIMIT] bytes, it is
/// truncated and the full body is logged at the `debug` level.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let (parts, body) = request.into_parts();
    let body_bytes = match read_body(body).await {
        Ok(bytes) => bytes,
        Err(error) => {
            tracing::error!("Could not read request body: {error}");
            return StatusCode::BAD_REQUEST.into_response();
        }
    };

    tracing::info!("Received request: {} {}", parts.method, parts.uri);
    log_body("request", &body_bytes);

    let response = next.run(Request::from_parts(parts, body_bytes.into())).await;

    let (parts, body) = response.into_parts();
    let body_bytes = match read_body(body).await {
        Ok(bytes) => bytes,
        Err(error) => {
            tracing::error!("Could not read response body: {error}");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    tracing::info!("Sending response: {}", parts.status);
    log_body("response", &body_bytes);

    Response::from_parts(parts, body_bytes.into())
}

async fn read_body(body: Body) -> Result<Bytes, axum::Error> {
    axum::body::to_bytes(body, usize::MAX).await
}

fn log_body(kind: &str, body: &[u8]) {
    let text = String::from_utf8_lossy(body);

    if text.len() > LOG_BODY_LENGTH_LIMIT {
        tracing::info!("{kind} body: {}...", truncate(&text, LOG_BODY_LENGTH_LIMIT));
        tracing::debug!("Full {kind} body: {text:?}");
    } else {
        tracing::info!("{kind} body: {text:?}");
    }
}

/// Cut `text` to at most `limit` bytes without splitting a UTF-8 character.
fn truncate(text: &str, limit: usize) -> &str {
    if text.len() <= limit {
        return text;
    }

    let mut end = limit;
    while !text.is_char_boundary(end) {
        end -= 1;
    }

    &text[..end]
}
