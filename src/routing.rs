//! Application router configuration.

use axum::{Router, http::HeaderValue, response::IntoResponse, routing::get};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use crate::{
    AppState, Error, endpoints,
    summary::get_summary_endpoint,
    transaction::{
        create_transaction_endpoint, delete_transaction_endpoint, edit_transaction_endpoint,
        get_transaction_endpoint, list_transactions_endpoint,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            endpoints::TRANSACTIONS,
            get(list_transactions_endpoint).post(create_transaction_endpoint),
        )
        .route(
            endpoints::TRANSACTION,
            get(get_transaction_endpoint)
                .put(edit_transaction_endpoint)
                .delete(delete_transaction_endpoint),
        )
        .route(endpoints::SUMMARY, get(get_summary_endpoint))
        .fallback(get_404_not_found)
        .method_not_allowed_fallback(get_405_method_not_allowed)
        .with_state(state)
}

/// Create a CORS layer that lets the frontend at `allowed_origin` use any method and header.
///
/// Requests from any other origin get no CORS headers.
///
/// Credentials are allowed, so the methods and headers are mirrored from the
/// request rather than using a wildcard.
pub fn cors_layer(allowed_origin: HeaderValue) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list([allowed_origin]))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

async fn get_404_not_found() -> impl IntoResponse {
    Error::RouteNotFound
}

async fn get_405_method_not_allowed() -> impl IntoResponse {
    Error::MethodNotAllowed
}
