//! Bankr is a backend for tracking personal income and expenses.
//!
//! This library provides a JSON REST API for recording transactions and
//! summarising them into total income, total expenses and savings.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod app_state;
mod config;
mod database_id;
mod db;
mod endpoints;
mod error;
mod extract;
mod logging;
mod routing;
mod summary;
mod transaction;

pub use app_state::AppState;
pub use config::Config;
pub use database_id::TransactionId;
pub use db::initialize as initialize_db;
pub use error::Error;
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::{build_router, cors_layer};
pub use summary::Summary;
pub use transaction::{
    NewTransaction, Transaction, TransactionType, count_transactions, create_transaction,
};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!("Could not listen for the ctrl+c signal: {error}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(error) => {
                tracing::error!("Could not listen for the terminate signal: {error}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}
