use std::{fs::OpenOptions, path::Path, process::exit, sync::Arc};

use axum::{
    Router,
    extract::{MatchedPath, Request},
    http::HeaderValue,
    middleware,
};
use axum_server::Handle;
use clap::Parser;
use rusqlite::Connection;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, Layer, filter, layer::SubscriberExt, util::SubscriberInitExt};

use bankr::{AppState, Config, build_router, cors_layer, graceful_shutdown, logging_middleware};

#[tokio::main]
async fn main() {
    let config = Config::parse();

    if let Err(error) = setup_logging(config.log_file.as_deref()) {
        eprintln!("Could not set up logging: {error}");
        exit(1);
    }

    let allowed_origin = match HeaderValue::from_str(&config.allowed_origin) {
        Ok(origin) => origin,
        Err(error) => {
            tracing::error!("Invalid allowed origin {:?}: {error}", config.allowed_origin);
            exit(1);
        }
    };

    let conn = match Connection::open(&config.db_path) {
        Ok(conn) => conn,
        Err(error) => {
            tracing::error!("Could not open database {:?}: {error}", config.db_path);
            exit(1);
        }
    };

    let state = match AppState::new(conn) {
        Ok(state) => state,
        Err(error) => {
            tracing::error!("Could not initialize database: {error}");
            exit(1);
        }
    };

    let handle = Handle::new();
    tokio::spawn(graceful_shutdown(handle.clone()));

    let router = build_router(state)
        .layer(middleware::from_fn(logging_middleware))
        .layer(cors_layer(allowed_origin));
    let router = add_tracing_layer(router);

    let addr = config.socket_addr();
    tracing::info!("HTTP server listening on {}", addr);
    if let Err(error) = axum_server::bind(addr)
        .handle(handle)
        .serve(router.into_make_service())
        .await
    {
        tracing::error!("Server stopped with an error: {error}");
        exit(1);
    }
}

fn setup_logging(log_file: Option<&Path>) -> Result<(), std::io::Error> {
    let stdout_log = tracing_subscriber::fmt::layer()
        .pretty()
        .with_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")));

    let debug_log = match log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;

            Some(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Arc::new(file))
                    .with_filter(filter::LevelFilter::DEBUG),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(stdout_log)
        .with(debug_log)
        .init();

    Ok(())
}

fn add_tracing_layer(router: Router) -> Router {
    let tracing_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request| {
            let method = req.method();
            let uri = req.uri();

            let matched_path = req
                .extensions()
                .get::<MatchedPath>()
                .map(|matched_path| matched_path.as_str());

            tracing::debug_span!("request", %method, %uri, matched_path)
        })
        // By default, `TraceLayer` will log 5xx responses but we're doing our specific
        // logging of errors so disable that
        .on_failure(());

    router.layer(tracing_layer)
}
