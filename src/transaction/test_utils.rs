use axum_test::TestServer;
use rusqlite::Connection;

use crate::{AppState, build_router};

/// Create a test server for the full router backed by an empty in-memory database.
#[track_caller]
pub fn must_create_test_server() -> (TestServer, AppState) {
    let connection =
        Connection::open_in_memory().expect("could not create in-memory SQLite database");
    let state = AppState::new(connection).expect("could not initialize test DB");
    let server =
        TestServer::new(build_router(state.clone())).expect("Could not create test server.");

    (server, state)
}
