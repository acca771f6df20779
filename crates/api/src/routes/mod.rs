pub mod consent;
pub mod dsar;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /consent                  POST submit, GET list
/// /dsar                     POST submit, GET list
/// /dsar/{id}                GET fetch one
/// /dsar/{id}/resolve        POST mark resolved
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/consent", consent::router())
        .nest("/dsar", dsar::router())
}
