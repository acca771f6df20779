//! Route definitions for DSARs.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::dsar;
use crate::state::AppState;

/// DSAR routes mounted at `/api/dsar`.
///
/// ```text
/// POST /               -> submit_dsar
/// GET  /               -> list_dsars
/// GET  /{id}           -> get_dsar
/// POST /{id}/resolve   -> resolve_dsar
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(dsar::submit_dsar).get(dsar::list_dsars))
        .route("/{id}", get(dsar::get_dsar))
        .route("/{id}/resolve", post(dsar::resolve_dsar))
}
