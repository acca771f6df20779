//! Route definitions for consent events.

use axum::routing::post;
use axum::Router;

use crate::handlers::consent;
use crate::state::AppState;

/// Consent routes mounted at `/api/consent`.
///
/// ```text
/// POST /    -> submit_consent
/// GET  /    -> list_consents
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(consent::submit_consent).get(consent::list_consents))
}
