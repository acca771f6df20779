//! Handlers for DSAR endpoints.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use consentd_core::types::RecordId;
use consentd_db::models::dsar::CreateDsar;
use consentd_db::repositories::DsarRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::ListParams;
use crate::response::{Created, Done, Fetched, Listing};
use crate::state::AppState;

/// POST /api/dsar
///
/// Submit a data-subject access request.
pub async fn submit_dsar(
    State(state): State<AppState>,
    Json(input): Json<CreateDsar>,
) -> AppResult<impl IntoResponse> {
    let request = DsarRepo::create(&state.pool, input).await?;

    tracing::info!(
        id = %request.id,
        request_type = %request.request_type,
        "DSAR submitted",
    );

    Ok((StatusCode::CREATED, Json(Created::new(request.id))))
}

/// GET /api/dsar?limit=N
///
/// List DSARs, newest first.
pub async fn list_dsars(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<impl IntoResponse> {
    let requests = DsarRepo::list(&state.pool, params.limit()).await?;
    Ok(Json(Listing::new(requests)))
}

/// GET /api/dsar/{id}
pub async fn get_dsar(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_id(&id)?;

    let request = DsarRepo::find(&state.pool, id)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Json(Fetched::new(request)))
}

/// POST /api/dsar/{id}/resolve
///
/// Mark a DSAR resolved and stamp `resolved_at`. Resolving twice succeeds
/// and re-stamps the timestamp.
pub async fn resolve_dsar(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_id(&id)?;

    DsarRepo::resolve(&state.pool, id).await?;

    tracing::info!(id = %id, "DSAR resolved");

    Ok(Json(Done::new()))
}

/// Parse a path id. A malformed id cannot address any record, so it maps to
/// `not_found` rather than a separate error code.
fn parse_id(raw: &str) -> Result<RecordId, AppError> {
    raw.parse::<RecordId>().map_err(|_| AppError::NotFound)
}
