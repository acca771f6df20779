//! Handlers for consent event endpoints.

use std::convert::Infallible;
use std::net::SocketAddr;

use axum::extract::{ConnectInfo, FromRequestParts, Query, State};
use axum::http::request::Parts;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use consentd_db::models::consent::CreateConsent;
use consentd_db::repositories::ConsentRepo;

use crate::error::AppResult;
use crate::handlers::ListParams;
use crate::response::{Created, Listing};
use crate::state::AppState;

/// POST /api/consent
///
/// Append a consent event. The client IP (first `x-forwarded-for` hop,
/// falling back to the socket remote address) and user agent are captured
/// from the request, never from the body.
pub async fn submit_consent(
    State(state): State<AppState>,
    RemoteAddr(remote_addr): RemoteAddr,
    headers: HeaderMap,
    Json(mut input): Json<CreateConsent>,
) -> AppResult<impl IntoResponse> {
    input.ip =
        client_ip(&headers).or_else(|| remote_addr.map(|addr| addr.ip().to_string()));
    input.user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|value| value.to_str().ok())
        .map(String::from);

    let record = ConsentRepo::create(&state.pool, input).await?;

    tracing::info!(id = %record.id, action = %record.action, "Consent event recorded");

    Ok((StatusCode::CREATED, Json(Created::new(record.id))))
}

/// GET /api/consent?limit=N
///
/// List consent events, newest first.
pub async fn list_consents(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<impl IntoResponse> {
    let records = ConsentRepo::list(&state.pool, params.limit()).await?;
    Ok(Json(Listing::new(records)))
}

/// The socket remote address, when the server was started with connect
/// info. Absent under test routers built without it.
pub struct RemoteAddr(pub Option<SocketAddr>);

impl<S: Send + Sync> FromRequestParts<S> for RemoteAddr {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let addr = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| *addr);
        Ok(Self(addr))
    }
}

/// First hop of the `x-forwarded-for` header, if present and non-empty.
fn client_ip(headers: &HeaderMap) -> Option<String> {
    headers
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(|hop| hop.trim().to_string())
        .filter(|hop| !hop.is_empty())
}
