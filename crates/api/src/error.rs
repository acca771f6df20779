use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use consentd_db::StoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`StoreError`] for store-level errors and implements
/// [`IntoResponse`] to produce the `{"ok": false, "error": <code>}` wire
/// envelope. Database detail is logged server-side and never leaked.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A store-level error from `consentd_db`.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A resource addressed by the request does not exist.
    #[error("Not found")]
    NotFound,
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            AppError::Store(StoreError::Validation { code }) => (StatusCode::BAD_REQUEST, *code),

            AppError::Store(StoreError::NotFound { .. }) | AppError::NotFound => {
                (StatusCode::NOT_FOUND, "not_found")
            }

            AppError::Store(StoreError::Database(err)) => {
                tracing::error!(error = %err, "Database error");
                (StatusCode::INTERNAL_SERVER_ERROR, "server_error")
            }
        };

        let body = json!({
            "ok": false,
            "error": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
