//! Repository for the `dsar_requests` table.

use consentd_core::types::RecordId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::error::StoreError;
use crate::models::dsar::{CreateDsar, DsarRequest};
use crate::repositories::clamp_limit;

/// Column list for `dsar_requests` SELECT queries.
const COLUMNS: &str = "\
    id, principal_identifier, contact, request_type, details, \
    status, created_at, resolved_at";

/// The DSAR request store.
pub struct DsarRepo;

impl DsarRepo {
    /// Create a new DSAR with status `open`.
    ///
    /// Rejects a submission missing `principal_identifier` or `type`
    /// (`missing_fields`) before touching the database. A blank principal
    /// identifier counts as missing.
    pub async fn create(pool: &PgPool, input: CreateDsar) -> Result<DsarRequest, StoreError> {
        let principal = input
            .principal_identifier
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty());

        let (Some(principal), Some(request_type)) = (principal, input.request_type) else {
            return Err(StoreError::Validation {
                code: "missing_fields",
            });
        };

        let query = format!(
            "INSERT INTO dsar_requests (principal_identifier, contact, request_type, details) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );

        let request = sqlx::query_as::<_, DsarRequest>(&query)
            .bind(principal)
            .bind(input.contact.as_ref().map(Json))
            .bind(request_type.as_str())
            .bind(&input.details)
            .fetch_one(pool)
            .await?;

        Ok(request)
    }

    /// List DSARs, newest first. Same limit clamp as the consent store.
    pub async fn list(pool: &PgPool, limit: Option<i64>) -> Result<Vec<DsarRequest>, StoreError> {
        let limit = clamp_limit(limit);
        let query =
            format!("SELECT {COLUMNS} FROM dsar_requests ORDER BY created_at DESC LIMIT $1");

        let requests = sqlx::query_as::<_, DsarRequest>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await?;

        Ok(requests)
    }

    /// Fetch a single DSAR by id.
    pub async fn find(pool: &PgPool, id: RecordId) -> Result<Option<DsarRequest>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM dsar_requests WHERE id = $1");

        let request = sqlx::query_as::<_, DsarRequest>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(request)
    }

    /// Mark a DSAR resolved and stamp `resolved_at`.
    ///
    /// Resolving an already-resolved request succeeds and re-stamps
    /// `resolved_at`; there is no double-resolve guard.
    pub async fn resolve(pool: &PgPool, id: RecordId) -> Result<(), StoreError> {
        let result =
            sqlx::query("UPDATE dsar_requests SET status = 'resolved', resolved_at = now() WHERE id = $1")
                .bind(id)
                .execute(pool)
                .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound {
                entity: "dsar_request",
                id,
            });
        }

        Ok(())
    }
}
