//! Repository for the `consent_records` table.
//!
//! Append-only: there are no update or delete operations. Erasure/retention
//! of consent history is intentionally not implemented.

use sqlx::types::Json;
use sqlx::PgPool;

use crate::error::StoreError;
use crate::models::consent::{ConsentRecord, CreateConsent};
use crate::repositories::clamp_limit;

/// Column list for `consent_records` SELECT queries.
const COLUMNS: &str = "\
    id, principal_identifier, categories, action, consent_text, \
    ip, user_agent, meta, created_at";

/// The consent event store.
pub struct ConsentRepo;

impl ConsentRepo {
    /// Append a consent event.
    ///
    /// Rejects a submission without `action` (`missing_action`) before
    /// touching the database. Omitted `categories` default to
    /// essential-only; `essential` is forced true either way.
    pub async fn create(pool: &PgPool, input: CreateConsent) -> Result<ConsentRecord, StoreError> {
        let Some(action) = input.action else {
            return Err(StoreError::Validation {
                code: "missing_action",
            });
        };

        let categories = input.categories.unwrap_or_default().normalized();
        let meta = input
            .meta
            .unwrap_or_else(|| serde_json::Value::Object(Default::default()));

        let query = format!(
            "INSERT INTO consent_records \
             (principal_identifier, categories, action, consent_text, ip, user_agent, meta) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COLUMNS}"
        );

        let record = sqlx::query_as::<_, ConsentRecord>(&query)
            .bind(&input.principal_identifier)
            .bind(Json(&categories))
            .bind(action.as_str())
            .bind(&input.consent_text)
            .bind(&input.ip)
            .bind(&input.user_agent)
            .bind(&meta)
            .fetch_one(pool)
            .await?;

        Ok(record)
    }

    /// List consent events, newest first.
    ///
    /// `limit` is clamped to `[1, 200]`, default 100.
    pub async fn list(pool: &PgPool, limit: Option<i64>) -> Result<Vec<ConsentRecord>, StoreError> {
        let limit = clamp_limit(limit);
        let query =
            format!("SELECT {COLUMNS} FROM consent_records ORDER BY created_at DESC LIMIT $1");

        let records = sqlx::query_as::<_, ConsentRecord>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await?;

        Ok(records)
    }
}
