//! Consent record entity and create DTO.
//!
//! Consent records are immutable once written (no `updated_at`): the consent
//! history is a log, not a mutable row.

use consentd_core::consent::{ConsentAction, ConsentCategories};
use consentd_core::types::{RecordId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

/// A single persisted consent event.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ConsentRecord {
    pub id: RecordId,
    pub principal_identifier: Option<String>,
    pub categories: Json<ConsentCategories>,
    pub action: String,
    pub consent_text: Option<String>,
    pub ip: Option<String>,
    pub user_agent: Option<String>,
    pub meta: serde_json::Value,
    pub created_at: Timestamp,
}

/// DTO for submitting a new consent event.
///
/// `action` is optional at this level so the store can reject its absence
/// with the `missing_action` code instead of a deserialization error.
/// `ip` and `user_agent` are captured from request headers by the HTTP
/// layer, never taken from the body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateConsent {
    pub principal_identifier: Option<String>,
    pub categories: Option<ConsentCategories>,
    pub action: Option<ConsentAction>,
    pub consent_text: Option<String>,
    pub meta: Option<serde_json::Value>,
    #[serde(skip)]
    pub ip: Option<String>,
    #[serde(skip)]
    pub user_agent: Option<String>,
}
