//! DSAR request entity and create DTO.

use consentd_core::dsar::{DsarContact, DsarType};
use consentd_core::types::{RecordId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

/// A persisted data-subject access request.
///
/// The column is `request_type`; the wire field is `type`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DsarRequest {
    pub id: RecordId,
    pub principal_identifier: String,
    pub contact: Option<Json<DsarContact>>,
    #[serde(rename = "type")]
    pub request_type: String,
    pub details: Option<String>,
    pub status: String,
    pub created_at: Timestamp,
    pub resolved_at: Option<Timestamp>,
}

/// DTO for submitting a new DSAR.
///
/// `principal_identifier` and `type` are optional here so the store can
/// reject their absence with the `missing_fields` code.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateDsar {
    pub principal_identifier: Option<String>,
    pub contact: Option<DsarContact>,
    #[serde(rename = "type")]
    pub request_type: Option<DsarType>,
    pub details: Option<String>,
}
