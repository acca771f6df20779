//! Normalization of heterogeneous server records for display.
//!
//! Server payloads have drifted over time: ids arrive as `id`, `_id` or
//! `uuid`; timestamps as `updatedAt`, `createdAt`, `ts`, `timestamp` or
//! `created_at`; category toggles under `categories` or `preferences`.
//! Each logical field is resolved from an explicit, ordered list of
//! accepted source fields. Everything here is pure.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::state::LoadedPreferences;

/// Accepted source fields for record ids, in priority order.
const ID_KEYS: &[&str] = &["id", "_id", "uuid"];

/// Accepted source fields for consent timestamps, in priority order.
const CONSENT_DATE_KEYS: &[&str] = &["updatedAt", "createdAt", "ts", "timestamp", "created_at"];

/// Accepted source fields for DSAR creation timestamps, in priority order.
const DSAR_DATE_KEYS: &[&str] = &["createdAt", "created_at", "ts", "timestamp"];

/// Accepted source fields for client IPs, in priority order.
const IP_KEYS: &[&str] = &["ip", "clientIp", "request_ip", "remote_addr"];

/// First non-null value among `keys`, in order.
pub fn first_defined<'a>(value: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| value.get(*key))
        .find(|v| !v.is_null())
}

fn string_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// A consent record reduced to the fields the UI displays.
#[derive(Debug, Clone, PartialEq)]
pub struct ConsentRow {
    pub id: String,
    pub action: String,
    /// Boolean category toggles, whichever key the source spelled them under.
    pub categories: BTreeMap<String, bool>,
    /// The raw timestamp value (epoch ms number or ISO string), untouched.
    pub when: Option<Value>,
    pub ip: Option<String>,
}

/// A DSAR record reduced to the fields the UI displays.
#[derive(Debug, Clone, PartialEq)]
pub struct DsarRow {
    pub id: String,
    pub request_type: Option<String>,
    pub principal_identifier: Option<String>,
    pub contact_email: Option<String>,
    pub status: Option<String>,
    pub created: Option<Value>,
}

/// Normalize a single consent record.
///
/// `index` provides the positional fallback id used when the record
/// carries no id field at all.
pub fn normalize_consent(index: usize, value: &Value) -> ConsentRow {
    let id = first_defined(value, ID_KEYS)
        .map(string_of)
        .unwrap_or_else(|| (index + 1).to_string());

    let action = value
        .get("action")
        .and_then(Value::as_str)
        .unwrap_or("custom")
        .to_string();

    let categories = value
        .get("categories")
        .or_else(|| value.get("preferences"))
        .and_then(Value::as_object)
        .map(|object| {
            object
                .iter()
                .filter_map(|(key, v)| v.as_bool().map(|b| (key.clone(), b)))
                .collect()
        })
        .unwrap_or_default();

    ConsentRow {
        id,
        action,
        categories,
        when: first_defined(value, CONSENT_DATE_KEYS).cloned(),
        ip: first_defined(value, IP_KEYS).and_then(Value::as_str).map(String::from),
    }
}

/// Normalize a single DSAR record.
pub fn normalize_dsar(index: usize, value: &Value) -> DsarRow {
    let id = first_defined(value, ID_KEYS)
        .map(string_of)
        .unwrap_or_else(|| (index + 1).to_string());

    let as_string = |key: &str| value.get(key).and_then(Value::as_str).map(String::from);

    DsarRow {
        id,
        request_type: as_string("type"),
        principal_identifier: as_string("principal_identifier"),
        contact_email: value
            .pointer("/contact/email")
            .and_then(Value::as_str)
            .map(String::from),
        status: as_string("status"),
        created: first_defined(value, DSAR_DATE_KEYS).cloned(),
    }
}

/// Merge the local preference state with server consent records for display.
///
/// The local current-state entry (when present) leads, followed by the
/// server rows normalized in order.
pub fn merge_with_server(local: Option<&LoadedPreferences>, rows: &[Value]) -> Vec<ConsentRow> {
    let mut merged = Vec::with_capacity(rows.len() + 1);

    if let Some(state) = local {
        let prefs = state.preferences;
        let categories = BTreeMap::from([
            ("necessary".to_string(), prefs.necessary),
            ("functional".to_string(), prefs.functional),
            ("analytics".to_string(), prefs.analytics),
            ("marketing".to_string(), prefs.marketing),
        ]);

        merged.push(ConsentRow {
            id: "local".to_string(),
            action: "current".to_string(),
            categories,
            when: state.updated_at.map(Value::from),
            ip: state.ip.clone(),
        });
    }

    merged.extend(
        rows.iter()
            .enumerate()
            .map(|(index, value)| normalize_consent(index, value)),
    );

    merged
}
