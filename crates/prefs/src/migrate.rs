//! Read-time projection of the legacy storage format.
//!
//! The legacy key held `{"action": ..., "categories": {"functional": ...,
//! "analytics": ...}, "ts": ...}`. The projection is pure and applied only
//! at read time: loading legacy state never creates or updates the
//! current-format key.

use serde_json::Value;

use crate::state::Preferences;

/// Project a legacy-format value into current-format preferences.
///
/// `functional` and `analytics` are carried over (absent or non-boolean
/// values read as false), `marketing` is forced false (the legacy format
/// predates it), and `necessary` is forced true.
pub fn legacy_to_v1(legacy: &Value) -> Preferences {
    let categories = legacy.get("categories");
    let flag = |key: &str| {
        categories
            .and_then(|c| c.get(key))
            .and_then(Value::as_bool)
            .unwrap_or(false)
    };

    Preferences {
        necessary: true,
        functional: flag("functional"),
        analytics: flag("analytics"),
        marketing: false,
    }
}

/// Extract the legacy save timestamp (`ts`, epoch ms), if present.
pub fn legacy_timestamp(legacy: &Value) -> Option<i64> {
    legacy.get("ts").and_then(Value::as_i64)
}
