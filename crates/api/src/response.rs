//! Shared response envelope types for API handlers.
//!
//! Success responses carry `"ok": true` plus the operation-specific fields;
//! error responses (built in [`crate::error`]) carry `"ok": false` and a
//! machine-readable `"error"` code. Use these types instead of ad-hoc
//! `serde_json::json!` so the envelope stays consistent.

use consentd_core::types::RecordId;
use serde::Serialize;

/// `201 {"ok": true, "id": ...}` — a record was created.
#[derive(Debug, Serialize)]
pub struct Created {
    pub ok: bool,
    pub id: RecordId,
}

impl Created {
    pub fn new(id: RecordId) -> Self {
        Self { ok: true, id }
    }
}

/// `{"ok": true, "count": N, "data": [...]}` — a list of records.
#[derive(Debug, Serialize)]
pub struct Listing<T: Serialize> {
    pub ok: bool,
    pub count: usize,
    pub data: Vec<T>,
}

impl<T: Serialize> Listing<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self {
            ok: true,
            count: data.len(),
            data,
        }
    }
}

/// `{"ok": true, "data": ...}` — a single record.
#[derive(Debug, Serialize)]
pub struct Fetched<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

impl<T: Serialize> Fetched<T> {
    pub fn new(data: T) -> Self {
        Self { ok: true, data }
    }
}

/// `{"ok": true}` — the operation succeeded, nothing to return.
#[derive(Debug, Default, Serialize)]
pub struct Done {
    pub ok: bool,
}

impl Done {
    pub fn new() -> Self {
        Self { ok: true }
    }
}
