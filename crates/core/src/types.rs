/// Server-assigned record identifiers are opaque UUIDs.
///
/// Ids carry identity only; `created_at` timestamps may collide at the same
/// millisecond, so neither is a sequence number.
pub type RecordId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
