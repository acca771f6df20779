mod consent_repo;
mod dsar_repo;

pub use consent_repo::ConsentRepo;
pub use dsar_repo::DsarRepo;

/// Default page size for list queries.
const DEFAULT_LIMIT: i64 = 100;

/// Hard upper bound for list queries.
const MAX_LIMIT: i64 = 200;

/// Clamp a caller-supplied limit to `[1, 200]`, defaulting to 100.
pub(crate) fn clamp_limit(limit: Option<i64>) -> i64 {
    limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
}
