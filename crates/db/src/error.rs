use consentd_core::types::RecordId;

/// Errors surfaced by the record stores.
///
/// Validation happens inside the store so a rejected submission provably
/// performs no write. The `code` is the machine-readable value that ends up
/// in the HTTP error envelope.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Validation failed: {code}")]
    Validation { code: &'static str },

    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: RecordId },

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}
