pub mod consent;
pub mod dsar;

use serde::Deserialize;

/// Query parameters shared by the list endpoints.
///
/// `limit` is accepted as a raw string: an unparsable value falls back to
/// the store's default rather than failing the request.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub limit: Option<String>,
}

impl ListParams {
    /// The parsed limit, if one was supplied and parses as an integer.
    pub fn limit(&self) -> Option<i64> {
        self.limit.as_deref().and_then(|raw| raw.parse().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::ListParams;

    #[test]
    fn limit_parses_integers_and_ignores_garbage() {
        let params = ListParams {
            limit: Some("25".into()),
        };
        assert_eq!(params.limit(), Some(25));

        let params = ListParams {
            limit: Some("abc".into()),
        };
        assert_eq!(params.limit(), None);

        assert_eq!(ListParams::default().limit(), None);
    }
}
