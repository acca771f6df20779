//! Data-subject access request (DSAR) domain types.

use serde::{Deserialize, Serialize};

/// What the data subject is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DsarType {
    Access,
    Delete,
    Rectify,
}

impl DsarType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DsarType::Access => "access",
            DsarType::Delete => "delete",
            DsarType::Rectify => "rectify",
        }
    }
}

/// Request lifecycle status.
///
/// The status is monotonic: the only server-side transition is
/// `* -> resolved`. `InProgress` exists in the schema but no server
/// operation sets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DsarStatus {
    Open,
    InProgress,
    Resolved,
}

impl DsarStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DsarStatus::Open => "open",
            DsarStatus::InProgress => "in_progress",
            DsarStatus::Resolved => "resolved",
        }
    }
}

/// Optional contact details attached to a DSAR.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DsarContact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&DsarStatus::InProgress).unwrap(),
            "\"in_progress\""
        );
        assert_eq!(DsarStatus::InProgress.as_str(), "in_progress");
    }

    #[test]
    fn contact_omits_absent_fields() {
        let contact = DsarContact {
            email: Some("subject@example.com".into()),
            ..Default::default()
        };
        let json = serde_json::to_value(&contact).unwrap();
        assert_eq!(json, serde_json::json!({"email": "subject@example.com"}));
    }
}
