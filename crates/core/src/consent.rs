//! Consent event domain types.
//!
//! A consent record is an append-only event: what the user decided, which
//! categories they decided it for, and the audit context captured at the
//! moment of the decision. There is no "current consent" row — the history
//! is the source of truth.

use serde::{Deserialize, Serialize};

/// What the user did when the record was captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsentAction {
    Accept,
    Reject,
    Withdraw,
    Partial,
}

impl ConsentAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConsentAction::Accept => "accept",
            ConsentAction::Reject => "reject",
            ConsentAction::Withdraw => "withdraw",
            ConsentAction::Partial => "partial",
        }
    }
}

/// The fixed category toggles a consent record covers.
///
/// `essential` is not a real toggle: processing in that category is always
/// permitted, and [`ConsentCategories::normalized`] forces it true no matter
/// what the caller submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsentCategories {
    #[serde(default = "default_true")]
    pub essential: bool,
    #[serde(default)]
    pub functional: bool,
    #[serde(default)]
    pub analytics: bool,
    #[serde(default)]
    pub marketing: bool,
}

fn default_true() -> bool {
    true
}

impl Default for ConsentCategories {
    /// The defaults applied when a submission omits `categories` entirely.
    fn default() -> Self {
        Self {
            essential: true,
            functional: false,
            analytics: false,
            marketing: false,
        }
    }
}

impl ConsentCategories {
    /// Return a copy with the essential-always-true invariant applied.
    pub fn normalized(mut self) -> Self {
        self.essential = true;
        self
    }
}
