//! Preference state shapes.
//!
//! [`PreferenceState`] mirrors the JSON written to the current-format
//! storage key: `{"preferences": {...}, "updatedAt": <epoch ms>, "ip":
//! ..., "lang": ...}`. The `updatedAt` field keeps its stored camelCase
//! spelling for compatibility with existing persisted state.

use serde::{Deserialize, Serialize};

/// The four category toggles. `necessary` is not a real toggle: saves and
/// loads force it true regardless of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default = "default_true")]
    pub necessary: bool,
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

impl Default for Preferences {
    fn default() -> Self {
        Self {
            necessary: true,
            functional: false,
            analytics: false,
            marketing: false,
        }
    }
}

impl Preferences {
    /// Return a copy with the necessary-always-true invariant applied.
    pub fn normalized(mut self) -> Self {
        self.necessary = true;
        self
    }

    /// Every category enabled ("Accept All").
    pub fn all_enabled() -> Self {
        Self {
            necessary: true,
            functional: true,
            analytics: true,
            marketing: true,
        }
    }
}

/// The current-state object persisted under the current-format key.
///
/// Overwritten on every save — this is current state, not a log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreferenceState {
    pub preferences: Preferences,
    /// Epoch milliseconds of the last save.
    #[serde(rename = "updatedAt")]
    pub updated_at: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
}

/// Which storage format a load was served from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefsSource {
    V1,
    Legacy,
}

/// The result of loading preference state, after any legacy projection.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedPreferences {
    pub source: PrefsSource,
    pub preferences: Preferences,
    /// Epoch milliseconds, when the stored format carried one.
    pub updated_at: Option<i64>,
    pub ip: Option<String>,
    pub lang: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_serializes_updated_at_camel_case() {
        let state = PreferenceState {
            preferences: Preferences::default(),
            updated_at: 1_700_000_000_000,
            ip: None,
            lang: Some("en".into()),
        };

        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["updatedAt"], 1_700_000_000_000_i64);
        assert!(json.get("ip").is_none(), "absent ip must be omitted");
        assert_eq!(json["preferences"]["necessary"], true);
    }

    #[test]
    fn preferences_missing_keys_default() {
        let prefs: Preferences = serde_json::from_str(r#"{"functional": true}"#).unwrap();
        assert!(prefs.necessary);
        assert!(prefs.functional);
        assert!(!prefs.marketing);
    }
}
