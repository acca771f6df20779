//! Injectable key-value storage.
//!
//! Browser hosts back this with localStorage; tests and native hosts use
//! [`MemoryStorage`]. Keeping storage behind a trait is what makes the
//! preference lifecycle testable without a browser environment.

use std::collections::HashMap;
use std::sync::Mutex;

/// Current-format preference state key.
pub const PREFS_KEY: &str = "consentd_prefs_v1";

/// Legacy-format preference key. Read-only: migrated at load time, never
/// written back.
pub const LEGACY_KEY: &str = "consentd_consent";

/// Selected UI language.
pub const LANG_KEY: &str = "consentd_lang";

/// Banner preview override flag; the banner is forced visible while this
/// is `"1"`.
pub const BANNER_PREVIEW_KEY: &str = "consentd_banner_preview";

/// String key-value store with last-write-wins semantics.
///
/// No locking across operations: concurrent writers race exactly like two
/// browser tabs writing the same localStorage key, and the most recent
/// write persists.
pub trait PrefStorage: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory storage for tests and native embedding.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    inner: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PrefStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.lock().expect("storage lock poisoned").get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.inner
            .lock()
            .expect("storage lock poisoned")
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.inner.lock().expect("storage lock poisoned").remove(key);
    }
}
