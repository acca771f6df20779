//! The preference lifecycle: load, save, clear, banner visibility.

use std::sync::Arc;

use chrono::Utc;
use serde_json::Value;
use tokio::sync::broadcast;

use crate::bus::{PrefsBus, PrefsEvent};
use crate::ip::IpResolver;
use crate::migrate::{legacy_timestamp, legacy_to_v1};
use crate::state::{LoadedPreferences, PreferenceState, Preferences, PrefsSource};
use crate::storage::{PrefStorage, BANNER_PREVIEW_KEY, LANG_KEY, LEGACY_KEY, PREFS_KEY};

/// Owns the storage-backed preference state.
///
/// Saves overwrite the current-format key (last-write-wins, no merge with
/// concurrent writers) and publish a change event; loads fall back to a
/// read-only projection of the legacy key.
pub struct PreferenceManager<S> {
    storage: S,
    ip_resolver: Arc<dyn IpResolver>,
    bus: PrefsBus,
}

impl<S: PrefStorage> PreferenceManager<S> {
    pub fn new(storage: S, ip_resolver: Arc<dyn IpResolver>) -> Self {
        Self {
            storage,
            ip_resolver,
            bus: PrefsBus::default(),
        }
    }

    /// Subscribe to change notifications (saves, clears, language changes).
    pub fn subscribe(&self) -> broadcast::Receiver<PrefsEvent> {
        self.bus.subscribe()
    }

    /// Load the current preference state.
    ///
    /// Prefers the current-format key; an absent or unparsable value falls
    /// back to the legacy key, projected through [`legacy_to_v1`]. The
    /// projection is read-only: the current-format key is not created.
    pub fn load(&self) -> Option<LoadedPreferences> {
        if let Some(raw) = self.storage.get(PREFS_KEY) {
            if let Ok(state) = serde_json::from_str::<PreferenceState>(&raw) {
                return Some(LoadedPreferences {
                    source: PrefsSource::V1,
                    preferences: state.preferences.normalized(),
                    updated_at: Some(state.updated_at),
                    ip: state.ip,
                    lang: state.lang,
                });
            }
            // Corrupt current-format state is treated as absent data.
        }

        let raw = self.storage.get(LEGACY_KEY)?;
        let legacy: Value = serde_json::from_str(&raw).ok()?;

        Some(LoadedPreferences {
            source: PrefsSource::Legacy,
            preferences: legacy_to_v1(&legacy),
            updated_at: legacy_timestamp(&legacy),
            ip: None,
            lang: None,
        })
    }

    /// Persist preferences, overwriting any previous state.
    ///
    /// Forces `necessary = true`, stamps `updatedAt` with the current epoch
    /// milliseconds, and best-effort-attaches the caller's IP and language.
    pub async fn save(&self, preferences: Preferences) {
        let state = PreferenceState {
            preferences: preferences.normalized(),
            updated_at: Utc::now().timestamp_millis(),
            ip: self.ip_resolver.resolve().await,
            lang: self.storage.get(LANG_KEY),
        };

        match serde_json::to_string(&state) {
            Ok(raw) => self.storage.set(PREFS_KEY, &raw),
            Err(err) => tracing::error!(error = %err, "Failed to serialize preference state"),
        }

        self.bus.publish(PrefsEvent {
            key: PREFS_KEY.to_string(),
        });
    }

    /// "Accept All": enable every category and save.
    pub async fn accept_all(&self) {
        self.save(Preferences::all_enabled()).await;
    }

    /// Withdraw consent: remove current and legacy state.
    pub fn clear(&self) {
        self.storage.remove(PREFS_KEY);
        self.storage.remove(LEGACY_KEY);

        self.bus.publish(PrefsEvent {
            key: PREFS_KEY.to_string(),
        });
    }

    /// Whether the consent banner should be shown.
    ///
    /// True when the preview flag is set, or when neither current- nor
    /// legacy-format state exists. Evaluated on load and re-evaluated on
    /// bus events; never polled.
    pub fn banner_visible(&self) -> bool {
        if self.storage.get(BANNER_PREVIEW_KEY).as_deref() == Some("1") {
            return true;
        }

        self.storage.get(PREFS_KEY).is_none() && self.storage.get(LEGACY_KEY).is_none()
    }

    /// The selected UI language, defaulting to English.
    pub fn lang(&self) -> String {
        self.storage.get(LANG_KEY).unwrap_or_else(|| "en".to_string())
    }

    /// Persist the UI language and notify subscribers.
    pub fn set_lang(&self, lang: &str) {
        self.storage.set(LANG_KEY, lang);

        self.bus.publish(PrefsEvent {
            key: LANG_KEY.to_string(),
        });
    }
}
