//! In-process change-notification bus backed by `tokio::sync::broadcast`.
//!
//! Replaces the browser `storage` event: components that care about
//! preference changes (banner visibility, admin views) subscribe and
//! re-evaluate when an event arrives. There is no polling.

use tokio::sync::broadcast;

/// Default buffer capacity for the broadcast channel.
const DEFAULT_CAPACITY: usize = 64;

/// A preference-storage change notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefsEvent {
    /// The storage key that changed.
    pub key: String,
}

/// Fan-out bus for [`PrefsEvent`]s.
pub struct PrefsBus {
    sender: broadcast::Sender<PrefsEvent>,
}

impl PrefsBus {
    /// Create a bus with a specific channel capacity.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish a change to all current subscribers.
    ///
    /// With zero subscribers the event is silently dropped, matching a
    /// storage event nobody listens for.
    pub fn publish(&self, event: PrefsEvent) {
        let _ = self.sender.send(event);
    }

    /// Subscribe to future change events.
    pub fn subscribe(&self) -> broadcast::Receiver<PrefsEvent> {
        self.sender.subscribe()
    }
}

impl Default for PrefsBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
