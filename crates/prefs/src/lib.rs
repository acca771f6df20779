//! Client-side consent preference state.
//!
//! This crate is the embeddable counterpart to the server's consent log: a
//! current-state preference object persisted in an injectable key-value
//! store, with read-only migration from a legacy storage format, a
//! publish/subscribe change bus (replacing browser storage events), and
//! pure normalization of heterogeneous server records for display.
//!
//! Nothing here touches a browser API directly — hosts provide a
//! [`storage::PrefStorage`] implementation and (optionally) an
//! [`ip::IpResolver`], which keeps every contract testable in-process.

pub mod bus;
pub mod ip;
pub mod manager;
pub mod migrate;
pub mod normalize;
pub mod state;
pub mod storage;

pub use bus::{PrefsBus, PrefsEvent};
pub use manager::PreferenceManager;
pub use state::{LoadedPreferences, PreferenceState, Preferences, PrefsSource};
