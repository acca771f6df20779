//! Shared domain types for the consentd platform.
//!
//! Everything here is persistence- and transport-agnostic: the db crate maps
//! these types onto Postgres rows and the api crate onto the JSON wire format.

pub mod consent;
pub mod dsar;
pub mod types;
