pub mod consent;
pub mod dsar;
