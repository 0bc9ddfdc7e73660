//! Data models
//!
//! Mirrors the two static JSON datasets the dashboard renders:
//! `detailed_info.json` (diners) and `dishes.json` (kitchen parties).

pub mod diner;
pub mod party;

// Re-exports
pub use diner::*;
pub use party::*;
