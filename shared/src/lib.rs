//! Shared types for the front-of-house dashboard
//!
//! Data models for the diner and kitchen datasets, the unified error
//! system, and common type aliases.

pub mod error;
pub mod models;
pub mod types;

// Re-exports
pub use error::{AppError, AppResult, ErrorCode};
pub use serde::{Deserialize, Serialize};
pub use types::{PartyId, TableNumber};
