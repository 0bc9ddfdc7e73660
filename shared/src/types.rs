//! Common types for the shared crate

/// Kitchen-side party identifier (sequential, starts at 1)
pub type PartyId = i64;

/// Physical table number in the dining room
pub type TableNumber = u32;
