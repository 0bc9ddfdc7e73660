//! Table assignment by party size
//!
//! Deterministic seating used when no host has placed the party yet:
//! two-tops at table 3, four-tops at 8, six-tops at 15, larger groups at 19.

use shared::TableNumber;

pub fn assign_table(group_size: u32) -> TableNumber {
    match group_size {
        0..=2 => 3,
        3..=4 => 8,
        5..=6 => 15,
        _ => 19,
    }
}
