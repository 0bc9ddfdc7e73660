//! Reservation priority ranking
//!
//! Scores each reservation from spend, special needs, dietary tags, email
//! history and high-maintenance values, and sorts highest first.

pub mod ranker;
pub mod rules;

pub use ranker::{RankedReservation, rank_reservations, rank_reservations_on};
pub use rules::{ScoreBreakdown, priority_score, score_reservation};
