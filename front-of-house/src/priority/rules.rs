//! Priority scoring rules
//!
//! A reservation's priority is the sum of five independent terms. Absent
//! notes, insights or emails contribute zero.

use serde::Serialize;
use shared::models::{Diner, Reservation};

use crate::money::{sum_prices, to_f64_exact};
use crate::utils::contains_ignore_case;

/// Points per currency unit spent
pub const SPEND_WEIGHT: f64 = 2.0;
/// Points per special accommodation
pub const ACCOMMODATION_WEIGHT: f64 = 50.0;
/// Points per dietary tag across all orders
pub const DIETARY_TAG_WEIGHT: f64 = 30.0;
/// Points per high-maintenance customer value
pub const HIGH_MAINTENANCE_WEIGHT: f64 = 15.0;

/// Mean email length (chars) above which a diner earns the first bonus
pub const LONG_EMAIL_THRESHOLD: f64 = 200.0;
/// Mean email length (chars) above which the second bonus stacks on
pub const VERY_LONG_EMAIL_THRESHOLD: f64 = 400.0;
/// Points per email-length threshold exceeded
pub const EMAIL_BONUS: f64 = 25.0;

/// Customer values that flag a guest needing extra attention
pub const HIGH_MAINTENANCE_VALUES: [&str; 3] = [
    "personalized service",
    "confidential atmosphere",
    "enthusiastic staff",
];

/// Per-term breakdown of a reservation's priority
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub spend: f64,
    pub accommodations: f64,
    pub dietary: f64,
    pub correspondence: f64,
    pub values: f64,
}

impl ScoreBreakdown {
    pub fn total(&self) -> f64 {
        self.spend + self.accommodations + self.dietary + self.correspondence + self.values
    }
}

/// Score one reservation of `diner`
pub fn score_reservation(diner: &Diner, reservation: &Reservation) -> ScoreBreakdown {
    ScoreBreakdown {
        spend: spend_points(reservation),
        accommodations: ACCOMMODATION_WEIGHT * reservation.special_accommodations().len() as f64,
        dietary: DIETARY_TAG_WEIGHT * dietary_tag_count(reservation) as f64,
        correspondence: email_bonus(diner),
        values: HIGH_MAINTENANCE_WEIGHT * high_maintenance_count(reservation) as f64,
    }
}

/// Total priority score of one reservation of `diner`
pub fn priority_score(diner: &Diner, reservation: &Reservation) -> f64 {
    score_reservation(diner, reservation).total()
}

fn spend_points(reservation: &Reservation) -> f64 {
    let spend = sum_prices(reservation.orders.iter().map(|o| o.price));
    // unrounded: sums differing below a cent must still order apart
    SPEND_WEIGHT * to_f64_exact(spend)
}

fn dietary_tag_count(reservation: &Reservation) -> usize {
    reservation.orders.iter().map(|o| o.dietary_tags.len()).sum()
}

/// Bonus for diners who write long emails
///
/// Uses the mean thread length across all of the diner's emails.
pub fn email_bonus(diner: &Diner) -> f64 {
    if diner.emails.is_empty() {
        return 0.0;
    }
    let total: usize = diner.emails.iter().map(|e| e.thread_len()).sum();
    let mean = total as f64 / diner.emails.len() as f64;

    let mut bonus = 0.0;
    if mean > LONG_EMAIL_THRESHOLD {
        bonus += EMAIL_BONUS;
    }
    if mean > VERY_LONG_EMAIL_THRESHOLD {
        bonus += EMAIL_BONUS;
    }
    bonus
}

/// Whether one customer value flags high maintenance
pub fn is_high_maintenance(value: &str) -> bool {
    HIGH_MAINTENANCE_VALUES
        .iter()
        .any(|needle| contains_ignore_case(value, needle))
}

/// Number of the reservation's customer values that flag high maintenance
///
/// A value matching several flags still counts once.
pub fn high_maintenance_count(reservation: &Reservation) -> usize {
    reservation
        .insights()
        .map(|i| {
            i.customer_values
                .iter()
                .filter(|v| is_high_maintenance(v))
                .count()
        })
        .unwrap_or(0)
}
