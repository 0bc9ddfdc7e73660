//! Reservation ranking for the "Same Day" view

use chrono::NaiveDate;
use serde::Serialize;
use shared::models::{Diner, Reservation};

use super::rules::{ScoreBreakdown, score_reservation};

/// One reservation in ranked order
#[derive(Debug, Clone, Serialize)]
pub struct RankedReservation<'a> {
    pub guest_name: &'a str,
    #[serde(skip)]
    pub diner: &'a Diner,
    pub reservation: &'a Reservation,
    pub score: f64,
    pub breakdown: ScoreBreakdown,
}

/// Rank every reservation of every diner, highest priority first
///
/// Equal scores keep encounter order: diners in the given order, then each
/// diner's reservations in order.
pub fn rank_reservations(diners: &[Diner]) -> Vec<RankedReservation<'_>> {
    rank_matching(diners, |_| true)
}

/// Rank only the reservations on `date`
pub fn rank_reservations_on(diners: &[Diner], date: NaiveDate) -> Vec<RankedReservation<'_>> {
    rank_matching(diners, |r| r.date == date)
}

fn rank_matching<F>(diners: &[Diner], keep: F) -> Vec<RankedReservation<'_>>
where
    F: Fn(&Reservation) -> bool,
{
    let keep = &keep;
    let mut ranked: Vec<RankedReservation<'_>> = diners
        .iter()
        .flat_map(|diner| {
            diner
                .reservations
                .iter()
                .filter(move |r| keep(r))
                .map(move |reservation| {
                    let breakdown = score_reservation(diner, reservation);
                    RankedReservation {
                        guest_name: &diner.name,
                        diner,
                        reservation,
                        score: breakdown.total(),
                        breakdown,
                    }
                })
        })
        .collect();

    // sort_by is stable: ties stay in encounter order
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));

    tracing::debug!(count = ranked.len(), "Reservations ranked");
    ranked
}
