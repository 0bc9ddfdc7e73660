//! Per-date reservation list

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::Serialize;
use shared::models::{Diner, Reservation};

/// A reservation together with the diner who made it
#[derive(Debug, Clone, Serialize)]
pub struct DatedReservation<'a> {
    pub guest_name: &'a str,
    pub reservation: &'a Reservation,
}

/// Headline numbers for one service day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DaySummary {
    pub date: NaiveDate,
    pub parties: usize,
    pub total_guests: u32,
}

/// Every date that has at least one reservation, ascending
pub fn available_dates(diners: &[Diner]) -> Vec<NaiveDate> {
    diners
        .iter()
        .flat_map(|d| d.reservations.iter().map(|r| r.date))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Date the dashboard opens on: the earliest one with reservations
pub fn default_date(diners: &[Diner]) -> Option<NaiveDate> {
    diners
        .iter()
        .flat_map(|d| d.reservations.iter().map(|r| r.date))
        .min()
}

/// Reservations on `date`, in diner order then reservation order
pub fn reservations_on(diners: &[Diner], date: NaiveDate) -> Vec<DatedReservation<'_>> {
    diners
        .iter()
        .flat_map(|diner| {
            diner
                .reservations
                .iter()
                .filter(move |r| r.date == date)
                .map(move |reservation| DatedReservation {
                    guest_name: &diner.name,
                    reservation,
                })
        })
        .collect()
}

/// Party count and guest total for a day's reservations
pub fn summarize_day(date: NaiveDate, reservations: &[DatedReservation<'_>]) -> DaySummary {
    DaySummary {
        date,
        parties: reservations.len(),
        total_guests: reservations
            .iter()
            .map(|r| r.reservation.number_of_people)
            .sum(),
    }
}
