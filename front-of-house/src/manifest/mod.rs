//! Kitchen manifest derivation
//!
//! Builds `dishes.json` from the diner dataset: one party per reservation,
//! numbered from 1 in diner order then reservation order.

pub mod seating;

pub use seating::assign_table;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use shared::PartyId;
use shared::models::{Diner, Dish, ManifestMetadata, Party, PartyManifest, Reservation};

use crate::money::{sum_prices, to_f64};

fn party_from(id: PartyId, diner: &Diner, reservation: &Reservation) -> Party {
    let dishes: Vec<Dish> = reservation
        .orders
        .iter()
        .map(|order| Dish {
            name: order.item.clone(),
            price: order.price,
            dietary_exceptions: order.dietary_tags.clone(),
        })
        .collect();

    Party {
        party_id: id,
        customer_name: diner.name.clone(),
        date: Some(reservation.date),
        table_number: assign_table(reservation.number_of_people),
        group_size: reservation.number_of_people,
        total_cost: to_f64(sum_prices(dishes.iter().map(|d| d.price))),
        special_accommodations: reservation.special_accommodations().to_vec(),
        dishes,
    }
}

/// Derive the kitchen manifest from the diner dataset
pub fn build_manifest(
    diners: &[Diner],
    generated_at: DateTime<Utc>,
    source_file: &str,
) -> PartyManifest {
    let parties: Vec<Party> = diners
        .iter()
        .flat_map(|diner| diner.reservations.iter().map(move |r| (diner, r)))
        .zip(1..)
        .map(|((diner, reservation), id)| party_from(id, diner, reservation))
        .collect();

    let total_revenue: Decimal = sum_prices(parties.iter().map(|p| p.total_cost));
    let metadata = ManifestMetadata {
        generated_at: generated_at.to_rfc3339(),
        total_parties: parties.len(),
        total_revenue: to_f64(total_revenue),
        source_file: source_file.to_string(),
    };

    tracing::info!(
        parties = metadata.total_parties,
        revenue = metadata.total_revenue,
        "Kitchen manifest derived"
    );

    PartyManifest {
        parties,
        metadata: Some(metadata),
    }
}
