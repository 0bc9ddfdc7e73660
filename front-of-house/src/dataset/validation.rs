//! Load-time validation
//!
//! The view computations assume well-formed data; this is the one place
//! that checks it. Prices must be finite and non-negative, head counts
//! positive for both reservations and kitchen parties.

use shared::models::{DinerDataset, PartyManifest};
use shared::{AppError, AppResult};

/// Maximum allowed price per item (€1,000,000)
const MAX_PRICE: f64 = 1_000_000.0;

fn validate_price(price: f64, owner: &str, item: &str) -> AppResult<()> {
    if !price.is_finite() || price < 0.0 || price > MAX_PRICE {
        return Err(AppError::validation(format!(
            "price of {} for {} must be between 0 and {}, got {}",
            item, owner, MAX_PRICE, price
        ))
        .with_detail("owner", owner)
        .with_detail("item", item));
    }
    Ok(())
}

/// Validate every reservation and order of the diner dataset
pub fn validate_diners(dataset: &DinerDataset) -> AppResult<()> {
    for diner in &dataset.diners {
        for reservation in &diner.reservations {
            if reservation.number_of_people == 0 {
                return Err(AppError::validation(format!(
                    "reservation of {} on {} has no guests",
                    diner.name, reservation.date
                ))
                .with_detail("diner", diner.name.as_str())
                .with_detail("date", reservation.date.to_string()));
            }
            for order in &reservation.orders {
                validate_price(order.price, &diner.name, &order.item)?;
            }
        }
    }
    Ok(())
}

/// Validate every party and dish of the kitchen manifest
pub fn validate_parties(manifest: &PartyManifest) -> AppResult<()> {
    for party in &manifest.parties {
        let owner = format!("party {} ({})", party.party_id, party.customer_name);
        if party.group_size == 0 {
            return Err(AppError::validation(format!("{} has no guests", owner))
                .with_detail("party_id", party.party_id));
        }
        for dish in &party.dishes {
            validate_price(dish.price, &owner, &dish.name)?;
        }
    }
    Ok(())
}
