//! Chef view grouped by dish
//!
//! Flattens every active party's dishes into a catalog keyed by canonical
//! dish name, then by dietary variation.

use std::collections::HashMap;

use serde::Serialize;
use shared::models::Party;
use shared::{PartyId, TableNumber};

use super::deleted::DeletedParties;
use super::normalize::{normalize_dish_name, sorted_exceptions, variation_key};
use crate::utils::locale_cmp;

/// One plate of a dish, and who it goes to
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DishOccurrence {
    pub party_id: PartyId,
    pub table_number: TableNumber,
    pub customer_name: String,
    pub price: f64,
}

/// All plates of a dish sharing the same dietary exceptions
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DishVariation {
    /// Sorted exceptions joined with ", ", or "standard"
    pub key: String,
    pub dietary_exceptions: Vec<String>,
    pub quantity: u32,
    /// Plates in encounter order
    pub occurrences: Vec<DishOccurrence>,
}

/// Catalog entry for one canonical dish name
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DishSummary {
    pub name: String,
    pub quantity: u32,
    /// Variations in first-encounter order
    pub variations: Vec<DishVariation>,
}

impl DishSummary {
    fn new(name: String) -> Self {
        Self {
            name,
            quantity: 0,
            variations: Vec::new(),
        }
    }

    pub fn variation(&self, key: &str) -> Option<&DishVariation> {
        self.variations.iter().find(|v| v.key == key)
    }

    fn add(&mut self, key: String, exceptions: &[String], occurrence: DishOccurrence) {
        self.quantity += 1;
        match self.variations.iter_mut().find(|v| v.key == key) {
            Some(variation) => {
                variation.quantity += 1;
                variation.occurrences.push(occurrence);
            }
            None => self.variations.push(DishVariation {
                key,
                dietary_exceptions: sorted_exceptions(exceptions),
                quantity: 1,
                occurrences: vec![occurrence],
            }),
        }
    }
}

/// Deduplicated dish catalog over all parties that are not deleted
///
/// Sorted by canonical name using locale-style collation.
pub fn dish_view(parties: &[Party], deleted: &DeletedParties) -> Vec<DishSummary> {
    let mut catalog: Vec<DishSummary> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for party in parties.iter().filter(|p| !deleted.contains(p.party_id)) {
        for dish in &party.dishes {
            let name = normalize_dish_name(&dish.name).into_owned();
            let slot = *index.entry(name.clone()).or_insert_with(|| {
                catalog.push(DishSummary::new(name));
                catalog.len() - 1
            });

            catalog[slot].add(
                variation_key(&dish.dietary_exceptions),
                &dish.dietary_exceptions,
                DishOccurrence {
                    party_id: party.party_id,
                    table_number: party.table_number,
                    customer_name: party.customer_name.clone(),
                    price: dish.price,
                },
            );
        }
    }

    // names are unique after dedup and locale_cmp is total
    catalog.sort_by(|a, b| locale_cmp(&a.name, &b.name));

    tracing::debug!(dishes = catalog.len(), "Dish view computed");
    catalog
}
