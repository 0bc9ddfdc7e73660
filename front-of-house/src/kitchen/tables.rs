//! Chef view grouped by table

use serde::Serialize;
use shared::models::Party;

use super::deleted::DeletedParties;
use super::filter::PartyFilter;
use crate::money::{sum_prices, to_f64};

/// One party's card in the table view
#[derive(Debug, Clone, Serialize)]
pub struct TableTicket<'a> {
    #[serde(flatten)]
    pub party: &'a Party,
    /// Sum of the party's dish prices
    pub total: f64,
}

impl<'a> TableTicket<'a> {
    pub fn new(party: &'a Party) -> Self {
        let total = to_f64(sum_prices(party.dishes.iter().map(|d| d.price)));
        Self { party, total }
    }
}

/// Parties that are not deleted and match `filter`, by table number
///
/// Parties sharing a table number keep their manifest order.
pub fn table_view<'a>(
    parties: &'a [Party],
    deleted: &DeletedParties,
    filter: &PartyFilter,
) -> Vec<TableTicket<'a>> {
    let mut tickets: Vec<TableTicket<'a>> = parties
        .iter()
        .filter(|p| !deleted.contains(p.party_id))
        .filter(|p| filter.matches(p))
        .map(TableTicket::new)
        .collect();
    tickets.sort_by_key(|t| t.party.table_number);

    tracing::debug!(
        query = filter.query(),
        shown = tickets.len(),
        "Table view computed"
    );
    tickets
}
