//! Kitchen board: the parties plus the session's delete set

use shared::models::Party;
use shared::{AppError, AppResult, PartyId};

use super::deleted::DeletedParties;
use super::dishes::{DishSummary, dish_view};
use super::filter::PartyFilter;
use super::tables::{TableTicket, table_view};

/// State behind the chef view
///
/// The parties never change; deleting only grows the exclusion set, and
/// every view is recomputed from scratch on request.
#[derive(Debug, Clone, Default)]
pub struct KitchenBoard {
    parties: Vec<Party>,
    deleted: DeletedParties,
}

impl KitchenBoard {
    pub fn new(parties: Vec<Party>) -> Self {
        Self {
            parties,
            deleted: DeletedParties::new(),
        }
    }

    pub fn parties(&self) -> &[Party] {
        &self.parties
    }

    pub fn deleted(&self) -> &DeletedParties {
        &self.deleted
    }

    /// Parties still on the board
    pub fn active_parties(&self) -> impl Iterator<Item = &Party> {
        self.parties
            .iter()
            .filter(|p| !self.deleted.contains(p.party_id))
    }

    /// Remove a party from both views for the rest of the session
    ///
    /// Deleting an already deleted party is a no-op.
    pub fn delete_party(&mut self, party_id: PartyId) -> AppResult<()> {
        if !self.parties.iter().any(|p| p.party_id == party_id) {
            return Err(AppError::party_not_found(party_id));
        }
        if self.deleted.insert(party_id) {
            tracing::info!(party_id, "Party removed from kitchen board");
        } else {
            tracing::warn!(party_id, "Party already removed, ignoring delete");
        }
        Ok(())
    }

    /// Table view for a search query
    pub fn tables(&self, filter: &PartyFilter) -> Vec<TableTicket<'_>> {
        table_view(&self.parties, &self.deleted, filter)
    }

    /// Dish view
    pub fn dishes(&self) -> Vec<DishSummary> {
        dish_view(&self.parties, &self.deleted)
    }
}
