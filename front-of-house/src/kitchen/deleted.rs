//! Session-scoped soft delete

use std::collections::BTreeSet;

use serde::Serialize;
use shared::PartyId;

/// Parties removed from the kitchen views for the rest of the session
///
/// Insert-only: there is no way to bring a party back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DeletedParties {
    ids: BTreeSet<PartyId>,
}

impl DeletedParties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a party as removed; returns false if it already was
    pub fn insert(&mut self, party_id: PartyId) -> bool {
        self.ids.insert(party_id)
    }

    pub fn contains(&self, party_id: PartyId) -> bool {
        self.ids.contains(&party_id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = PartyId> + '_ {
        self.ids.iter().copied()
    }
}

impl FromIterator<PartyId> for DeletedParties {
    fn from_iter<I: IntoIterator<Item = PartyId>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}
