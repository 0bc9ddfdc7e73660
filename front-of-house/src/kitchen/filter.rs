//! Search filter for the table view

use shared::models::Party;

use crate::utils::contains_ignore_case;

/// Free-text party search
///
/// A party matches when the query is empty, is exactly its identifier, or
/// is a case-insensitive substring of the customer name or of any dish name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartyFilter {
    query: String,
}

impl PartyFilter {
    pub fn new(query: impl Into<String>) -> Self {
        Self { query: query.into() }
    }

    /// Filter that matches every party
    pub fn all() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_empty(&self) -> bool {
        self.query.is_empty()
    }

    pub fn matches(&self, party: &Party) -> bool {
        self.query.is_empty()
            || party.party_id.to_string() == self.query
            || contains_ignore_case(&party.customer_name, &self.query)
            || party
                .dishes
                .iter()
                .any(|dish| contains_ignore_case(&dish.name, &self.query))
    }
}

impl From<&str> for PartyFilter {
    fn from(query: &str) -> Self {
        Self::new(query)
    }
}
