//! Diner Model
//!
//! Front-of-house view of a guest: reservations with their orders and
//! AI-derived insights, plus the email and review history the insights
//! were drawn from.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Root of `detailed_info.json`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DinerDataset {
    #[serde(default)]
    pub diners: Vec<Diner>,
}

/// Diner entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diner {
    pub name: String,
    #[serde(default)]
    pub reviews: Vec<Review>,
    #[serde(default)]
    pub reservations: Vec<Reservation>,
    #[serde(default)]
    pub emails: Vec<Email>,
}

/// Review the diner left for some restaurant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub restaurant_name: String,
    pub date: NaiveDate,
    pub rating: f64,
    pub content: String,
}

/// Email thread with the restaurant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Email {
    pub date: NaiveDate,
    pub subject: String,
    /// Whole thread flattened into one body
    pub combined_thread: String,
}

impl Email {
    /// Thread length in characters
    pub fn thread_len(&self) -> usize {
        self.combined_thread.chars().count()
    }
}

/// Reservation entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    pub date: NaiveDate,
    pub number_of_people: u32,
    #[serde(default)]
    pub orders: Vec<OrderLine>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<ReservationNotes>,
}

impl Reservation {
    /// Insights attached to this reservation, if any
    pub fn insights(&self) -> Option<&CustomerInsights> {
        self.notes.as_ref()?.customer_insights.as_ref()
    }

    /// Special accommodations requested for this reservation (empty if none)
    pub fn special_accommodations(&self) -> &[String] {
        self.insights()
            .map(|i| i.special_accommodations.as_slice())
            .unwrap_or_default()
    }
}

/// Ordered item within a reservation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLine {
    pub item: String,
    /// Price in currency unit
    pub price: f64,
    #[serde(default)]
    pub dietary_tags: Vec<String>,
}

/// Notes bundle produced by the insight pipeline
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReservationNotes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_insights: Option<CustomerInsights>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

/// Food the diner leans towards
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TastePreference {
    Sweet,
    Spicy,
    Savory,
    Rich,
    Light,
    /// Anything the pipeline produced outside the known set
    #[serde(untagged)]
    Other(String),
}

impl TastePreference {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Sweet => "sweet",
            Self::Spicy => "spicy",
            Self::Savory => "savory",
            Self::Rich => "rich",
            Self::Light => "light",
            Self::Other(s) => s,
        }
    }
}

impl std::fmt::Display for TastePreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// AI-derived customer insights
///
/// Every field is optional; list fields default to empty. Each insight may
/// carry a one-sentence justification (per value for list fields).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerInsights {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub customer_values: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_new_customer: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub special_accommodations: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub taste_preferences: Option<TastePreference>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub staff_interaction_preferences: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub personal_interests: Vec<String>,

    // Justifications
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub customer_values_justifications: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_new_customer_justification: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub special_accommodations_justifications: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub taste_preferences_justification: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub staff_interaction_preferences_justifications: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub personal_interests_justifications: BTreeMap<String, String>,
}

/// Insight field names, as they appear in the dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    CustomerValues,
    IsNewCustomer,
    SpecialAccommodations,
    TastePreferences,
    StaffInteractionPreferences,
    PersonalInterests,
}

impl CustomerInsights {
    /// Justification sentence for one insight value
    ///
    /// `value` is ignored for the scalar insights (`is_new_customer`,
    /// `taste_preferences`), which carry a single justification.
    pub fn justification_for(&self, kind: InsightKind, value: &str) -> Option<&str> {
        let map = match kind {
            InsightKind::IsNewCustomer => return self.is_new_customer_justification.as_deref(),
            InsightKind::TastePreferences => {
                return self.taste_preferences_justification.as_deref();
            }
            InsightKind::CustomerValues => &self.customer_values_justifications,
            InsightKind::SpecialAccommodations => &self.special_accommodations_justifications,
            InsightKind::StaffInteractionPreferences => {
                &self.staff_interaction_preferences_justifications
            }
            InsightKind::PersonalInterests => &self.personal_interests_justifications,
        };
        map.get(value).map(String::as_str)
    }
}
