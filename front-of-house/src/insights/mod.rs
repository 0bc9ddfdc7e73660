//! Customer insight presentation
//!
//! Turns the insight bundle attached to a reservation into the one-line
//! summary and the tag list shown on reservation cards.

use serde::Serialize;
use shared::models::{CustomerInsights, InsightKind, Reservation};

/// Summary used when no insight is present
pub const NO_INSIGHTS: &str = "No specific insights available";

/// One-line summary of a diner's insights
pub fn summarize(insights: &CustomerInsights) -> String {
    let mut parts = Vec::new();

    if !insights.customer_values.is_empty() {
        parts.push(format!("Values: {}", insights.customer_values.join(", ")));
    }
    if let Some(is_new) = insights.is_new_customer {
        parts.push(if is_new { "New customer" } else { "Returning customer" }.to_string());
    }
    if !insights.special_accommodations.is_empty() {
        parts.push(format!(
            "Special needs: {}",
            insights.special_accommodations.join(", ")
        ));
    }
    if let Some(taste) = &insights.taste_preferences {
        parts.push(format!("Taste preference: {}", taste));
    }
    if !insights.staff_interaction_preferences.is_empty() {
        parts.push(format!(
            "Likes staff who are: {}",
            insights.staff_interaction_preferences.join(", ")
        ));
    }
    if !insights.personal_interests.is_empty() {
        parts.push(format!(
            "Personal interests: {}",
            insights.personal_interests.join(", ")
        ));
    }

    if parts.is_empty() {
        NO_INSIGHTS.to_string()
    } else {
        parts.join(". ")
    }
}

/// A single displayable insight with its justification
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InsightTag {
    pub kind: InsightKind,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justification: Option<String>,
}

/// Flatten insights into tags, in card order
pub fn insight_tags(insights: &CustomerInsights) -> Vec<InsightTag> {
    let mut tags = Vec::new();
    let mut push = |kind: InsightKind, value: &str| {
        tags.push(InsightTag {
            kind,
            value: value.to_string(),
            justification: insights.justification_for(kind, value).map(str::to_string),
        });
    };

    for value in &insights.customer_values {
        push(InsightKind::CustomerValues, value);
    }
    if let Some(is_new) = insights.is_new_customer {
        let label = if is_new { "New Customer" } else { "Returning Customer" };
        push(InsightKind::IsNewCustomer, label);
    }
    for value in &insights.special_accommodations {
        push(InsightKind::SpecialAccommodations, value);
    }
    if let Some(taste) = &insights.taste_preferences {
        push(InsightKind::TastePreferences, taste.as_str());
    }
    for value in &insights.staff_interaction_preferences {
        push(InsightKind::StaffInteractionPreferences, value);
    }
    for value in &insights.personal_interests {
        push(InsightKind::PersonalInterests, value);
    }
    tags
}

/// Summary and tags for one reservation card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InsightCard {
    pub summary: String,
    pub tags: Vec<InsightTag>,
}

impl InsightCard {
    /// Card for a reservation; without insights it shows the fallback summary
    pub fn for_reservation(reservation: &Reservation) -> Self {
        match reservation.insights() {
            Some(insights) => Self {
                summary: summarize(insights),
                tags: insight_tags(insights),
            },
            None => Self {
                summary: NO_INSIGHTS.to_string(),
                tags: Vec::new(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::TastePreference;

    fn insights() -> CustomerInsights {
        CustomerInsights {
            customer_values: vec!["personalized service".into(), "conversation".into()],
            is_new_customer: Some(false),
            special_accommodations: vec!["gluten-free menu".into()],
            taste_preferences: Some(TastePreference::Sweet),
            staff_interaction_preferences: vec!["chatty".into()],
            personal_interests: vec!["art".into(), "desserts".into()],
            is_new_customer_justification: Some("Mentions coming back for another visit.".into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_summary_full() {
        assert_eq!(
            summarize(&insights()),
            "Values: personalized service, conversation. Returning customer. \
             Special needs: gluten-free menu. Taste preference: sweet. \
             Likes staff who are: chatty. Personal interests: art, desserts"
        );
    }

    #[test]
    fn test_summary_empty() {
        assert_eq!(summarize(&CustomerInsights::default()), NO_INSIGHTS);
    }

    #[test]
    fn test_summary_new_customer_only() {
        let i = CustomerInsights {
            is_new_customer: Some(true),
            ..Default::default()
        };
        assert_eq!(summarize(&i), "New customer");
    }

    #[test]
    fn test_tags_carry_justifications() {
        let tags = insight_tags(&insights());
        assert_eq!(tags.len(), 8);
        assert_eq!(tags[0].kind, InsightKind::CustomerValues);
        let customer_type = tags
            .iter()
            .find(|t| t.kind == InsightKind::IsNewCustomer)
            .unwrap();
        assert_eq!(customer_type.value, "Returning Customer");
        assert_eq!(
            customer_type.justification.as_deref(),
            Some("Mentions coming back for another visit.")
        );
        assert!(tags[0].justification.is_none());
    }

    #[test]
    fn test_card_for_reservation() {
        use chrono::NaiveDate;
        use shared::models::ReservationNotes;

        let mut reservation = Reservation {
            date: NaiveDate::from_ymd_opt(2024, 5, 20).unwrap(),
            number_of_people: 2,
            orders: vec![],
            notes: None,
        };
        let empty = InsightCard::for_reservation(&reservation);
        assert_eq!(empty.summary, NO_INSIGHTS);
        assert!(empty.tags.is_empty());

        reservation.notes = Some(ReservationNotes {
            customer_insights: Some(insights()),
            ..Default::default()
        });
        let card = InsightCard::for_reservation(&reservation);
        assert_eq!(card.summary, summarize(&insights()));
        assert_eq!(card.tags.len(), 8);
    }
}
