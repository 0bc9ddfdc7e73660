//! Party Model
//!
//! Kitchen-side manifest: one party per seated reservation, with the
//! dishes the kitchen has to fire for it.

use crate::types::{PartyId, TableNumber};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Root of `dishes.json`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PartyManifest {
    #[serde(default)]
    pub parties: Vec<Party>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ManifestMetadata>,
}

/// Party entity (one table's worth of guests)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Party {
    pub party_id: PartyId,
    pub customer_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    pub table_number: TableNumber,
    #[serde(default)]
    pub group_size: u32,
    /// Total in currency unit, as recorded in the manifest
    #[serde(default)]
    pub total_cost: f64,
    #[serde(default)]
    pub special_accommodations: Vec<String>,
    #[serde(default)]
    pub dishes: Vec<Dish>,
}

/// Dish ordered by a party
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dish {
    pub name: String,
    /// Price in currency unit
    pub price: f64,
    #[serde(default)]
    pub dietary_exceptions: Vec<String>,
}

/// Manifest generation metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestMetadata {
    pub generated_at: String,
    pub total_parties: usize,
    pub total_revenue: f64,
    pub source_file: String,
}
