//! Static datasets
//!
//! Both datasets are read once at startup and never mutated afterwards.

pub mod loader;
pub mod validation;

pub use loader::{load_diners, load_parties, parse_diners, parse_parties};

use chrono::Utc;
use shared::models::{Diner, Party};
use shared::{AppResult, ErrorCode};

use crate::core::Config;
use crate::manifest::build_manifest;

/// Everything the dashboard renders from
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub diners: Vec<Diner>,
    pub parties: Vec<Party>,
}

impl Dataset {
    /// Load both datasets from the configured paths
    ///
    /// A missing kitchen manifest is derived from the diners instead.
    pub fn load(config: &Config) -> AppResult<Self> {
        let diners = load_diners(&config.diners_path)?;
        let parties = match load_parties(&config.dishes_path) {
            Ok(manifest) => manifest.parties,
            Err(e) if e.code == ErrorCode::DatasetNotFound => {
                tracing::warn!(
                    path = %config.dishes_path,
                    "Party manifest missing, deriving it from the diner dataset"
                );
                build_manifest(&diners, Utc::now(), &config.diners_path).parties
            }
            Err(e) => return Err(e),
        };
        Ok(Self { diners, parties })
    }
}
