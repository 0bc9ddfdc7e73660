//! JSON dataset loading

use std::io::ErrorKind;
use std::path::Path;

use serde::de::DeserializeOwned;
use shared::models::{Diner, DinerDataset, PartyManifest};
use shared::{AppError, AppResult};

use super::validation::{validate_diners, validate_parties};

fn read_json<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    let display = path.display().to_string();
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => AppError::dataset_not_found(display.clone()),
        _ => AppError::unreadable(format!("Failed to read {}: {}", display, e))
            .with_detail("path", display.clone()),
    })?;
    serde_json::from_str(&content)
        .map_err(|e| AppError::from(e).with_detail("path", display.clone()))
}

/// Parse and validate a diner dataset from JSON text
pub fn parse_diners(json: &str) -> AppResult<Vec<Diner>> {
    let dataset: DinerDataset = serde_json::from_str(json)?;
    validate_diners(&dataset)?;
    Ok(dataset.diners)
}

/// Parse and validate a kitchen manifest from JSON text
pub fn parse_parties(json: &str) -> AppResult<PartyManifest> {
    let manifest: PartyManifest = serde_json::from_str(json)?;
    validate_parties(&manifest)?;
    Ok(manifest)
}

/// Load and validate `detailed_info.json`
pub fn load_diners(path: impl AsRef<Path>) -> AppResult<Vec<Diner>> {
    let path = path.as_ref();
    let dataset: DinerDataset = read_json(path)?;
    validate_diners(&dataset)?;

    let reservations: usize = dataset.diners.iter().map(|d| d.reservations.len()).sum();
    tracing::info!(
        path = %path.display(),
        diners = dataset.diners.len(),
        reservations,
        "Diner dataset loaded"
    );
    Ok(dataset.diners)
}

/// Load and validate `dishes.json`
pub fn load_parties(path: impl AsRef<Path>) -> AppResult<PartyManifest> {
    let path = path.as_ref();
    let manifest: PartyManifest = read_json(path)?;
    validate_parties(&manifest)?;

    tracing::info!(
        path = %path.display(),
        parties = manifest.parties.len(),
        "Party manifest loaded"
    );
    Ok(manifest)
}
