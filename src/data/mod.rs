//! Embedded mission catalog.
//!
//! The dashboard ships with a fixed dataset of historical space missions
//! (1957-2022) compiled into the binary as JSON. The pipeline itself is
//! format-agnostic: any `Vec<Mission>` works, this module is just the
//! catalog the dashboard loads at startup.

use std::collections::HashSet;

use thiserror::Error;

use crate::models::Mission;

/// Raw catalog JSON, compiled into the binary.
const MISSIONS_JSON: &str = include_str!("missions.json");

/// Catalog load failure.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid mission catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("duplicate mission id '{0}' in catalog")]
    DuplicateId(String),
}

/// Parse and validate the embedded catalog.
///
/// Ids must be unique across the dataset; everything else is taken as-is
/// (malformed dates are tolerated and handled downstream, per the fail-soft
/// policy of the filter).
pub fn builtin_catalog() -> Result<Vec<Mission>, CatalogError> {
    parse_catalog(MISSIONS_JSON)
}

/// Parse a mission catalog from a JSON array.
pub fn parse_catalog(json: &str) -> Result<Vec<Mission>, CatalogError> {
    let missions: Vec<Mission> = serde_json::from_str(json)?;

    let mut seen = HashSet::new();
    for mission in &missions {
        if !seen.insert(mission.id.as_str()) {
            return Err(CatalogError::DuplicateId(mission.id.clone()));
        }
    }

    log::info!("loaded mission catalog: {} records", missions.len());
    Ok(missions)
}

/// Distinct countries in first-seen order, for the filter panel.
pub fn distinct_countries(missions: &[Mission]) -> Vec<String> {
    distinct_by(missions, |m| &m.country)
}

/// Distinct agencies in first-seen order.
pub fn distinct_agencies(missions: &[Mission]) -> Vec<String> {
    distinct_by(missions, |m| &m.agency)
}

/// Distinct purposes in first-seen order.
pub fn distinct_purposes(missions: &[Mission]) -> Vec<String> {
    distinct_by(missions, |m| &m.purpose)
}

fn distinct_by<F>(missions: &[Mission], key: F) -> Vec<String>
where
    F: Fn(&Mission) -> &str,
{
    let mut seen = HashSet::new();
    let mut values = Vec::new();
    for mission in missions {
        let value = key(mission);
        if seen.insert(value.to_string()) {
            values.push(value.to_string());
        }
    }
    values
}
