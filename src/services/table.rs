//! Search and sort for the mission table widget.

use std::cmp::Ordering;

use crate::api::{SortDirection, SortField, TableQuery};
use crate::models::{Mission, MissionStatus};

/// Apply a table query (text search, then a single-column sort) to a
/// mission subset.
///
/// The search is a case-insensitive substring match over name, country,
/// agency and purpose. The sort is stable, so equal keys keep their input
/// order; dates sort chronologically with unparseable dates first.
pub fn query_table(missions: &[Mission], query: &TableQuery) -> Vec<Mission> {
    let needle = query.search.to_lowercase();

    let mut rows: Vec<Mission> = missions
        .iter()
        .filter(|m| needle.is_empty() || matches_search(m, &needle))
        .cloned()
        .collect();

    rows.sort_by(|a, b| {
        let ord = compare_by_field(a, b, query.sort_field);
        match query.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });

    rows
}

fn matches_search(mission: &Mission, needle: &str) -> bool {
    mission.name.to_lowercase().contains(needle)
        || mission.country.to_lowercase().contains(needle)
        || mission.agency.to_lowercase().contains(needle)
        || mission.purpose.to_lowercase().contains(needle)
}

fn compare_by_field(a: &Mission, b: &Mission, field: SortField) -> Ordering {
    match field {
        SortField::Name => a.name.cmp(&b.name),
        // Option ordering puts None (unparseable) first.
        SortField::Date => a.launch_date().cmp(&b.launch_date()),
        SortField::Country => a.country.cmp(&b.country),
        SortField::Agency => a.agency.cmp(&b.agency),
        SortField::Status => status_rank(a.status).cmp(&status_rank(b.status)),
        SortField::Cost => a.cost.partial_cmp(&b.cost).unwrap_or(Ordering::Equal),
        SortField::Crew => a.crew.cmp(&b.crew),
        SortField::Purpose => a.purpose.cmp(&b.purpose),
    }
}

fn status_rank(status: MissionStatus) -> usize {
    MissionStatus::ALL
        .iter()
        .position(|&s| s == status)
        .unwrap_or(MissionStatus::ALL.len())
}
