//! Filter evaluator: narrows the catalog to the user's selection.

use crate::models::{FilterSpec, Mission};

/// Apply a filter spec to a mission sequence.
///
/// A mission is kept iff its launch date falls inside the inclusive date
/// range and every non-empty inclusion set contains the matching field
/// (exact, case-sensitive). Input order is preserved.
///
/// A record whose date does not parse fails the range check and is dropped;
/// bad data never aborts the pipeline.
pub fn filter_missions(missions: &[Mission], spec: &FilterSpec) -> Vec<Mission> {
    missions
        .iter()
        .filter(|m| matches_spec(m, spec))
        .cloned()
        .collect()
}

fn matches_spec(mission: &Mission, spec: &FilterSpec) -> bool {
    let date_in_range = match mission.launch_date() {
        Some(date) => spec.date_range.contains(date),
        None => {
            log::debug!(
                "mission '{}' has unparseable date '{}', excluded from date range",
                mission.id,
                mission.date
            );
            false
        }
    };

    date_in_range
        && (spec.countries.is_empty() || spec.countries.contains(&mission.country))
        && (spec.agencies.is_empty() || spec.agencies.contains(&mission.agency))
        && (spec.purposes.is_empty() || spec.purposes.contains(&mission.purpose))
        && (spec.statuses.is_empty() || spec.statuses.contains(&mission.status))
}
