//! Country leaderboard aggregation.

use std::collections::BTreeMap;

use crate::api::CountryStats;
use crate::models::{Mission, MissionStatus};

use super::percentage;

#[derive(Default)]
struct CountryAcc {
    total: usize,
    successful: usize,
    failed: usize,
    crewed: usize,
    total_cost: f64,
}

/// Aggregate the subset per country for the leaderboard.
///
/// `failed` counts every non-Success outcome, partial failures included.
/// The result is ordered by mission count descending, ties broken by
/// country name ascending so the ranking is deterministic.
pub fn compute_country_stats(missions: &[Mission]) -> Vec<CountryStats> {
    let mut by_country: BTreeMap<&str, CountryAcc> = BTreeMap::new();

    for mission in missions {
        let acc = by_country.entry(mission.country.as_str()).or_default();
        acc.total += 1;
        acc.total_cost += mission.cost;
        if mission.status == MissionStatus::Success {
            acc.successful += 1;
        } else {
            acc.failed += 1;
        }
        if mission.is_crewed() {
            acc.crewed += 1;
        }
    }

    let mut stats: Vec<CountryStats> = by_country
        .into_iter()
        .map(|(country, acc)| CountryStats {
            country: country.to_string(),
            total: acc.total,
            successful: acc.successful,
            failed: acc.failed,
            crewed: acc.crewed,
            total_cost: acc.total_cost,
            success_rate_percent: percentage(acc.successful, acc.total),
        })
        .collect();

    // BTreeMap iteration already yields names ascending, and the sort is
    // stable, so ordering by count descending keeps the name tiebreak.
    stats.sort_by(|a, b| b.total.cmp(&a.total));
    stats
}
