//! Cost analysis: decade spending buckets and the top-N ranking.

use std::collections::BTreeMap;

use crate::api::{CostAnalysisData, DecadeBucket, TopMission};
use crate::models::Mission;

#[derive(Default)]
struct DecadeAcc {
    count: usize,
    total_cost: f64,
}

/// Compute the cost view over a mission subset.
///
/// Decade buckets are ascending and only cover records with a parseable
/// date; the overall totals and the top-N ranking are date-independent and
/// include every record.
pub fn compute_cost_analysis(missions: &[Mission], top_n: usize) -> CostAnalysisData {
    let mut by_decade: BTreeMap<i32, DecadeAcc> = BTreeMap::new();

    for mission in missions {
        let Some(decade) = mission.launch_decade() else {
            continue;
        };
        let acc = by_decade.entry(decade).or_default();
        acc.count += 1;
        acc.total_cost += mission.cost;
    }

    let decades = by_decade
        .into_iter()
        .map(|(decade, acc)| DecadeBucket {
            decade,
            label: format!("{decade}s"),
            count: acc.count,
            total_cost: acc.total_cost,
            average_cost: acc.total_cost / acc.count as f64,
        })
        .collect();

    let total_cost: f64 = missions.iter().map(|m| m.cost).sum();
    let average_cost = if missions.is_empty() {
        0.0
    } else {
        total_cost / missions.len() as f64
    };

    CostAnalysisData {
        decades,
        most_expensive: top_expensive(missions, top_n),
        total_cost,
        average_cost,
    }
}

/// Top `n` missions by cost, descending.
///
/// The sort is stable, so missions sharing a cost keep their input order.
pub fn top_expensive(missions: &[Mission], n: usize) -> Vec<TopMission> {
    let mut ranked: Vec<&Mission> = missions.iter().collect();
    ranked.sort_by(|a, b| b.cost.partial_cmp(&a.cost).unwrap_or(std::cmp::Ordering::Equal));

    ranked
        .into_iter()
        .take(n)
        .map(|m| TopMission {
            id: m.id.clone(),
            name: m.name.clone(),
            country: m.country.clone(),
            year: m.launch_year(),
            cost: m.cost,
            purpose: m.purpose.clone(),
        })
        .collect()
}
