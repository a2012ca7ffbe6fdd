//! Headline summary statistics for the dashboard stat cards.

use crate::api::SummaryStats;
use crate::models::{Mission, MissionStatus};

use super::percentage;

/// Compute the stat-card counters over a mission subset.
///
/// An empty subset yields an all-zero summary, never an error; the rate
/// guard avoids dividing by zero.
pub fn compute_summary(missions: &[Mission]) -> SummaryStats {
    let total = missions.len();
    let successful = missions
        .iter()
        .filter(|m| m.status == MissionStatus::Success)
        .count();
    let total_cost: f64 = missions.iter().map(|m| m.cost).sum();
    let crewed = missions.iter().filter(|m| m.is_crewed()).count();

    SummaryStats {
        total,
        successful,
        success_rate_percent: percentage(successful, total),
        total_cost,
        crewed,
    }
}
