//! One-call assembly of every widget payload.

use crate::api::DashboardData;
use crate::models::{FilterSpec, Mission};

use super::{
    compute_cost_analysis, compute_country_stats, compute_status_breakdown, compute_summary,
    compute_timeline, filter_missions,
};

/// How many rows the most-expensive ranking shows.
pub const TOP_EXPENSIVE_N: usize = 5;

/// Apply the filter once and derive every widget payload from the same
/// subset.
///
/// This is the call the presentation layer makes on every filter change;
/// each payload is recomputed from scratch, nothing is cached across calls.
pub fn compute_dashboard_data(missions: &[Mission], spec: &FilterSpec) -> DashboardData {
    let filtered = filter_missions(missions, spec);

    let summary = compute_summary(&filtered);
    let status = compute_status_breakdown(&filtered);
    let countries = compute_country_stats(&filtered);
    let timeline = compute_timeline(&filtered);
    let costs = compute_cost_analysis(&filtered, TOP_EXPENSIVE_N);

    DashboardData {
        missions: filtered,
        summary,
        status,
        countries,
        timeline,
        costs,
    }
}
