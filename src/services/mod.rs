//! Service layer: the per-widget aggregation pipeline.
//!
//! Every function here is a pure, single-pass transformation of a mission
//! slice into the value objects defined in [`crate::api`]. Nothing is
//! cached or mutated in place; each filter change recomputes every widget
//! payload from scratch, which is cheap at catalog scale and keeps the
//! results trivially fresh.

pub mod costs;

pub mod countries;

pub mod dashboard;

pub mod filter;

pub mod overview;

pub mod status;

pub mod table;

pub mod timeline;

pub use costs::compute_cost_analysis;
pub use countries::compute_country_stats;
pub use dashboard::compute_dashboard_data;
pub use filter::filter_missions;
pub use overview::compute_summary;
pub use status::compute_status_breakdown;
pub use table::query_table;
pub use timeline::compute_timeline;

/// Round half-up to one decimal place.
///
/// The single rounding rule for every percentage the dashboard shows.
/// `f64::round` is half-away-from-zero, which equals half-up for the
/// non-negative rates produced here.
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Percentage of `part` over `whole`, rounded to one decimal.
/// 0.0 when `whole` is zero.
pub(crate) fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        round1(part as f64 / whole as f64 * 100.0)
    }
}
