//! Status distribution for the outcome breakdown widget.

use crate::api::{StatusBreakdown, StatusSlice};
use crate::models::{Mission, MissionStatus};

use super::percentage;

/// Compute the outcome distribution over a mission subset.
///
/// The slice list always covers the full status domain in
/// [`MissionStatus::ALL`] order, including zero-count entries, so the
/// widget renders a complete distribution even for an empty subset.
pub fn compute_status_breakdown(missions: &[Mission]) -> StatusBreakdown {
    let total = missions.len();

    let slices = MissionStatus::ALL
        .iter()
        .map(|&status| {
            let count = missions.iter().filter(|m| m.status == status).count();
            StatusSlice {
                status,
                count,
                percentage: percentage(count, total),
            }
        })
        .collect();

    StatusBreakdown { total, slices }
}
