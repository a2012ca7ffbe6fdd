//! Chronological timeline aggregation.

use std::collections::BTreeMap;

use crate::api::{EraCount, TimelineData, YearBucket};
use crate::models::{Mission, MissionStatus};

/// The milestone era cards shown under the timeline chart.
const ERAS: [(&str, i32, i32); 3] = [
    ("Space Race Era", 1957, 1975),
    ("Shuttle Era", 1981, 2011),
    ("Commercial Era", 2008, 2022),
];

#[derive(Default)]
struct YearAcc {
    total: usize,
    successful: usize,
    failed: usize,
}

/// Bucket the subset per launch year, ascending, plus era mission counts.
///
/// Records without a parseable date carry no position on the timeline and
/// are skipped. `failed` counts every non-Success outcome.
pub fn compute_timeline(missions: &[Mission]) -> TimelineData {
    let mut by_year: BTreeMap<i32, YearAcc> = BTreeMap::new();

    for mission in missions {
        let Some(year) = mission.launch_year() else {
            continue;
        };
        let acc = by_year.entry(year).or_default();
        acc.total += 1;
        if mission.status == MissionStatus::Success {
            acc.successful += 1;
        } else {
            acc.failed += 1;
        }
    }

    let years = by_year
        .into_iter()
        .map(|(year, acc)| YearBucket {
            year,
            total: acc.total,
            successful: acc.successful,
            failed: acc.failed,
        })
        .collect();

    let eras = ERAS
        .iter()
        .map(|&(label, start_year, end_year)| EraCount {
            label: label.to_string(),
            start_year,
            end_year,
            count: missions
                .iter()
                .filter(|m| {
                    m.launch_year()
                        .is_some_and(|y| y >= start_year && y <= end_year)
                })
                .count(),
        })
        .collect();

    TimelineData { years, eras }
}
