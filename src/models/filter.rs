use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::MissionStatus;

/// Inclusive launch-date window.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        DateRange { start, end }
    }

    /// The widest representable window; matches every parseable date.
    pub fn all() -> Self {
        DateRange {
            start: NaiveDate::MIN,
            end: NaiveDate::MAX,
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

impl Default for DateRange {
    fn default() -> Self {
        DateRange::all()
    }
}

/// User-chosen constraints applied to the mission catalog.
///
/// Each inclusion set is a plain membership test; an empty set means "no
/// constraint on this axis". The caller builds a complete `FilterSpec` and
/// replaces it wholesale on every change, so the pipeline only ever reads
/// fully formed values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterSpec {
    pub date_range: DateRange,
    pub countries: HashSet<String>,
    pub agencies: HashSet<String>,
    pub purposes: HashSet<String>,
    pub statuses: HashSet<MissionStatus>,
}

impl FilterSpec {
    /// A spec that matches the full catalog (empty sets, unbounded dates).
    pub fn match_all() -> Self {
        FilterSpec::default()
    }
}
