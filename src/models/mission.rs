use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Outcome of a launch. Closed set; the dashboard always renders all three.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MissionStatus {
    Success,
    Failure,
    #[serde(rename = "Partial Failure")]
    PartialFailure,
}

impl MissionStatus {
    /// Fixed display order for status breakdowns.
    pub const ALL: [MissionStatus; 3] = [
        MissionStatus::Success,
        MissionStatus::Failure,
        MissionStatus::PartialFailure,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MissionStatus::Success => "Success",
            MissionStatus::Failure => "Failure",
            MissionStatus::PartialFailure => "Partial Failure",
        }
    }
}

impl std::fmt::Display for MissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One historical space-launch record.
///
/// Records come from the embedded catalog and are never mutated. The launch
/// date is kept as the catalog's ISO-8601 string and parsed on demand so
/// that a malformed date degrades to "excluded from date-dependent
/// computations" instead of failing the whole load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mission {
    pub id: String,
    pub name: String,
    /// Launch date as an ISO-8601 string (`YYYY-MM-DD`).
    pub date: String,
    pub country: String,
    pub agency: String,
    pub status: MissionStatus,
    /// Mission cost in millions of USD.
    pub cost: f64,
    /// Crew size; 0 means uncrewed.
    pub crew: u32,
    pub purpose: String,
    pub rocket: String,
    pub launch_site: String,
    /// Mission duration in days; `None` when unknown or ongoing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    pub description: String,
}

impl Mission {
    /// Parse the launch date. `None` for malformed strings.
    pub fn launch_date(&self) -> Option<NaiveDate> {
        self.date.parse().ok()
    }

    /// Calendar year of the launch, when the date parses.
    pub fn launch_year(&self) -> Option<i32> {
        use chrono::Datelike;
        self.launch_date().map(|d| d.year())
    }

    /// Decade bucket of the launch year (`1969 -> 1960`).
    pub fn launch_decade(&self) -> Option<i32> {
        self.launch_year().map(|y| y.div_euclid(10) * 10)
    }

    pub fn is_crewed(&self) -> bool {
        self.crew > 0
    }
}
