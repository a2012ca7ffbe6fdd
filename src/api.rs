//! Public API surface of the aggregation core.
//!
//! This file consolidates the value-object types handed to the presentation
//! layer. All types derive Serialize/Deserialize for JSON serialization and
//! carry no behavior beyond construction; the computations that populate
//! them live in [`crate::services`].

use serde::{Deserialize, Serialize};

use crate::models::{Mission, MissionStatus};

// =========================================================
// Overview widget
// =========================================================

/// Headline counters shown in the dashboard stat cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    pub total: usize,
    pub successful: usize,
    /// Success percentage over the subset, rounded half-up to one decimal.
    /// 0.0 for an empty subset.
    pub success_rate_percent: f64,
    /// Combined cost in millions of USD.
    pub total_cost: f64,
    pub crewed: usize,
}

// =========================================================
// Status breakdown widget
// =========================================================

/// One slice of the status distribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusSlice {
    pub status: MissionStatus,
    pub count: usize,
    /// Share of the subset, rounded half-up to one decimal.
    pub percentage: f64,
}

/// Complete status distribution. Always three slices in
/// [`MissionStatus::ALL`] order, zero counts included, so the widget never
/// sees a sparse distribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusBreakdown {
    pub total: usize,
    pub slices: Vec<StatusSlice>,
}

// =========================================================
// Country leaderboard widget
// =========================================================

/// Aggregate counters for one country.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryStats {
    pub country: String,
    pub total: usize,
    pub successful: usize,
    /// Every non-Success outcome, partial failures included.
    pub failed: usize,
    pub crewed: usize,
    pub total_cost: f64,
    pub success_rate_percent: f64,
}

// =========================================================
// Timeline widget
// =========================================================

/// Launch counts for one calendar year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearBucket {
    pub year: i32,
    pub total: usize,
    pub successful: usize,
    pub failed: usize,
}

/// Mission count inside one named era window (inclusive years).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EraCount {
    pub label: String,
    pub start_year: i32,
    pub end_year: i32,
    pub count: usize,
}

/// Chronological view: per-year buckets ascending, plus the fixed era
/// milestone cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineData {
    pub years: Vec<YearBucket>,
    pub eras: Vec<EraCount>,
}

// =========================================================
// Cost analysis widget
// =========================================================

/// Spending aggregates for one decade bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecadeBucket {
    /// First year of the decade (1969 buckets into 1960).
    pub decade: i32,
    /// Display label, e.g. `"1960s"`.
    pub label: String,
    pub count: usize,
    pub total_cost: f64,
    /// `total_cost / count`; plain f64 quotient, unrounded.
    pub average_cost: f64,
}

/// Row of the most-expensive-missions ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopMission {
    pub id: String,
    pub name: String,
    pub country: String,
    pub year: Option<i32>,
    pub cost: f64,
    pub purpose: String,
}

/// Cost view: decade buckets ascending, overall totals, and the top-N
/// ranking by cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostAnalysisData {
    pub decades: Vec<DecadeBucket>,
    pub most_expensive: Vec<TopMission>,
    pub total_cost: f64,
    pub average_cost: f64,
}

// =========================================================
// Mission table widget
// =========================================================

/// Sortable columns of the mission table.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortField {
    Name,
    Date,
    Country,
    Agency,
    Status,
    Cost,
    Crew,
    Purpose,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Search and sort state of the mission table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableQuery {
    /// Case-insensitive substring matched against name, country, agency and
    /// purpose. Empty matches everything.
    pub search: String,
    pub sort_field: SortField,
    pub direction: SortDirection,
}

impl Default for TableQuery {
    fn default() -> Self {
        // The table opens on newest-first, like the dashboard.
        TableQuery {
            search: String::new(),
            sort_field: SortField::Date,
            direction: SortDirection::Desc,
        }
    }
}

// =========================================================
// Assembled dashboard payload
// =========================================================

/// Every widget payload derived from one filtered subset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardData {
    pub missions: Vec<Mission>,
    pub summary: SummaryStats,
    pub status: StatusBreakdown,
    pub countries: Vec<CountryStats>,
    pub timeline: TimelineData,
    pub costs: CostAnalysisData,
}
