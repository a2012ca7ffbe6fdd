//! # Missions Dashboard Core
//!
//! Aggregation core for the space missions dashboard.
//!
//! This crate holds the filter/aggregation pipeline behind the dashboard: a
//! fixed in-memory catalog of historical space missions (1957-2022) is
//! narrowed by a user-supplied filter and the resulting subset drives every
//! display widget. All computation is synchronous and pure; the presentation
//! layer consumes the value objects produced here and is not part of this
//! crate.
//!
//! ## Features
//!
//! - **Filtering**: date range plus country/agency/purpose/status inclusion
//!   sets, evaluated as one conjunctive pass
//! - **Summary**: headline counters (totals, success rate, cost, crewed)
//! - **Breakdowns**: status distribution, country leaderboard, per-year
//!   timeline, per-decade cost buckets, top-N most expensive missions
//! - **Table**: text search and single-column sorting for the mission table
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`models`]: domain types (`Mission`, `MissionStatus`, `FilterSpec`)
//! - [`api`]: value objects returned to the presentation layer
//! - [`data`]: the embedded mission catalog and distinct-value helpers
//! - [`services`]: the per-widget aggregation pipeline

pub mod api;

pub mod data;
pub mod models;

pub mod services;
