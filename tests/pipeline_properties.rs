//! End-to-end properties of the filter/aggregation pipeline.

use chrono::NaiveDate;
use missions_dashboard::api::{SortDirection, SortField, TableQuery};
use missions_dashboard::data::builtin_catalog;
use missions_dashboard::models::{DateRange, FilterSpec, Mission, MissionStatus};
use missions_dashboard::services::{
    compute_cost_analysis, compute_dashboard_data, compute_status_breakdown, compute_summary,
    filter_missions, query_table,
};

fn mission(id: &str, date: &str, country: &str, status: MissionStatus, cost: f64) -> Mission {
    Mission {
        id: id.to_string(),
        name: format!("Mission {id}"),
        date: date.to_string(),
        country: country.to_string(),
        agency: "NASA".to_string(),
        status,
        cost,
        crew: 0,
        purpose: "Testing".to_string(),
        rocket: "Test I".to_string(),
        launch_site: "Pad 1".to_string(),
        duration: None,
        description: String::new(),
    }
}

#[test]
fn zero_filter_identity_returns_catalog_unchanged() {
    let catalog = builtin_catalog().unwrap();
    let out = filter_missions(&catalog, &FilterSpec::match_all());
    assert_eq!(out, catalog);
}

#[test]
fn filtering_twice_with_the_same_spec_is_a_fixed_point() {
    let catalog = builtin_catalog().unwrap();
    let mut spec = FilterSpec::match_all();
    spec.countries.insert("United States".to_string());
    spec.statuses.insert(MissionStatus::Success);
    spec.date_range = DateRange::new(
        NaiveDate::from_ymd_opt(1960, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(1999, 12, 31).unwrap(),
    );

    let once = filter_missions(&catalog, &spec);
    let twice = filter_missions(&once, &spec);
    assert_eq!(once, twice);
}

#[test]
fn widening_a_filter_axis_never_shrinks_the_result() {
    let catalog = builtin_catalog().unwrap();

    let mut narrow = FilterSpec::match_all();
    narrow.countries.insert("Soviet Union".to_string());
    let narrow_count = filter_missions(&catalog, &narrow).len();

    let mut wide = narrow.clone();
    wide.countries.insert("United States".to_string());
    let wide_count = filter_missions(&catalog, &wide).len();

    assert!(wide_count >= narrow_count);

    // Same for the status axis.
    let mut narrow = FilterSpec::match_all();
    narrow.statuses.insert(MissionStatus::PartialFailure);
    let narrow_count = filter_missions(&catalog, &narrow).len();

    let mut wide = narrow.clone();
    wide.statuses.insert(MissionStatus::Success);
    assert!(filter_missions(&catalog, &wide).len() >= narrow_count);
}

#[test]
fn summary_concrete_case() {
    let missions = vec![
        mission("1", "1970-01-01", "United States", MissionStatus::Success, 5.0),
        {
            let mut m = mission("2", "1971-01-01", "United States", MissionStatus::Failure, 10.0);
            m.crew = 2;
            m
        },
    ];
    let summary = compute_summary(&missions);

    assert_eq!(summary.total, 2);
    assert_eq!(summary.successful, 1);
    assert_eq!(summary.success_rate_percent, 50.0);
    assert_eq!(summary.total_cost, 15.0);
    assert_eq!(summary.crewed, 1);
}

#[test]
fn status_grouping_over_empty_input_is_complete() {
    let breakdown = compute_status_breakdown(&[]);
    assert_eq!(breakdown.slices.len(), 3);
    let statuses: Vec<MissionStatus> = breakdown.slices.iter().map(|s| s.status).collect();
    assert_eq!(
        statuses,
        [
            MissionStatus::Success,
            MissionStatus::Failure,
            MissionStatus::PartialFailure
        ]
    );
    assert!(breakdown.slices.iter().all(|s| s.count == 0));
}

#[test]
fn decade_grouping_concrete_case() {
    let missions = vec![
        mission("1", "1961-04-12", "Soviet Union", MissionStatus::Success, 25.0),
        mission("2", "1969-07-16", "United States", MissionStatus::Success, 355.0),
        mission("3", "1971-04-19", "Soviet Union", MissionStatus::PartialFailure, 45.0),
    ];
    let costs = compute_cost_analysis(&missions, 5);

    let labels: Vec<&str> = costs.decades.iter().map(|d| d.label.as_str()).collect();
    assert_eq!(labels, ["1960s", "1970s"]);
    assert_eq!(costs.decades[0].count, 2);
    assert_eq!(costs.decades[0].total_cost, 380.0);
    assert_eq!(costs.decades[1].count, 1);
}

#[test]
fn top_n_keeps_input_order_on_cost_ties() {
    let missions = vec![
        mission("first", "1990-01-01", "United States", MissionStatus::Success, 500.0),
        mission("mid", "1991-01-01", "United States", MissionStatus::Success, 10.0),
        mission("second", "1992-01-01", "United States", MissionStatus::Success, 500.0),
    ];
    let costs = compute_cost_analysis(&missions, 2);
    let ids: Vec<&str> = costs.most_expensive.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, ["first", "second"]);
}

#[test]
fn every_aggregation_accepts_empty_input() {
    let data = compute_dashboard_data(&[], &FilterSpec::match_all());

    assert!(data.missions.is_empty());
    assert_eq!(data.summary.total, 0);
    assert_eq!(data.summary.success_rate_percent, 0.0);
    assert_eq!(data.status.slices.len(), 3);
    assert!(data.countries.is_empty());
    assert!(data.timeline.years.is_empty());
    assert_eq!(data.timeline.eras.len(), 3);
    assert!(data.costs.decades.is_empty());
    assert!(data.costs.most_expensive.is_empty());

    assert!(query_table(&[], &TableQuery::default()).is_empty());
}

#[test]
fn country_leaderboard_is_deterministic_over_catalog() {
    let catalog = builtin_catalog().unwrap();
    let data = compute_dashboard_data(&catalog, &FilterSpec::match_all());

    for pair in data.countries.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(
            a.total > b.total || (a.total == b.total && a.country < b.country),
            "leaderboard order violated between {} and {}",
            a.country,
            b.country
        );
    }
}

#[test]
fn table_search_and_sort_compose_with_the_filter() {
    let catalog = builtin_catalog().unwrap();
    let mut spec = FilterSpec::match_all();
    spec.countries.insert("United States".to_string());
    let filtered = filter_missions(&catalog, &spec);

    let query = TableQuery {
        search: "mars".to_string(),
        sort_field: SortField::Cost,
        direction: SortDirection::Desc,
    };
    let rows = query_table(&filtered, &query);

    assert!(!rows.is_empty());
    assert!(rows
        .iter()
        .all(|m| m.purpose.to_lowercase().contains("mars")
            || m.name.to_lowercase().contains("mars")));
    for pair in rows.windows(2) {
        assert!(pair[0].cost >= pair[1].cost);
    }
}
