mod common;

use common::{approx_eq, date, mixed_records};
use sales_report::dashboard::{render, DashboardState, Event, NoticeLevel};
use sales_report::dataset::{ColumnSet, Dataset};
use sales_report::errors::ReportError;
use sales_report::report::{CategoryFilter, DateRange, ReportOptions};

fn loaded_state() -> DashboardState {
    let dataset = Dataset::new("mixed", ColumnSet::full("Date"), mixed_records());
    render(&DashboardState::default(), Event::Loaded(dataset))
}

#[test]
fn loading_sets_bounds_categories_and_report() {
    let state = loaded_state();
    assert_eq!(
        state.bounds,
        Some(DateRange::new(date(2023, 12, 30), date(2024, 2, 2)).unwrap())
    );
    assert_eq!(
        state.category_choices(),
        vec!["All", "Books", "Electronics", "Home"]
    );
    let report = state.report.as_ref().expect("report");
    assert_eq!(report.metrics.total_orders, 7);
    assert_eq!(report.metrics.unique_customers, 5);
    assert_eq!(state.notice.as_ref().unwrap().level, NoticeLevel::Success);
}

#[test]
fn range_selection_is_clamped_to_the_data() {
    let state = render(
        &loaded_state(),
        Event::SetRange {
            start: date(2023, 1, 1),
            end: date(2024, 1, 1),
        },
    );
    let filter = state.filter.as_ref().unwrap();
    assert_eq!(filter.range.start, date(2023, 12, 30));
    assert_eq!(filter.range.end, date(2024, 1, 1));
    assert_eq!(state.report.as_ref().unwrap().metrics.total_orders, 4);
}

#[test]
fn inverted_range_keeps_previous_filter() {
    let before = loaded_state();
    let after = render(
        &before,
        Event::SetRange {
            start: date(2024, 1, 9),
            end: date(2024, 1, 1),
        },
    );
    assert_eq!(after.filter, before.filter);
    assert_eq!(after.notice.as_ref().unwrap().level, NoticeLevel::Error);
    assert!(after.report.is_some());
}

#[test]
fn category_and_range_combine() {
    let state = render(&loaded_state(), Event::SetCategory("Electronics".into()));
    let state = render(
        &state,
        Event::SetRange {
            start: date(2024, 1, 1),
            end: date(2024, 1, 5),
        },
    );
    let report = state.report.as_ref().unwrap();
    assert_eq!(
        report.filter.category,
        CategoryFilter::Only("Electronics".into())
    );
    assert!(approx_eq(report.metrics.total_sales, 120.0));
    assert_eq!(state.filtered().len(), 1);

    let reset = render(&state, Event::ResetFilters);
    assert_eq!(reset.filtered().len(), 7);
}

#[test]
fn unknown_category_is_rejected() {
    let state = render(&loaded_state(), Event::SetCategory("books".into()));
    assert_eq!(state.notice.as_ref().unwrap().level, NoticeLevel::Error);
    assert_eq!(
        state.filter.as_ref().unwrap().category,
        CategoryFilter::All
    );
}

#[test]
fn failed_upload_keeps_the_previous_dataset() {
    let state = render(&loaded_state(), Event::LoadFailed(ReportError::NoDateColumn));
    let notice = state.notice.as_ref().unwrap();
    assert_eq!(notice.level, NoticeLevel::Error);
    assert!(notice.message.contains("No date column"));
    assert_eq!(state.dataset.as_ref().unwrap().name, "mixed");
}

#[test]
fn new_upload_replaces_the_dataset_wholesale() {
    let first = loaded_state();
    let replacement = Dataset::new(
        "tiny",
        ColumnSet::new("Date"),
        vec![sales_report::dataset::SalesRecord::new(date(2025, 6, 1), 9.0)],
    );
    let second = render(&first, Event::Loaded(replacement));
    assert_eq!(second.dataset.as_ref().unwrap().len(), 1);
    assert!(second.categories.is_empty());
    assert_eq!(first.dataset.as_ref().unwrap().len(), 7);
}

#[test]
fn configure_recomputes_with_new_options() {
    let state = render(
        &loaded_state(),
        Event::Configure(ReportOptions {
            top_products: 2,
            monthly_min_days: 1,
        }),
    );
    let report = state.report.as_ref().unwrap();
    assert_eq!(report.top_products.len(), 2);
    assert!(report.monthly.is_some());
}

#[test]
fn empty_upload_is_a_valid_state() {
    let empty = Dataset::new("empty", ColumnSet::new("Date"), Vec::new());
    let state = render(&loaded_state(), Event::Loaded(empty));
    assert_eq!(state.notice.as_ref().unwrap().level, NoticeLevel::Warning);
    assert!(state.report.is_none());
    assert!(state.filtered().is_empty());
    assert_eq!(state.dataset.as_ref().unwrap().name, "empty");
}
