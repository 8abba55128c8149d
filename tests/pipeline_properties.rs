mod common;

use common::{approx_eq, date, example_records, mixed_records};
use sales_report::dataset::{generate_sample, SalesRecord, SampleSpec};
use sales_report::report::{
    build_report, compute_metrics, filter_records, monthly_comparison, sum_by_category,
    top_products, trend_by_date, CategoryFilter, DateRange, Filter, MetricsSummary,
    ReportOptions,
};

#[test]
fn worked_example_matches_expected_views() {
    let records = example_records();
    let filter = Filter::new(
        DateRange::new(date(2024, 1, 1), date(2024, 1, 2)).unwrap(),
        CategoryFilter::from_choice("All"),
    );
    let report = build_report(&records, &filter, &ReportOptions::default());

    assert!(approx_eq(report.metrics.total_sales, 175.0));
    assert_eq!(report.metrics.total_orders, 3);
    assert!(approx_eq(report.metrics.avg_order_value, 175.0 / 3.0));

    let trend: Vec<_> = report.trend.iter().map(|t| (t.date, t.amount)).collect();
    assert_eq!(trend, vec![(date(2024, 1, 1), 125.0), (date(2024, 1, 2), 50.0)]);

    let categories: Vec<_> = report
        .by_category
        .iter()
        .map(|c| (c.category.as_str(), c.amount))
        .collect();
    assert_eq!(categories, vec![("A", 125.0), ("B", 50.0)]);
}

#[test]
fn empty_input_gives_zeroed_metrics() {
    let records: Vec<SalesRecord> = Vec::new();
    let metrics = compute_metrics(&records);
    assert_eq!(
        metrics,
        MetricsSummary {
            total_sales: 0.0,
            avg_order_value: 0.0,
            total_orders: 0,
            unique_customers: 0,
        }
    );
}

#[test]
fn filtered_view_is_exactly_the_matching_subset() {
    let records = mixed_records();
    let filter = Filter::new(
        DateRange::new(date(2024, 1, 1), date(2024, 1, 31)).unwrap(),
        CategoryFilter::from_choice("Books"),
    );
    let view = filter_records(&records, &filter);

    for record in &view {
        assert!(records.contains(record));
        assert!(filter.matches(record));
    }
    let expected = records.iter().filter(|r| filter.matches(r)).count();
    assert_eq!(view.len(), expected);
    assert_eq!(view.len(), 1);
    assert_eq!(view.iter().next().unwrap().product.as_deref(), Some("Atlas"));
}

#[test]
fn aggregations_reconcile_with_total_sales() {
    let dataset = generate_sample(&SampleSpec {
        rows: 300,
        ..SampleSpec::default()
    });
    let (start, end) = dataset.date_bounds().unwrap();
    let filter = Filter::new(DateRange::new(start, end).unwrap(), CategoryFilter::All);
    let view = filter_records(&dataset.records, &filter);

    let total = compute_metrics(&view).total_sales;
    let trend_sum: f64 = trend_by_date(&view).iter().map(|t| t.amount).sum();
    let category_sum: f64 = sum_by_category(&view).iter().map(|c| c.amount).sum();

    assert!((trend_sum - total).abs() < 1e-6, "{trend_sum} vs {total}");
    assert!((category_sum - total).abs() < 1e-6, "{category_sum} vs {total}");
}

#[test]
fn top_products_is_bounded_sorted_and_unique() {
    let records = mixed_records();
    let distinct = 5;

    for n in [0, 1, 3, 5, 10] {
        let top = top_products(&records, n);
        assert_eq!(top.len(), n.min(distinct));
        assert!(top.windows(2).all(|pair| pair[0].amount >= pair[1].amount));
        let mut names: Vec<_> = top.iter().map(|p| p.product.clone()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), top.len());
    }

    let top = top_products(&records, 2);
    assert_eq!(top[0].product, "Novel");
    assert!(approx_eq(top[0].amount, 100.25));
    assert_eq!(top[1].product, "Monitor");
}

#[test]
fn monthly_comparison_is_chronological_across_years() {
    let mut records = Vec::new();
    let mut day = date(2023, 12, 1);
    while day <= date(2024, 1, 15) {
        records.push(SalesRecord::new(day, 10.0));
        day = day.succ_opt().unwrap();
    }

    let monthly = monthly_comparison(&records, 30).expect("more than 30 days");
    let labels: Vec<_> = monthly.iter().map(|m| m.label()).collect();
    assert_eq!(labels, vec!["Dec 2023", "Jan 2024"]);
    assert!(approx_eq(monthly[0].amount, 310.0));
    assert!(approx_eq(monthly[1].amount, 150.0));
}

#[test]
fn monthly_comparison_is_skipped_for_short_spans() {
    let records = mixed_records();
    let options = ReportOptions::default();
    let filter = Filter::new(
        DateRange::new(date(2023, 12, 1), date(2024, 3, 1)).unwrap(),
        CategoryFilter::All,
    );
    assert!(build_report(&records, &filter, &options).monthly.is_none());

    let eager = ReportOptions {
        monthly_min_days: 3,
        ..options
    };
    let monthly = build_report(&records, &filter, &eager).monthly.unwrap();
    assert_eq!(monthly.len(), 3);
    assert_eq!(monthly[0].label(), "Dec 2023");
}
