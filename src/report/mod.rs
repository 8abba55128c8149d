//! The reporting pipeline: filter a record set, then derive KPIs and
//! bucketed series from the filtered view.
//!
//! Every function here is pure. Empty input produces empty series, `None` for
//! the monthly comparison, and a zeroed [`MetricsSummary`].

pub mod aggregate;
pub mod filter;
pub mod metrics;

use serde::{Deserialize, Serialize};

use crate::dataset::SalesRecord;

pub use aggregate::{
    monthly_comparison, sum_by_category, top_products, trend_by_date, CategoryTotal, DailyTotal,
    MonthlyTotal, ProductTotal, DEFAULT_MONTHLY_MIN_DAYS, DEFAULT_TOP_PRODUCTS,
};
pub use filter::{
    available_categories, filter_records, CategoryFilter, DateRange, Filter, FilteredView,
    ALL_CATEGORIES,
};
pub use metrics::{compute_metrics, MetricsSummary};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportOptions {
    pub top_products: usize,
    pub monthly_min_days: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            top_products: DEFAULT_TOP_PRODUCTS,
            monthly_min_days: DEFAULT_MONTHLY_MIN_DAYS,
        }
    }
}

/// Every derived view of one filter application.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Report {
    pub filter: Filter,
    pub metrics: MetricsSummary,
    pub trend: Vec<DailyTotal>,
    pub by_category: Vec<CategoryTotal>,
    pub top_products: Vec<ProductTotal>,
    pub monthly: Option<Vec<MonthlyTotal>>,
}

pub fn build_report(records: &[SalesRecord], filter: &Filter, options: &ReportOptions) -> Report {
    let view = filter_records(records, filter);
    let report = Report {
        filter: filter.clone(),
        metrics: compute_metrics(&view),
        trend: trend_by_date(&view),
        by_category: sum_by_category(&view),
        top_products: top_products(&view, options.top_products),
        monthly: monthly_comparison(&view, options.monthly_min_days),
    };
    tracing::debug!(
        source_rows = records.len(),
        filtered_rows = view.len(),
        category = filter.category.label(),
        "recomputed report"
    );
    report
}
