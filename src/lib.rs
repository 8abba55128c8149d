#![doc(test(attr(deny(warnings))))]

//! Sales Report loads sales records from CSV, filters them by date range and
//! category, and derives KPIs and bucketed sales series for display or export.
//!
//! ```
//! use chrono::NaiveDate;
//! use sales_report::dataset::SalesRecord;
//! use sales_report::report::{build_report, CategoryFilter, DateRange, Filter, ReportOptions};
//!
//! let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let records = vec![SalesRecord::new(day, 100.0).with_category("A")];
//! let filter = Filter::new(DateRange::single(day), CategoryFilter::All);
//! let report = build_report(&records, &filter, &ReportOptions::default());
//! assert_eq!(report.metrics.total_orders, 1);
//! ```

pub mod cli;
pub mod config;
pub mod currency;
pub mod dashboard;
pub mod dataset;
pub mod errors;
pub mod report;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Sales Report tracing initialized.");
    });
}
