#![allow(dead_code)]

use std::path::PathBuf;

use chrono::NaiveDate;
use sales_report::dataset::SalesRecord;
use tempfile::TempDir;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// The three-row example used throughout the docs.
pub fn example_records() -> Vec<SalesRecord> {
    vec![
        SalesRecord::new(date(2024, 1, 1), 100.0).with_category("A"),
        SalesRecord::new(date(2024, 1, 2), 50.0).with_category("B"),
        SalesRecord::new(date(2024, 1, 1), 25.0).with_category("A"),
    ]
}

/// A small but varied data set with every optional column populated.
pub fn mixed_records() -> Vec<SalesRecord> {
    let rows = [
        ((2023, 12, 30), 40.0, "Books", "Novel", "c1"),
        ((2023, 12, 31), 15.5, "Home", "Lamp", "c2"),
        ((2024, 1, 1), 120.0, "Electronics", "Monitor", "c1"),
        ((2024, 1, 1), 80.0, "Books", "Atlas", "c3"),
        ((2024, 1, 5), 80.0, "Home", "Kettle", "c4"),
        ((2024, 1, 9), -20.0, "Electronics", "Monitor", "c2"),
        ((2024, 2, 2), 60.25, "Books", "Novel", "c5"),
    ];
    rows.iter()
        .map(|&((y, m, d), amount, category, product, customer)| {
            SalesRecord::new(date(y, m, d), amount)
                .with_category(category)
                .with_product(product)
                .with_customer(customer)
        })
        .collect()
}

/// Writes `contents` to a file inside a fresh temp dir.
pub fn write_temp_csv(contents: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("sales.csv");
    std::fs::write(&path, contents).expect("write csv");
    (dir, path)
}

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
