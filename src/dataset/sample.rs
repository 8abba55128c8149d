//! Deterministic demo data so the dashboard can be explored without a file.

use chrono::{Duration, NaiveDate};
use rand::{rngs::StdRng, Rng, SeedableRng};

use super::record::{ColumnSet, Dataset, SalesRecord};

pub const DEFAULT_SAMPLE_ROWS: usize = 500;
pub const DEFAULT_SAMPLE_SEED: u64 = 42;
/// Largest sample the shell will generate.
pub const MAX_SAMPLE_ROWS: usize = 1_000_000;
pub const SAMPLE_SPAN_DAYS: i64 = 90;

const CATALOGUE: &[(&str, &str, f64)] = &[
    ("Electronics", "Laptop", 1_200.0),
    ("Electronics", "Headphones", 150.0),
    ("Electronics", "Monitor", 320.0),
    ("Clothing", "Jacket", 90.0),
    ("Clothing", "Sneakers", 75.0),
    ("Clothing", "T-Shirt", 20.0),
    ("Home", "Coffee Maker", 60.0),
    ("Home", "Desk Lamp", 35.0),
    ("Books", "Novel", 15.0),
    ("Books", "Cookbook", 28.0),
    ("Sports", "Yoga Mat", 25.0),
    ("Sports", "Dumbbells", 55.0),
];
const CUSTOMER_POOL: u32 = 120;
const FIRST_CUSTOMER_ID: u32 = 1000;

#[derive(Debug, Clone)]
pub struct SampleSpec {
    pub rows: usize,
    pub seed: u64,
    pub start: NaiveDate,
}

impl Default for SampleSpec {
    fn default() -> Self {
        Self {
            rows: DEFAULT_SAMPLE_ROWS,
            seed: DEFAULT_SAMPLE_SEED,
            start: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default(),
        }
    }
}

/// Generates a sample dataset; equal `SampleSpec`s yield equal records.
pub fn generate_sample(spec: &SampleSpec) -> Dataset {
    let mut rng = StdRng::seed_from_u64(spec.seed);
    let mut records = Vec::with_capacity(spec.rows.min(MAX_SAMPLE_ROWS));

    for _ in 0..spec.rows {
        let (category, product, base_price) = CATALOGUE[rng.gen_range(0..CATALOGUE.len())];
        let date = spec.start + Duration::days(rng.gen_range(0..SAMPLE_SPAN_DAYS));
        let quantity = f64::from(rng.gen_range(1..=3u32));
        let jitter: f64 = rng.gen_range(0.85..1.15);
        let amount = (base_price * quantity * jitter * 100.0).round() / 100.0;
        let customer = FIRST_CUSTOMER_ID + rng.gen_range(0..CUSTOMER_POOL);

        records.push(
            SalesRecord::new(date, amount)
                .with_category(category)
                .with_product(product)
                .with_customer(customer.to_string()),
        );
    }
    records.sort_by_key(|record| record.date);

    tracing::debug!(rows = records.len(), seed = spec.seed, "generated sample dataset");
    Dataset::new("sample", ColumnSet::full("Date"), records)
}
