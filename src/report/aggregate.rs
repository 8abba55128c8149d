//! Bucketed sums over a filtered view: by day, category, product, and month.

use std::{
    cmp::Ordering,
    collections::{BTreeMap, BTreeSet, HashMap},
};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::currency::month_label;
use crate::dataset::SalesRecord;

pub const DEFAULT_TOP_PRODUCTS: usize = 10;
pub const DEFAULT_MONTHLY_MIN_DAYS: usize = 30;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyTotal {
    pub date: NaiveDate,
    pub amount: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductTotal {
    pub product: String,
    pub amount: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlyTotal {
    pub year: i32,
    pub month: u32,
    pub amount: f64,
}

impl MonthlyTotal {
    /// `"Jan 2024"` style label.
    pub fn label(&self) -> String {
        format!("{} {}", month_label(self.month), self.year)
    }
}

/// Sums per calendar date, oldest first.
pub fn trend_by_date<'a, I>(records: I) -> Vec<DailyTotal>
where
    I: IntoIterator<Item = &'a SalesRecord>,
{
    let mut buckets: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for record in records {
        *buckets.entry(record.date).or_insert(0.0) += record.amount;
    }
    buckets
        .into_iter()
        .map(|(date, amount)| DailyTotal { date, amount })
        .collect()
}

/// Sums per category, largest first; equal sums fall back to name order.
pub fn sum_by_category<'a, I>(records: I) -> Vec<CategoryTotal>
where
    I: IntoIterator<Item = &'a SalesRecord>,
{
    ranked_sums(records, |record| record.category.as_deref())
        .into_iter()
        .map(|(category, amount)| CategoryTotal { category, amount })
        .collect()
}

/// The `n` best-selling products, largest first; equal sums fall back to
/// name order.
pub fn top_products<'a, I>(records: I, n: usize) -> Vec<ProductTotal>
where
    I: IntoIterator<Item = &'a SalesRecord>,
{
    let mut ranked = ranked_sums(records, |record| record.product.as_deref());
    ranked.truncate(n);
    ranked
        .into_iter()
        .map(|(product, amount)| ProductTotal { product, amount })
        .collect()
}

/// Month-by-month sums in calendar order, produced only when the view spans
/// more than `min_days` distinct dates.
pub fn monthly_comparison<'a, I>(records: I, min_days: usize) -> Option<Vec<MonthlyTotal>>
where
    I: IntoIterator<Item = &'a SalesRecord>,
{
    let mut distinct_days: BTreeSet<NaiveDate> = BTreeSet::new();
    let mut buckets: BTreeMap<(i32, u32), f64> = BTreeMap::new();
    for record in records {
        distinct_days.insert(record.date);
        *buckets
            .entry((record.date.year(), record.date.month()))
            .or_insert(0.0) += record.amount;
    }

    if distinct_days.len() <= min_days {
        return None;
    }

    Some(
        buckets
            .into_iter()
            .map(|((year, month), amount)| MonthlyTotal {
                year,
                month,
                amount,
            })
            .collect(),
    )
}

fn ranked_sums<'a, I, F>(records: I, key: F) -> Vec<(String, f64)>
where
    I: IntoIterator<Item = &'a SalesRecord>,
    F: Fn(&'a SalesRecord) -> Option<&'a str>,
{
    let mut buckets: HashMap<&'a str, f64> = HashMap::new();
    for record in records {
        if let Some(name) = key(record) {
            *buckets.entry(name).or_insert(0.0) += record.amount;
        }
    }

    let mut ranked: Vec<(String, f64)> = buckets
        .into_iter()
        .map(|(name, amount)| (name.to_string(), amount))
        .collect();
    ranked.sort_by(|(name_a, amount_a), (name_b, amount_b)| {
        amount_b
            .partial_cmp(amount_a)
            .unwrap_or(Ordering::Equal)
            .then_with(|| name_a.cmp(name_b))
    });
    ranked
}
