use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dataset::SalesRecord;
use crate::errors::{ReportError, Result};

/// Category choice that keeps every record.
pub const ALL_CATEGORIES: &str = "All";

/// Inclusive calendar range.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(ReportError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn single(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Intersects a requested range with `self`; never widens past `self`.
    pub fn narrow(&self, start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(ReportError::InvalidRange { start, end });
        }
        DateRange::new(start.max(self.start), end.min(self.end)).map_err(|_| {
            ReportError::InvalidInput(format!(
                "range {start} to {end} lies outside the data ({} to {})",
                self.start, self.end
            ))
        })
    }

    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// Maps the `All` sentinel to [`CategoryFilter::All`]; anything else is an
    /// exact, case-sensitive category name.
    pub fn from_choice(choice: &str) -> Self {
        if choice == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(choice.to_string())
        }
    }

    pub fn matches(&self, record: &SalesRecord) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(name) => record.category.as_deref() == Some(name.as_str()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Only(name) => name,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Filter {
    pub range: DateRange,
    pub category: CategoryFilter,
}

impl Filter {
    pub fn new(range: DateRange, category: CategoryFilter) -> Self {
        Self { range, category }
    }

    pub fn matches(&self, record: &SalesRecord) -> bool {
        self.range.contains(record.date) && self.category.matches(record)
    }
}

/// Borrowed subset of a record collection.
#[derive(Debug, Clone, Default)]
pub struct FilteredView<'a> {
    records: Vec<&'a SalesRecord>,
}

impl<'a> FilteredView<'a> {
    pub fn iter(&self) -> impl Iterator<Item = &'a SalesRecord> + '_ {
        self.records.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn to_records(&self) -> Vec<SalesRecord> {
        self.iter().cloned().collect()
    }
}

impl<'v, 'a> IntoIterator for &'v FilteredView<'a> {
    type Item = &'a SalesRecord;
    type IntoIter = std::iter::Copied<std::slice::Iter<'v, &'a SalesRecord>>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter().copied()
    }
}

/// Keeps the records matching `filter`, preserving their original order.
pub fn filter_records<'a>(records: &'a [SalesRecord], filter: &Filter) -> FilteredView<'a> {
    FilteredView {
        records: records
            .iter()
            .filter(|record| filter.matches(record))
            .collect(),
    }
}

/// Distinct category names, sorted.
pub fn available_categories<'a, I>(records: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a SalesRecord>,
{
    records
        .into_iter()
        .filter_map(|record| record.category.as_deref())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
