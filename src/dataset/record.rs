use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const AMOUNT_COLUMN: &str = "Amount";
pub const CATEGORY_COLUMN: &str = "Category";
pub const PRODUCT_COLUMN: &str = "Product";
pub const CUSTOMER_COLUMN: &str = "Customer";

/// One row of uploaded sales data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SalesRecord {
    pub date: NaiveDate,
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,
}

impl SalesRecord {
    pub fn new(date: NaiveDate, amount: f64) -> Self {
        Self {
            date,
            amount,
            category: None,
            product: None,
            customer: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_product(mut self, product: impl Into<String>) -> Self {
        self.product = Some(product.into());
        self
    }

    pub fn with_customer(mut self, customer: impl Into<String>) -> Self {
        self.customer = Some(customer.into());
        self
    }
}

/// Which columns a dataset was loaded with, in export order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ColumnSet {
    pub date_column: String,
    pub has_category: bool,
    pub has_product: bool,
    pub has_customer: bool,
}

impl ColumnSet {
    pub fn new(date_column: impl Into<String>) -> Self {
        Self {
            date_column: date_column.into(),
            has_category: false,
            has_product: false,
            has_customer: false,
        }
    }

    /// Every optional column present.
    pub fn full(date_column: impl Into<String>) -> Self {
        Self {
            date_column: date_column.into(),
            has_category: true,
            has_product: true,
            has_customer: true,
        }
    }

    pub fn headers(&self) -> Vec<&str> {
        let mut headers = vec![self.date_column.as_str(), AMOUNT_COLUMN];
        if self.has_category {
            headers.push(CATEGORY_COLUMN);
        }
        if self.has_product {
            headers.push(PRODUCT_COLUMN);
        }
        if self.has_customer {
            headers.push(CUSTOMER_COLUMN);
        }
        headers
    }
}

/// A loaded record collection together with the columns it came from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Dataset {
    pub name: String,
    pub columns: ColumnSet,
    pub records: Vec<SalesRecord>,
}

impl Dataset {
    pub fn new(name: impl Into<String>, columns: ColumnSet, records: Vec<SalesRecord>) -> Self {
        Self {
            name: name.into(),
            columns,
            records,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Earliest and latest record dates, or `None` for an empty dataset.
    pub fn date_bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        let mut dates = self.records.iter().map(|record| record.date);
        let first = dates.next()?;
        Some(dates.fold((first, first), |(min, max), date| {
            (min.min(date), max.max(date))
        }))
    }
}
