use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::dataset::SalesRecord;

/// The four headline KPIs of a filtered view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct MetricsSummary {
    pub total_sales: f64,
    pub avg_order_value: f64,
    pub total_orders: usize,
    pub unique_customers: usize,
}

/// Computes the KPIs. Records without a customer are left out of the
/// distinct-customer count.
pub fn compute_metrics<'a, I>(records: I) -> MetricsSummary
where
    I: IntoIterator<Item = &'a SalesRecord>,
{
    let mut total_sales = 0.0;
    let mut total_orders = 0usize;
    let mut customers: HashSet<&str> = HashSet::new();

    for record in records {
        total_sales += record.amount;
        total_orders += 1;
        if let Some(customer) = record.customer.as_deref() {
            customers.insert(customer);
        }
    }

    let avg_order_value = if total_orders > 0 {
        total_sales / total_orders as f64
    } else {
        0.0
    };

    MetricsSummary {
        total_sales,
        avg_order_value,
        total_orders,
        unique_customers: customers.len(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn empty_input_yields_zeroes() {
        let summary = compute_metrics(std::iter::empty::<&SalesRecord>());
        assert_eq!(summary, MetricsSummary::default());
        assert_eq!(summary.avg_order_value, 0.0);
    }

    #[test]
    fn missing_customers_are_not_counted() {
        let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let records = vec![
            SalesRecord::new(day, 10.0).with_customer("c1"),
            SalesRecord::new(day, 20.0).with_customer("c1"),
            SalesRecord::new(day, 30.0).with_customer("c2"),
            SalesRecord::new(day, 40.0),
        ];
        let summary = compute_metrics(&records);
        assert_eq!(summary.total_orders, 4);
        assert_eq!(summary.unique_customers, 2);
        assert!((summary.total_sales - 100.0).abs() < f64::EPSILON);
        assert!((summary.avg_order_value - 25.0).abs() < f64::EPSILON);
    }
}
