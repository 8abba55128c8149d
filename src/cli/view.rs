//! Text rendering of dashboard views.

use crate::config::Config;
use chrono::NaiveDate;

use crate::currency::{
    format_currency_value, format_date, format_number, CurrencyCode, FormatOptions, LocaleConfig,
};
use crate::dataset::{ColumnSet, SalesRecord};
use crate::report::{MetricsSummary, Report};

use super::output::{info, section};
use super::table::{Table, TableColumn};

const TEXT_COLUMN_WIDTH: usize = 28;

/// Money, count, and date rendering driven by the display settings in [`Config`].
pub struct Formatter {
    currency: CurrencyCode,
    locale: LocaleConfig,
    options: FormatOptions,
}

impl Formatter {
    pub fn new(config: &Config) -> Self {
        Self {
            currency: config.currency_code(),
            locale: config.locale_config(),
            options: config.format_options(),
        }
    }

    pub fn money(&self, amount: f64) -> String {
        format_currency_value(amount, &self.currency, &self.locale, &self.options)
    }

    pub fn count(&self, value: usize) -> String {
        format_number(&self.locale, value as f64, 0)
    }

    pub fn date(&self, date: NaiveDate) -> String {
        format_date(&self.locale, date)
    }
}

pub fn print_metrics(formatter: &Formatter, metrics: &MetricsSummary) {
    section("Key metrics");
    info(format!("  Total sales      : {}", formatter.money(metrics.total_sales)));
    info(format!(
        "  Avg order value  : {}",
        formatter.money(metrics.avg_order_value)
    ));
    info(format!(
        "  Total orders     : {}",
        formatter.count(metrics.total_orders)
    ));
    info(format!(
        "  Unique customers : {}",
        formatter.count(metrics.unique_customers)
    ));
}

pub fn print_report(formatter: &Formatter, report: &Report) {
    let range = &report.filter.range;
    section(format!(
        "Report {} to {} ({})",
        formatter.date(range.start),
        formatter.date(range.end),
        report.filter.category.label()
    ));
    print_metrics(formatter, &report.metrics);

    if report.metrics.total_orders == 0 {
        info("No records match the current filters.");
        return;
    }

    section("Sales trend");
    let mut trend = Table::new(vec![TableColumn::left("Date"), TableColumn::right("Sales")]);
    for point in &report.trend {
        trend.push_row(vec![
            formatter.date(point.date),
            formatter.money(point.amount),
        ]);
    }
    info(trend.render());

    if !report.by_category.is_empty() {
        section("Sales by category");
        let mut table = Table::new(vec![
            TableColumn::left("Category").max_width(TEXT_COLUMN_WIDTH),
            TableColumn::right("Sales"),
        ]);
        for total in &report.by_category {
            table.push_row(vec![total.category.clone(), formatter.money(total.amount)]);
        }
        info(table.render());
    }

    if !report.top_products.is_empty() {
        section(format!("Top {} products", report.top_products.len()));
        let mut table = Table::new(vec![
            TableColumn::right("#"),
            TableColumn::left("Product").max_width(TEXT_COLUMN_WIDTH),
            TableColumn::right("Sales"),
        ]);
        for (rank, total) in report.top_products.iter().enumerate() {
            table.push_row(vec![
                (rank + 1).to_string(),
                total.product.clone(),
                formatter.money(total.amount),
            ]);
        }
        info(table.render());
    }

    if let Some(monthly) = &report.monthly {
        section("Monthly comparison");
        let mut table = Table::new(vec![TableColumn::left("Month"), TableColumn::right("Sales")]);
        for month in monthly {
            table.push_row(vec![month.label(), formatter.money(month.amount)]);
        }
        info(table.render());
    }
}

pub fn print_records<'a, I>(formatter: &Formatter, columns: &ColumnSet, records: I)
where
    I: IntoIterator<Item = &'a SalesRecord>,
{
    let mut table = Table::new(
        columns
            .headers()
            .into_iter()
            .enumerate()
            .map(|(idx, header)| {
                // Amount is always the second column.
                if idx == 1 {
                    TableColumn::right(header)
                } else {
                    TableColumn::left(header).max_width(TEXT_COLUMN_WIDTH)
                }
            })
            .collect(),
    );
    for record in records {
        let mut row = vec![formatter.date(record.date), formatter.money(record.amount)];
        if columns.has_category {
            row.push(record.category.clone().unwrap_or_default());
        }
        if columns.has_product {
            row.push(record.product.clone().unwrap_or_default());
        }
        if columns.has_customer {
            row.push(record.customer.clone().unwrap_or_default());
        }
        table.push_row(row);
    }
    info(table.render());
}
