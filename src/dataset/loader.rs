//! CSV ingestion: header validation, date-column detection, and row parsing.

use std::{fs::File, io::Read, path::Path};

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use csv::StringRecord;

use crate::errors::{ReportError, Result};

use super::record::{
    ColumnSet, Dataset, SalesRecord, AMOUNT_COLUMN, CATEGORY_COLUMN, CUSTOMER_COLUMN,
    PRODUCT_COLUMN,
};

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d.%m.%Y"];
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Knobs for [`load_csv_path`] and [`load_csv_reader`].
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Header name of the date column. Detected from the data when `None`.
    pub date_column: Option<String>,
}

impl LoadOptions {
    pub fn with_date_column(column: impl Into<String>) -> Self {
        Self {
            date_column: Some(column.into()),
        }
    }
}

/// Parses a calendar date from the formats sales exports commonly use.
///
/// Timestamps are accepted and truncated to their date.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return Some(date);
        }
    }
    if let Ok(stamp) = DateTime::parse_from_rfc3339(value) {
        return Some(stamp.date_naive());
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|stamp| stamp.date())
}

pub fn load_csv_path(path: &Path, options: &LoadOptions) -> Result<Dataset> {
    let file = File::open(path)?;
    let name = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("dataset")
        .to_string();
    let dataset = load_csv_reader(name, file, options)?;
    tracing::info!(
        path = %path.display(),
        rows = dataset.len(),
        "loaded sales dataset"
    );
    Ok(dataset)
}

pub fn load_csv_reader<R: Read>(
    name: impl Into<String>,
    reader: R,
    options: &LoadOptions,
) -> Result<Dataset> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    if headers.is_empty() || headers.iter().all(str::is_empty) {
        return Err(ReportError::Validation("file has no header row".into()));
    }

    let rows = csv_reader
        .records()
        .collect::<std::result::Result<Vec<StringRecord>, csv::Error>>()?;

    let amount_idx = column_index(&headers, AMOUNT_COLUMN)
        .ok_or_else(|| ReportError::MissingColumns(vec![AMOUNT_COLUMN.to_string()]))?;
    let date_idx = match options.date_column.as_deref() {
        Some(declared) => column_index(&headers, declared)
            .ok_or_else(|| ReportError::MissingColumns(vec![declared.to_string()]))?,
        None if rows.is_empty() => sole_date_candidate(&headers, amount_idx)?,
        None => detect_date_column(&headers, &rows, amount_idx)?,
    };
    let category_idx = column_index(&headers, CATEGORY_COLUMN);
    let product_idx = column_index(&headers, PRODUCT_COLUMN);
    let customer_idx = column_index(&headers, CUSTOMER_COLUMN);

    let columns = ColumnSet {
        date_column: headers[date_idx].to_string(),
        has_category: category_idx.is_some(),
        has_product: product_idx.is_some(),
        has_customer: customer_idx.is_some(),
    };

    let mut records = Vec::with_capacity(rows.len());
    let mut skipped = 0usize;
    for (offset, row) in rows.iter().enumerate() {
        // Header is line 1.
        let line = offset + 2;
        let raw_date = row.get(date_idx).unwrap_or("");
        if raw_date.is_empty() {
            skipped += 1;
            continue;
        }
        let date = parse_date(raw_date).ok_or_else(|| {
            ReportError::Validation(format!(
                "row {line}: cannot parse `{raw_date}` in column `{}` as a date",
                columns.date_column
            ))
        })?;
        let amount = parse_amount(row.get(amount_idx).unwrap_or(""), line)?;

        records.push(SalesRecord {
            date,
            amount,
            category: optional_cell(row, category_idx),
            product: optional_cell(row, product_idx),
            customer: optional_cell(row, customer_idx),
        });
    }

    if skipped > 0 {
        tracing::warn!(skipped, "skipped rows without a date value");
    }
    if records.is_empty() && !rows.is_empty() {
        return Err(ReportError::Validation(
            "no rows carry a date value".into(),
        ));
    }

    Ok(Dataset::new(name, columns, records))
}

fn column_index(headers: &StringRecord, name: &str) -> Option<usize> {
    headers.iter().position(|header| header == name)
}

fn detect_date_column(
    headers: &StringRecord,
    rows: &[StringRecord],
    amount_idx: usize,
) -> Result<usize> {
    (0..headers.len())
        .filter(|idx| *idx != amount_idx)
        .find(|idx| column_parses_as_dates(rows, *idx))
        .ok_or(ReportError::NoDateColumn)
}

/// Header-only files carry no values to detect from; the date column is then
/// the one header that is neither `Amount` nor a known optional column.
fn sole_date_candidate(headers: &StringRecord, amount_idx: usize) -> Result<usize> {
    let known = [CATEGORY_COLUMN, PRODUCT_COLUMN, CUSTOMER_COLUMN];
    let candidates: Vec<usize> = headers
        .iter()
        .enumerate()
        .filter(|(idx, header)| *idx != amount_idx && !known.contains(header))
        .map(|(idx, _)| idx)
        .collect();
    match candidates.as_slice() {
        [only] => Ok(*only),
        [] => Err(ReportError::NoDateColumn),
        _ => Err(ReportError::Validation(
            "file contains no data rows and the date column is ambiguous".into(),
        )),
    }
}

fn column_parses_as_dates(rows: &[StringRecord], idx: usize) -> bool {
    let mut seen = false;
    for value in rows.iter().filter_map(|row| row.get(idx)) {
        if value.is_empty() {
            continue;
        }
        if parse_date(value).is_none() {
            return false;
        }
        seen = true;
    }
    seen
}

fn parse_amount(raw: &str, line: usize) -> Result<f64> {
    let amount = raw.parse::<f64>().map_err(|_| {
        ReportError::Validation(format!(
            "row {line}: cannot parse `{raw}` in column `{AMOUNT_COLUMN}` as a number"
        ))
    })?;
    if !amount.is_finite() {
        return Err(ReportError::Validation(format!(
            "row {line}: amount `{raw}` is not a finite number"
        )));
    }
    Ok(amount)
}

fn optional_cell(row: &StringRecord, idx: Option<usize>) -> Option<String> {
    idx.and_then(|idx| row.get(idx))
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
