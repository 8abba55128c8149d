use std::{io::Write, path::Path};

use tempfile::NamedTempFile;

use crate::errors::Result;

use super::record::{ColumnSet, SalesRecord};

const EXPORT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Writes records as CSV using the dataset's column set as the header row.
pub fn write_csv<'a, W, I>(writer: W, columns: &ColumnSet, records: I) -> Result<usize>
where
    W: Write,
    I: IntoIterator<Item = &'a SalesRecord>,
{
    let mut csv_writer = csv::WriterBuilder::new().from_writer(writer);
    csv_writer.write_record(columns.headers())?;

    let mut written = 0usize;
    for record in records {
        let mut row = vec![
            record.date.format(EXPORT_DATE_FORMAT).to_string(),
            record.amount.to_string(),
        ];
        if columns.has_category {
            row.push(record.category.clone().unwrap_or_default());
        }
        if columns.has_product {
            row.push(record.product.clone().unwrap_or_default());
        }
        if columns.has_customer {
            row.push(record.customer.clone().unwrap_or_default());
        }
        csv_writer.write_record(&row)?;
        written += 1;
    }
    csv_writer.flush()?;
    Ok(written)
}

/// Renders records to an in-memory CSV string.
pub fn to_csv_string<'a, I>(columns: &ColumnSet, records: I) -> Result<String>
where
    I: IntoIterator<Item = &'a SalesRecord>,
{
    let mut buffer = Vec::new();
    write_csv(&mut buffer, columns, records)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Exports records to `path`. Rows are staged in a temporary file next to the
/// target, which is removed again if writing or the final rename fails.
pub fn export_csv<'a, I>(path: &Path, columns: &ColumnSet, records: I) -> Result<usize>
where
    I: IntoIterator<Item = &'a SalesRecord>,
{
    let dir = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let mut staged = NamedTempFile::new_in(dir)?;
    let written = write_csv(staged.as_file_mut(), columns, records)?;
    staged.persist(path).map_err(|err| err.error)?;
    tracing::info!(path = %path.display(), rows = written, "exported filtered records");
    Ok(written)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn writes_header_and_optional_columns() {
        let mut columns = ColumnSet::new("Date");
        columns.has_category = true;
        let records = vec![
            SalesRecord::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), 12.5)
                .with_category("Books")
                .with_product("ignored"),
            SalesRecord::new(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(), -3.0),
        ];
        let csv = to_csv_string(&columns, &records).expect("render");
        assert_eq!(csv, "Date,Amount,Category\n2024-01-01,12.5,Books\n2024-01-02,-3,\n");
    }

    #[test]
    fn export_leaves_unrelated_tmp_siblings_alone() {
        let dir = tempfile::tempdir().expect("tempdir");
        let sibling = dir.path().join("report.tmp");
        std::fs::write(&sibling, "keep").expect("write");

        let records = vec![SalesRecord::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), 1.0)];
        let target = dir.path().join("report.csv");
        export_csv(&target, &ColumnSet::new("Date"), &records).expect("export");

        assert_eq!(std::fs::read_to_string(&sibling).expect("read"), "keep");
        assert_eq!(
            std::fs::read_to_string(&target).expect("read"),
            "Date,Amount\n2024-01-01,1\n"
        );
    }

    #[test]
    fn failed_export_cleans_up_staging_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let target = dir.path().join("occupied");
        std::fs::create_dir(&target).expect("mkdir");
        std::fs::write(target.join("inner.txt"), "x").expect("write");

        let records = vec![SalesRecord::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), 1.0)];
        export_csv(&target, &ColumnSet::new("Date"), &records).expect_err("target is a directory");

        let entries: Vec<_> = std::fs::read_dir(dir.path())
            .expect("list")
            .map(|entry| entry.expect("entry").file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("occupied")]);
    }
}
