//! Loading tables from delimited text.
//!
//! The first record is the header. Every field is classified with
//! [`Cell::parse`], so null markers become missing cells and numeric
//! fields become numbers.

use std::io::Read;
use std::path::Path;

use crate::error::{BestiaryError, BestiaryResult};
use crate::table::{Cell, Table};

/// Read a comma-separated file with a header row.
pub fn read_csv(path: impl AsRef<Path>) -> BestiaryResult<Table> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "reading csv");
    let reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)?;
    from_csv_reader(reader)
}

/// Read comma-separated text with a header row from any reader.
pub fn from_reader<R: Read>(reader: R) -> BestiaryResult<Table> {
    let reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);
    from_csv_reader(reader)
}

fn from_csv_reader<R: Read>(mut reader: csv::Reader<R>) -> BestiaryResult<Table> {
    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();
    if headers.is_empty() || headers.iter().all(String::is_empty) {
        return Err(BestiaryError::InvalidArgument(
            "csv source has no columns".into(),
        ));
    }

    let mut table = Table::new(headers)?;
    for record in reader.records() {
        let record = record?;
        table.push_row(record.iter().map(Cell::parse).collect())?;
    }

    tracing::debug!(
        rows = table.len(),
        columns = table.column_names().len(),
        "csv loaded"
    );
    Ok(table)
}
