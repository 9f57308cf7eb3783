//! CSV input reading.
//!
//! The header row names the columns; every following row becomes one
//! [`Record`] with its fields in header order. Rows shorter than the header
//! lack the trailing columns, and fields are kept verbatim (the tree builder
//! does the trimming).

use std::{fs::File, io::Read, path::Path};

use log::{debug, trace};

use sunburst::{SunburstError, record::Record};

/// Read all records from the CSV file at `path`.
///
/// # Errors
///
/// Returns [`SunburstError::Io`] if the file cannot be opened, or
/// [`SunburstError::Csv`] if it is not valid CSV.
pub fn read_records(path: impl AsRef<Path>) -> Result<Vec<Record>, SunburstError> {
    let path = path.as_ref();
    debug!(path = path.display().to_string(); "Reading CSV input");

    let file = File::open(path)?;
    parse_records(file)
}

/// Read all records from CSV data.
///
/// # Errors
///
/// Returns [`SunburstError::Csv`] for malformed CSV or read failures.
pub fn parse_records(reader: impl Read) -> Result<Vec<Record>, SunburstError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::None)
        .from_reader(reader);

    let headers = reader.headers().map_err(csv_error)?.clone();
    trace!(columns = headers.len(); "CSV header read");

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(csv_error)?;
        records.push(headers.iter().zip(row.iter()).collect::<Record>());
    }

    debug!(records = records.len(); "CSV input read");
    Ok(records)
}

fn csv_error(err: csv::Error) -> SunburstError {
    match err.position() {
        Some(position) => SunburstError::Csv(format!("line {}: {err}", position.line())),
        None => SunburstError::Csv(err.to_string()),
    }
}
