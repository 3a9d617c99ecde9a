//! Data source loading
//!
//! Parses a delimited text file into an ordered sequence of numeric
//! observations. The first line is a header and is discarded; every
//! following record contributes the numeric value in its first field.
//! Extra columns are ignored, so both a bare column of numbers and a
//! wider record layout (e.g. `Salary_GEL,Age,Industry,Sex`) load the
//! same way.

use crate::{Error, Result};
use std::path::Path;
use tracing::debug;

/// Load the value column of a CSV data source.
///
/// Fails with [`Error::Io`] if the path is unreadable and with
/// [`Error::Parse`] (naming the 1-based line) on the first record whose
/// value field cannot be parsed as a number.
pub fn load_values<P: AsRef<Path>>(path: P) -> Result<Vec<f64>> {
    let path = path.as_ref();
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(csv_error)?;

    let mut values = Vec::new();
    for record in reader.records() {
        let record = record.map_err(csv_error)?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let field = record
            .get(0)
            .ok_or_else(|| Error::parse_at(line, "missing value field"))?;
        if field.is_empty() {
            return Err(Error::parse_at(line, "empty value field"));
        }
        let value: f64 = field
            .parse()
            .map_err(|_| Error::parse_at(line, format!("not a number: '{field}'")))?;
        values.push(value);
    }

    debug!(rows = values.len(), path = %path.display(), "loaded data source");
    Ok(values)
}

fn csv_error(err: csv::Error) -> Error {
    let line = err.position().map(|p| p.line()).unwrap_or(0);
    let message = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(io) => Error::Io(io),
        _ => Error::Parse { line, message },
    }
}
