//! CSV loading and row validation.
//!
//! The input is a CSV resource with at least the columns `Date`
//! (`DD/MM/YYYY`) and `HighTemperature` (decimal string). Malformed rows are
//! rejected here with the offending line number rather than letting NaN leak
//! into the chart geometry.

use crate::models::{DATE_FORMAT, RawRow, Sample};
use chrono::NaiveDate;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

/// Validation failure while reading the temperature CSV.
#[derive(Debug, Error)]
pub enum LoadError {
    /// I/O failure or structural CSV problem (missing column, ragged row).
    #[error("failed to read CSV input: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row}: invalid date {value:?} (expected DD/MM/YYYY)")]
    BadDate { row: usize, value: String },
    #[error("row {row}: invalid temperature {value:?}")]
    BadTemperature { row: usize, value: String },
    #[error("no data rows in input")]
    Empty,
}

/// Load samples from any reader producing the CSV resource.
pub fn load_samples<R: Read>(reader: R) -> Result<Vec<Sample>, LoadError> {
    let rdr = csv::Reader::from_reader(reader);
    let mut samples = Vec::new();
    for (idx, result) in rdr.into_deserialize::<RawRow>().enumerate() {
        // 1-based line number, accounting for the header line.
        let row = idx + 2;
        samples.push(parse_row(result?, row)?);
    }
    if samples.is_empty() {
        return Err(LoadError::Empty);
    }
    log::debug!("loaded {} samples", samples.len());
    Ok(samples)
}

/// Load samples from a CSV file on disk.
pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<Vec<Sample>, LoadError> {
    let file = File::open(path.as_ref()).map_err(csv::Error::from)?;
    load_samples(file)
}

fn parse_row(raw: RawRow, row: usize) -> Result<Sample, LoadError> {
    let date =
        NaiveDate::parse_from_str(raw.date.trim(), DATE_FORMAT).map_err(|_| LoadError::BadDate {
            row,
            value: raw.date.clone(),
        })?;
    let value = raw
        .high_temperature
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| LoadError::BadTemperature {
            row,
            value: raw.high_temperature.clone(),
        })?;
    Ok(Sample::new(date, value))
}
