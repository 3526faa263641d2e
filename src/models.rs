use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// Date format used by the CSV input and by tooltip lookup keys.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Raw CSV row as it appears in the input file.
///
/// Both fields stay as strings so that validation can report the offending
/// text verbatim instead of a serde type error.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRow {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "HighTemperature")]
    pub high_temperature: String,
}

/// One observation: a calendar day and its recorded high temperature.
///
/// Samples are assumed to be ordered by date ascending; duplicate dates are
/// not disambiguated (lookups return the first match).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub date: NaiveDate,
    pub high_temperature: f64,
}

impl Sample {
    pub fn new(date: NaiveDate, high_temperature: f64) -> Self {
        Self {
            date,
            high_temperature,
        }
    }

    /// The lookup key for this sample, matching the raw CSV date column.
    pub fn date_key(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }
}

/// Midnight at the start of `date`, as a timestamp in seconds.
///
/// All time-scale math runs on second timestamps; this is the single place
/// where calendar dates enter that coordinate system.
pub fn date_to_secs(date: NaiveDate) -> f64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp() as f64
}

/// Inverse of [`date_to_secs`] at second precision.
///
/// Returns `None` when the timestamp falls outside the representable
/// calendar range (possible after extreme pans).
pub fn secs_to_datetime(secs: f64) -> Option<NaiveDateTime> {
    if !secs.is_finite() {
        return None;
    }
    chrono::DateTime::from_timestamp(secs.floor() as i64, 0).map(|dt| dt.naive_utc())
}

/// The `[min, max]` date extent of a sample run.
pub fn date_extent(samples: &[Sample]) -> Option<(NaiveDate, NaiveDate)> {
    let min = samples.iter().map(|s| s.date).min()?;
    let max = samples.iter().map(|s| s.date).max()?;
    Some((min, max))
}

/// The y domain: full value extent with 10% headroom above and below.
///
/// A zero-height extent (all values equal) widens to a fixed ±1.0 floor so
/// the scale never degenerates.
pub fn padded_value_extent(samples: &[Sample]) -> Option<(f64, f64)> {
    let values: Vec<f64> = samples
        .iter()
        .map(|s| s.high_temperature)
        .filter(|v| v.is_finite())
        .collect();
    if values.is_empty() {
        return None;
    }
    let (mut min, mut max) = (
        values.iter().cloned().fold(f64::INFINITY, f64::min),
        values.iter().cloned().fold(f64::NEG_INFINITY, f64::max),
    );
    let span = max - min;
    if span.abs() < f64::EPSILON {
        min -= 1.0;
        max += 1.0;
    } else {
        min -= span * 0.1;
        max += span * 0.1;
    }
    Some((min, max))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn date_key_matches_csv_format() {
        let s = Sample::new(d(2020, 1, 3), 12.0);
        assert_eq!(s.date_key(), "03/01/2020");
    }

    #[test]
    fn secs_round_trip() {
        let date = d(2014, 5, 23);
        let secs = date_to_secs(date);
        let back = secs_to_datetime(secs).unwrap();
        assert_eq!(back.date(), date);
    }

    #[test]
    fn padded_extent_adds_ten_percent() {
        let samples = vec![
            Sample::new(d(2020, 1, 1), 10.0),
            Sample::new(d(2020, 1, 2), 20.0),
        ];
        let (lo, hi) = padded_value_extent(&samples).unwrap();
        assert!((lo - 9.0).abs() < 1e-9);
        assert!((hi - 21.0).abs() < 1e-9);
    }

    #[test]
    fn flat_series_gets_minimum_domain() {
        let samples = vec![
            Sample::new(d(2020, 1, 1), 15.0),
            Sample::new(d(2020, 1, 2), 15.0),
        ];
        let (lo, hi) = padded_value_extent(&samples).unwrap();
        assert_eq!((lo, hi), (14.0, 16.0));
    }
}
