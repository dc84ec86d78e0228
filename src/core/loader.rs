//! Dataset loader: CSV source → `TripTable`, narrowed by month and day.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::{Filter, Schema, Trip, TripTable};
use chrono::NaiveDateTime;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

pub const START_TIME: &str = "Start Time";
pub const END_TIME: &str = "End Time";
pub const START_STATION: &str = "Start Station";
pub const END_STATION: &str = "End Station";
pub const TRIP_DURATION: &str = "Trip Duration";
pub const USER_TYPE: &str = "User Type";
pub const GENDER: &str = "Gender";
pub const BIRTH_YEAR: &str = "Birth Year";

const REQUIRED_COLUMNS: [&str; 5] = [
    START_TIME,
    START_STATION,
    END_STATION,
    TRIP_DURATION,
    USER_TYPE,
];

const TIMESTAMP_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Row as it appears in the source file. Unknown columns (the unnamed
/// index column, for instance) are ignored.
#[derive(Debug, Deserialize)]
struct RawTrip {
    #[serde(rename = "Start Time")]
    start_time: String,
    #[serde(rename = "End Time", default)]
    end_time: Option<String>,
    #[serde(rename = "Start Station")]
    start_station: String,
    #[serde(rename = "End Station")]
    end_station: String,
    #[serde(rename = "Trip Duration")]
    trip_duration: f64,
    #[serde(rename = "User Type", default)]
    user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    birth_year: Option<f64>,
}

pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}

fn malformed(path: &Path, line: u64, reason: impl Into<String>) -> AppError {
    AppError::MalformedRecord {
        path: path.to_path_buf(),
        line,
        reason: reason.into(),
    }
}

fn csv_failure(path: &Path, e: csv::Error) -> AppError {
    let line = e.position().map(|p| p.line()).unwrap_or(0);
    malformed(path, line, e.to_string())
}

impl RawTrip {
    fn into_trip(self, path: &Path, line: u64) -> AppResult<Trip> {
        let start_time = parse_timestamp(&self.start_time).ok_or_else(|| {
            malformed(path, line, format!("invalid start time '{}'", self.start_time))
        })?;

        let end_time = match self.end_time.as_deref() {
            Some(s) => Some(
                parse_timestamp(s)
                    .ok_or_else(|| malformed(path, line, format!("invalid end time '{s}'")))?,
            ),
            None => None,
        };

        if !self.trip_duration.is_finite() || self.trip_duration < 0.0 {
            return Err(malformed(
                path,
                line,
                format!("invalid trip duration {}", self.trip_duration),
            ));
        }

        let birth_year = match self.birth_year {
            Some(y) if y.is_finite() => Some(y.trunc() as i32),
            Some(y) => return Err(malformed(path, line, format!("invalid birth year {y}"))),
            None => None,
        };

        Ok(Trip::new(
            start_time,
            end_time,
            self.start_station,
            self.end_station,
            self.trip_duration,
            self.user_type,
            self.gender,
            birth_year,
        ))
    }
}

/// Parse every record of a CSV stream. `origin` is only used in error
/// messages. Any bad row fails the whole read.
pub fn read_trips<R: Read>(reader: R, origin: &Path) -> AppResult<TripTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr
        .headers()
        .map_err(|e| csv_failure(origin, e))?
        .clone();
    let has = |name: &str| headers.iter().any(|h| h == name);

    if let Some(missing) = REQUIRED_COLUMNS.into_iter().find(|c| !has(*c)) {
        return Err(AppError::MissingColumn {
            path: origin.to_path_buf(),
            column: missing.to_string(),
        });
    }

    let schema = Schema {
        has_end_time: has(END_TIME),
        has_gender: has(GENDER),
        has_birth_year: has(BIRTH_YEAR),
    };

    let mut trips = Vec::new();
    let mut record = csv::StringRecord::new();

    while rdr
        .read_record(&mut record)
        .map_err(|e| csv_failure(origin, e))?
    {
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let raw: RawTrip = record
            .deserialize(Some(&headers))
            .map_err(|e| malformed(origin, line, e.to_string()))?;
        trips.push(raw.into_trip(origin, line)?);
    }

    Ok(TripTable::new(schema, trips))
}

/// Read the whole file at `path`.
pub fn load_table(path: &Path) -> AppResult<TripTable> {
    let file = File::open(path).map_err(|source| AppError::DataSource {
        path: path.to_path_buf(),
        source,
    })?;
    read_trips(file, path)
}

/// Resolve the city to its source, read it and narrow by month and day.
pub fn load(cfg: &Config, filter: &Filter) -> AppResult<TripTable> {
    let path = cfg.source_for(filter.city);
    debug!(city = %filter.city, path = %path.display(), "loading trips");

    let table = load_table(&path)?;
    let filtered = table.filter(filter.month, filter.day);

    debug!(
        total = table.len(),
        kept = filtered.len(),
        month = %filter.month,
        day = %filter.day,
        "filtered trips"
    );
    Ok(filtered)
}
