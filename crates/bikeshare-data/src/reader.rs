//! CSV loading for the bikeshare explorer.
//!
//! Reads one city's trip records from its flat CSV file, derives the
//! calendar fields each report needs, and applies the month/day filters.

use std::path::Path;

use bikeshare_core::city::City;
use bikeshare_core::error::{BikeshareError, Result};
use bikeshare_core::filters::{DayFilter, MonthFilter};
use bikeshare_core::models::{Dataset, TripRecord};
use chrono::NaiveDateTime;
use serde::Deserialize;
use tracing::{debug, info};

/// Columns every city file must carry. The leading unnamed index column is
/// not required and is never mapped.
const REQUIRED_COLUMNS: [&str; 5] = [
    "Start Time",
    "Trip Duration",
    "Start Station",
    "End Station",
    "User Type",
];

/// Timestamp formats seen across the published city files.
const TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"];

// ── Raw CSV row ───────────────────────────────────────────────────────────────

/// The CSV row shape before timestamp parsing and field derivation.
///
/// Washington publishes trip durations as floats and the birth-year column
/// (where present) holds float-formatted strings such as `1992.0`, so both
/// are read as `f64` first.
#[derive(Debug, Deserialize)]
struct RawTripRecord {
    #[serde(rename = "Start Time")]
    start_time: String,
    #[serde(rename = "End Time", default)]
    end_time: Option<String>,
    #[serde(rename = "Trip Duration")]
    trip_duration: f64,
    #[serde(rename = "Start Station")]
    start_station: String,
    #[serde(rename = "End Station")]
    end_station: String,
    #[serde(rename = "User Type", default)]
    user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    birth_year: Option<f64>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load every trip record from `city`'s CSV under `data_dir`.
///
/// Malformed rows are fatal: an unparseable timestamp or a missing required
/// column surfaces as an error rather than being skipped, since a broken
/// source file would silently distort every downstream statistic.
pub fn load_city(data_dir: &Path, city: City) -> Result<Dataset> {
    let path = city.data_path(data_dir);
    let file = std::fs::File::open(&path).map_err(|source| BikeshareError::FileRead {
        path: path.clone(),
        source,
    })?;

    let mut reader = csv::Reader::from_reader(file);

    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(BikeshareError::MissingColumn(column.to_string()));
        }
    }
    let has_gender = headers.iter().any(|h| h == "Gender");
    let has_birth_year = headers.iter().any(|h| h == "Birth Year");

    let mut trips = Vec::new();
    for row in reader.deserialize::<RawTripRecord>() {
        trips.push(into_trip_record(row?)?);
    }

    info!(
        "Loaded {} trips from {} (gender: {}, birth year: {})",
        trips.len(),
        path.display(),
        has_gender,
        has_birth_year,
    );

    Ok(Dataset {
        trips,
        has_gender,
        has_birth_year,
    })
}

/// Keep only the trips whose derived month and weekday pass the filters.
/// The schema flags are preserved.
pub fn apply_filters(mut dataset: Dataset, month: MonthFilter, day: DayFilter) -> Dataset {
    let before = dataset.len();
    dataset
        .trips
        .retain(|trip| month.matches(trip.month) && day.matches(trip.weekday));
    debug!(
        "Filter {:?}/{:?}: {} of {} trips kept",
        month,
        day,
        dataset.len(),
        before,
    );
    dataset
}

/// Load `city`'s records and apply the month/day filters in one step.
///
/// An empty result is not an error here; the session layer reports it.
pub fn load_filtered(
    data_dir: &Path,
    city: City,
    month: MonthFilter,
    day: DayFilter,
) -> Result<Dataset> {
    let dataset = load_city(data_dir, city)?;
    Ok(apply_filters(dataset, month, day))
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Parse a timestamp string against the known formats.
fn parse_timestamp(value: &str) -> Result<NaiveDateTime> {
    for format in TIMESTAMP_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(value.trim(), format) {
            return Ok(ts);
        }
    }
    Err(BikeshareError::TimestampParse(value.to_string()))
}

/// Convert a raw CSV row into a [`TripRecord`], deriving the calendar fields.
fn into_trip_record(raw: RawTripRecord) -> Result<TripRecord> {
    let start_time = parse_timestamp(&raw.start_time)?;
    let end_time = raw
        .end_time
        .as_deref()
        .map(parse_timestamp)
        .transpose()?;

    Ok(TripRecord::new(
        start_time,
        end_time,
        raw.trip_duration as i64,
        raw.start_station,
        raw.end_station,
        raw.user_type,
        raw.gender,
        raw.birth_year.map(|y| y.round() as i32),
    ))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
