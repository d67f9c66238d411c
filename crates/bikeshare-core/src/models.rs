use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};

/// A single trip record read from a city CSV, with calendar fields derived
/// from the start time at load time.
#[derive(Debug, Clone)]
pub struct TripRecord {
    /// When the trip began.
    pub start_time: NaiveDateTime,
    /// When the trip ended, if the column was present and populated.
    pub end_time: Option<NaiveDateTime>,
    /// Trip length in whole seconds.
    pub duration_seconds: i64,
    /// Name of the station where the trip began.
    pub start_station: String,
    /// Name of the station where the trip ended.
    pub end_station: String,
    /// Rider category, e.g. "Subscriber" or "Customer".
    pub user_type: Option<String>,
    /// Rider gender; only Chicago and New York City publish this.
    pub gender: Option<String>,
    /// Rider birth year; only Chicago and New York City publish this.
    pub birth_year: Option<i32>,
    /// Calendar month of `start_time` (1–12).
    pub month: u32,
    /// Day of week of `start_time`.
    pub weekday: Weekday,
    /// Hour of day of `start_time` (0–23).
    pub hour: u32,
}

impl TripRecord {
    /// Build a record, deriving month / weekday / hour from `start_time`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        start_time: NaiveDateTime,
        end_time: Option<NaiveDateTime>,
        duration_seconds: i64,
        start_station: String,
        end_station: String,
        user_type: Option<String>,
        gender: Option<String>,
        birth_year: Option<i32>,
    ) -> Self {
        Self {
            month: start_time.month(),
            weekday: start_time.weekday(),
            hour: start_time.hour(),
            start_time,
            end_time,
            duration_seconds,
            start_station,
            end_station,
            user_type,
            gender,
            birth_year,
        }
    }
}

/// A loaded (and possibly filtered) collection of trip records, plus flags
/// recording which optional columns the source file carried. Washington's
/// file has neither gender nor birth year.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub trips: Vec<TripRecord>,
    pub has_gender: bool,
    pub has_birth_year: bool,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }
}
