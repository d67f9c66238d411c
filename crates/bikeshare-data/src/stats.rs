//! Summary statistics over a filtered dataset.
//!
//! Each stats struct is computed in one pass and carries plain values; the
//! UI layer owns all presentation. `compute` returns `None` on an empty
//! dataset so callers can report a "no matching records" condition instead
//! of failing.

use std::collections::HashMap;
use std::hash::Hash;

use bikeshare_core::models::Dataset;
use chrono::Weekday;

// ── Mode helpers ──────────────────────────────────────────────────────────────

/// Most frequent value in `items`, ties broken by first encounter.
fn mode<K>(items: impl Iterator<Item = K>) -> Option<K>
where
    K: Eq + Hash,
{
    mode_with_count(items).map(|(value, _)| value)
}

/// Like [`mode`], but also returns the winning count.
fn mode_with_count<K>(items: impl Iterator<Item = K>) -> Option<(K, usize)>
where
    K: Eq + Hash,
{
    // (count, first index); first index is unique, so ties on count resolve
    // deterministically to the earliest-seen value.
    let mut counts: HashMap<K, (usize, usize)> = HashMap::new();
    for (index, item) in items.enumerate() {
        counts.entry(item).or_insert((0, index)).0 += 1;
    }
    counts
        .into_iter()
        .max_by_key(|(_, (count, first))| (*count, std::cmp::Reverse(*first)))
        .map(|(value, (count, _))| (value, count))
}

/// Distinct values with their counts, ordered by descending count; ties
/// keep first-encounter order.
fn value_counts<K>(items: impl Iterator<Item = K>) -> Vec<(K, usize)>
where
    K: Eq + Hash,
{
    let mut counts: HashMap<K, (usize, usize)> = HashMap::new();
    for (index, item) in items.enumerate() {
        counts.entry(item).or_insert((0, index)).0 += 1;
    }
    let mut entries: Vec<(K, usize, usize)> = counts
        .into_iter()
        .map(|(value, (count, first))| (value, count, first))
        .collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
    entries
        .into_iter()
        .map(|(value, count, _)| (value, count))
        .collect()
}

// ── Time-of-travel statistics ─────────────────────────────────────────────────

/// Most frequent travel times over the filtered dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TravelTimeStats {
    /// Most common calendar month (1–12).
    pub month: u32,
    /// Most common day of week.
    pub weekday: Weekday,
    /// Most common start hour (0–23).
    pub hour: u32,
}

impl TravelTimeStats {
    pub fn compute(dataset: &Dataset) -> Option<Self> {
        Some(Self {
            month: mode(dataset.trips.iter().map(|t| t.month))?,
            weekday: mode(dataset.trips.iter().map(|t| t.weekday))?,
            hour: mode(dataset.trips.iter().map(|t| t.hour))?,
        })
    }
}

// ── Station statistics ────────────────────────────────────────────────────────

/// Most popular stations and station pair over the filtered dataset.
///
/// The pair is selected by trip count (count-based arg-max), never by
/// summed duration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationStats {
    pub start_station: String,
    pub end_station: String,
    /// The (start, end) pair with the most trips.
    pub trip: (String, String),
    /// How many trips the winning pair has.
    pub trip_count: usize,
}

impl StationStats {
    pub fn compute(dataset: &Dataset) -> Option<Self> {
        let start_station = mode(dataset.trips.iter().map(|t| t.start_station.as_str()))?;
        let end_station = mode(dataset.trips.iter().map(|t| t.end_station.as_str()))?;
        let (trip, trip_count) = mode_with_count(
            dataset
                .trips
                .iter()
                .map(|t| (t.start_station.as_str(), t.end_station.as_str())),
        )?;

        Some(Self {
            start_station: start_station.to_string(),
            end_station: end_station.to_string(),
            trip: (trip.0.to_string(), trip.1.to_string()),
            trip_count,
        })
    }
}

// ── Duration statistics ───────────────────────────────────────────────────────

/// Total and mean trip duration over the filtered dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DurationStats {
    pub total_seconds: i64,
    /// Mean duration floored to whole seconds.
    pub mean_seconds: i64,
    pub trips: usize,
}

impl DurationStats {
    pub fn compute(dataset: &Dataset) -> Option<Self> {
        if dataset.is_empty() {
            return None;
        }
        let total_seconds: i64 = dataset.trips.iter().map(|t| t.duration_seconds).sum();
        let trips = dataset.len();
        Some(Self {
            total_seconds,
            mean_seconds: total_seconds / trips as i64,
            trips,
        })
    }
}

// ── User statistics ───────────────────────────────────────────────────────────

/// Birth-year extremes and mode, as whole years.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthYearStats {
    pub earliest: i32,
    pub most_recent: i32,
    pub most_common: i32,
}

/// Rider demographics over the filtered dataset.
///
/// `genders` and `birth_years` are `None` when the city does not publish
/// the column (or, for birth years, when every value is missing).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStats {
    /// Counts per user type, descending by count.
    pub user_types: Vec<(String, usize)>,
    /// Counts per gender, descending by count.
    pub genders: Option<Vec<(String, usize)>>,
    pub birth_years: Option<BirthYearStats>,
}

impl UserStats {
    pub fn compute(dataset: &Dataset) -> Option<Self> {
        if dataset.is_empty() {
            return None;
        }

        let user_types = value_counts(dataset.trips.iter().filter_map(|t| t.user_type.as_deref()))
            .into_iter()
            .map(|(value, count)| (value.to_string(), count))
            .collect();

        let genders = dataset.has_gender.then(|| {
            value_counts(dataset.trips.iter().filter_map(|t| t.gender.as_deref()))
                .into_iter()
                .map(|(value, count)| (value.to_string(), count))
                .collect()
        });

        let birth_years = if dataset.has_birth_year {
            Self::birth_year_stats(dataset)
        } else {
            None
        };

        Some(Self {
            user_types,
            genders,
            birth_years,
        })
    }

    fn birth_year_stats(dataset: &Dataset) -> Option<BirthYearStats> {
        let years = || dataset.trips.iter().filter_map(|t| t.birth_year);
        Some(BirthYearStats {
            earliest: years().min()?,
            most_recent: years().max()?,
            most_common: mode(years())?,
        })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
