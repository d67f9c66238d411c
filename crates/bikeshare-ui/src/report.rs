//! The four statistics reports, rendered as plain text.
//!
//! Each report computes its statistics, prints the figures, the wall-clock
//! seconds the computation took, and a 40-dash rule. An empty dataset is
//! reported as a "no matching records" line rather than failing.

use std::io::Write;
use std::time::Instant;

use bikeshare_core::formatting::{day_name, format_duration_breakdown, month_name};
use bikeshare_core::models::Dataset;
use bikeshare_data::stats::{DurationStats, StationStats, TravelTimeStats, UserStats};

/// Horizontal rule printed after every report section.
pub const SECTION_RULE: &str = "----------------------------------------";

/// Line shown when the month/day filters matched nothing.
pub const NO_MATCHING_RECORDS: &str = "No trip records match the selected filters.";

// ── Time-of-travel report ─────────────────────────────────────────────────────

/// Most frequent month, day of week and start hour.
pub fn report_time_stats<W: Write>(output: &mut W, dataset: &Dataset) -> std::io::Result<()> {
    let started = Instant::now();
    writeln!(output, "\nCalculating The Most Frequent Times of Travel...\n")?;

    match TravelTimeStats::compute(dataset) {
        Some(stats) => {
            let month = month_name(stats.month).unwrap_or("unknown");
            writeln!(output, "Most popular month of travel : {month}")?;
            writeln!(
                output,
                "Most popular day of travel   : {}",
                day_name(stats.weekday)
            )?;
            writeln!(output, "Most popular start hour      : {}", stats.hour)?;
        }
        None => writeln!(output, "{NO_MATCHING_RECORDS}")?,
    }

    finish_section(output, started)
}

// ── Station report ────────────────────────────────────────────────────────────

/// Most popular start station, end station and station pair.
pub fn report_station_stats<W: Write>(output: &mut W, dataset: &Dataset) -> std::io::Result<()> {
    let started = Instant::now();
    writeln!(output, "\nCalculating The Most Popular Stations and Trip...\n")?;

    match StationStats::compute(dataset) {
        Some(stats) => {
            writeln!(
                output,
                "Most common start station : {}",
                stats.start_station
            )?;
            writeln!(output, "Most common end station   : {}", stats.end_station)?;
            writeln!(
                output,
                "Most frequent trip        : {} -> {} ({} trips)",
                stats.trip.0, stats.trip.1, stats.trip_count
            )?;
        }
        None => writeln!(output, "{NO_MATCHING_RECORDS}")?,
    }

    finish_section(output, started)
}

// ── Duration report ───────────────────────────────────────────────────────────

/// Total and mean trip duration, broken down into days/hours/minutes/seconds.
pub fn report_duration_stats<W: Write>(output: &mut W, dataset: &Dataset) -> std::io::Result<()> {
    let started = Instant::now();
    writeln!(output, "\nCalculating Trip Duration...\n")?;

    match DurationStats::compute(dataset) {
        Some(stats) => {
            writeln!(
                output,
                "Total travel time : {}",
                format_duration_breakdown(stats.total_seconds)
            )?;
            writeln!(
                output,
                "Mean travel time  : {}",
                format_duration_breakdown(stats.mean_seconds)
            )?;
        }
        None => writeln!(output, "{NO_MATCHING_RECORDS}")?,
    }

    finish_section(output, started)
}

// ── User report ───────────────────────────────────────────────────────────────

/// User-type counts plus gender and birth-year demographics where published.
pub fn report_user_stats<W: Write>(output: &mut W, dataset: &Dataset) -> std::io::Result<()> {
    let started = Instant::now();
    writeln!(output, "\nCalculating User Stats...\n")?;

    match UserStats::compute(dataset) {
        Some(stats) => {
            writeln!(output, "Counts by user type :")?;
            for (user_type, count) in &stats.user_types {
                writeln!(output, "  {user_type} : {count}")?;
            }

            match &stats.genders {
                Some(genders) => {
                    writeln!(output, "\nCounts by gender :")?;
                    for (gender, count) in genders {
                        writeln!(output, "  {gender} : {count}")?;
                    }
                }
                None => writeln!(output, "\nNo gender data available for this city.")?,
            }

            match &stats.birth_years {
                Some(years) => {
                    writeln!(output, "\nEarliest year of birth    : {}", years.earliest)?;
                    writeln!(output, "Most recent year of birth : {}", years.most_recent)?;
                    writeln!(output, "Most common year of birth : {}", years.most_common)?;
                }
                None => writeln!(output, "\nNo birth year data available for this city.")?,
            }
        }
        None => writeln!(output, "{NO_MATCHING_RECORDS}")?,
    }

    finish_section(output, started)
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Print the elapsed-seconds line and the section rule.
fn finish_section<W: Write>(output: &mut W, started: Instant) -> std::io::Result<()> {
    writeln!(
        output,
        "\nThis took {:.6} seconds.",
        started.elapsed().as_secs_f64()
    )?;
    writeln!(output, "{SECTION_RULE}")
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use bikeshare_core::models::TripRecord;
    use chrono::NaiveDate;

    // ── Helpers ───────────────────────────────────────────────────────────────

    fn trip(month: u32, day: u32, hour: u32, from: &str, to: &str, duration: i64) -> TripRecord {
        TripRecord::new(
            NaiveDate::from_ymd_opt(2017, month, day)
                .unwrap()
                .and_hms_opt(hour, 0, 0)
                .unwrap(),
            None,
            duration,
            from.to_string(),
            to.to_string(),
            Some("Subscriber".to_string()),
            None,
            None,
        )
    }

    fn sample_dataset() -> Dataset {
        Dataset {
            trips: vec![
                trip(6, 5, 17, "Canal St", "Clark St", 300),
                trip(6, 6, 17, "Canal St", "Clark St", 300),
                trip(1, 2, 8, "Lake St", "State St", 90_061),
            ],
            has_gender: false,
            has_birth_year: false,
        }
    }

    fn render<F>(dataset: &Dataset, report: F) -> String
    where
        F: Fn(&mut Vec<u8>, &Dataset) -> std::io::Result<()>,
    {
        let mut output = Vec::new();
        report(&mut output, dataset).unwrap();
        String::from_utf8(output).unwrap()
    }

    // ── report_time_stats ─────────────────────────────────────────────────────

    #[test]
    fn test_time_report_names_month() {
        let text = render(&sample_dataset(), report_time_stats);
        assert!(text.contains("Most popular month of travel : June"));
        assert!(text.contains("Most popular start hour      : 17"));
        assert!(text.contains("This took"));
        assert!(text.contains(SECTION_RULE));
    }

    #[test]
    fn test_time_report_empty_dataset() {
        let text = render(&Dataset::default(), report_time_stats);
        assert!(text.contains(NO_MATCHING_RECORDS));
    }

    // ── report_station_stats ──────────────────────────────────────────────────

    #[test]
    fn test_station_report_figures() {
        let text = render(&sample_dataset(), report_station_stats);
        assert!(text.contains("Most common start station : Canal St"));
        assert!(text.contains("Most common end station   : Clark St"));
        assert!(text.contains("Most frequent trip        : Canal St -> Clark St (2 trips)"));
    }

    // ── report_duration_stats ─────────────────────────────────────────────────

    #[test]
    fn test_duration_report_breakdown() {
        let text = render(&sample_dataset(), report_duration_stats);
        // total = 300 + 300 + 90061 = 90661 → 1 day 1 hour 11 minutes 1 second
        assert!(text.contains("Total travel time : 1 days 1 hours 11 minutes 1 seconds"));
        // mean = 90661 / 3 = 30220 (floored) → 8 hours 23 minutes 40 seconds
        assert!(text.contains("Mean travel time  : 0 days 8 hours 23 minutes 40 seconds"));
    }

    // ── report_user_stats ─────────────────────────────────────────────────────

    #[test]
    fn test_user_report_washington_shape() {
        let text = render(&sample_dataset(), report_user_stats);
        assert!(text.contains("Subscriber : 3"));
        assert!(text.contains("No gender data available for this city."));
        assert!(text.contains("No birth year data available for this city."));
    }

    #[test]
    fn test_user_report_with_demographics() {
        let mut dataset = sample_dataset();
        dataset.has_gender = true;
        dataset.has_birth_year = true;
        dataset.trips[0].gender = Some("Female".to_string());
        dataset.trips[0].birth_year = Some(1992);
        dataset.trips[1].gender = Some("Male".to_string());
        dataset.trips[1].birth_year = Some(1959);

        let text = render(&dataset, report_user_stats);
        assert!(text.contains("Counts by gender :"));
        assert!(text.contains("Female : 1"));
        assert!(text.contains("Earliest year of birth    : 1959"));
        assert!(text.contains("Most recent year of birth : 1992"));
        assert!(text.contains("Most common year of birth : 1992"));
    }

    #[test]
    fn test_user_report_empty_dataset() {
        let text = render(&Dataset::default(), report_user_stats);
        assert!(text.contains(NO_MATCHING_RECORDS));
    }
}
