//! Raw-row pager: prints successive 5-row windows of the filtered dataset
//! on demand.
//!
//! The pager is a loop over a window `[start, stop)` advanced by 5 on every
//! "yes". A window past the end of the table simply prints fewer rows (or
//! nothing); it never fails. "no" terminates, anything else re-prompts
//! without advancing.

use std::io::{BufRead, Write};

use bikeshare_core::models::{Dataset, TripRecord};

use crate::prompt::prompt_yes_no;

/// Rows shown per "yes" answer.
pub const PAGE_SIZE: usize = 5;

/// Placeholder printed for missing values.
pub const MISSING_VALUE: &str = "data not available";

const PAGER_PROMPT: &str = "\nWould you like to see 5 rows of raw trip data? Enter yes or no.";
const PAGER_HINT: &str = "Please enter yes or no.";

/// Run the pager until the user answers "no" (or input ends).
pub fn run_pager<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    dataset: &Dataset,
) -> std::io::Result<()> {
    let mut start = 0usize;
    loop {
        match prompt_yes_no(input, output, PAGER_PROMPT, Some(PAGER_HINT))? {
            Some(true) => {
                let stop = (start + PAGE_SIZE).min(dataset.len());
                for trip in &dataset.trips[start.min(dataset.len())..stop] {
                    write_trip(output, trip, dataset)?;
                }
                start += PAGE_SIZE;
            }
            // "no" or EOF both end the pager.
            Some(false) | None => return Ok(()),
        }
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Print one trip as labelled field lines. The CSV's index column is never
/// loaded, so only the named columns appear; gender and birth-year lines are
/// shown only for cities that publish them.
fn write_trip<W: Write>(
    output: &mut W,
    trip: &TripRecord,
    dataset: &Dataset,
) -> std::io::Result<()> {
    writeln!(output)?;
    writeln!(
        output,
        "Start Time     {}",
        trip.start_time.format("%Y-%m-%d %H:%M:%S")
    )?;
    writeln!(
        output,
        "End Time       {}",
        trip.end_time
            .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| MISSING_VALUE.to_string())
    )?;
    writeln!(output, "Trip Duration  {}", trip.duration_seconds)?;
    writeln!(output, "Start Station  {}", trip.start_station)?;
    writeln!(output, "End Station    {}", trip.end_station)?;
    writeln!(
        output,
        "User Type      {}",
        trip.user_type.as_deref().unwrap_or(MISSING_VALUE)
    )?;
    if dataset.has_gender {
        writeln!(
            output,
            "Gender         {}",
            trip.gender.as_deref().unwrap_or(MISSING_VALUE)
        )?;
    }
    if dataset.has_birth_year {
        writeln!(
            output,
            "Birth Year     {}",
            trip.birth_year
                .map(|y| y.to_string())
                .unwrap_or_else(|| MISSING_VALUE.to_string())
        )?;
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use bikeshare_core::models::TripRecord;
    use chrono::NaiveDate;
    use std::io::Cursor;

    // ── Helpers ───────────────────────────────────────────────────────────────

    fn numbered_trips(count: usize) -> Vec<TripRecord> {
        (0..count)
            .map(|i| {
                TripRecord::new(
                    NaiveDate::from_ymd_opt(2017, 1, 1)
                        .unwrap()
                        .and_hms_opt(8, 0, 0)
                        .unwrap(),
                    None,
                    60,
                    format!("start-{i}"),
                    format!("end-{i}"),
                    Some("Subscriber".to_string()),
                    None,
                    None,
                )
            })
            .collect()
    }

    fn run(script: &str, dataset: &Dataset) -> String {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        run_pager(&mut input, &mut output, dataset).unwrap();
        String::from_utf8(output).unwrap()
    }

    // ── Window behaviour ──────────────────────────────────────────────────────

    #[test]
    fn test_seven_rows_two_pages() {
        let dataset = Dataset {
            trips: numbered_trips(7),
            has_gender: false,
            has_birth_year: false,
        };
        let transcript = run("yes\nyes\nno\n", &dataset);

        // First "yes" shows rows 0..5, second shows the partial tail 5..7.
        for i in 0..7 {
            assert!(
                transcript.contains(&format!("start-{i}")),
                "row {i} missing"
            );
        }
        // Every row printed exactly once.
        assert_eq!(transcript.matches("Start Station").count(), 7);
    }

    #[test]
    fn test_no_stops_immediately() {
        let dataset = Dataset {
            trips: numbered_trips(7),
            has_gender: false,
            has_birth_year: false,
        };
        let transcript = run("no\n", &dataset);
        assert!(!transcript.contains("start-0"));
    }

    #[test]
    fn test_window_past_end_prints_nothing_more() {
        let dataset = Dataset {
            trips: numbered_trips(3),
            has_gender: false,
            has_birth_year: false,
        };
        // Second and third "yes" are past the end; no failure, no output.
        let transcript = run("yes\nyes\nyes\nno\n", &dataset);
        assert_eq!(transcript.matches("Start Station").count(), 3);
    }

    #[test]
    fn test_invalid_answer_reprompts_without_advancing() {
        let dataset = Dataset {
            trips: numbered_trips(7),
            has_gender: false,
            has_birth_year: false,
        };
        let transcript = run("maybe\nyes\nno\n", &dataset);
        assert!(transcript.contains("Please enter yes or no."));
        // The invalid answer must not have consumed a window: rows 0..5 shown.
        assert!(transcript.contains("start-0"));
        assert!(transcript.contains("start-4"));
        assert!(!transcript.contains("start-5"));
    }

    #[test]
    fn test_eof_ends_pager() {
        let dataset = Dataset {
            trips: numbered_trips(2),
            has_gender: false,
            has_birth_year: false,
        };
        let transcript = run("yes\n", &dataset);
        assert!(transcript.contains("start-1"));
    }

    // ── Row rendering ─────────────────────────────────────────────────────────

    #[test]
    fn test_missing_values_use_placeholder() {
        let mut trips = numbered_trips(1);
        trips[0].user_type = None;
        let dataset = Dataset {
            trips,
            has_gender: true,
            has_birth_year: true,
        };
        let transcript = run("yes\nno\n", &dataset);

        assert!(transcript.contains(&format!("User Type      {MISSING_VALUE}")));
        assert!(transcript.contains(&format!("Gender         {MISSING_VALUE}")));
        assert!(transcript.contains(&format!("Birth Year     {MISSING_VALUE}")));
        assert!(transcript.contains(&format!("End Time       {MISSING_VALUE}")));
    }

    #[test]
    fn test_demographic_lines_hidden_without_columns() {
        let dataset = Dataset {
            trips: numbered_trips(1),
            has_gender: false,
            has_birth_year: false,
        };
        let transcript = run("yes\nno\n", &dataset);
        assert!(!transcript.contains("Gender"));
        assert!(!transcript.contains("Birth Year"));
    }
}
