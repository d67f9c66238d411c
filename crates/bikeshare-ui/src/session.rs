//! The restartable exploration session.
//!
//! One iteration collects the three filters, loads and filters the city's
//! dataset, runs the four reports in fixed order, offers the raw-row pager
//! and finally asks whether to restart. Load failures (unreadable file,
//! malformed CSV, bad timestamps) are fatal and propagate to the caller;
//! everything interactive recovers locally.

use std::io::{BufRead, Write};
use std::path::Path;

use bikeshare_core::error::Result;
use bikeshare_data::reader;
use tracing::info;

use crate::pager::run_pager;
use crate::prompt::{prompt_city, prompt_day, prompt_month, prompt_yes_no};
use crate::report::{
    report_duration_stats, report_station_stats, report_time_stats, report_user_stats,
    NO_MATCHING_RECORDS, SECTION_RULE,
};

const RESTART_PROMPT: &str = "\nWould you like to restart? Enter yes or no.";

/// Run the session loop until the user declines to restart or input ends.
pub fn run_session<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    data_dir: &Path,
) -> Result<()> {
    writeln!(output, "Hello! Let's explore some US bikeshare data!")?;

    loop {
        // EOF during filter collection ends the session cleanly.
        let Some(city) = prompt_city(input, output)? else {
            break;
        };
        let Some(month) = prompt_month(input, output)? else {
            break;
        };
        let Some(day) = prompt_day(input, output)? else {
            break;
        };
        writeln!(output, "{SECTION_RULE}")?;

        info!("Exploring {} with filters {:?} / {:?}", city, month, day);
        let dataset = reader::load_filtered(data_dir, city, month, day)?;

        if dataset.is_empty() {
            writeln!(output, "\n{NO_MATCHING_RECORDS}")?;
            writeln!(output, "{SECTION_RULE}")?;
        } else {
            report_time_stats(output, &dataset)?;
            report_station_stats(output, &dataset)?;
            report_duration_stats(output, &dataset)?;
            report_user_stats(output, &dataset)?;
            run_pager(input, output, &dataset)?;
        }

        match prompt_yes_no(input, output, RESTART_PROMPT, None)? {
            Some(true) => writeln!(output, "\nRestarting.")?,
            Some(false) | None => {
                writeln!(output, "\nProgram terminated.")?;
                break;
            }
        }
    }

    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use bikeshare_core::error::BikeshareError;
    use std::io::{Cursor, Write as _};
    use tempfile::TempDir;

    // ── Helpers ───────────────────────────────────────────────────────────────

    fn write_chicago(dir: &TempDir) {
        let path = dir.path().join("chicago.csv");
        let mut file = std::fs::File::create(path).unwrap();
        writeln!(
            file,
            ",Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year"
        )
        .unwrap();
        writeln!(
            file,
            "0,2017-06-05 08:00:00,2017-06-05 08:05:00,300,Canal St,Clark St,Subscriber,Male,1992.0"
        )
        .unwrap();
        writeln!(
            file,
            "1,2017-06-06 17:00:00,2017-06-06 17:10:00,600,Canal St,Clark St,Customer,Female,1984.0"
        )
        .unwrap();
    }

    fn run(script: &str, data_dir: &Path) -> (Result<()>, String) {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        let result = run_session(&mut input, &mut output, data_dir);
        (result, String::from_utf8(output).unwrap())
    }

    // ── Full session flow ─────────────────────────────────────────────────────

    #[test]
    fn test_full_session_runs_all_reports() {
        let dir = TempDir::new().unwrap();
        write_chicago(&dir);

        // city, month, day, pager "no", restart "no".
        let (result, transcript) = run("chicago\nall\nall\nno\nno\n", dir.path());
        result.unwrap();

        assert!(transcript.contains("Hello! Let's explore some US bikeshare data!"));
        assert!(transcript.contains("Calculating The Most Frequent Times of Travel..."));
        assert!(transcript.contains("Calculating The Most Popular Stations and Trip..."));
        assert!(transcript.contains("Calculating Trip Duration..."));
        assert!(transcript.contains("Calculating User Stats..."));
        assert!(transcript.contains("Program terminated."));
    }

    #[test]
    fn test_session_restart_runs_second_iteration() {
        let dir = TempDir::new().unwrap();
        write_chicago(&dir);

        let script = "chicago\nall\nall\nno\nyes\nchicago\njune\nmonday\nno\nno\n";
        let (result, transcript) = run(script, dir.path());
        result.unwrap();

        assert!(transcript.contains("Restarting."));
        assert_eq!(
            transcript
                .matches("Calculating The Most Frequent Times of Travel...")
                .count(),
            2
        );
    }

    #[test]
    fn test_session_empty_filter_result_reports_and_continues() {
        let dir = TempDir::new().unwrap();
        write_chicago(&dir);

        // Both fixture trips are in June; a May filter matches nothing. The
        // session must report the condition and go straight to the restart
        // prompt without running the pager.
        let (result, transcript) = run("chicago\nmay\nall\nno\n", dir.path());
        result.unwrap();

        assert!(transcript.contains(NO_MATCHING_RECORDS));
        assert!(!transcript.contains("raw trip data"));
        assert!(transcript.contains("Program terminated."));
    }

    #[test]
    fn test_session_invalid_inputs_reprompt() {
        let dir = TempDir::new().unwrap();
        write_chicago(&dir);

        let script = "springfield\nchicago\ndecember\nall\nfunday\nall\nno\nno\n";
        let (result, transcript) = run(script, dir.path());
        result.unwrap();

        assert_eq!(transcript.matches("Enter a city").count(), 2);
        assert_eq!(transcript.matches("Enter a month").count(), 2);
        assert_eq!(transcript.matches("Enter a day").count(), 2);
    }

    #[test]
    fn test_session_missing_file_is_fatal() {
        let dir = TempDir::new().unwrap();
        // No chicago.csv written.
        let (result, _) = run("chicago\nall\nall\n", dir.path());
        assert!(matches!(result, Err(BikeshareError::FileRead { .. })));
    }

    #[test]
    fn test_session_eof_before_filters_ends_cleanly() {
        let dir = TempDir::new().unwrap();
        write_chicago(&dir);

        let (result, transcript) = run("", dir.path());
        result.unwrap();
        assert!(transcript.contains("Hello!"));
    }
}
