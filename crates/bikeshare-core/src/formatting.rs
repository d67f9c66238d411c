use chrono::Weekday;

/// Break a duration in whole seconds into a
/// `"D days H hours M minutes S seconds"` string using integer division
/// and modulo.
///
/// # Examples
///
/// ```
/// use bikeshare_core::formatting::format_duration_breakdown;
///
/// assert_eq!(
///     format_duration_breakdown(90_061),
///     "1 days 1 hours 1 minutes 1 seconds"
/// );
/// assert_eq!(
///     format_duration_breakdown(0),
///     "0 days 0 hours 0 minutes 0 seconds"
/// );
/// ```
pub fn format_duration_breakdown(total_seconds: i64) -> String {
    let days = total_seconds / (3600 * 24);
    let hours = total_seconds % (3600 * 24) / 3600;
    let minutes = total_seconds % 3600 / 60;
    let seconds = total_seconds % 60;
    format!("{days} days {hours} hours {minutes} minutes {seconds} seconds")
}

/// Title-cased name for a 1-based calendar month.
///
/// Covers the full year so a dataset extending past June still reports a
/// proper name. Returns `None` for values outside 1–12.
pub fn month_name(month: u32) -> Option<&'static str> {
    const NAMES: [&str; 12] = [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ];
    NAMES.get(month.checked_sub(1)? as usize).copied()
}

/// Full title-cased weekday name. `chrono`'s own `Display` prints the
/// abbreviated form, which the reports do not use.
pub fn day_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
