//! Validated interactive prompts.
//!
//! Every prompt follows the same retry contract: read a line, normalise it,
//! return the parsed value if it belongs to the allowed set, otherwise ask
//! again. Invalid input is never an error. End of input (EOF) yields
//! `Ok(None)` so a closed stdin ends the session cleanly instead of looping.

use std::io::{BufRead, Write};

use bikeshare_core::city::City;
use bikeshare_core::filters::{DayFilter, MonthFilter};

/// Repeatedly show `prompt` until `parse` accepts the trimmed input line.
///
/// When `invalid_hint` is set it is printed after each rejected answer.
/// Returns `Ok(None)` on EOF.
pub fn prompt_until<R, W, T, F>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    invalid_hint: Option<&str>,
    parse: F,
) -> std::io::Result<Option<T>>
where
    R: BufRead,
    W: Write,
    F: Fn(&str) -> Option<T>,
{
    loop {
        writeln!(output, "{prompt}")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if let Some(value) = parse(line.trim()) {
            return Ok(Some(value));
        }
        if let Some(hint) = invalid_hint {
            writeln!(output, "{hint}")?;
        }
    }
}

/// Ask for one of the three supported cities.
pub fn prompt_city<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> std::io::Result<Option<City>> {
    prompt_until(
        input,
        output,
        "\nEnter a city to explore (chicago, new york city, washington):",
        None,
        City::parse,
    )
}

/// Ask for a month between january and june, or "all".
pub fn prompt_month<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> std::io::Result<Option<MonthFilter>> {
    prompt_until(
        input,
        output,
        "\nEnter a month between january and june, or \"all\":",
        None,
        MonthFilter::parse,
    )
}

/// Ask for a day of the week, or "all".
pub fn prompt_day<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> std::io::Result<Option<DayFilter>> {
    prompt_until(
        input,
        output,
        "\nEnter a day of the week, or \"all\":",
        None,
        DayFilter::parse,
    )
}

/// Ask a yes/no question. Returns `Some(true)` for "yes", `Some(false)` for
/// "no" (case-insensitive, trimmed), `None` on EOF.
pub fn prompt_yes_no<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    invalid_hint: Option<&str>,
) -> std::io::Result<Option<bool>> {
    prompt_until(input, output, prompt, invalid_hint, |answer| {
        match answer.to_lowercase().as_str() {
            "yes" => Some(true),
            "no" => Some(false),
            _ => None,
        }
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
