//! Month and day-of-week filters applied to a loaded dataset.
//!
//! The published datasets cover January through June only, so the month
//! filter is restricted to those six months.

use chrono::Weekday;
use std::fmt;

// ── Month ─────────────────────────────────────────────────────────────────────

/// A calendar month within the covered January–June range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
}

/// The covered months in calendar order. Index i holds the month whose
/// 1-based calendar number is i + 1.
pub const MONTHS: [Month; 6] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
];

impl Month {
    /// Parse a month name, case-insensitively and ignoring whitespace.
    pub fn parse(input: &str) -> Option<Month> {
        match input.trim().to_lowercase().as_str() {
            "january" => Some(Month::January),
            "february" => Some(Month::February),
            "march" => Some(Month::March),
            "april" => Some(Month::April),
            "may" => Some(Month::May),
            "june" => Some(Month::June),
            _ => None,
        }
    }

    /// 1-based calendar number (january = 1 .. june = 6).
    pub fn number(&self) -> u32 {
        match self {
            Month::January => 1,
            Month::February => 2,
            Month::March => 3,
            Month::April => 4,
            Month::May => 5,
            Month::June => 6,
        }
    }

    /// Title-cased month name.
    pub fn name(&self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ── MonthFilter ───────────────────────────────────────────────────────────────

/// Month selector collected from the user: a single month or no filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthFilter {
    All,
    Month(Month),
}

impl MonthFilter {
    /// Parse `"all"` or a month name.
    pub fn parse(input: &str) -> Option<MonthFilter> {
        let normalized = input.trim().to_lowercase();
        if normalized == "all" {
            return Some(MonthFilter::All);
        }
        Month::parse(&normalized).map(MonthFilter::Month)
    }

    /// Whether a trip with the given derived calendar month passes.
    pub fn matches(&self, month: u32) -> bool {
        match self {
            MonthFilter::All => true,
            MonthFilter::Month(m) => m.number() == month,
        }
    }
}

// ── DayFilter ─────────────────────────────────────────────────────────────────

/// Day-of-week selector collected from the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayFilter {
    All,
    Day(Weekday),
}

impl DayFilter {
    /// Parse `"all"` or a full weekday name.
    pub fn parse(input: &str) -> Option<DayFilter> {
        let normalized = input.trim().to_lowercase();
        if normalized == "all" {
            return Some(DayFilter::All);
        }
        parse_weekday(&normalized).map(DayFilter::Day)
    }

    /// Whether a trip starting on the given weekday passes.
    pub fn matches(&self, weekday: Weekday) -> bool {
        match self {
            DayFilter::All => true,
            DayFilter::Day(d) => *d == weekday,
        }
    }
}

/// Parse a full weekday name, case-insensitively. Abbreviations are not
/// accepted; the prompt contract names the full set sunday..saturday.
pub fn parse_weekday(input: &str) -> Option<Weekday> {
    match input.trim().to_lowercase().as_str() {
        "sunday" => Some(Weekday::Sun),
        "monday" => Some(Weekday::Mon),
        "tuesday" => Some(Weekday::Tue),
        "wednesday" => Some(Weekday::Wed),
        "thursday" => Some(Weekday::Thu),
        "friday" => Some(Weekday::Fri),
        "saturday" => Some(Weekday::Sat),
        _ => None,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
