//! Data layer for the bikeshare explorer.
//!
//! Responsible for reading a city's trip-record CSV, deriving calendar
//! fields, applying month/day filters and computing the summary statistics.

pub mod reader;
pub mod stats;

pub use bikeshare_core as core;
