//! The fixed registry of cities with published trip data.

use std::fmt;
use std::path::{Path, PathBuf};

/// One of the three cities with a bundled trip-record CSV.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

/// Every supported city, in prompt order.
pub const CITIES: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

impl City {
    /// Parse a user-supplied city name. Matching is case-insensitive and
    /// ignores surrounding whitespace.
    pub fn parse(input: &str) -> Option<City> {
        match input.trim().to_lowercase().as_str() {
            "chicago" => Some(City::Chicago),
            "new york city" => Some(City::NewYorkCity),
            "washington" => Some(City::Washington),
            _ => None,
        }
    }

    /// The fixed CSV file name for this city's trip records.
    pub fn file_name(&self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }

    /// The city's CSV path under `data_dir`.
    pub fn data_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(self.file_name())
    }

    /// Lowercase display name, as used in prompts.
    pub fn name(&self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYorkCity => "new york city",
            City::Washington => "washington",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
