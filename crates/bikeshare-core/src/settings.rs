use clap::Parser;
use std::path::PathBuf;

/// Interactive explorer for US bikeshare trip data
///
/// The exploration itself is driven by interactive prompts; these flags only
/// configure where the data lives and how the process logs.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "bikeshare",
    about = "Interactive explorer for US bikeshare trip data",
    version
)]
pub struct Settings {
    /// Directory containing the city CSV files (chicago.csv,
    /// new_york_city.csv, washington.csv)
    #[arg(long, default_value = ".")]
    pub data_dir: PathBuf,

    /// Logging level
    #[arg(long, default_value = "INFO", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"])]
    pub log_level: String,

    /// Log file path (stderr when unset)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Settings {
    /// The log level after applying the `--debug` override.
    pub fn effective_log_level(&self) -> &str {
        if self.debug {
            "DEBUG"
        } else {
            &self.log_level
        }
    }
}
