//! Interactive terminal layer for the bikeshare explorer.
//!
//! Provides the validated input prompts, the four statistics reports, the
//! raw-row pager and the restartable session loop. Every function is generic
//! over [`std::io::BufRead`] / [`std::io::Write`] so the whole interactive
//! flow is unit-testable without a terminal.

pub mod pager;
pub mod prompt;
pub mod report;
pub mod session;

pub use bikeshare_core as core;
pub use bikeshare_data as data;
