//! Core domain layer for the bikeshare explorer.
//!
//! Holds the city registry, month/day filters, trip-record model, the shared
//! error type, duration/label formatting and the CLI settings.

pub mod city;
pub mod error;
pub mod filters;
pub mod formatting;
pub mod models;
pub mod settings;

pub use error::{BikeshareError, Result};
