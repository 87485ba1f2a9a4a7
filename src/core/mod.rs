//! Core types shared across the reporter: errors and configuration.

pub mod config;
pub mod error;

pub use config::ReporterConfig;
pub use error::{ReporterError, Result};
