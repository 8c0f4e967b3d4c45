//! Error types for the radial-ingest crate.

use radial_common::RadialError;
use thiserror::Error;

/// Errors that can occur while converting a radial file.
#[derive(Error, Debug)]
pub enum IngestError {
    #[error("Failed to read file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error(transparent)]
    Radial(#[from] RadialError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid time units '{units}': {message}")]
    TimeUnits { units: String, message: String },
}

impl IngestError {
    /// Stable category code, as reported in conversion summaries.
    pub fn code(&self) -> &'static str {
        match self {
            IngestError::FileRead(_) => "Io",
            IngestError::Radial(e) => e.code(),
            IngestError::InvalidConfig(_) | IngestError::TimeUnits { .. } => "InvalidConfig",
        }
    }
}

/// Result type for conversion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
