//! Error types for hf-radial processing.

use thiserror::Error;

/// Result type alias using RadialError.
pub type RadialResult<T> = Result<T, RadialError>;

/// Primary error type for radial file processing.
///
/// Every failure is unrecoverable for the file at hand: re-indexing is
/// all-or-nothing, so nothing partial is ever returned alongside an error.
#[derive(Debug, Error)]
pub enum RadialError {
    // === Metadata Errors ===
    #[error("Missing required metadata: {0}")]
    MissingMetadata(String),

    #[error("Invalid metadata value for '{key}': {message}")]
    InvalidMetadata { key: String, message: String },

    #[error("Range resolution must be numeric: neither RangeResolutionKMeters nor RangeResolutionMeters is usable")]
    MissingResolution,

    // === Table Errors ===
    #[error("Invalid observation table at line {line}: {message}")]
    InvalidTable { line: usize, message: String },

    #[error("Missing table column: {0}")]
    MissingColumn(String),

    // === Grid Errors ===
    #[error("Malformed coordinate data: {0}")]
    MalformedCoordinates(String),

    #[error("{axis} gap {gap} is not an integer multiple of resolution {resolution}")]
    GridSpacing {
        axis: String,
        gap: f64,
        resolution: f64,
    },

    #[error("RNGE/SPRC ratios disagree across rows: {0}")]
    InconsistentRangeCells(String),

    #[error("Computed maximum range {computed} km meets or exceeds the {ceiling} km ceiling")]
    UnboundedRange { computed: f64, ceiling: f64 },

    #[error("More than one observation for grid cell {0}")]
    DuplicateCell(String),

    // === Infrastructure Errors ===
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl RadialError {
    /// Stable category code for this error, used in logs and summaries.
    pub fn code(&self) -> &'static str {
        match self {
            RadialError::MissingMetadata(_) | RadialError::InvalidMetadata { .. } => {
                "InvalidMetadata"
            }
            RadialError::MissingResolution => "MissingResolution",
            RadialError::InvalidTable { .. } | RadialError::MissingColumn(_) => "InvalidTable",
            RadialError::MalformedCoordinates(_) | RadialError::DuplicateCell(_) => {
                "MalformedCoordinates"
            }
            RadialError::GridSpacing { .. } | RadialError::InconsistentRangeCells(_) => {
                "GridSpacingViolation"
            }
            RadialError::UnboundedRange { .. } => "UnboundedRange",
            RadialError::Io(_) => "Io",
        }
    }

    /// Shorthand for an [`RadialError::InvalidMetadata`] error.
    pub fn invalid_metadata(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidMetadata {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Shorthand for a [`RadialError::GridSpacing`] error.
    pub fn grid_spacing(axis: impl Into<String>, gap: f64, resolution: f64) -> Self {
        Self::GridSpacing {
            axis: axis.into(),
            gap,
            resolution,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(RadialError::MissingResolution.code(), "MissingResolution");
        assert_eq!(
            RadialError::grid_spacing("RNGE", 7.0, 5.8249).code(),
            "GridSpacingViolation"
        );
        assert_eq!(
            RadialError::UnboundedRange {
                computed: 510.0,
                ceiling: 500.0
            }
            .code(),
            "UnboundedRange"
        );
    }

    #[test]
    fn test_error_display() {
        let err = RadialError::invalid_metadata("Origin", "expected two numbers");
        assert_eq!(
            err.to_string(),
            "Invalid metadata value for 'Origin': expected two numbers"
        );
    }
}
