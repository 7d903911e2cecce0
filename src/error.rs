//! Error types for spectral feature computation.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FeatureError>;

/// Errors that can occur while computing spectral features.
///
/// Numeric degeneracy (zero-norm pixels or spectra, zero-sum band ratios)
/// is not an error and never shows up here.
#[derive(Error, Debug)]
pub enum FeatureError {
    /// Member spectra and data disagree on the number of bands
    #[error("Dimension conflict: data has {expected} bands, member spectra have {found}")]
    DimensionMismatch {
        /// Band count of the data
        expected: usize,
        /// Band count of the member spectra
        found: usize,
    },

    /// Array has the wrong rank or an inconsistent length
    #[error("Invalid shape: {message}")]
    InvalidShape {
        /// Description of the shape problem
        message: String,
    },

    /// A reduction was requested over a raster with no pixels
    #[error("Raster has no pixels to reduce")]
    EmptyRaster,

    /// JSON parsing or serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Config version mismatch between expected and found
    #[error("Version mismatch: expected {expected}, found {found}")]
    VersionMismatch {
        /// Supported config version
        expected: u32,
        /// Version found in the document
        found: u32,
    },
}

impl FeatureError {
    /// Create an invalid shape error with a message.
    pub fn invalid_shape(message: impl Into<String>) -> Self {
        Self::InvalidShape {
            message: message.into(),
        }
    }

    /// Create a dimension mismatch error.
    pub fn dimension_mismatch(expected: usize, found: usize) -> Self {
        Self::DimensionMismatch { expected, found }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_mismatch_message() {
        let err = FeatureError::dimension_mismatch(8, 3);
        assert_eq!(
            err.to_string(),
            "Dimension conflict: data has 8 bands, member spectra have 3"
        );
    }

    #[test]
    fn test_json_error_converts() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: FeatureError = parse_err.into();
        assert!(matches!(err, FeatureError::Json(_)));
    }
}
