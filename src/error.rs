//! Error types for ggviz operations.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in ggviz operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// Invalid dimensions for framebuffer or plot.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Data length mismatch between x and y arrays.
    #[error("Data length mismatch: x has {x_len} elements, y has {y_len} elements")]
    DataLengthMismatch {
        /// Length of x data.
        x_len: usize,
        /// Length of y data.
        y_len: usize,
    },

    /// Empty data provided where non-empty is required.
    #[error("Empty data provided")]
    EmptyData,

    /// A column referenced by an aesthetic mapping or facet is absent.
    #[error("Column not found: {0}")]
    MissingColumn(String),

    /// Scale domain error (e.g., zero-width domain).
    #[error("Scale domain error: {0}")]
    ScaleDomain(String),

    /// Color literal could not be parsed (unknown name or malformed hex).
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// Plot specification error (no layers, conflicting directives).
    #[error("Invalid plot specification: {0}")]
    Spec(String),

    /// Rendering error.
    #[error("Rendering error: {0}")]
    Rendering(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidDimensions { width: 0, height: 100 };
        assert!(err.to_string().contains("Invalid dimensions"));
    }

    #[test]
    fn test_data_length_mismatch() {
        let err = Error::DataLengthMismatch { x_len: 10, y_len: 20 };
        assert!(err.to_string().contains("10"));
        assert!(err.to_string().contains("20"));
    }

    #[test]
    fn test_missing_column() {
        let err = Error::MissingColumn("dataset".into());
        assert!(err.to_string().contains("dataset"));
    }

    #[test]
    fn test_invalid_color() {
        let err = Error::InvalidColor("#zzz".into());
        assert!(err.to_string().contains("#zzz"));
    }
}
