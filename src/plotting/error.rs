//! Error types for figure construction and layout helpers.

use std::io;

use thiserror::Error;

/// The main error type for figlayout operations.
#[derive(Debug, Error)]
pub enum PlotError {
    /// Error during IO operations (file writing, etc.)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// Malformed layout document
    #[error("Invalid layout document: {0}")]
    Json(#[from] serde_json::Error),
    /// Invalid configuration or parameters
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    /// Label alphabet requested with a style name that is not recognized
    #[error("Unknown label style '{0}'")]
    UnknownLabelStyle(String),
    /// An axes handle that does not belong to the figure it was used with
    #[error("Axes #{0} does not exist in this figure")]
    UnknownAxes(usize),
    /// Paired coordinate sequences of different lengths
    #[error("Coordinate length mismatch: {xs} x-coordinates, {ys} y-coordinates")]
    LengthMismatch { xs: usize, ys: usize },
}

/// Result type alias for figlayout operations.
pub type PlotResult<T> = Result<T, PlotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PlotError::UnknownLabelStyle("titlecase".to_string());
        assert_eq!(err.to_string(), "Unknown label style 'titlecase'");

        let err = PlotError::LengthMismatch { xs: 3, ys: 2 };
        assert!(err.to_string().contains("3 x-coordinates"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "missing.svg");
        let err: PlotError = io_err.into();
        assert!(matches!(err, PlotError::Io(_)));
    }
}
