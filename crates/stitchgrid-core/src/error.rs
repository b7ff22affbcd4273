//! Error handling for StitchGrid
//!
//! The analyzer and the pattern editor recover from malformed input locally
//! (skipping tokens, returning `None`, clipping areas). The error types here
//! cover the boundaries that genuinely fail:
//! - Geometry errors (document ingestion)
//! - Grid errors (invalid grid construction or persisted cell data)
//! - Configuration errors (validation of settings)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Geometry error type
///
/// Raised while ingesting a schematic document, before any path is parsed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// The document has no `<svg>` root element
    #[error("Invalid SVG: missing <svg> element")]
    MissingSvgRoot,

    /// Merge threshold is not a usable distance
    #[error("Invalid merge threshold {threshold}: must be finite and non-negative")]
    InvalidThreshold {
        /// The rejected threshold.
        threshold: f64,
    },
}

/// Grid error type
///
/// Represents invalid pattern grid construction requests.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Grid dimensions must both be non-zero
    #[error("Invalid grid dimensions {height}x{width}")]
    InvalidDimensions {
        /// Requested row count.
        height: usize,
        /// Requested column count.
        width: usize,
    },

    /// Cell address outside the grid
    #[error("Cell ({row}, {col}) is outside a {height}x{width} grid")]
    OutOfBounds {
        /// Row index.
        row: usize,
        /// Column index.
        col: usize,
        /// Grid height.
        height: usize,
        /// Grid width.
        width: usize,
    },
}

/// Configuration error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A configuration value is out of its valid range
    #[error("Invalid setting '{key}': {reason}")]
    InvalidValue {
        /// The setting key.
        key: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// The configuration file format is not supported
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),
}

/// Main error type for StitchGrid
///
/// A unified error type that can represent any error from all layers.
#[derive(Error, Debug)]
pub enum Error {
    /// Geometry error
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// Grid error
    #[error(transparent)]
    Grid(#[from] GridError),

    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a geometry error
    pub fn is_geometry_error(&self) -> bool {
        matches!(self, Error::Geometry(_))
    }

    /// Check if this is a grid error
    pub fn is_grid_error(&self) -> bool {
        matches!(self, Error::Grid(_))
    }

    /// Check if this is a configuration error
    pub fn is_config_error(&self) -> bool {
        matches!(self, Error::Config(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
