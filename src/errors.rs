//! Error types for sphere geometry
//!
//! Every fallible operation in the crate fails only at a numeric singularity of
//! its formula. Those singularities are reported explicitly instead of leaking
//! NaN or infinity into the caller's data.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for spherekit operations
#[derive(Error, Debug)]
pub enum GeometryError {
    /// A direction was required but the vector has zero length
    #[error("Zero-length vector has no direction ({context})")]
    ZeroVector {
        /// The operation that needed a direction
        context: &'static str,
    },

    /// Stereographic projection of the point antipodal to the tangent pole
    #[error("Point ({x}, {y}, {z}) is antipodal to the projection pole")]
    AntipodalToPole {
        /// X-component of the offending point
        x: f64,
        /// Y-component of the offending point
        y: f64,
        /// Z-component of the offending point
        z: f64,
    },

    /// Three points that do not span a triangle
    #[error("Points are collinear, circumcircle is undefined")]
    Collinear,

    /// NaN or infinite input where a finite value is required
    #[error("Non-finite input to {0}")]
    NonFinite(&'static str),

    /// Sampling parameters that cannot produce a mesh or polyline
    #[error("Invalid sampling: {0}")]
    InvalidSampling(String),

    /// Malformed configuration or command line value
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when a file I/O operation fails
    #[error("File I/O error on {path:?}: {source}")]
    Io {
        /// The path of the file that caused the error
        path: PathBuf,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// JSON encoding or decoding failure
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for spherekit operations
pub type Result<T> = std::result::Result<T, GeometryError>;

/// Helper function to convert a std::io::Error to GeometryError
pub fn io_err(path: impl Into<PathBuf>, err: std::io::Error) -> GeometryError {
    GeometryError::Io {
        path: path.into(),
        source: err,
    }
}
