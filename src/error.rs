//! Defines [`GeoCoordError`], representing all errors returned by this crate.

use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum GeoCoordError {
    /// An ordinate index was written that the coordinate does not carry.
    ///
    /// Reads never produce this error; they return [`NULL_ORDINATE`](crate::NULL_ORDINATE)
    /// instead.
    #[error("Ordinate index {index} out of range for coordinate of dimension {dimension}")]
    OrdinateOutOfRange { index: usize, dimension: usize },

    /// A `(dimension, measures)` pair that no coordinate can have.
    #[error("Invalid coordinate shape: {0}")]
    InvalidShape(String),

    /// A structural precondition of an operation was not met.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// General error.
    #[error("General error: {0}")]
    General(String),
}

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, GeoCoordError>;
