//! Defines [`GeoWktError`], representing all errors returned by this crate.

use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum GeoWktError {
    /// Malformed WKT input. The whole parse fails; no partial geometry is
    /// returned.
    #[error("WKT syntax error: {0}")]
    Syntax(String),

    /// A WKB type code outside the known range, an unrecognized byte-order
    /// marker, or a nested record of the wrong kind for its slot.
    #[error("Unknown WKB type: {0}")]
    UnknownType(String),

    /// Invalid hex-encoded WKB input.
    #[error("Invalid hex: {0}")]
    Hex(String),

    /// [std::io::Error], raised when a WKB buffer is truncated.
    #[error(transparent)]
    IOError(#[from] std::io::Error),
}

/// Crate-specific result type.
pub type GeoWktResult<T> = std::result::Result<T, GeoWktError>;
