//! Error types for star construction and export.

use std::io;
use thiserror::Error;

/// Errors that can occur while building or exporting a pixel star.
#[derive(Error, Debug)]
pub enum StarError {
    /// A construction parameter is outside its valid range.
    #[error("Invalid geometry parameter '{name}' = {value}: {reason}")]
    InvalidGeometryParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// A layer ran out of room for holes before every requested layer existed.
    #[error(
        "Geometry exhausted at layer {layer}: {holes_per_edge} holes per edge, \
         reduce the row count or the row spacing"
    )]
    GeometryExhausted { layer: usize, holes_per_edge: i64 },

    /// I/O error while writing an export or preset file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// XML generation failed.
    #[error("XML error: {0}")]
    Xml(String),

    /// A preset file could not be read or written.
    #[error("Preset error: {0}")]
    Preset(#[from] serde_json::Error),
}

impl From<quick_xml::Error> for StarError {
    fn from(e: quick_xml::Error) -> Self {
        StarError::Xml(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, StarError>;

/// Reject non-positive (or NaN) values.
pub(crate) fn require_positive(name: &'static str, value: f64) -> Result<()> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(StarError::InvalidGeometryParameter {
            name,
            value,
            reason: "must be a positive finite number",
        })
    }
}
