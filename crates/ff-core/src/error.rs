//! Error types for the studio core.
//!
//! Every error here is recoverable: callers catch it at the call site and
//! leave the session state unchanged.

use thiserror::Error;

/// Uploaded bytes could not be decoded as an image.
#[derive(Error, Debug)]
#[error("Failed to decode image: {0}")]
pub struct DecodeError(#[from] pub image::ImageError);

/// Rejected size input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SizeError {
    /// The token is not one of XS, S, M, L, XL, XXL.
    #[error("Unknown size token '{0}'")]
    UnknownToken(String),

    /// A body measurement is outside its plausible range.
    #[error("{field} must be between {min} and {max} cm, got {value}")]
    OutOfRange {
        field: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },
}

/// The identifier does not name a garment in the catalog.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown garment type '{0}'")]
pub struct GarmentParseError(pub String);
