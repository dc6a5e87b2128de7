//! # Error Types — Structured Error Hierarchy
//!
//! Defines the error types used throughout the WSSE toolkit. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Encoding errors are reported at the exact call that violated the
//!   precondition and carry the offending position.
//! - Nothing in the library logs or swallows an error; callers decide.

use thiserror::Error;

/// Top-level error type for the WSSE toolkit.
#[derive(Error, Debug)]
pub enum WsseError {
    /// Base64 or byte-string encoding failed.
    #[error("encoding error: {0}")]
    Encoding(#[from] EncodingError),

    /// Configuration value could not be loaded or was out of range.
    #[error("configuration error: {0}")]
    Config(String),

    /// Timestamp could not be parsed or constructed.
    #[error("timestamp error: {0}")]
    Timestamp(String),
}

/// Error from the byte-string and base64 layers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodingError {
    /// Input contained a code point outside the 0-255 byte range.
    #[error("character {character:?} (U+{code_point:04X}) at index {index} is outside the 0-255 byte range")]
    Domain {
        /// Character index of the offending code point.
        index: usize,
        /// The offending character.
        character: char,
        /// Its code point.
        code_point: u32,
    },

    /// Pad character that could be mistaken for base64 data.
    #[error("pad character {0:?} must be printable ASCII outside the base64 alphabet")]
    InvalidPad(char),

    /// Text did not match the base64 alphabet, length, or padding rules.
    #[error("not a base64 string: {0}")]
    Format(String),
}

impl EncodingError {
    /// Build a `Format` error from any displayable reason.
    pub fn format(reason: impl Into<String>) -> Self {
        Self::Format(reason.into())
    }

    /// Returns true for the domain (out-of-range input) variant.
    pub fn is_domain(&self) -> bool {
        matches!(self, Self::Domain { .. })
    }

    /// Returns true for the format (malformed base64) variant.
    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format(_))
    }
}
