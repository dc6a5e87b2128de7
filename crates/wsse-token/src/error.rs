//! # Token Errors

use thiserror::Error;
use wsse_core::{EncodingError, WsseError};

/// Errors from token construction.
#[derive(Error, Debug)]
pub enum TokenError {
    /// The username cannot be placed inside the quoted header field.
    #[error("invalid username: {0}")]
    InvalidUsername(String),

    /// Base64 encoding of the nonce failed.
    #[error("nonce encoding failed: {0}")]
    Encoding(#[from] EncodingError),

    /// The hashing configuration was rejected.
    #[error(transparent)]
    Config(#[from] WsseError),
}
