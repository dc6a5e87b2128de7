//! # Nonce Generation
//!
//! The default nonce is `base64(sha1(created + salt + epoch_millis))`,
//! where `created` is the rendered ISO-8601 timestamp of the same clock
//! reading that becomes the token's `Created` field.

use wsse_core::{HashConfig, Timestamp};

/// Produces the first-stage (single base64) nonce text for a token.
pub trait NonceSource: Send + Sync {
    /// Nonce text for a token created at `created`.
    fn generate(&self, created: &Timestamp, config: &HashConfig) -> String;
}

/// Digest of the timestamp, a salt, and the epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigestNonce {
    salt: String,
}

impl DigestNonce {
    /// Nonce source mixing in `salt`.
    pub fn new(salt: impl Into<String>) -> Self {
        Self { salt: salt.into() }
    }

    /// The salt.
    pub fn salt(&self) -> &str {
        &self.salt
    }

    /// The text that gets hashed.
    pub fn seed(&self, created: &Timestamp) -> String {
        format!("{}{}{}", created.to_iso8601(), self.salt, created.epoch_millis())
    }
}

impl NonceSource for DigestNonce {
    fn generate(&self, created: &Timestamp, config: &HashConfig) -> String {
        wsse_crypto::sha1_base64(&self.seed(created), config)
    }
}
