//! # Token Configuration
//!
//! `TokenConfig` bundles the hashing settings with the salt mixed into
//! every nonce. It is `serde`-enabled and every field is optional in a
//! config file.

use serde::{Deserialize, Serialize};
use wsse_core::{HashConfig, WsseError};

/// Settings for building WSSE tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenConfig {
    /// Hex case, base64 pad and bits per character.
    pub hash: HashConfig,
    /// Text mixed into the nonce between the timestamp and epoch millis.
    pub nonce_salt: String,
}

impl TokenConfig {
    /// Salt that deployed WSSE servers expect in the nonce.
    pub const DEFAULT_NONCE_SALT: &'static str = "There is more than words";

    /// Copy of this config with a different nonce salt.
    pub fn with_nonce_salt(mut self, salt: impl Into<String>) -> Self {
        self.nonce_salt = salt.into();
        self
    }

    /// Copy of this config with different hashing settings.
    pub fn with_hash(mut self, hash: HashConfig) -> Self {
        self.hash = hash;
        self
    }

    /// Validate the hashing settings.
    ///
    /// # Errors
    ///
    /// Returns `WsseError::Config` if the pad character is unusable.
    pub fn validate(&self) -> Result<(), WsseError> {
        self.hash.validate()
    }
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            hash: HashConfig::default(),
            nonce_salt: Self::DEFAULT_NONCE_SALT.to_string(),
        }
    }
}
