//! # Token Builder
//!
//! `WsseTokenBuilder` reads its clock once per token. That single reading
//! supplies the `Created` field, the nonce timestamp, and the nonce epoch
//! milliseconds, so the three always describe the same instant.
//!
//! ```text
//! nonce           = base64(sha1(created + salt + epoch_millis))
//! nonce_encoded   = base64(nonce)
//! password_digest = base64(sha1(nonce + created + password))
//! ```
//!
//! The configured pad character applies to the two digest encodings. The
//! second nonce stage always pads with `=`, so the header `Nonce` is RFC
//! 4648 text whatever the configuration.

use wsse_core::{Clock, SystemClock};
use wsse_crypto::Base64Codec;

use crate::config::TokenConfig;
use crate::error::TokenError;
use crate::nonce::{DigestNonce, NonceSource};
use crate::token::WsseToken;

/// Builds WSSE tokens from a clock, a nonce source, and a config.
#[derive(Debug, Clone)]
pub struct WsseTokenBuilder<C = SystemClock, N = DigestNonce> {
    clock: C,
    nonce: N,
    config: TokenConfig,
}

impl WsseTokenBuilder {
    /// Builder on the system clock with the digest nonce from `config`.
    ///
    /// # Errors
    ///
    /// Returns `TokenError::Config` if the hashing settings are invalid.
    pub fn new(config: TokenConfig) -> Result<Self, TokenError> {
        Self::with_clock(SystemClock, config)
    }
}

impl<C: Clock> WsseTokenBuilder<C, DigestNonce> {
    /// Builder on `clock` with the digest nonce from `config`.
    ///
    /// # Errors
    ///
    /// Returns `TokenError::Config` if the hashing settings are invalid.
    pub fn with_clock(clock: C, config: TokenConfig) -> Result<Self, TokenError> {
        config.validate()?;
        let nonce = DigestNonce::new(config.nonce_salt.clone());
        Ok(Self {
            clock,
            nonce,
            config,
        })
    }
}

impl<C: Clock, N: NonceSource> WsseTokenBuilder<C, N> {
    /// Replace the nonce source.
    pub fn with_nonce_source<M: NonceSource>(self, nonce: M) -> WsseTokenBuilder<C, M> {
        WsseTokenBuilder {
            clock: self.clock,
            nonce,
            config: self.config,
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &TokenConfig {
        &self.config
    }

    /// Build a token for `username` authenticating with `password`.
    ///
    /// # Errors
    ///
    /// Returns `TokenError::InvalidUsername` if the username is empty or
    /// contains a double quote or control character, since it could not be
    /// quoted in the header.
    pub fn build(&self, username: &str, password: &str) -> Result<WsseToken, TokenError> {
        validate_username(username)?;

        let hash = &self.config.hash;
        let created = self.clock.now();
        let created_text = created.to_iso8601();

        let nonce = self.nonce.generate(&created, hash);
        let nonce_encoded = Base64Codec::STANDARD.encode_latin1(&nonce)?;
        let password_digest =
            wsse_crypto::sha1_base64(&format!("{nonce}{created_text}{password}"), hash);

        tracing::debug!(username, created = %created_text, "built WSSE token");

        Ok(WsseToken {
            username: username.to_string(),
            password_digest,
            created,
            nonce,
            nonce_encoded,
        })
    }
}

fn validate_username(username: &str) -> Result<(), TokenError> {
    if username.is_empty() {
        return Err(TokenError::InvalidUsername("username is empty".into()));
    }
    if let Some(c) = username.chars().find(|&c| c == '"' || c.is_control()) {
        return Err(TokenError::InvalidUsername(format!(
            "username contains {c:?}, which cannot appear in a quoted header field"
        )));
    }
    Ok(())
}
