//! # WSSE Token
//!
//! The assembled credential and its header rendering.

use serde::Serialize;
use wsse_core::Timestamp;

/// A built WSSE UsernameToken.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WsseToken {
    /// The username, inserted verbatim.
    pub username: String,
    /// `base64(sha1(nonce + created + password))`.
    pub password_digest: String,
    /// Creation time; rendered into the digest input and the header.
    pub created: Timestamp,
    /// First-stage nonce text, the value hashed into the digest.
    pub nonce: String,
    /// `base64(nonce)`, the value placed in the header.
    pub nonce_encoded: String,
}

impl WsseToken {
    /// HTTP header carrying the token.
    pub const HEADER_NAME: &'static str = "X-WSSE";

    /// The header value.
    pub fn header_value(&self) -> String {
        format!(
            r#"UsernameToken Username="{}", PasswordDigest="{}", Created="{}", Nonce="{}""#,
            self.username, self.password_digest, self.created, self.nonce_encoded
        )
    }

    /// `X-WSSE: <value>`.
    pub fn header_line(&self) -> String {
        format!("{}: {}", Self::HEADER_NAME, self.header_value())
    }
}

impl std::fmt::Display for WsseToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.header_value())
    }
}
