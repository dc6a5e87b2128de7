//! # wsse-token — WSSE UsernameToken Construction
//!
//! Builds the `X-WSSE` credential from a username and password:
//!
//! ```text
//! UsernameToken Username="<user>", PasswordDigest="<digest>", Created="<ts>", Nonce="<nonce>"
//! ```
//!
//! - **Config** (`config.rs`): `TokenConfig`, the hashing settings plus the
//!   nonce salt.
//! - **Nonce** (`nonce.rs`): the `NonceSource` trait and the digest-based
//!   default, `base64(sha1(created + salt + epoch_millis))`.
//! - **Token** (`token.rs`): the assembled `WsseToken` and its header
//!   rendering.
//! - **Builder** (`builder.rs`): `WsseTokenBuilder`, which reads the clock
//!   once per token and computes
//!   `PasswordDigest = base64(sha1(nonce + created + password))`.
//!
//! ## Nonce Encoding
//!
//! The nonce placed in the header is the base64 nonce text base64-encoded
//! a second time, while the password digest is computed over the
//! first-stage text. Deployed WSSE servers validate against exactly this
//! form, so both stages are kept and exposed on `WsseToken`.
//!
//! ## Crate Policy
//!
//! - Depends on `wsse-core` and `wsse-crypto` internally.
//! - Passwords and digests are never logged.

pub mod builder;
pub mod config;
pub mod error;
pub mod nonce;
pub mod token;

pub use builder::WsseTokenBuilder;
pub use config::TokenConfig;
pub use error::TokenError;
pub use nonce::{DigestNonce, NonceSource};
pub use token::WsseToken;
