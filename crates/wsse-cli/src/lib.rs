//! # wsse-cli — CLI Tool for the WSSE Toolkit
//!
//! Provides the `wsse` command-line interface over the token builder and
//! the from-scratch digest primitives.
//!
//! ## Subcommands
//!
//! - `wsse header` — Build an `X-WSSE` header for a username and password.
//! - `wsse sha1` — SHA-1 of a string as hex, base64, or a raw string.
//! - `wsse hmac` — HMAC-SHA1 of a string under a key.
//! - `wsse base64` — Encode Latin-1 text or decode base64.
//! - `wsse self-test` — Known-answer checks for the primitives.
//!
//! ```bash
//! wsse header --username alice --password secret
//! wsse sha1 abc --format base64
//! wsse hmac --key key "The quick brown fox jumps over the lazy dog" --upper
//! wsse --config wsse.yaml base64 decode Zm9v
//! ```
//!
//! Every handler returns `anyhow::Result<u8>`, the process exit code on
//! success. Output is produced by pure `render_*` functions so it can be
//! tested without capturing stdout.

pub mod base64;
pub mod config;
pub mod digest;
pub mod header;
pub mod selftest;

pub use config::{load_config, HashArgs};
