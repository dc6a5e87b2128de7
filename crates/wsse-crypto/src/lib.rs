//! # wsse-crypto — Cryptographic Primitives
//!
//! Provides the building blocks beneath a WSSE header:
//!
//! - **Word packing** of code units into big-endian 32-bit words.
//! - **SHA-1** (FIPS 180-1) over packed words, with 8- or 16-bit units.
//! - **HMAC-SHA1** (RFC 2104).
//! - **Base64** (RFC 4648), one strict codec for both directions.
//! - **Digest formatting** as hex, base64, or a raw code-unit string.
//!
//! The free functions at the crate root compose these the way the token
//! builder consumes them: text in, formatted digest out, with every knob
//! taken from an explicit `HashConfig`.
//!
//! ## Crate Policy
//!
//! - Depends only on `wsse-core` internally.
//! - Every function is pure: no I/O, no logging, no shared state.
//! - Tests compare against published vectors and, in `tests/`, against
//!   the `sha1`, `hmac` and `base64` crates.

pub mod base64;
pub mod format;
pub mod hmac;
pub mod sha1;
pub mod words;

pub use self::base64::Base64Codec;
pub use self::format::DigestFormatter;
pub use self::hmac::HmacSha1;
pub use self::sha1::{Digest, Sha1Engine};

use wsse_core::{CodeUnits, EncodingError, HashConfig};

/// SHA-1 of `message` under `config`'s unit width.
pub fn sha1_digest(message: &str, config: &HashConfig) -> Digest {
    Sha1Engine::new(config.bits_per_unit).digest(&CodeUnits::from_text(message))
}

/// SHA-1 of `message` as hex in the configured case.
pub fn sha1_hex(message: &str, config: &HashConfig) -> String {
    format::to_hex(&sha1_digest(message, config), config.hex_case)
}

/// SHA-1 of `message` as base64 with the configured pad.
pub fn sha1_base64(message: &str, config: &HashConfig) -> String {
    format::to_base64(&sha1_digest(message, config), &Base64Codec::from_config(config))
}

/// SHA-1 of `message` as a raw code-unit string.
pub fn sha1_raw(message: &str, config: &HashConfig) -> String {
    format::to_raw_string(&sha1_digest(message, config), config.bits_per_unit)
}

/// HMAC-SHA1 of `data` under `key`.
pub fn hmac_sha1_digest(key: &str, data: &str, config: &HashConfig) -> Digest {
    HmacSha1::new(config.bits_per_unit)
        .compute(&CodeUnits::from_text(key), &CodeUnits::from_text(data))
}

/// HMAC-SHA1 as hex in the configured case.
pub fn hmac_sha1_hex(key: &str, data: &str, config: &HashConfig) -> String {
    format::to_hex(&hmac_sha1_digest(key, data, config), config.hex_case)
}

/// HMAC-SHA1 as base64 with the configured pad.
pub fn hmac_sha1_base64(key: &str, data: &str, config: &HashConfig) -> String {
    format::to_base64(
        &hmac_sha1_digest(key, data, config),
        &Base64Codec::from_config(config),
    )
}

/// HMAC-SHA1 as a raw code-unit string.
pub fn hmac_sha1_raw(key: &str, data: &str, config: &HashConfig) -> String {
    format::to_raw_string(&hmac_sha1_digest(key, data, config), config.bits_per_unit)
}

/// Standard base64 of raw bytes.
pub fn base64_encode(bytes: &[u8]) -> String {
    Base64Codec::STANDARD.encode(bytes)
}

/// Standard base64 of Latin-1 text.
///
/// # Errors
///
/// Returns `EncodingError::Domain` if any code point exceeds 255.
pub fn base64_encode_latin1(text: &str) -> Result<String, EncodingError> {
    Base64Codec::STANDARD.encode_latin1(text)
}

/// Decode standard base64.
///
/// # Errors
///
/// Returns `EncodingError::Format` for malformed input.
pub fn base64_decode(text: &str) -> Result<Vec<u8>, EncodingError> {
    Base64Codec::STANDARD.decode(text)
}

/// Known-answer check that the engine hashes `"abc"` to the FIPS 180-1 value.
pub fn self_test() -> bool {
    sha1_hex("abc", &HashConfig::default()) == "a9993e364706816aba3e25717850c26c9cd0d89d"
}

#[cfg(test)]
mod tests {
    use super::*;
    use wsse_core::{BitsPerUnit, HexCase};

    #[test]
    fn self_test_passes() {
        assert!(self_test());
    }

    #[test]
    fn sha1_outputs_agree() {
        let cfg = HashConfig::default();
        assert_eq!(sha1_hex("", &cfg), "da39a3ee5e6b4b0d3255bfef95601890afd80709");
        assert_eq!(sha1_base64("abc", &cfg), "qZk+NkcGgWq6PiVxeFDCbJzQ2J0=");
        assert_eq!(sha1_raw("abc", &cfg).chars().count(), 20);
    }

    #[test]
    fn sha1_base64_is_idempotent() {
        let cfg = HashConfig::default();
        let msg = "2026-01-15T12:00:00+00:00There is more than words1768478400000";
        assert_eq!(sha1_base64(msg, &cfg), sha1_base64(msg, &cfg));
    }

    #[test]
    fn hmac_outputs_agree() {
        let cfg = HashConfig::default();
        let data = "The quick brown fox jumps over the lazy dog";
        assert_eq!(
            hmac_sha1_hex("key", data, &cfg),
            "de7c9b85b8b78aa6bc8a7a36f70a90701c9db4d9"
        );
        assert_eq!(
            base64_decode(&hmac_sha1_base64("key", data, &cfg)).unwrap(),
            hmac_sha1_digest("key", data, &cfg).to_bytes()
        );
        assert_eq!(hmac_sha1_raw("key", data, &cfg).chars().count(), 20);
    }

    #[test]
    fn upper_case_config() {
        let cfg = HashConfig::default().with_hex_case(HexCase::Upper);
        assert_eq!(sha1_hex("abc", &cfg), "A9993E364706816ABA3E25717850C26C9CD0D89D");
    }

    #[test]
    fn sixteen_bit_config_changes_digest() {
        let wide = HashConfig::default().with_bits_per_unit(BitsPerUnit::Sixteen);
        assert_ne!(sha1_hex("abc", &wide), sha1_hex("abc", &HashConfig::default()));
        assert_eq!(sha1_raw("abc", &wide).chars().count(), 10);
    }

    #[test]
    fn eight_bit_config_masks_non_latin_text() {
        let cfg = HashConfig::default();
        // U+0161 masks to 0x61 ('a')
        assert_eq!(sha1_hex("\u{161}bc", &cfg), sha1_hex("abc", &cfg));
    }

    #[test]
    fn base64_helpers() {
        assert_eq!(base64_encode(b"foo"), "Zm9v");
        assert_eq!(base64_encode_latin1("fo").unwrap(), "Zm8=");
        assert!(base64_encode_latin1("\u{2603}").unwrap_err().is_domain());
        assert!(base64_decode("Zm9").unwrap_err().is_format());
    }
}
