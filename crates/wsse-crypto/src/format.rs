//! # Digest Formatting
//!
//! Renders a [`Digest`] as hex, base64, or the legacy "raw" string whose
//! characters are the digest's code units.

use wsse_core::{BitsPerUnit, HashConfig, HexCase};

use crate::base64::Base64Codec;
use crate::sha1::Digest;
use crate::words;

/// Render the five words as 40 hex digits in register order.
pub fn to_hex(digest: &Digest, case: HexCase) -> String {
    let mut out = String::with_capacity(40);
    for word in digest.words() {
        let rendered = match case {
            HexCase::Lower => format!("{word:08x}"),
            HexCase::Upper => format!("{word:08X}"),
        };
        out.push_str(&rendered);
    }
    out
}

/// Base64 of the 20 big-endian digest bytes. Always 28 characters.
pub fn to_base64(digest: &Digest, codec: &Base64Codec) -> String {
    codec.encode(&digest.to_bytes())
}

/// The digest unpacked into code units of the given width.
pub fn to_code_units(digest: &Digest, bits: BitsPerUnit) -> Vec<u16> {
    words::unpack(digest.words(), bits)
}

/// The digest as a string with one character per code unit.
///
/// Eight-bit mode yields 20 Latin-1 characters. Sixteen-bit mode yields
/// 10 characters; a unit in the surrogate range has no `char` and is
/// rendered as U+FFFD.
pub fn to_raw_string(digest: &Digest, bits: BitsPerUnit) -> String {
    to_code_units(digest, bits)
        .into_iter()
        .map(|unit| char::from_u32(u32::from(unit)).unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect()
}

/// Formatter bound to one `HashConfig`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigestFormatter {
    hex_case: HexCase,
    bits: BitsPerUnit,
    codec: Base64Codec,
}

impl DigestFormatter {
    /// Formatter taking hex case, pad character and unit width from `config`.
    pub fn new(config: &HashConfig) -> Self {
        Self {
            hex_case: config.hex_case,
            bits: config.bits_per_unit,
            codec: Base64Codec::from_config(config),
        }
    }

    /// Hex in the configured case.
    pub fn hex(&self, digest: &Digest) -> String {
        to_hex(digest, self.hex_case)
    }

    /// Base64 with the configured pad character.
    pub fn base64(&self, digest: &Digest) -> String {
        to_base64(digest, &self.codec)
    }

    /// Raw string in the configured unit width.
    pub fn raw(&self, digest: &Digest) -> String {
        to_raw_string(digest, self.bits)
    }
}

impl Default for DigestFormatter {
    fn default() -> Self {
        Self::new(&HashConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sha1::Sha1Engine;

    fn abc() -> Digest {
        Sha1Engine::digest_bytes(b"abc")
    }

    #[test]
    fn hex_lower_and_upper() {
        assert_eq!(to_hex(&abc(), HexCase::Lower), "a9993e364706816aba3e25717850c26c9cd0d89d");
        assert_eq!(to_hex(&abc(), HexCase::Upper), "A9993E364706816ABA3E25717850C26C9CD0D89D");
    }

    #[test]
    fn hex_keeps_leading_zeros() {
        let d = Digest::from_words([0, 1, 0x0F, 0xABC, 0xFFFF_FFFF]);
        assert_eq!(
            to_hex(&d, HexCase::Lower),
            "00000000000000010000000f00000abcffffffff"
        );
    }

    #[test]
    fn base64_is_28_chars_with_one_pad() {
        let b64 = to_base64(&abc(), &Base64Codec::STANDARD);
        assert_eq!(b64, "qZk+NkcGgWq6PiVxeFDCbJzQ2J0=");
        assert_eq!(b64.len(), 28);
        assert!(b64.ends_with('=') && !b64.ends_with("=="));
    }

    #[test]
    fn raw_eight_bit_is_digest_bytes() {
        let raw = to_raw_string(&abc(), BitsPerUnit::Eight);
        assert_eq!(raw.chars().count(), 20);
        let bytes: Vec<u8> = raw.chars().map(|c| c as u8).collect();
        assert_eq!(bytes, abc().to_bytes());
    }

    #[test]
    fn raw_sixteen_bit_has_ten_units() {
        let units = to_code_units(&abc(), BitsPerUnit::Sixteen);
        assert_eq!(units.len(), 10);
        assert_eq!(units[0], 0xa999);
        assert_eq!(units[1], 0x3e36);
        assert_eq!(to_raw_string(&abc(), BitsPerUnit::Sixteen).chars().count(), 10);
    }

    #[test]
    fn formatter_follows_config() {
        let cfg = HashConfig::default().with_hex_case(HexCase::Upper).with_pad_char('.');
        let fmt = DigestFormatter::new(&cfg);
        assert!(fmt.hex(&abc()).starts_with("A9993E"));
        assert!(fmt.base64(&abc()).ends_with('.'));
        assert_eq!(DigestFormatter::default().hex(&abc()), abc().to_string());
    }
}
