//! # Base64 (RFC 4648)
//!
//! One codec for both directions, standard alphabet, configurable pad
//! character.
//!
//! ## Encoding
//!
//! Input is walked in 3-byte chunks. A full chunk yields four characters;
//! the final chunk may hold two bytes (three characters and one pad) or
//! one byte (two characters and two pads).
//!
//! ## Decoding
//!
//! The whole text is validated before any byte is produced: length a
//! multiple of four, at most two trailing pads, every other character in
//! the alphabet. A failed decode returns no partial output.

use wsse_core::{ByteString, EncodingError, HashConfig};

const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

const INVALID: u8 = 0xFF;

const DECODE_TABLE: [u8; 128] = build_decode_table();

const fn build_decode_table() -> [u8; 128] {
    let mut table = [INVALID; 128];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
}

fn sextet(c: char) -> Option<u32> {
    let index = *DECODE_TABLE.get(c as usize)?;
    (index != INVALID).then_some(u32::from(index))
}

/// Base64 encoder/decoder over the standard alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Base64Codec {
    pad: char,
}

impl Default for Base64Codec {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl Base64Codec {
    /// RFC 4648 codec padding with `=`.
    pub const STANDARD: Self = Self { pad: '=' };

    /// Codec padding with `pad`.
    ///
    /// # Errors
    ///
    /// Returns `EncodingError::InvalidPad` unless `pad` is printable ASCII
    /// outside the alphabet, the same rule `HashConfig::validate()` applies.
    pub fn new(pad: char) -> Result<Self, EncodingError> {
        if HashConfig::is_valid_pad(pad) {
            Ok(Self { pad })
        } else {
            Err(EncodingError::InvalidPad(pad))
        }
    }

    /// Codec using the pad character from `config`.
    ///
    /// Configs are validated when loaded or handed to the token builder. A
    /// pad that would fail `HashConfig::validate()` is replaced by `=`, so
    /// every codec decodes what it encodes.
    pub fn from_config(config: &HashConfig) -> Self {
        Self::new(config.pad_char).unwrap_or(Self::STANDARD)
    }

    /// The pad character.
    pub const fn pad(&self) -> char {
        self.pad
    }

    /// Length of the encoding of `n` bytes.
    pub const fn encoded_len(n: usize) -> usize {
        n.div_ceil(3) * 4
    }

    /// Encode bytes.
    pub fn encode(&self, bytes: &[u8]) -> String {
        let mut out = String::with_capacity(Self::encoded_len(bytes.len()));
        for chunk in bytes.chunks(3) {
            let (group, emitted) = match *chunk {
                [a] => (u32::from(a) << 16, 2),
                [a, b] => (u32::from(a) << 16 | u32::from(b) << 8, 3),
                [a, b, c, ..] => (u32::from(a) << 16 | u32::from(b) << 8 | u32::from(c), 4),
                [] => continue,
            };
            for i in 0..4 {
                if i < emitted {
                    let index = (group >> (18 - 6 * i)) & 0x3F;
                    out.push(char::from(ALPHABET[index as usize]));
                } else {
                    out.push(self.pad);
                }
            }
        }
        out
    }

    /// Encode a byte string.
    pub fn encode_byte_string(&self, bytes: &ByteString) -> String {
        self.encode(bytes.as_bytes())
    }

    /// Encode ISO-8859-1 text, one byte per character.
    ///
    /// # Errors
    ///
    /// Returns `EncodingError::Domain` if any code point exceeds 255.
    pub fn encode_latin1(&self, text: &str) -> Result<String, EncodingError> {
        let bytes = ByteString::from_latin1(text)?;
        Ok(self.encode_byte_string(&bytes))
    }

    /// Decode base64 text.
    ///
    /// The empty string decodes to no bytes. Bits below the last full byte
    /// of a padded group are ignored.
    ///
    /// # Errors
    ///
    /// Returns `EncodingError::Format` if the length is not a multiple of
    /// four, more than two pads trail the text, a pad appears mid-text, or
    /// any character lies outside the alphabet.
    pub fn decode(&self, text: &str) -> Result<Vec<u8>, EncodingError> {
        let chars: Vec<char> = text.chars().collect();
        if chars.len() % 4 != 0 {
            return Err(EncodingError::format(format!(
                "length {} is not a multiple of 4",
                chars.len()
            )));
        }

        let pads = chars.iter().rev().take_while(|&&c| c == self.pad).count();
        if pads > 2 {
            return Err(EncodingError::format(format!(
                "{pads} trailing pad characters, at most 2 allowed"
            )));
        }

        let data = &chars[..chars.len() - pads];
        let mut sextets = Vec::with_capacity(data.len());
        for (index, &c) in data.iter().enumerate() {
            let value = sextet(c).ok_or_else(|| {
                EncodingError::format(format!("invalid character {c:?} at index {index}"))
            })?;
            sextets.push(value);
        }

        let mut out = Vec::with_capacity(sextets.len() / 4 * 3 + 2);
        for group in sextets.chunks(4) {
            match *group {
                [a, b, c, d] => {
                    let bits = a << 18 | b << 12 | c << 6 | d;
                    out.extend_from_slice(&bits.to_be_bytes()[1..]);
                }
                [a, b, c] => {
                    let bits = a << 18 | b << 12 | c << 6;
                    out.extend_from_slice(&bits.to_be_bytes()[1..3]);
                }
                [a, b] => {
                    let bits = a << 18 | b << 12;
                    out.push(bits.to_be_bytes()[1]);
                }
                // a lone sextet needs three pads, rejected above
                _ => {
                    return Err(EncodingError::format("truncated final group"));
                }
            }
        }
        Ok(out)
    }

    /// Decode base64 text into a byte string.
    ///
    /// # Errors
    ///
    /// Same as [`Base64Codec::decode()`].
    pub fn decode_byte_string(&self, text: &str) -> Result<ByteString, EncodingError> {
        self.decode(text).map(ByteString::from)
    }
}
