//! # Input Domains — Byte Strings and Code Units
//!
//! Two newtypes describe what the lower layers accept:
//!
//! - [`ByteString`] is an ordered sequence of 8-bit values. Text can only
//!   become one through [`ByteString::from_latin1()`], which rejects any code
//!   point above 255. This is the base64 encoder's input domain.
//! - [`CodeUnits`] is the hashing input: text viewed as UTF-16 code units.
//!   The SHA-1 path masks each unit to the configured bits per character
//!   rather than rejecting it, so construction never fails.

/// An ordered sequence of 8-bit values.
///
/// # Invariants
///
/// Every element fits in 8 bits by construction. Text containing code points
/// above 255 is reported as `EncodingError::Domain`, never truncated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ByteString(Vec<u8>);

impl ByteString {
    /// Wrap raw bytes. Always succeeds.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Convert ISO-8859-1 text into bytes, one byte per character.
    ///
    /// # Errors
    ///
    /// Returns `EncodingError::Domain` for the first character whose code
    /// point exceeds 255.
    pub fn from_latin1(text: &str) -> Result<Self, crate::EncodingError> {
        let mut out = Vec::with_capacity(text.len());
        for (index, character) in text.chars().enumerate() {
            let code_point = u32::from(character);
            let byte = u8::try_from(code_point).map_err(|_| crate::EncodingError::Domain {
                index,
                character,
                code_point,
            })?;
            out.push(byte);
        }
        Ok(Self(out))
    }

    /// Access the underlying bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consume the wrapper and return the bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// Number of bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no bytes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Render each byte as the character with the same code point.
    ///
    /// This is the inverse of [`ByteString::from_latin1()`].
    pub fn to_latin1_string(&self) -> String {
        self.0.iter().map(|&b| char::from(b)).collect()
    }
}

impl AsRef<[u8]> for ByteString {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for ByteString {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for ByteString {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

/// Text as a sequence of UTF-16 code units, the unit the SHA-1 path hashes.
///
/// Characters outside the Basic Multilingual Plane become two surrogate
/// units, exactly as a UTF-16 string indexes them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CodeUnits(Vec<u16>);

impl CodeUnits {
    /// Encode text as UTF-16 code units.
    pub fn from_text(text: &str) -> Self {
        Self(text.encode_utf16().collect())
    }

    /// Widen each byte into one code unit.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(bytes.iter().map(|&b| u16::from(b)).collect())
    }

    /// Access the units.
    pub fn as_units(&self) -> &[u16] {
        &self.0
    }

    /// Number of code units.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no units.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for CodeUnits {
    fn from(text: &str) -> Self {
        Self::from_text(text)
    }
}

impl From<&String> for CodeUnits {
    fn from(text: &String) -> Self {
        Self::from_text(text)
    }
}

impl From<&[u8]> for CodeUnits {
    fn from(bytes: &[u8]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<&ByteString> for CodeUnits {
    fn from(bytes: &ByteString) -> Self {
        Self::from_bytes(bytes.as_bytes())
    }
}

impl From<Vec<u16>> for CodeUnits {
    fn from(units: Vec<u16>) -> Self {
        Self(units)
    }
}

impl FromIterator<u16> for CodeUnits {
    fn from_iter<I: IntoIterator<Item = u16>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EncodingError;

    #[test]
    fn latin1_accepts_full_byte_range() {
        let text: String = (0u8..=255).map(char::from).collect();
        let bs = ByteString::from_latin1(&text).unwrap();
        assert_eq!(bs.len(), 256);
        assert_eq!(bs.as_bytes()[255], 0xFF);
        assert_eq!(bs.to_latin1_string(), text);
    }

    #[test]
    fn latin1_rejects_wide_code_point() {
        let err = ByteString::from_latin1("ab\u{20AC}c").unwrap_err();
        assert_eq!(
            err,
            EncodingError::Domain {
                index: 2,
                character: '\u{20AC}',
                code_point: 0x20AC,
            }
        );
    }

    #[test]
    fn latin1_empty_is_empty() {
        let bs = ByteString::from_latin1("").unwrap();
        assert!(bs.is_empty());
    }

    #[test]
    fn code_units_follow_utf16() {
        let units = CodeUnits::from_text("a\u{e9}\u{1F600}");
        assert_eq!(units.as_units(), &[0x61, 0xE9, 0xD83D, 0xDE00]);
    }

    #[test]
    fn code_units_from_bytes_widen() {
        let units = CodeUnits::from_bytes(&[0x00, 0x7F, 0xFF]);
        assert_eq!(units.as_units(), &[0x00, 0x7F, 0xFF]);
        assert_eq!(CodeUnits::from(&ByteString::from_bytes(vec![1u8, 2])).len(), 2);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn latin1_round_trips_bytes(bytes in proptest::collection::vec(any::<u8>(), 0..64)) {
                let text = ByteString::from_bytes(bytes.clone()).to_latin1_string();
                prop_assert_eq!(ByteString::from_latin1(&text).unwrap().into_bytes(), bytes);
            }

            #[test]
            fn code_units_match_utf16_length(text in ".{0,32}") {
                prop_assert_eq!(CodeUnits::from_text(&text).len(), text.encode_utf16().count());
            }
        }
    }
}
