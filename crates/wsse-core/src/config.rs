//! # Hashing Configuration
//!
//! `HashConfig` carries the three knobs that the legacy WSSE scripts kept
//! as mutable globals: hex output case, base64 pad character, and bits per
//! input character. Every hashing and formatting call receives one
//! explicitly, so concurrent callers can never observe each other's
//! settings.
//!
//! The type is `serde`-enabled so the CLI can load it from a JSON or YAML
//! file. Missing fields fall back to the defaults
//! (`lower`, `=`, `8`).

use serde::{Deserialize, Serialize};

use crate::error::WsseError;

/// Case of hexadecimal digest output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HexCase {
    /// `0-9a-f` (default).
    #[default]
    Lower,
    /// `0-9A-F`.
    Upper,
}

/// How many bits of each input character are hashed.
///
/// Serializes as the plain number `8` or `16`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum BitsPerUnit {
    /// Treat input as 8-bit characters (default). Wider code units lose
    /// their high byte.
    #[default]
    Eight,
    /// Treat input as 16-bit code units.
    Sixteen,
}

impl BitsPerUnit {
    /// Number of bits per unit.
    pub const fn bits(self) -> u32 {
        match self {
            Self::Eight => 8,
            Self::Sixteen => 16,
        }
    }

    /// Mask selecting the low `bits()` bits of a unit.
    pub const fn mask(self) -> u32 {
        (1 << self.bits()) - 1
    }

    /// Units that fit in one 32-bit word.
    pub const fn units_per_word(self) -> usize {
        (32 / self.bits()) as usize
    }
}

impl TryFrom<u8> for BitsPerUnit {
    type Error = WsseError;

    fn try_from(bits: u8) -> Result<Self, Self::Error> {
        match bits {
            8 => Ok(Self::Eight),
            16 => Ok(Self::Sixteen),
            other => Err(WsseError::Config(format!(
                "bits per character must be 8 or 16, got {other}"
            ))),
        }
    }
}

impl From<BitsPerUnit> for u8 {
    fn from(bits: BitsPerUnit) -> Self {
        match bits {
            BitsPerUnit::Eight => 8,
            BitsPerUnit::Sixteen => 16,
        }
    }
}

impl std::fmt::Display for BitsPerUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.bits())
    }
}

/// Explicit replacement for the legacy `hexcase` / `b64pad` / `chrsz` globals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct HashConfig {
    /// Case of hex digest output.
    pub hex_case: HexCase,
    /// Base64 pad character. `=` for strict RFC 4648 output.
    pub pad_char: char,
    /// Bits per input character fed into SHA-1.
    pub bits_per_unit: BitsPerUnit,
}

impl HashConfig {
    /// The RFC 4648 pad character.
    pub const DEFAULT_PAD: char = '=';

    /// Copy of this config with a different hex case.
    pub fn with_hex_case(mut self, hex_case: HexCase) -> Self {
        self.hex_case = hex_case;
        self
    }

    /// Copy of this config with a different bits-per-character setting.
    pub fn with_bits_per_unit(mut self, bits_per_unit: BitsPerUnit) -> Self {
        self.bits_per_unit = bits_per_unit;
        self
    }

    /// Copy of this config with a different base64 pad character.
    pub fn with_pad_char(mut self, pad_char: char) -> Self {
        self.pad_char = pad_char;
        self
    }

    /// True if `pad` is printable ASCII outside the base64 alphabet.
    pub const fn is_valid_pad(pad: char) -> bool {
        pad.is_ascii_graphic() && !pad.is_ascii_alphanumeric() && pad != '+' && pad != '/'
    }

    /// Check that the pad character cannot be confused with base64 data.
    ///
    /// # Errors
    ///
    /// Returns `WsseError::Config` if the pad character is not printable
    /// ASCII or belongs to the base64 alphabet.
    pub fn validate(&self) -> Result<(), WsseError> {
        let pad = self.pad_char;
        if !Self::is_valid_pad(pad) {
            return Err(WsseError::Config(format!(
                "pad character {pad:?} must be printable ASCII outside the base64 alphabet"
            )));
        }
        Ok(())
    }
}

impl Default for HashConfig {
    fn default() -> Self {
        Self {
            hex_case: HexCase::Lower,
            pad_char: Self::DEFAULT_PAD,
            bits_per_unit: BitsPerUnit::Eight,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_rfc_settings() {
        let cfg = HashConfig::default();
        assert_eq!(cfg.hex_case, HexCase::Lower);
        assert_eq!(cfg.pad_char, '=');
        assert_eq!(cfg.bits_per_unit, BitsPerUnit::Eight);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn bits_per_unit_geometry() {
        assert_eq!(BitsPerUnit::Eight.mask(), 0xFF);
        assert_eq!(BitsPerUnit::Sixteen.mask(), 0xFFFF);
        assert_eq!(BitsPerUnit::Eight.units_per_word(), 4);
        assert_eq!(BitsPerUnit::Sixteen.units_per_word(), 2);
    }

    #[test]
    fn bits_per_unit_rejects_other_widths() {
        assert!(BitsPerUnit::try_from(8).is_ok());
        assert!(BitsPerUnit::try_from(16).is_ok());
        assert!(BitsPerUnit::try_from(7).is_err());
        assert!(BitsPerUnit::try_from(32).is_err());
    }

    #[test]
    fn pad_char_inside_alphabet_rejected() {
        for pad in ['A', 'z', '0', '+', '/', ' ', '\u{e9}'] {
            let cfg = HashConfig::default().with_pad_char(pad);
            assert!(cfg.validate().is_err(), "pad {pad:?} should be rejected");
        }
        assert!(HashConfig::default().with_pad_char('.').validate().is_ok());
    }

    #[test]
    fn pad_rule_agrees_with_validate() {
        for pad in ['=', '.', '*', '-', 'A', '+', '/', ' ', '\n', '\u{e9}'] {
            let cfg = HashConfig::default().with_pad_char(pad);
            assert_eq!(HashConfig::is_valid_pad(pad), cfg.validate().is_ok(), "{pad:?}");
        }
    }

    #[test]
    fn json_partial_config_uses_defaults() {
        let cfg: HashConfig = serde_json::from_str(r#"{"hex_case":"upper"}"#).unwrap();
        assert_eq!(cfg.hex_case, HexCase::Upper);
        assert_eq!(cfg.pad_char, '=');
        assert_eq!(cfg.bits_per_unit, BitsPerUnit::Eight);
    }

    #[test]
    fn yaml_config_parses_numeric_bits() {
        let cfg: HashConfig = serde_yaml::from_str("bits_per_unit: 16\npad_char: '='\n").unwrap();
        assert_eq!(cfg.bits_per_unit, BitsPerUnit::Sixteen);
    }

    #[test]
    fn invalid_bits_rejected_at_deserialization() {
        let res: Result<HashConfig, _> = serde_json::from_str(r#"{"bits_per_unit":12}"#);
        assert!(res.is_err());
    }

    #[test]
    fn serde_roundtrip() {
        let cfg = HashConfig::default()
            .with_hex_case(HexCase::Upper)
            .with_bits_per_unit(BitsPerUnit::Sixteen);
        let json = serde_json::to_string(&cfg).unwrap();
        assert!(json.contains(r#""bits_per_unit":16"#), "{json}");
        let back: HashConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg, back);
    }
}
