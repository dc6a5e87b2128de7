//! # HMAC-SHA1 (RFC 2104)
//!
//! Keyed hashing built from two nested [`Sha1Engine`] calls.
//!
//! The key is packed with the same unit width as the data. A packed key
//! longer than one block (16 words) is first replaced by its own digest;
//! the result is zero-padded to exactly 512 bits before the pad XOR.

use wsse_core::{BitsPerUnit, CodeUnits};

use crate::sha1::{Digest, Sha1Engine, BLOCK_BITS, BLOCK_WORDS, DIGEST_BITS};
use crate::words;

/// Inner pad byte `0x36` repeated across a word.
pub const IPAD: u32 = 0x3636_3636;

/// Outer pad byte `0x5c` repeated across a word.
pub const OPAD: u32 = 0x5c5c_5c5c;

/// HMAC over SHA-1 with a fixed code-unit width.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HmacSha1 {
    bits: BitsPerUnit,
}

impl HmacSha1 {
    /// HMAC that packs key and data with `bits` per unit.
    pub const fn new(bits: BitsPerUnit) -> Self {
        Self { bits }
    }

    /// Compute `HMAC(key, data)`.
    pub fn compute(&self, key: &CodeUnits, data: &CodeUnits) -> Digest {
        self.compute_units(key.as_units(), data.as_units())
    }

    /// Compute `HMAC(key, data)` over code-unit slices.
    pub fn compute_units(&self, key: &[u16], data: &[u16]) -> Digest {
        let block_key = self.normalize_key(key);

        let mut inner = Vec::with_capacity(BLOCK_WORDS + data.len());
        inner.extend(block_key.iter().map(|k| k ^ IPAD));
        inner.extend(words::pack(data, self.bits));
        let inner_digest =
            Sha1Engine::digest_words(inner, BLOCK_BITS + words::bit_length(data.len(), self.bits));

        let mut outer = Vec::with_capacity(BLOCK_WORDS + inner_digest.words().len());
        outer.extend(block_key.iter().map(|k| k ^ OPAD));
        outer.extend_from_slice(inner_digest.words());
        Sha1Engine::digest_words(outer, BLOCK_BITS + DIGEST_BITS)
    }

    /// Reduce a key of any length to exactly one 16-word block.
    pub fn normalize_key(&self, key: &[u16]) -> [u32; BLOCK_WORDS] {
        let mut packed = words::pack(key, self.bits);
        if packed.len() > BLOCK_WORDS {
            let bit_len = words::bit_length(key.len(), self.bits);
            packed = Sha1Engine::digest_words(packed, bit_len).words().to_vec();
        }
        let mut block = [0u32; BLOCK_WORDS];
        block[..packed.len()].copy_from_slice(&packed);
        block
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hmac_hex(key: &[u8], data: &[u8]) -> String {
        HmacSha1::default()
            .compute(&CodeUnits::from_bytes(key), &CodeUnits::from_bytes(data))
            .to_string()
    }

    #[test]
    fn quick_brown_fox_vector() {
        assert_eq!(
            hmac_hex(b"key", b"The quick brown fox jumps over the lazy dog"),
            "de7c9b85b8b78aa6bc8a7a36f70a90701c9db4d9"
        );
    }

    #[test]
    fn empty_key_and_data_vector() {
        assert_eq!(hmac_hex(b"", b""), "fbdb1d1b18aa6c08324b7d64b71fb76370690e1d");
    }

    // RFC 2202 test cases 1, 2, 3, 6 and 7.

    #[test]
    fn rfc2202_case_1() {
        assert_eq!(
            hmac_hex(&[0x0b; 20], b"Hi There"),
            "b617318655057264e28bc0b6fb378c8ef146be00"
        );
    }

    #[test]
    fn rfc2202_case_2() {
        assert_eq!(
            hmac_hex(b"Jefe", b"what do ya want for nothing?"),
            "effcdf6ae5eb2fa2d27416d5f184df9c259a7c79"
        );
    }

    #[test]
    fn rfc2202_case_3() {
        assert_eq!(
            hmac_hex(&[0xaa; 20], &[0xdd; 50]),
            "125d7342b9ac11cd91a39af48aa17b4f63f175d3"
        );
    }

    #[test]
    fn rfc2202_case_6_long_key_is_hashed() {
        assert_eq!(
            hmac_hex(&[0xaa; 80], b"Test Using Larger Than Block-Size Key - Hash Key First"),
            "aa4ae5e15272d00e95705637ce8a3b55ed402112"
        );
    }

    #[test]
    fn rfc2202_case_7() {
        assert_eq!(
            hmac_hex(
                &[0xaa; 80],
                b"Test Using Larger Than Block-Size Key and Larger Than One Block-Size Data"
            ),
            "e8e99d0f45237d786d6bbaa7965c7808bbff1a91"
        );
    }

    #[test]
    fn block_sized_key_used_verbatim() {
        let hmac = HmacSha1::default();
        let key: Vec<u16> = (0..64).collect();
        let block = hmac.normalize_key(&key);
        assert_eq!(block[0], 0x0001_0203);
        assert_eq!(block[15], 0x3C3D_3E3F);
    }

    #[test]
    fn oversized_key_becomes_digest_then_zeros() {
        let hmac = HmacSha1::default();
        let key = vec![0x61u16; 65];
        let block = hmac.normalize_key(&key);
        let expected = Sha1Engine::digest_bytes(&[0x61; 65]);
        assert_eq!(&block[..5], expected.words());
        assert!(block[5..].iter().all(|&w| w == 0));
    }

    #[test]
    fn short_key_zero_padded() {
        let block = HmacSha1::default().normalize_key(&[0x6B, 0x65, 0x79]);
        assert_eq!(block[0], 0x6B65_7900);
        assert!(block[1..].iter().all(|&w| w == 0));
    }

    #[test]
    fn sixteen_bit_mode_doubles_key_width() {
        let hmac = HmacSha1::new(BitsPerUnit::Sixteen);
        // 32 units fill one block exactly at 16 bits each; 33 overflow it.
        let fits = hmac.normalize_key(&[1u16; 32]);
        assert_eq!(fits[15], 0x0001_0001);
        let hashed = hmac.normalize_key(&[1u16; 33]);
        assert_ne!(hashed[15], 0x0001_0001);
        assert_eq!(hashed[15], 0);
    }

    #[test]
    fn sixteen_bit_matches_byte_hmac_over_widened_units() {
        let wide = HmacSha1::new(BitsPerUnit::Sixteen)
            .compute(&CodeUnits::from_text("key"), &CodeUnits::from_text("abc"));
        let bytes = HmacSha1::default().compute(
            &CodeUnits::from_bytes(&[0, b'k', 0, b'e', 0, b'y']),
            &CodeUnits::from_bytes(&[0, b'a', 0, b'b', 0, b'c']),
        );
        assert_eq!(wide, bytes);
    }
}
