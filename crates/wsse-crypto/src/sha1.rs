//! # SHA-1 (FIPS 180-1)
//!
//! A from-scratch SHA-1 over big-endian word sequences.
//!
//! The engine works on words rather than bytes because HMAC feeds it
//! pre-packed pad blocks followed by packed data, and because the 16-bit
//! character mode packs two units per word. Every caller supplies the
//! declared message length in bits alongside the words.
//!
//! ## Padding
//!
//! A single `1` bit follows the message, then zeros, then the 64-bit bit
//! length in the last two words of the final 512-bit block. A message that
//! leaves fewer than 65 free bits in its last block gets an extra block.
//!
//! All register arithmetic is `u32` wrapping addition and `rotate_left`.

use wsse_core::{BitsPerUnit, CodeUnits};

use crate::words;

/// Words in one 512-bit block.
pub const BLOCK_WORDS: usize = 16;

/// Bits in one block.
pub const BLOCK_BITS: u64 = 512;

/// Words in a digest.
pub const DIGEST_WORDS: usize = 5;

/// Bytes in a digest.
pub const DIGEST_BYTES: usize = 20;

/// Bits in a digest.
pub const DIGEST_BITS: u64 = 160;

const IV: [u32; DIGEST_WORDS] = [0x6745_2301, 0xEFCD_AB89, 0x98BA_DCFE, 0x1032_5476, 0xC3D2_E1F0];

const ROUND_CONSTANTS: [u32; 4] = [0x5A82_7999, 0x6ED9_EBA1, 0x8F1B_BCDC, 0xCA62_C1D6];

/// A 160-bit SHA-1 digest: the five working registers `a..e` in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest([u32; DIGEST_WORDS]);

impl Digest {
    /// Wrap five register words.
    pub const fn from_words(words: [u32; DIGEST_WORDS]) -> Self {
        Self(words)
    }

    /// Build a digest from its 20-byte big-endian image.
    pub fn from_bytes(bytes: [u8; DIGEST_BYTES]) -> Self {
        let mut words = [0u32; DIGEST_WORDS];
        for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(4)) {
            *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        Self(words)
    }

    /// The register words `a, b, c, d, e`.
    pub fn words(&self) -> &[u32; DIGEST_WORDS] {
        &self.0
    }

    /// The 20-byte big-endian image.
    pub fn to_bytes(&self) -> [u8; DIGEST_BYTES] {
        let mut out = [0u8; DIGEST_BYTES];
        for (chunk, word) in out.chunks_exact_mut(4).zip(self.0) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        out
    }
}

impl std::fmt::Display for Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for word in self.0 {
            write!(f, "{word:08x}")?;
        }
        Ok(())
    }
}

/// SHA-1 over code units of a fixed width.
///
/// Holds no state between calls; the width is the only setting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sha1Engine {
    bits: BitsPerUnit,
}

impl Sha1Engine {
    /// Engine hashing `bits` of each code unit.
    pub const fn new(bits: BitsPerUnit) -> Self {
        Self { bits }
    }

    /// The configured unit width.
    pub const fn bits_per_unit(&self) -> BitsPerUnit {
        self.bits
    }

    /// Digest a sequence of code units.
    pub fn digest(&self, message: &CodeUnits) -> Digest {
        self.digest_units(message.as_units())
    }

    /// Digest a slice of code units.
    pub fn digest_units(&self, units: &[u16]) -> Digest {
        let packed = words::pack(units, self.bits);
        Self::digest_words(packed, words::bit_length(units.len(), self.bits))
    }

    /// Digest raw bytes as 8-bit units, regardless of the configured width.
    pub fn digest_bytes(bytes: &[u8]) -> Digest {
        Self::digest_words(words::pack_bytes(bytes), bytes.len() as u64 * 8)
    }

    /// Digest an already-packed word sequence of `bit_len` message bits.
    ///
    /// Bits at or past `bit_len` are ignored, as are words beyond the one
    /// holding the last message bit.
    pub fn digest_words(mut message: Vec<u32>, bit_len: u64) -> Digest {
        pad(&mut message, bit_len);
        let mut state = IV;
        for block in message.chunks_exact(BLOCK_WORDS) {
            compress(&mut state, block);
        }
        Digest(state)
    }
}

/// Append the terminator bit and the 64-bit length, extending `words` to a
/// whole number of blocks.
fn pad(words: &mut Vec<u32>, bit_len: u64) {
    let last = (bit_len / 32) as usize;
    let used = (bit_len % 32) as u32;
    let total = (((bit_len + 64) / BLOCK_BITS) as usize) * BLOCK_WORDS + BLOCK_WORDS;

    words.resize(last + 1, 0);
    // keep the `used` high bits of the partial word, then set the terminator
    words[last] &= !(u32::MAX >> used);
    words[last] |= 0x8000_0000 >> used;
    words.resize(total, 0);
    words[total - 2] = (bit_len >> 32) as u32;
    words[total - 1] = bit_len as u32;
}

/// One 80-round compression of a 16-word block into `state`.
fn compress(state: &mut [u32; DIGEST_WORDS], block: &[u32]) {
    let mut w = [0u32; 80];
    w[..BLOCK_WORDS].copy_from_slice(block);
    for j in BLOCK_WORDS..80 {
        w[j] = (w[j - 3] ^ w[j - 8] ^ w[j - 14] ^ w[j - 16]).rotate_left(1);
    }

    let [mut a, mut b, mut c, mut d, mut e] = *state;
    for (round, &wj) in w.iter().enumerate() {
        let t = a
            .rotate_left(5)
            .wrapping_add(round_function(round, b, c, d))
            .wrapping_add(e)
            .wrapping_add(wj)
            .wrapping_add(ROUND_CONSTANTS[round / 20]);
        e = d;
        d = c;
        c = b.rotate_left(30);
        b = a;
        a = t;
    }

    for (reg, value) in state.iter_mut().zip([a, b, c, d, e]) {
        *reg = reg.wrapping_add(value);
    }
}

fn round_function(round: usize, b: u32, c: u32, d: u32) -> u32 {
    match round {
        0..=19 => (b & c) | (!b & d),
        40..=59 => (b & c) | (b & d) | (c & d),
        _ => b ^ c ^ d,
    }
}
