//! # Word Packing — Code Units to Big-Endian 32-bit Words
//!
//! SHA-1 consumes its message as 32-bit big-endian words. [`pack()`] masks
//! each code unit to the configured width and places it
//! most-significant-bit first: unit `i` starts at bit offset
//! `i * width`, which is word `offset / 32`, shifted left by
//! `32 - width - offset % 32`.
//!
//! Packing never fails. A unit wider than the configured width silently
//! loses its high bits.

use wsse_core::BitsPerUnit;

/// Pack code units into big-endian words.
///
/// The final word is zero-filled past the last unit.
pub fn pack(units: &[u16], bits: BitsPerUnit) -> Vec<u32> {
    let width = bits.bits() as usize;
    let mask = bits.mask();
    let mut words = vec![0u32; (units.len() * width).div_ceil(32)];
    for (i, &unit) in units.iter().enumerate() {
        let offset = i * width;
        let shift = 32 - width - offset % 32;
        words[offset / 32] |= (u32::from(unit) & mask) << shift;
    }
    words
}

/// Pack raw bytes as 8-bit units.
pub fn pack_bytes(bytes: &[u8]) -> Vec<u32> {
    let mut words = vec![0u32; bytes.len().div_ceil(4)];
    for (i, &byte) in bytes.iter().enumerate() {
        words[i / 4] |= u32::from(byte) << (24 - 8 * (i % 4));
    }
    words
}

/// Exact inverse of [`pack()`] over whole words.
///
/// Emits `words.len() * 32 / width` units, including any zero units that
/// filled the last word.
pub fn unpack(words: &[u32], bits: BitsPerUnit) -> Vec<u16> {
    let width = bits.bits() as usize;
    let mask = bits.mask();
    (0..words.len() * bits.units_per_word())
        .map(|i| {
            let offset = i * width;
            let shift = 32 - width - offset % 32;
            // mask <= 0xFFFF, so the narrowing is lossless
            ((words[offset / 32] >> shift) & mask) as u16
        })
        .collect()
}

/// The big-endian byte image of a word sequence, four bytes per word.
pub fn words_to_bytes(words: &[u32]) -> Vec<u8> {
    words.iter().flat_map(|w| w.to_be_bytes()).collect()
}

/// Message length in bits for `unit_count` units of the given width.
pub fn bit_length(unit_count: usize, bits: BitsPerUnit) -> u64 {
    unit_count as u64 * u64::from(bits.bits())
}
