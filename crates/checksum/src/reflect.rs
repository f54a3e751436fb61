//! Bit-order reversal for 32-bit words and single bytes.
//!
//! The forward and reflected CRC-32 conventions are related by exact bit
//! reversal: of the polynomial, of each input byte, and of the final
//! register. This module is the single definition of that reversal.
//!
//! `reflect32` is a pure involution: `reflect32(reflect32(x)) == x` for every
//! `x`. A table-assisted shortcut would be fine for speed, but the shift loop
//! is the form that is obviously total and obviously correct, and nothing in
//! this crate calls it on a hot path.

// SAFETY: all indexing below uses bounded loop indices (0..256).
// Clippy cannot prove this in const contexts, but bounds are statically guaranteed.
#![allow(clippy::indexing_slicing)]

/// Reverse the bit order of a 32-bit word (bit 0 ↔ bit 31, bit 1 ↔ bit 30, …).
#[must_use]
pub const fn reflect32(x: u32) -> u32 {
  let mut out = 0u32;
  let mut i = 0;
  while i < 32 {
    out = (out << 1) | ((x >> i) & 1);
    i += 1;
  }
  out
}

/// Reverse the bit order of a single byte.
///
/// Derived from [`reflect32`]: reflecting the byte as a 32-bit word moves its
/// mirrored bits into bits 31..24.
#[must_use]
pub const fn reflect8(b: u8) -> u8 {
  (reflect32(b as u32) >> 24) as u8
}

/// Per-byte reflection table, `REFLECT8[b] == reflect8(b)`.
///
/// The MSB-first fold reflects every input byte before indexing; a 256-entry
/// table keeps that off the per-byte path.
pub(crate) const REFLECT8: [u8; 256] = {
  let mut table = [0u8; 256];
  let mut i = 0;
  while i < 256 {
    table[i] = reflect8(i as u8);
    i += 1;
  }
  table
};

// The reflected polynomial constant is exactly the reflection of the forward
// one; pin that relationship at compile time.
const _: () = {
  assert!(reflect32(0x04C1_1DB7) == 0xEDB8_8320);
  assert!(reflect32(0xEDB8_8320) == 0x04C1_1DB7);
};
