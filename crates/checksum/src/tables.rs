//! Const-fn CRC-32 lookup table generation, one builder per bit convention.
//!
//! A 256-entry table caches the result of running eight shift/XOR steps for
//! every possible byte. The two conventions differ in where the byte enters
//! the register and which direction it shifts:
//!
//! | Convention | Seed | Shift | Tap bit | Polynomial form |
//! |------------|------|-------|---------|-----------------|
//! | Forward (MSB-first) | `b << 24` | left | 31 | `0x04C11DB7` |
//! | Reflected (LSB-first) | `b` | right | 0 | `0xEDB88320` |
//!
//! Right shifts on `u32` are logical; no masking or sign handling is needed.
//! A table is fully determined by (polynomial, convention): two tables built
//! from the same pair are bit-identical, and `table[0] == 0` always, because
//! a zero byte never sets the tap bit.

// SAFETY: all indexing below uses bounded loop indices (0..256).
// Clippy cannot prove this in const contexts, but bounds are statically guaranteed.
#![allow(clippy::indexing_slicing)]

use crate::reflect::{reflect8, reflect32};

/// CRC-32 generator polynomial, forward (MSB-first) form.
pub const CRC32_POLY: u32 = 0x04C1_1DB7;

/// CRC-32 generator polynomial, reflected (LSB-first) form.
///
/// This is `reflect32(CRC32_POLY)`; the zlib/Ethernet convention.
pub const CRC32_POLY_REFLECTED: u32 = 0xEDB8_8320;

/// Generate a single forward-convention table entry.
///
/// The byte is seeded into the top of the register and shifted out through
/// bit 31, XORing in the polynomial whenever a set bit falls off.
#[must_use]
pub const fn forward_table_entry(poly: u32, index: u8) -> u32 {
  let mut crc = (index as u32) << 24;
  let mut bit = 0;
  while bit < 8 {
    crc = if crc & 0x8000_0000 != 0 { (crc << 1) ^ poly } else { crc << 1 };
    bit += 1;
  }
  crc
}

/// Generate a single reflected-convention table entry.
///
/// The byte is seeded into the bottom of the register and shifted out through
/// bit 0, XORing in the (reflected) polynomial whenever a set bit falls off.
#[must_use]
pub const fn reflected_table_entry(poly: u32, index: u8) -> u32 {
  let mut crc = index as u32;
  let mut bit = 0;
  while bit < 8 {
    crc = if crc & 1 != 0 { (crc >> 1) ^ poly } else { crc >> 1 };
    bit += 1;
  }
  crc
}

/// Generate the 256-entry forward-convention (MSB-first) lookup table.
#[must_use]
pub const fn generate_forward_table(poly: u32) -> [u32; 256] {
  let mut table = [0u32; 256];
  let mut i = 0;
  while i < 256 {
    table[i] = forward_table_entry(poly, i as u8);
    i += 1;
  }
  table
}

/// Generate the 256-entry reflected-convention (LSB-first) lookup table.
#[must_use]
pub const fn generate_reflected_table(poly: u32) -> [u32; 256] {
  let mut table = [0u32; 256];
  let mut i = 0;
  while i < 256 {
    table[i] = reflected_table_entry(poly, i as u8);
    i += 1;
  }
  table
}

// ─────────────────────────────────────────────────────────────────────────────
// Compile-Time Verification
// ─────────────────────────────────────────────────────────────────────────────

// Pin the first and last entries of both default tables. If these fail, the
// build fails.
const _: () = {
  let fwd = generate_forward_table(CRC32_POLY);
  assert!(fwd[0] == 0);
  assert!(fwd[1] == CRC32_POLY);
  assert!(fwd[255] == 0xB1F7_40B4);

  let refl = generate_reflected_table(CRC32_POLY_REFLECTED);
  assert!(refl[0] == 0);
  assert!(refl[1] == 0x7707_3096);
  assert!(refl[255] == 0x2D02_EF8D);
};

// The two conventions describe the same polynomial division in opposite bit
// orders: entry i of the forward table, bit-reversed, is entry reflect8(i) of
// the reflected table.
const _: () = {
  let fwd = generate_forward_table(CRC32_POLY);
  let refl = generate_reflected_table(CRC32_POLY_REFLECTED);
  let mut i = 0;
  while i < 256 {
    assert!(refl[reflect8(i as u8) as usize] == reflect32(fwd[i]));
    i += 1;
  }
};

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn zero_entry_is_zero_for_any_polynomial() {
    for poly in [CRC32_POLY, CRC32_POLY_REFLECTED, 0x1EDC_6F41, 0x82F6_3B78, 1, !0] {
      assert_eq!(generate_forward_table(poly)[0], 0);
      assert_eq!(generate_reflected_table(poly)[0], 0);
    }
  }

  #[test]
  fn tables_are_reproducible() {
    assert_eq!(
      generate_reflected_table(CRC32_POLY_REFLECTED),
      generate_reflected_table(CRC32_POLY_REFLECTED)
    );
    assert_eq!(generate_forward_table(CRC32_POLY), generate_forward_table(CRC32_POLY));
  }

  #[test]
  fn different_polynomials_give_different_tables() {
    let ieee = generate_reflected_table(CRC32_POLY_REFLECTED);
    let castagnoli = generate_reflected_table(0x82F6_3B78);
    assert_ne!(ieee, castagnoli);
  }

  #[test]
  fn entry_builders_match_table_builders() {
    let fwd = generate_forward_table(CRC32_POLY);
    let refl = generate_reflected_table(CRC32_POLY_REFLECTED);
    for i in 0..256 {
      assert_eq!(fwd[i], forward_table_entry(CRC32_POLY, i as u8));
      assert_eq!(refl[i], reflected_table_entry(CRC32_POLY_REFLECTED, i as u8));
    }
  }

  #[test]
  fn reflected_table_first_row_matches_zlib() {
    let refl = generate_reflected_table(CRC32_POLY_REFLECTED);
    let expected: [u32; 8] = [
      0x0000_0000,
      0x7707_3096,
      0xEE0E_612C,
      0x9909_51BA,
      0x076D_C419,
      0x706A_F48F,
      0xE963_A535,
      0x9E64_95A3,
    ];
    assert_eq!(&refl[..8], &expected);
  }
}
