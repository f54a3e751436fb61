//! Forward-convention (MSB-first) CRC-32 engine.

use traits::Checksum;

use crate::reflect::{REFLECT8, reflect32};
use crate::tables::{CRC32_POLY, generate_forward_table};

/// CRC-32 computed in the forward (MSB-first) bit order.
///
/// The lookup table is built by shifting each byte out through bit 31 of the
/// register against the *forward* polynomial. Because the standard CRC-32 is
/// defined over reflected input, each input byte is bit-reversed before it
/// indexes the table, and the final register is bit-reversed after the
/// complement. With both reflections in place this engine agrees with
/// [`Crc32Reflected`](crate::Crc32Reflected) on every input.
///
/// # Properties
///
/// - **Polynomial**: `0x04C11DB7` (forward form, default)
/// - **Initial value**: `0xFFFFFFFF`
/// - **Per byte**: `state = table[(reflect8(b) ^ (state >> 24)) & 0xFF] ^ (state << 8)`
/// - **Finalize**: `reflect32(!state)`
///
/// # Example
///
/// ```rust
/// use checksum::{Checksum, Crc32Forward};
///
/// assert_eq!(Crc32Forward::checksum(b"123456789"), 0xCBF4_3926);
/// ```
#[derive(Clone)]
pub struct Crc32Forward {
  poly: u32,
  table: [u32; 256],
  state: u32,
}

impl Crc32Forward {
  /// Create an engine for a custom forward-form polynomial.
  ///
  /// The table is built once here and never mutated afterwards.
  #[must_use]
  pub const fn with_polynomial(poly: u32) -> Self {
    Self {
      poly,
      table: generate_forward_table(poly),
      state: !0,
    }
  }

  /// The forward-form polynomial this engine was built with.
  #[inline]
  #[must_use]
  pub const fn polynomial(&self) -> u32 {
    self.poly
  }

  /// The 256-entry MSB-first lookup table owned by this engine.
  #[inline]
  #[must_use]
  pub const fn table(&self) -> &[u32; 256] {
    &self.table
  }

  /// The per-byte input-reflection table used by the fold.
  ///
  /// Polynomial-independent; shared by every forward engine.
  #[inline]
  #[must_use]
  pub fn input_reflection_table() -> &'static [u8; 256] {
    &REFLECT8
  }

  #[inline]
  #[allow(clippy::indexing_slicing)] // index is masked to 0..=255, tables are 256 entries
  fn fold(&self, mut state: u32, data: &[u8]) -> u32 {
    for &b in data {
      let index = ((u32::from(REFLECT8[b as usize]) ^ (state >> 24)) & 0xFF) as usize;
      state = self.table[index] ^ (state << 8);
    }
    state
  }
}

impl Default for Crc32Forward {
  #[inline]
  fn default() -> Self {
    Self::with_polynomial(CRC32_POLY)
  }
}

impl Checksum for Crc32Forward {
  const OUTPUT_SIZE: usize = 4;
  type Output = u32;

  #[inline]
  fn new() -> Self {
    Self::with_polynomial(CRC32_POLY)
  }

  #[inline]
  fn with_initial(initial: u32) -> Self {
    // finalize() is reflect32(!state); invert it to restore the register.
    Self {
      state: !reflect32(initial),
      ..Self::new()
    }
  }

  #[inline]
  fn update(&mut self, data: &[u8]) {
    self.state = self.fold(self.state, data);
  }

  #[inline]
  fn finalize(&self) -> u32 {
    reflect32(!self.state)
  }

  #[inline]
  fn reset(&mut self) {
    self.state = !0;
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn check_value() {
    assert_eq!(Crc32Forward::checksum(b"123456789"), 0xCBF4_3926);
  }

  #[test]
  fn empty_input() {
    // Finalize-only transform of the initial register: reflect32(!0xFFFFFFFF).
    assert_eq!(Crc32Forward::checksum(&[]), 0);
  }

  #[test]
  fn streaming_matches_oneshot() {
    let data = b"The quick brown fox jumps over the lazy dog";
    let oneshot = Crc32Forward::checksum(data);
    assert_eq!(oneshot, 0x414F_A339);

    let mut hasher = Crc32Forward::new();
    for chunk in data.chunks(5) {
      hasher.update(chunk);
    }
    assert_eq!(hasher.finalize(), oneshot);
  }

  #[test]
  fn finalize_is_idempotent() {
    let mut hasher = Crc32Forward::new();
    hasher.update(b"abc");
    assert_eq!(hasher.finalize(), hasher.finalize());
  }

  #[test]
  fn resume_from_partial_checksum() {
    let data = b"123456789";
    let first = Crc32Forward::checksum(&data[..4]);

    let mut resumed = Crc32Forward::with_initial(first);
    resumed.update(&data[4..]);
    assert_eq!(resumed.finalize(), Crc32Forward::checksum(data));
  }

  #[test]
  fn custom_polynomial_still_zeroes_entry_zero() {
    let engine = Crc32Forward::with_polynomial(0x1EDC_6F41);
    assert_eq!(engine.table()[0], 0);
    assert_eq!(engine.polynomial(), 0x1EDC_6F41);
  }

  #[test]
  fn first_table_entry_is_polynomial() {
    let engine = Crc32Forward::new();
    assert_eq!(engine.table()[1], CRC32_POLY);
  }
}
