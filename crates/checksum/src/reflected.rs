//! Reflected-convention (LSB-first) CRC-32 engine.

use traits::Checksum;

use crate::tables::{CRC32_POLY_REFLECTED, generate_reflected_table};

/// CRC-32 computed in the reflected (LSB-first) bit order.
///
/// This is the zlib/Ethernet formulation: the table is built with the
/// reflected polynomial by shifting each byte out through bit 0, the fold
/// XORs the raw input byte into the bottom of the register, and finalization
/// is a plain complement. No reflection steps are needed at runtime because
/// the whole register already lives in reflected bit order.
///
/// # Properties
///
/// - **Polynomial**: `0xEDB88320` (reflected form, default)
/// - **Initial value**: `0xFFFFFFFF`
/// - **Per byte**: `state = table[(b ^ state) & 0xFF] ^ (state >> 8)`
/// - **Finalize**: `!state`
///
/// # Example
///
/// ```rust
/// use checksum::{Checksum, Crc32Reflected};
///
/// assert_eq!(Crc32Reflected::checksum(b"123456789"), 0xCBF4_3926);
/// ```
#[derive(Clone)]
pub struct Crc32Reflected {
  poly: u32,
  table: [u32; 256],
  state: u32,
}

impl Crc32Reflected {
  /// Create an engine for a custom reflected-form polynomial.
  ///
  /// The table is built once here and never mutated afterwards.
  #[must_use]
  pub const fn with_polynomial(poly: u32) -> Self {
    Self {
      poly,
      table: generate_reflected_table(poly),
      state: !0,
    }
  }

  /// The reflected-form polynomial this engine was built with.
  #[inline]
  #[must_use]
  pub const fn polynomial(&self) -> u32 {
    self.poly
  }

  /// The 256-entry LSB-first lookup table owned by this engine.
  #[inline]
  #[must_use]
  pub const fn table(&self) -> &[u32; 256] {
    &self.table
  }

  #[inline]
  #[allow(clippy::indexing_slicing)] // index is masked to 0..=255, table is [u32; 256]
  fn fold(&self, mut state: u32, data: &[u8]) -> u32 {
    for &b in data {
      let index = ((state ^ u32::from(b)) & 0xFF) as usize;
      state = self.table[index] ^ (state >> 8);
    }
    state
  }
}

impl Default for Crc32Reflected {
  #[inline]
  fn default() -> Self {
    Self::with_polynomial(CRC32_POLY_REFLECTED)
  }
}

impl Checksum for Crc32Reflected {
  const OUTPUT_SIZE: usize = 4;
  type Output = u32;

  #[inline]
  fn new() -> Self {
    Self::with_polynomial(CRC32_POLY_REFLECTED)
  }

  #[inline]
  fn with_initial(initial: u32) -> Self {
    Self {
      state: initial ^ !0,
      ..Self::new()
    }
  }

  #[inline]
  fn update(&mut self, data: &[u8]) {
    self.state = self.fold(self.state, data);
  }

  #[inline]
  fn finalize(&self) -> u32 {
    !self.state
  }

  #[inline]
  fn reset(&mut self) {
    self.state = !0;
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::reference::crc32_lsb_bitwise;

  #[test]
  fn check_value() {
    assert_eq!(Crc32Reflected::checksum(b"123456789"), 0xCBF4_3926);
  }

  #[test]
  fn empty_input() {
    assert_eq!(Crc32Reflected::checksum(&[]), 0);
  }

  #[test]
  fn matches_bitwise_oracle() {
    let data = b"The quick brown fox jumps over the lazy dog";
    let oracle = crc32_lsb_bitwise(CRC32_POLY_REFLECTED, !0, data) ^ !0;
    assert_eq!(Crc32Reflected::checksum(data), oracle);
    assert_eq!(oracle, 0x414F_A339);
  }

  #[test]
  fn streaming_matches_oneshot() {
    let data = b"123456789";
    let oneshot = Crc32Reflected::checksum(data);

    let mut hasher = Crc32Reflected::new();
    hasher.update(&data[..5]);
    hasher.update(&data[5..]);
    assert_eq!(hasher.finalize(), oneshot);
  }

  #[test]
  fn resume_from_partial_checksum() {
    let data = b"123456789";
    let first = Crc32Reflected::checksum(&data[..4]);

    let mut resumed = Crc32Reflected::with_initial(first);
    resumed.update(&data[4..]);
    assert_eq!(resumed.finalize(), Crc32Reflected::checksum(data));
  }

  #[test]
  fn castagnoli_polynomial_check_value() {
    // CRC-32C, reflected form 0x82F63B78, check value 0xE3069283.
    let mut engine = Crc32Reflected::with_polynomial(0x82F6_3B78);
    engine.update(b"123456789");
    assert_eq!(engine.finalize(), 0xE306_9283);
  }

  #[test]
  fn single_byte_vectors() {
    assert_eq!(Crc32Reflected::checksum(b"a"), 0xE8B7_BE43);
    assert_eq!(Crc32Reflected::checksum(&[0x00]), 0xD202_EF8D);
  }
}
