//! The mismatched table/fold combination, preserved as a negative control.

use traits::Checksum;

use crate::tables::{CRC32_POLY_REFLECTED, generate_reflected_table};

/// Bret Mulvey's mismatched CRC-32: reflected table, forward fold.
///
/// The table is built by the reflected (LSB-first) convention, exactly as in
/// [`Crc32Reflected`](crate::Crc32Reflected), but the per-byte fold is the
/// MSB-first rule, shifting the register *left* and taking the index from its
/// top byte. The two halves disagree about which end of the register carries
/// the oldest bits, so the result is not CRC-32 for any polynomial, even
/// though each half looks correct in isolation.
///
/// The combination is still a well-defined function: deterministic,
/// reproducible, and consistent with itself across incremental updates. It
/// is kept byte-exact here so the defect stays observable; "fixing" either
/// half would turn it into one of the working engines and erase the point of
/// having it.
///
/// # Properties
///
/// - **Table**: reflected convention, polynomial `0xEDB88320` (default)
/// - **Initial value**: `0xFFFFFFFF`
/// - **Per byte**: `state = table[(b ^ (state >> 24)) & 0xFF] ^ (state << 8)`
/// - **Finalize**: `!state` (no output reflection)
///
/// # Example
///
/// ```rust
/// use checksum::{Checksum, Crc32Mulvey};
///
/// // Stable, but NOT the standard CRC-32 check value 0xCBF43926.
/// assert_eq!(Crc32Mulvey::checksum(b"123456789"), 0xC40E_D0B0);
/// ```
#[derive(Clone)]
pub struct Crc32Mulvey {
  poly: u32,
  table: [u32; 256],
  state: u32,
}

impl Crc32Mulvey {
  /// Create an engine for a custom reflected-form polynomial.
  ///
  /// The table half of the mismatch follows the polynomial; the fold half is
  /// always the MSB-first rule.
  #[must_use]
  pub const fn with_polynomial(poly: u32) -> Self {
    Self {
      poly,
      table: generate_reflected_table(poly),
      state: !0,
    }
  }

  /// The reflected-form polynomial the table half was built with.
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
      // Forward-style indexing and shift against an LSB-first table.
      let index = ((u32::from(b) ^ (state >> 24)) & 0xFF) as usize;
      state = self.table[index] ^ (state << 8);
    }
    state
  }
}

impl Default for Crc32Mulvey {
  #[inline]
  fn default() -> Self {
    Self::with_polynomial(CRC32_POLY_REFLECTED)
  }
}

impl Checksum for Crc32Mulvey {
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
