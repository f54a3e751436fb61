//! Bitwise reference implementations, the test oracle for the table engines.
//!
//! These process one bit at a time with no lookup tables, directly mirroring
//! the polynomial-division definition in each bit order. They are
//! intentionally slow; their job is to be obviously correct so the
//! table-driven engines can be verified against them, including at compile
//! time.

/// Bitwise CRC-32, reflected (LSB-first) convention.
///
/// # Arguments
///
/// * `poly` - Reflected polynomial (e.g. `0xEDB88320` for CRC-32/IEEE)
/// * `init` - Initial register value (typically `0xFFFFFFFF`)
/// * `data` - Input bytes
///
/// # Returns
///
/// The raw register state (caller applies the final XOR).
#[must_use]
#[allow(clippy::indexing_slicing)] // loop index is bounded by data.len()
pub const fn crc32_lsb_bitwise(poly: u32, init: u32, data: &[u8]) -> u32 {
  let mut crc = init;
  let mut i = 0;
  while i < data.len() {
    crc ^= data[i] as u32;
    let mut bit = 0;
    while bit < 8 {
      crc = if crc & 1 != 0 { (crc >> 1) ^ poly } else { crc >> 1 };
      bit += 1;
    }
    i += 1;
  }
  crc
}

/// Bitwise CRC-32, forward (MSB-first) convention.
///
/// The input byte enters the top of the register and bits shift out through
/// bit 31. Note that feeding raw bytes through this register computes the
/// *non-reflected* CRC-32 variant (CRC-32/BZIP2); the standard checksum
/// additionally reflects each input byte and the final register.
///
/// # Arguments
///
/// * `poly` - Forward polynomial (e.g. `0x04C11DB7` for CRC-32/IEEE)
/// * `init` - Initial register value (typically `0xFFFFFFFF`)
/// * `data` - Input bytes
///
/// # Returns
///
/// The raw register state (caller applies output reflection and final XOR).
#[must_use]
#[allow(clippy::indexing_slicing)] // loop index is bounded by data.len()
pub const fn crc32_msb_bitwise(poly: u32, init: u32, data: &[u8]) -> u32 {
  let mut crc = init;
  let mut i = 0;
  while i < data.len() {
    crc ^= (data[i] as u32) << 24;
    let mut bit = 0;
    while bit < 8 {
      crc = if crc & 0x8000_0000 != 0 { (crc << 1) ^ poly } else { crc << 1 };
      bit += 1;
    }
    i += 1;
  }
  crc
}

// ─────────────────────────────────────────────────────────────────────────────
// Compile-Time Verification
// ─────────────────────────────────────────────────────────────────────────────

/// Standard test input for CRC check values.
const CHECK_INPUT: &[u8] = b"123456789";

// CRC-32/IEEE: init=0xFFFFFFFF, xorout=0xFFFFFFFF, check value 0xCBF43926.
const _: () = {
  let raw = crc32_lsb_bitwise(crate::tables::CRC32_POLY_REFLECTED, !0u32, CHECK_INPUT);
  assert!(raw ^ !0u32 == 0xCBF4_3926);
};

// The table builders are single-byte specializations of the bitwise forms:
// seeding the register with the byte (init=0 so nothing else contributes)
// must reproduce every table entry.
const _: () = {
  let mut i = 0;
  while i < 256 {
    let b = [i as u8];
    assert!(crate::tables::reflected_table_entry(crate::tables::CRC32_POLY_REFLECTED, i as u8)
      == crc32_lsb_bitwise(crate::tables::CRC32_POLY_REFLECTED, 0, &b));
    assert!(
      crate::tables::forward_table_entry(crate::tables::CRC32_POLY, i as u8)
        == crc32_msb_bitwise(crate::tables::CRC32_POLY, 0, &b)
    );
    i += 1;
  }
};
