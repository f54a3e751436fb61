//! Fuzz the bit-reflection utility and the oracle equivalence.

#![no_main]

use checksum::reference::crc32_lsb_bitwise;
use checksum::reflect::reflect32;
use checksum::{Checksum, Crc32Reflected};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (u32, Vec<u8>)| {
  let (word, data) = input;

  // Involution over arbitrary words.
  assert_eq!(reflect32(reflect32(word)), word);

  // Table-driven fold tracks the bitwise definition for arbitrary polynomials.
  let mut engine = Crc32Reflected::with_polynomial(word);
  engine.update(&data);
  let oracle = crc32_lsb_bitwise(word, !0, &data) ^ !0;
  assert_eq!(engine.finalize(), oracle, "table/bitwise divergence for poly {word:#010x}");
});
