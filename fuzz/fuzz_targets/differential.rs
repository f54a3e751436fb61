//! Differential fuzzing across the three engines.
//!
//! The forward and reflected engines must agree on every input; the
//! mismatched engine must stay self-consistent (streaming equals one-shot)
//! without being compared to the standard value.

#![no_main]

use checksum::{Checksum, Crc32Forward, Crc32Mulvey, Crc32Reflected};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
  let forward = Crc32Forward::checksum(data);
  let reflected = Crc32Reflected::checksum(data);

  assert_eq!(
    forward,
    reflected,
    "convention mismatch: forward={forward:#010x}, reflected={reflected:#010x}, len={}",
    data.len()
  );

  // Streaming must match one-shot for every engine, split anywhere.
  let split = data.len() / 2;
  let (a, b) = data.split_at(split);

  let mut hasher = Crc32Reflected::new();
  hasher.update(a);
  hasher.update(b);
  assert_eq!(hasher.finalize(), reflected, "reflected self-consistency mismatch");

  let mut hasher = Crc32Forward::new();
  hasher.update(a);
  hasher.update(b);
  assert_eq!(hasher.finalize(), forward, "forward self-consistency mismatch");

  let mulvey = Crc32Mulvey::checksum(data);
  let mut hasher = Crc32Mulvey::new();
  hasher.update(a);
  hasher.update(b);
  assert_eq!(hasher.finalize(), mulvey, "mulvey self-consistency mismatch");
});
