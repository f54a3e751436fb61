//! Run all three engines over the same inputs and show where they diverge.
//!
//! Run with: `cargo run --example compare -p checksum`

use checksum::{Checksum, Crc32Forward, Crc32Mulvey, Crc32Reflected};

const INPUTS: &[&[u8]] = &[
  b"",
  b"a",
  b"123456789",
  b"hello world",
  b"The quick brown fox jumps over the lazy dog",
];

fn main() {
  println!("{:<46} {:>8}   {:>8}   {:>8}", "input", "forward", "reflected", "mulvey");

  for &input in INPUTS {
    let forward = Crc32Forward::checksum(input);
    let reflected = Crc32Reflected::checksum(input);
    let mulvey = Crc32Mulvey::checksum(input);

    let text = String::from_utf8_lossy(input);
    let marker = if mulvey == reflected { "" } else { "  <- fold mismatch" };
    println!("{text:<46} {forward:08X}   {reflected:08X}   {mulvey:08X}{marker}");

    // The two working engines implement the same standard.
    assert_eq!(forward, reflected);
  }

  println!();
  println!("check value 0xCBF43926: forward/reflected reproduce it, mulvey does not.");
}
