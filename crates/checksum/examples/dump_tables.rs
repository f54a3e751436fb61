//! Print the lookup tables of all three engines.
//!
//! Run with: `cargo run --example dump_tables -p checksum`
//!
//! The reflected listing can be diffed directly against the table in zlib's
//! crc32.c; the forward listing is the non-reflected table some hardware
//! documentation publishes instead.

use checksum::{ByteTableDump, Checksum, Crc32Forward, Crc32Reflected, TableDump};

fn main() {
  let forward = Crc32Forward::new();
  let reflected = Crc32Reflected::new();

  println!("// forward (MSB-first) table, polynomial {:#010X}", forward.polynomial());
  println!("{}", TableDump::new(forward.table()));

  println!("// reflected (LSB-first) table, polynomial {:#010X}", reflected.polynomial());
  println!("{}", TableDump::new(reflected.table()));

  println!("// per-byte input reflection used by the forward fold");
  println!("{}", ByteTableDump::new(Crc32Forward::input_reflection_table()));
}
