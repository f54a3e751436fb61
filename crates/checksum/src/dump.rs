//! Human-readable rendering of 256-entry lookup tables.
//!
//! The layout is the one CRC tables are conventionally published in: eight
//! uppercase-hex entries per row, each row tailed by a comment giving the
//! index of its first entry in decimal and hex. The output of the reflected
//! engine's table is line-for-line comparable with the zlib table listing.
//!
//! Formatting only; nothing here feeds back into the engines.

use core::fmt;

/// Number of entries per rendered row.
const ROW: usize = 8;

/// Renders a `[u32; 256]` lookup table via [`core::fmt::Display`].
///
/// # Example
///
/// ```rust
/// use checksum::{Checksum, Crc32Reflected, TableDump};
///
/// let engine = Crc32Reflected::new();
/// let listing = format!("{}", TableDump::new(engine.table()));
/// assert!(listing.starts_with("    00000000, 77073096,"));
/// ```
#[derive(Clone, Copy)]
pub struct TableDump<'a> {
  table: &'a [u32; 256],
}

impl<'a> TableDump<'a> {
  /// Wrap a table for display.
  #[inline]
  #[must_use]
  pub const fn new(table: &'a [u32; 256]) -> Self {
    Self { table }
  }
}

impl fmt::Display for TableDump<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (row, entries) in self.table.chunks_exact(ROW).enumerate() {
      f.write_str("    ")?;
      for entry in entries {
        write!(f, "{entry:08X}, ")?;
      }
      let start = row * ROW;
      writeln!(f, " // {start:3} [ 0x{start:02X} ]")?;
    }
    Ok(())
  }
}

/// Renders a `[u8; 256]` table (the per-byte input reflection) the same way.
///
/// # Example
///
/// ```rust
/// use checksum::{ByteTableDump, Crc32Forward};
///
/// let listing = format!("{}", ByteTableDump::new(Crc32Forward::input_reflection_table()));
/// assert!(listing.starts_with("    00, 80, 40, C0,"));
/// ```
#[derive(Clone, Copy)]
pub struct ByteTableDump<'a> {
  table: &'a [u8; 256],
}

impl<'a> ByteTableDump<'a> {
  /// Wrap a byte table for display.
  #[inline]
  #[must_use]
  pub const fn new(table: &'a [u8; 256]) -> Self {
    Self { table }
  }
}

impl fmt::Display for ByteTableDump<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (row, entries) in self.table.chunks_exact(ROW).enumerate() {
      f.write_str("    ")?;
      for entry in entries {
        write!(f, "{entry:02X}, ")?;
      }
      let start = row * ROW;
      writeln!(f, " // {start:3} [ 0x{start:02X} ]")?;
    }
    Ok(())
  }
}
