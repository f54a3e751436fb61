//! `std::io` adapters that checksum bytes as they flow through.
//!
//! Both adapters update the checksum with the bytes *actually* transferred,
//! so short reads and short writes never desynchronize the register from the
//! stream. I/O errors from the inner type propagate unchanged.
//!
//! # Example
//!
//! ```rust
//! # use traits::Checksum;
//! # #[derive(Clone, Default)]
//! # struct Sum(u32);
//! # impl Checksum for Sum {
//! #   const OUTPUT_SIZE: usize = 4;
//! #   type Output = u32;
//! #   fn new() -> Self { Self(0) }
//! #   fn with_initial(initial: Self::Output) -> Self { Self(initial) }
//! #   fn update(&mut self, data: &[u8]) {
//! #     self.0 = data.iter().fold(self.0, |acc, &b| acc.wrapping_add(u32::from(b)));
//! #   }
//! #   fn finalize(&self) -> Self::Output { self.0 }
//! #   fn reset(&mut self) { self.0 = 0; }
//! # }
//! # use std::io::Cursor;
//! let mut reader = Sum::reader(Cursor::new(b"abc".to_vec()));
//! std::io::copy(&mut reader, &mut std::io::sink())?;
//! assert_eq!(reader.crc(), u32::from(b'a') + u32::from(b'b') + u32::from(b'c'));
//! # Ok::<(), std::io::Error>(())
//! ```

use crate::Checksum;

/// Wraps a [`Read`](std::io::Read) and computes a checksum transparently.
///
/// All reads pass through to the inner reader while updating the checksum
/// with the bytes read.
#[derive(Clone)]
pub struct ChecksumReader<R, C: Checksum> {
  inner: R,
  hasher: C,
}

impl<R, C: Checksum> ChecksumReader<R, C> {
  /// Create a new reader wrapper with the default initial state.
  #[inline]
  #[must_use]
  pub fn new(inner: R) -> Self {
    Self { inner, hasher: C::new() }
  }

  /// Create a new reader wrapper resuming from a previous checksum.
  #[inline]
  #[must_use]
  pub fn with_initial(inner: R, initial: C::Output) -> Self {
    Self {
      inner,
      hasher: C::with_initial(initial),
    }
  }

  /// Get the current checksum value.
  ///
  /// This does not consume the reader; further reads keep updating the
  /// checksum.
  #[inline]
  #[must_use]
  pub fn crc(&self) -> C::Output {
    self.hasher.finalize()
  }

  /// Unwrap, returning the inner reader and the final checksum.
  #[inline]
  pub fn into_parts(self) -> (R, C::Output) {
    let crc = self.hasher.finalize();
    (self.inner, crc)
  }

  /// Get a reference to the inner reader.
  #[inline]
  pub fn inner(&self) -> &R {
    &self.inner
  }
}

impl<R: std::io::Read, C: Checksum> std::io::Read for ChecksumReader<R, C> {
  #[inline]
  fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
    let n = self.inner.read(buf)?;
    if let Some(data) = buf.get(..n) {
      self.hasher.update(data);
    }
    Ok(n)
  }
}

/// Wraps a [`Write`](std::io::Write) and computes a checksum transparently.
///
/// The checksum is updated **before** writing to the inner writer, so on a
/// failed write the caller knows exactly what was hashed versus what was
/// durably written.
#[derive(Clone)]
pub struct ChecksumWriter<W, C: Checksum> {
  inner: W,
  hasher: C,
}

impl<W, C: Checksum> ChecksumWriter<W, C> {
  /// Create a new writer wrapper with the default initial state.
  #[inline]
  #[must_use]
  pub fn new(inner: W) -> Self {
    Self { inner, hasher: C::new() }
  }

  /// Create a new writer wrapper resuming from a previous checksum.
  #[inline]
  #[must_use]
  pub fn with_initial(inner: W, initial: C::Output) -> Self {
    Self {
      inner,
      hasher: C::with_initial(initial),
    }
  }

  /// Get the current checksum value.
  #[inline]
  #[must_use]
  pub fn crc(&self) -> C::Output {
    self.hasher.finalize()
  }

  /// Unwrap, returning the inner writer and the final checksum.
  #[inline]
  pub fn into_parts(self) -> (W, C::Output) {
    let crc = self.hasher.finalize();
    (self.inner, crc)
  }

  /// Get a reference to the inner writer.
  #[inline]
  pub fn inner(&self) -> &W {
    &self.inner
  }
}

impl<W: std::io::Write, C: Checksum> std::io::Write for ChecksumWriter<W, C> {
  #[inline]
  fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
    self.hasher.update(buf);
    self.inner.write(buf)
  }

  #[inline]
  fn flush(&mut self) -> std::io::Result<()> {
    self.inner.flush()
  }
}

#[cfg(test)]
mod tests {
  use std::io::{Cursor, Read, Write};
  use std::vec::Vec;

  use super::*;

  #[derive(Clone, Default)]
  struct Xor(u32);

  impl Checksum for Xor {
    const OUTPUT_SIZE: usize = 4;
    type Output = u32;

    fn new() -> Self {
      Self(0)
    }
    fn with_initial(initial: u32) -> Self {
      Self(initial)
    }
    fn update(&mut self, data: &[u8]) {
      self.0 = data.iter().fold(self.0, |acc, &b| acc ^ u32::from(b));
    }
    fn finalize(&self) -> u32 {
      self.0
    }
    fn reset(&mut self) {
      self.0 = 0;
    }
  }

  #[test]
  fn reader_hashes_bytes_read() {
    let mut reader: ChecksumReader<_, Xor> = ChecksumReader::new(Cursor::new(b"abc".to_vec()));
    let mut out = Vec::new();
    reader.read_to_end(&mut out).unwrap();
    assert_eq!(out, b"abc");
    assert_eq!(reader.crc(), Xor::checksum(b"abc"));
  }

  #[test]
  fn writer_hashes_bytes_written() {
    let mut writer: ChecksumWriter<_, Xor> = ChecksumWriter::new(Vec::new());
    writer.write_all(b"hello world").unwrap();
    let (out, crc) = writer.into_parts();
    assert_eq!(out, b"hello world");
    assert_eq!(crc, Xor::checksum(b"hello world"));
  }

  #[test]
  fn reader_resumes_from_initial() {
    let first = Xor::checksum(b"hel");
    let mut reader: ChecksumReader<_, Xor> = ChecksumReader::with_initial(Cursor::new(b"lo".to_vec()), first);
    let mut out = Vec::new();
    reader.read_to_end(&mut out).unwrap();
    assert_eq!(reader.crc(), Xor::checksum(b"hello"));
  }
}
