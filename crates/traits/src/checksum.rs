//! Non-cryptographic checksum trait.
//!
//! The trait covers both one-shot hashing of a complete buffer and
//! incremental updates over a stream of chunks. The two are equivalent:
//! splitting the input at any point and feeding the pieces in order must
//! produce the same checksum as a single call.

use core::fmt::Debug;

use crate::error::ChecksumMismatch;

/// Non-cryptographic checksum algorithm.
///
/// # Usage
///
/// ```rust
/// # use traits::Checksum;
/// # #[derive(Clone, Default)]
/// # struct Sum(u32);
/// # impl Checksum for Sum {
/// #   const OUTPUT_SIZE: usize = 4;
/// #   type Output = u32;
/// #   fn new() -> Self { Self(0) }
/// #   fn with_initial(initial: Self::Output) -> Self { Self(initial) }
/// #   fn update(&mut self, data: &[u8]) {
/// #     self.0 = data.iter().fold(self.0, |acc, &b| acc.wrapping_add(u32::from(b)));
/// #   }
/// #   fn finalize(&self) -> Self::Output { self.0 }
/// #   fn reset(&mut self) { self.0 = 0; }
/// # }
/// // One-shot (fastest for data already in memory)
/// let crc = Sum::checksum(b"123456789");
///
/// // Incremental (for data arriving in chunks)
/// let mut hasher = Sum::new();
/// hasher.update(b"1234");
/// hasher.update(b"56789");
/// assert_eq!(hasher.finalize(), crc);
/// ```
///
/// # Implementor Requirements
///
/// - `new()` must return the same state as `Default::default()`
/// - `finalize()` must be idempotent (calling multiple times returns same value)
/// - `reset()` must restore the hasher to its initial state
/// - `checksum(d)` must be deterministic: equal inputs give equal outputs
pub trait Checksum: Clone + Default {
  /// Output size in bytes (4 for CRC-32).
  const OUTPUT_SIZE: usize;

  /// The checksum output type (`u32` for CRC-32).
  type Output: Copy + Eq + Debug + Default;

  /// Create a new hasher with the default initial value.
  #[must_use]
  fn new() -> Self;

  /// Create a new hasher that resumes from a previously finalized checksum.
  ///
  /// Feeding the rest of the data and finalizing yields the checksum of the
  /// whole input.
  #[must_use]
  fn with_initial(initial: Self::Output) -> Self;

  /// Update the hasher with additional data.
  ///
  /// This method can be called multiple times to process data incrementally.
  fn update(&mut self, data: &[u8]);

  /// Update the hasher with multiple non-contiguous buffers.
  ///
  /// Semantics are identical to calling [`update`](Self::update) on each buffer
  /// in order.
  #[inline]
  fn update_vectored(&mut self, bufs: &[&[u8]]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Finalize and return the checksum.
  ///
  /// This method does not consume the hasher, allowing further updates
  /// if needed (though the result would include all data processed so far).
  #[must_use]
  fn finalize(&self) -> Self::Output;

  /// Reset the hasher to its initial state.
  fn reset(&mut self);

  /// Compute the checksum of data in one shot.
  ///
  /// A zero-length slice is valid input; the result is the finalize-only
  /// transform of the initial register.
  #[inline]
  #[must_use]
  fn checksum(data: &[u8]) -> Self::Output {
    let mut h = Self::new();
    h.update(data);
    h.finalize()
  }

  /// Compute the checksum of multiple buffers in one shot.
  #[inline]
  #[must_use]
  fn checksum_vectored(bufs: &[&[u8]]) -> Self::Output {
    let mut h = Self::new();
    h.update_vectored(bufs);
    h.finalize()
  }

  /// Check `data` against an expected checksum.
  ///
  /// # Errors
  ///
  /// Returns [`ChecksumMismatch`] when the computed checksum differs from
  /// `expected`.
  #[inline]
  fn verify(data: &[u8], expected: Self::Output) -> Result<(), ChecksumMismatch> {
    if Self::checksum(data) == expected {
      Ok(())
    } else {
      Err(ChecksumMismatch::new())
    }
  }

  /// Wrap a reader to compute the checksum transparently during I/O.
  #[cfg(feature = "std")]
  #[inline]
  #[must_use]
  fn reader<R>(inner: R) -> crate::io::ChecksumReader<R, Self>
  where
    Self: Sized,
  {
    crate::io::ChecksumReader::new(inner)
  }

  /// Wrap a writer to compute the checksum transparently during I/O.
  #[cfg(feature = "std")]
  #[inline]
  #[must_use]
  fn writer<W>(inner: W) -> crate::io::ChecksumWriter<W, Self>
  where
    Self: Sized,
  {
    crate::io::ChecksumWriter::new(inner)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  /// Additive toy checksum used to exercise the provided methods.
  #[derive(Clone, Default)]
  struct Sum(u32);

  impl Checksum for Sum {
    const OUTPUT_SIZE: usize = 4;
    type Output = u32;

    fn new() -> Self {
      Self(0)
    }
    fn with_initial(initial: u32) -> Self {
      Self(initial)
    }
    fn update(&mut self, data: &[u8]) {
      self.0 = data.iter().fold(self.0, |acc, &b| acc.wrapping_add(u32::from(b)));
    }
    fn finalize(&self) -> u32 {
      self.0
    }
    fn reset(&mut self) {
      self.0 = 0;
    }
  }

  #[test]
  fn oneshot_equals_incremental() {
    let oneshot = Sum::checksum(b"hello world");
    let mut h = Sum::new();
    h.update(b"hello ");
    h.update(b"world");
    assert_eq!(h.finalize(), oneshot);
  }

  #[test]
  fn vectored_equals_contiguous() {
    let bufs: &[&[u8]] = &[b"ab", b"", b"c"];
    assert_eq!(Sum::checksum_vectored(bufs), Sum::checksum(b"abc"));
  }

  #[test]
  fn verify_accepts_and_rejects() {
    let crc = Sum::checksum(b"abc");
    assert!(Sum::verify(b"abc", crc).is_ok());
    assert_eq!(Sum::verify(b"abd", crc), Err(ChecksumMismatch::new()));
  }

  #[test]
  fn empty_input_is_valid() {
    assert_eq!(Sum::checksum(&[]), 0);
  }

  #[test]
  fn reset_restores_initial_state() {
    let mut h = Sum::new();
    h.update(b"garbage");
    h.reset();
    h.update(b"abc");
    assert_eq!(h.finalize(), Sum::checksum(b"abc"));
  }
}
