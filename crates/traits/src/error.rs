//! Error types for checksum verification.
//!
//! The checksum algorithms themselves have no failure modes: they are total
//! functions over byte slices. The only recoverable condition in this
//! workspace is a verification mismatch.

use core::fmt;

/// Computed checksum did not match the expected value.
///
/// Returned by [`Checksum::verify`](crate::Checksum::verify). Carries no
/// payload: the caller already holds both the data and the expected value,
/// so the computed checksum can be recovered with a plain
/// [`checksum`](crate::Checksum::checksum) call when diagnostics are needed.
///
/// # Examples
///
/// ```
/// use traits::ChecksumMismatch;
///
/// fn check(computed: u32, expected: u32) -> Result<(), ChecksumMismatch> {
///   if computed == expected {
///     Ok(())
///   } else {
///     Err(ChecksumMismatch::new())
///   }
/// }
///
/// assert!(check(0xCBF4_3926, 0xCBF4_3926).is_ok());
/// assert!(check(0xCBF4_3926, 0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct ChecksumMismatch;

impl ChecksumMismatch {
  /// Create a new mismatch error.
  ///
  /// This is the only way to construct this error from outside the crate,
  /// ensuring forward compatibility if fields are added in the future.
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self
  }
}

impl Default for ChecksumMismatch {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl fmt::Display for ChecksumMismatch {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("checksum mismatch")
  }
}

impl core::error::Error for ChecksumMismatch {}

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::{format, string::ToString};

  use super::*;

  #[test]
  fn display_message() {
    assert_eq!(ChecksumMismatch::new().to_string(), "checksum mismatch");
  }

  #[test]
  fn debug_impl() {
    assert_eq!(format!("{:?}", ChecksumMismatch::new()), "ChecksumMismatch");
  }

  #[test]
  fn is_copy_and_eq() {
    let e = ChecksumMismatch::new();
    let e2 = e;
    let e3 = e;
    assert_eq!(e2, e3);
  }

  #[test]
  fn error_trait_impl() {
    use core::error::Error;

    let err = ChecksumMismatch::new();
    assert!(err.source().is_none());
  }

  #[test]
  fn trait_bounds() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}

    assert_send::<ChecksumMismatch>();
    assert_sync::<ChecksumMismatch>();
  }

  #[test]
  fn size_is_zero() {
    assert_eq!(core::mem::size_of::<ChecksumMismatch>(), 0);
  }
}
