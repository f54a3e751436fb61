//! Core traits for the CRC-32 engines in this workspace.
//!
//! This crate provides the trait surface the `checksum` crate implements.
//! It is `no_std` compatible and has zero dependencies.
//!
//! | Item | Purpose |
//! |------|---------|
//! | [`Checksum`] | One-shot and incremental checksum computation |
//! | [`ChecksumMismatch`] | Error returned by [`Checksum::verify`] |
//! | [`ChecksumReader`] / [`ChecksumWriter`] | `std::io` adapters (behind the `std` feature) |
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod checksum;
pub mod error;
#[cfg(feature = "std")]
pub mod io;

pub use checksum::Checksum;
pub use error::ChecksumMismatch;
#[cfg(feature = "std")]
pub use io::{ChecksumReader, ChecksumWriter};
