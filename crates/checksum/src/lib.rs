//! Table-driven CRC-32 in three bit-ordering conventions.
//!
//! CRC-32 can be implemented MSB-first ("forward") or LSB-first ("reflected");
//! done consistently, both produce the standard checksum. Mixing the two
//! halves produces something that *looks* like CRC-32 and is perfectly
//! deterministic, but is not CRC-32. That mistake has a long history of
//! being copied between codebases, so this crate implements all three
//! combinations and makes the difference testable.
//!
//! | Type | Table | Fold | `checksum(b"123456789")` |
//! |------|-------|------|--------------------------|
//! | [`Crc32Forward`] | MSB-first, poly `0x04C11DB7` | shift-left, reflected input | `0xCBF43926` |
//! | [`Crc32Reflected`] | LSB-first, poly `0xEDB88320` | shift-right | `0xCBF43926` |
//! | [`Crc32Mulvey`] | LSB-first, poly `0xEDB88320` | shift-left | `0xC40ED0B0` (not CRC-32) |
//!
//! [`Crc32Forward`] and [`Crc32Reflected`] agree on every input; they are the
//! same polynomial division expressed in opposite bit orders. [`Crc32Mulvey`]
//! reproduces Bret Mulvey's widely-circulated C# implementation, which builds
//! an LSB-first table but folds it MSB-first. It is kept byte-exact as a
//! negative control; do not "fix" it.
//!
//! # Example
//!
//! ```rust
//! use checksum::{Checksum, Crc32Forward, Crc32Mulvey, Crc32Reflected};
//!
//! let data = b"123456789";
//! assert_eq!(Crc32Reflected::checksum(data), 0xCBF4_3926);
//! assert_eq!(Crc32Forward::checksum(data), 0xCBF4_3926);
//! assert_ne!(Crc32Mulvey::checksum(data), 0xCBF4_3926);
//! ```
//!
//! # Inspecting tables
//!
//! Each engine exposes its 256-entry lookup table; [`TableDump`] renders one
//! in the conventional 8-per-row hex layout:
//!
//! ```rust
//! use checksum::{Checksum, Crc32Reflected, TableDump};
//!
//! let engine = Crc32Reflected::new();
//! println!("{}", TableDump::new(engine.table()));
//! ```
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Disable the `std` feature to drop the
//! `std::io` adapters:
//!
//! ```toml
//! [dependencies]
//! checksum = { version = "0.1", default-features = false }
//! ```
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod dump;
mod forward;
mod mulvey;
pub mod reference;
pub mod reflect;
mod reflected;
pub mod tables;

pub use dump::{ByteTableDump, TableDump};
pub use forward::Crc32Forward;
pub use mulvey::Crc32Mulvey;
pub use reflected::Crc32Reflected;
// Re-export traits for convenience
pub use traits::{Checksum, ChecksumMismatch};
