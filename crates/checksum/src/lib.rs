//! Table-driven CRCs from declarative definitions.
//!
//! One generic engine, [`Crc<W>`](Crc), computes every CRC variant described
//! by a [`CrcParams`]: polynomial, initial value, final XOR, and the two
//! independent reflection flags. No variant has code of its own.
//!
//! # Supported Widths
//!
//! | Register | Output | Example presets |
//! |----------|--------|-----------------|
//! | `u8` | `u8` | CRC-8/SMBUS, CRC-8/MAXIM-DOW |
//! | `u16` | `u16` | CRC-16/ARC, KERMIT (CCITT), XMODEM, X.25, MODBUS, USB |
//! | `u32` | `u32` | CRC-32/ISO-HDLC (IEEE), BZIP2, ISCSI (Castagnoli), MPEG-2, CKSUM (POSIX), AIXM, XFER |
//! | `u64` | `u64` | CRC-64/XZ, ECMA-182, GO-ISO |
//!
//! # Components
//!
//! - [`reflect`]: width-scoped bit reversal
//! - [`table::generate`]: 256-entry lookup table for a definition
//! - [`TableCache`]: thread-safe memoization of tables per `(reflect_in, polynomial)` (`std`)
//! - [`Crc`]: the incremental engine
//! - [`Preset`]: the catalogue of named definitions
//!
//! # Example
//!
//! ```rust
//! use checksum::{Crc, CrcParams};
//!
//! // One-shot computation
//! let crc = Crc::checksum(CrcParams::<u32>::CRC32_IEEE, b"123456789");
//! assert_eq!(crc, 0xCBF4_3926);
//!
//! // Streaming computation
//! let mut hasher = Crc::new(CrcParams::<u32>::CRC32_IEEE);
//! hasher.update(b"1234");
//! hasher.update(b"56789");
//! assert_eq!(hasher.result(), crc);
//! assert_eq!(hasher.finalize_bytes(), [0x26, 0x39, 0xF4, 0xCB]);
//!
//! // Custom definition: CRC-16/XMODEM spelled out
//! let xmodem = CrcParams::new(0x1021u16, 0x0000, 0x0000, false, false);
//! assert_eq!(Crc::checksum(xmodem, b"123456789"), 0x31C3);
//! ```
//!
//! # no_std Support
//!
//! The engine and table generator only need `alloc`. Disable the `std`
//! feature for embedded use; engines are then built with
//! [`Crc::with_table`] or [`Crc::from_table_slice`]:
//!
//! ```toml
//! [dependencies]
//! checksum = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

// Internal macros must be declared before modules that use them.
#[macro_use]
mod macros;

#[cfg(feature = "std")]
mod cache;
mod crc;
mod error;
mod params;
mod preset;
pub mod reflect;
pub mod table;
mod width;

#[cfg(feature = "std")]
pub use cache::TableCache;
pub use crc::Crc;
pub use error::CrcError;
pub use params::{CHECK_INPUT, CrcParams};
pub use preset::{AnyParams, Preset};
pub use table::CrcTable;
// Re-export the capability trait for convenience
pub use traits::Checksum;
pub use width::Width;
