//! Capability traits for checksum algorithms.
//!
//! This crate holds the narrow interfaces that algorithm crates implement and
//! that streaming harnesses drive. It is `no_std` compatible and has zero
//! dependencies.
//!
//! | Trait | Purpose | Implementors |
//! |-------|---------|--------------|
//! | [`Checksum`] | reset / update / finalize lifecycle | `checksum::Crc<W>` |
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

pub use checksum::Checksum;
