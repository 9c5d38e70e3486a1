//! Pure Rust BLAKE2b (RFC 7693).
//!
//! This crate is `no_std` compatible and has zero library dependencies
//! outside the rsblake2 workspace. Dev-only dependencies are used for oracle
//! testing and benchmarking.
//!
//! # Modules
//!
//! - [`crypto`] - The BLAKE2b hash and MAC implementations.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod crypto;

mod util;

pub use traits::Digest;
