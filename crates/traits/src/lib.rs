//! Core hashing traits for rsblake2.
//!
//! This crate provides the foundational traits and error types the rsblake2
//! implementation crates conform to. It is `no_std` compatible and has zero
//! dependencies.
//!
//! # Contents
//!
//! - [`Digest`] - Streaming cryptographic hash functions with a fixed output
//!   size (e.g. BLAKE2b-512).
//! - [`ParameterError`] / [`StateError`] - Construction and misuse errors for
//!   runtime-parameterized hashers.
//! - [`VerificationError`] - Opaque error for MAC tag verification.
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to
//! ensure all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod digest;
pub mod error;
#[cfg(feature = "std")]
pub mod io;

pub use digest::Digest;
pub use error::{ParameterError, StateError, VerificationError};
