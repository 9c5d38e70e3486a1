//! Pure Rust BLAKE2b (RFC 7693).
//!
//! `rsblake2` provides the BLAKE2b cryptographic hash and MAC with a
//! streaming API, runtime-selectable digest lengths from 1 to 64 bytes, and
//! keyed (MAC/PRF) operation. Zero dependencies, `no_std` compatible.
//!
//! # Quick Start
//!
//! ```
//! use rsblake2::{Blake2b512, Digest};
//!
//! // One-shot, fixed 512-bit digest.
//! let digest = Blake2b512::digest(b"hello world");
//! assert_eq!(digest.len(), 64);
//!
//! // Streaming computation.
//! let mut hasher = Blake2b512::new();
//! hasher.update(b"hello ");
//! hasher.update(b"world");
//! assert_eq!(hasher.finalize(), digest);
//! ```
//!
//! # Runtime lengths and MACs
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use rsblake2::blake2b;
//!
//! let digest = blake2b::hash(b"data", 20)?;
//! assert_eq!(digest.len(), 20);
//!
//! let tag = blake2b::mac(b"message", b"secret key", 32)?;
//! blake2b::verify(b"message", b"secret key", tag.as_bytes())?;
//! # Ok(())
//! # }
//! ```
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std` | Yes | Enables the [`DigestReader`] / [`DigestWriter`] I/O adapters |
//!
//! ## `no_std` Usage
//!
//! ```toml
//! [dependencies]
//! rsblake2 = { version = "0.1", default-features = false }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

pub use hashes::crypto::{Blake2b, Blake2b256, Blake2b512, Blake2bDigest, blake2b};
#[cfg(feature = "std")]
pub use traits::io::{DigestReader, DigestWriter};
pub use traits::{Digest, ParameterError, StateError, VerificationError};
