//! Cryptographic hash functions.

pub mod blake2b;
mod blake2b256;
mod blake2b512;

pub use blake2b::{Blake2b, Blake2bDigest};
pub use blake2b256::Blake2b256;
pub use blake2b512::Blake2b512;
