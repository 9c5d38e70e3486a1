//! BLAKE2b-256: fixed 32-byte digest.
//!
//! This is BLAKE2b parameterized for 32 output bytes, not a truncation of
//! BLAKE2b-512: the output length is part of the parameter block, so the two
//! produce unrelated digests.

use traits::Digest;

use super::blake2b::Blake2bCore;

/// BLAKE2b with a fixed 256-bit digest, implementing [`Digest`].
#[derive(Clone)]
pub struct Blake2b256 {
  core: Blake2bCore,
}

impl Default for Blake2b256 {
  #[inline]
  fn default() -> Self {
    Self {
      core: Blake2bCore::new(32, &[]),
    }
  }
}

impl Digest for Blake2b256 {
  const OUTPUT_SIZE: usize = 32;
  type Output = [u8; 32];

  #[inline]
  fn new() -> Self {
    Self::default()
  }

  #[inline]
  fn update(&mut self, data: &[u8]) {
    self.core.update(data);
  }

  fn finalize(&self) -> Self::Output {
    let mut out = [0u8; 32];
    self.core.finalize_into(&mut out);
    out
  }

  #[inline]
  fn reset(&mut self) {
    *self = Self::default();
  }
}
