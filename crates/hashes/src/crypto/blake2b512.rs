//! BLAKE2b-512: fixed 64-byte digest.

use traits::Digest;

use super::blake2b::Blake2bCore;

/// BLAKE2b with a fixed 512-bit digest, implementing [`Digest`].
///
/// Unlike the runtime-length [`Blake2b`](super::Blake2b) engine, this type is
/// infallible: the output length is fixed, there is no key, and `finalize`
/// runs the final compression on copies of the internal state, so the hasher
/// may keep absorbing afterwards.
#[derive(Clone)]
pub struct Blake2b512 {
  core: Blake2bCore,
}

impl Default for Blake2b512 {
  #[inline]
  fn default() -> Self {
    Self {
      core: Blake2bCore::new(64, &[]),
    }
  }
}

impl Digest for Blake2b512 {
  const OUTPUT_SIZE: usize = 64;
  type Output = [u8; 64];

  #[inline]
  fn new() -> Self {
    Self::default()
  }

  #[inline]
  fn update(&mut self, data: &[u8]) {
    self.core.update(data);
  }

  fn finalize(&self) -> Self::Output {
    let mut out = [0u8; 64];
    self.core.finalize_into(&mut out);
    out
  }

  #[inline]
  fn reset(&mut self) {
    *self = Self::default();
  }
}
