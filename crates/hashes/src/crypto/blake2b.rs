//! BLAKE2b (RFC 7693).
//!
//! Portable, `no_std`, pure Rust implementation with a runtime-selected
//! digest length of 1 to 64 bytes and optional keying (MAC mode).
//!
//! [`Blake2b`] is the streaming engine; [`hash`], [`mac`] and [`verify`] are
//! the one-shot entry points. The fixed-size [`Blake2b512`] and
//! [`Blake2b256`] types in the sibling modules implement
//! [`traits::Digest`] on top of the same core.
//!
//! [`Blake2b512`]: super::Blake2b512
//! [`Blake2b256`]: super::Blake2b256

#![allow(clippy::indexing_slicing)] // Compression schedule uses fixed indices

use core::fmt;

use traits::{ParameterError, StateError, VerificationError};

use crate::util::rotr64;

/// Input block size in bytes.
pub const BLOCK_LEN: usize = 128;

/// Maximum digest length in bytes.
pub const MAX_OUT_LEN: usize = 64;

/// Maximum key length in bytes.
pub const MAX_KEY_LEN: usize = 64;

const IV: [u64; 8] = [
  0x6a09_e667_f3bc_c908,
  0xbb67_ae85_84ca_a73b,
  0x3c6e_f372_fe94_f82b,
  0xa54f_f53a_5f1d_36f1,
  0x510e_527f_ade6_82d1,
  0x9b05_688c_2b3e_6c1f,
  0x1f83_d9ab_fb41_bd6b,
  0x5be0_cd19_137e_2179,
];

// Rows 10 and 11 repeat rows 0 and 1 (sigma[round mod 10]).
const SIGMA: [[usize; 16]; 12] = [
  [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
  [14, 10, 4, 8, 9, 15, 13, 6, 1, 12, 0, 2, 11, 7, 5, 3],
  [11, 8, 12, 0, 5, 2, 15, 13, 10, 14, 3, 6, 7, 1, 9, 4],
  [7, 9, 3, 1, 13, 12, 11, 14, 2, 6, 5, 10, 4, 0, 15, 8],
  [9, 0, 5, 7, 2, 4, 10, 15, 14, 1, 11, 12, 6, 8, 3, 13],
  [2, 12, 6, 10, 0, 11, 8, 3, 4, 13, 7, 5, 15, 14, 1, 9],
  [12, 5, 1, 15, 14, 13, 4, 10, 0, 7, 6, 3, 9, 2, 8, 11],
  [13, 11, 7, 14, 12, 1, 3, 9, 5, 0, 15, 4, 8, 6, 2, 10],
  [6, 15, 14, 9, 11, 3, 0, 8, 12, 2, 13, 7, 1, 4, 10, 5],
  [10, 2, 8, 4, 7, 6, 1, 5, 15, 11, 9, 14, 3, 12, 13, 0],
  [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
  [14, 10, 4, 8, 9, 15, 13, 6, 1, 12, 0, 2, 11, 7, 5, 3],
];

#[inline(always)]
fn g(v: &mut [u64; 16], a: usize, b: usize, c: usize, d: usize, x: u64, y: u64) {
  v[a] = v[a].wrapping_add(v[b]).wrapping_add(x);
  v[d] = rotr64(v[d] ^ v[a], 32);
  v[c] = v[c].wrapping_add(v[d]);
  v[b] = rotr64(v[b] ^ v[c], 24);
  v[a] = v[a].wrapping_add(v[b]).wrapping_add(y);
  v[d] = rotr64(v[d] ^ v[a], 16);
  v[c] = v[c].wrapping_add(v[d]);
  v[b] = rotr64(v[b] ^ v[c], 63);
}

/// One application of the BLAKE2b compression function.
///
/// `t` is the total number of input bytes absorbed including this block.
fn compress(h: &mut [u64; 8], block: &[u8; BLOCK_LEN], t: u128, is_last: bool) {
  let (words, _) = block.as_chunks::<8>();
  let mut m = [0u64; 16];
  for (i, w) in words.iter().enumerate() {
    m[i] = u64::from_le_bytes(*w);
  }

  let mut v = [0u64; 16];
  v[..8].copy_from_slice(h);
  v[8..].copy_from_slice(&IV);
  v[12] ^= t as u64;
  v[13] ^= (t >> 64) as u64;
  if is_last {
    v[14] ^= u64::MAX;
  }

  for s in &SIGMA {
    g(&mut v, 0, 4, 8, 12, m[s[0]], m[s[1]]);
    g(&mut v, 1, 5, 9, 13, m[s[2]], m[s[3]]);
    g(&mut v, 2, 6, 10, 14, m[s[4]], m[s[5]]);
    g(&mut v, 3, 7, 11, 15, m[s[6]], m[s[7]]);

    g(&mut v, 0, 5, 10, 15, m[s[8]], m[s[9]]);
    g(&mut v, 1, 6, 11, 12, m[s[10]], m[s[11]]);
    g(&mut v, 2, 7, 8, 13, m[s[12]], m[s[13]]);
    g(&mut v, 3, 4, 9, 14, m[s[14]], m[s[15]]);
  }

  for i in 0..8 {
    h[i] ^= v[i] ^ v[i + 8];
  }
}

/// Unguarded chaining state, byte counter and block buffer.
///
/// Callers are responsible for validating lengths and for the
/// one-finalize-per-instance contract; [`Blake2b`] layers both on top.
#[derive(Clone)]
pub(crate) struct Blake2bCore {
  h: [u64; 8],
  buf: [u8; BLOCK_LEN],
  buf_len: usize,
  bytes_hashed: u128,
}

impl Blake2bCore {
  /// `out_len` must be in [1, 64] and `key.len()` in [0, 64].
  pub(crate) fn new(out_len: usize, key: &[u8]) -> Self {
    debug_assert!((1..=MAX_OUT_LEN).contains(&out_len));
    debug_assert!(key.len() <= MAX_KEY_LEN);

    let mut h = IV;
    // RFC 7693 parameter block: digest_length, key_length, fanout=1,
    // depth=1, all tree fields zero. Only the first parameter word is
    // non-trivial, so only h[0] changes.
    h[0] ^= 0x0101_0000 ^ ((key.len() as u64) << 8) ^ (out_len as u64);

    let mut core = Self {
      h,
      buf: [0u8; BLOCK_LEN],
      buf_len: 0,
      bytes_hashed: 0,
    };
    if !key.is_empty() {
      // The key is absorbed as a full zero-padded first block through the
      // normal buffering path. It stays buffered here: if no message
      // follows, the key block itself is the last block (t = 128).
      core.buf[..key.len()].copy_from_slice(key);
      core.buf_len = BLOCK_LEN;
    }
    core
  }

  pub(crate) fn update(&mut self, mut data: &[u8]) {
    if data.is_empty() {
      return;
    }

    if self.buf_len != 0 {
      let take = core::cmp::min(BLOCK_LEN - self.buf_len, data.len());
      self.buf[self.buf_len..self.buf_len + take].copy_from_slice(&data[..take]);
      self.buf_len += take;
      data = &data[take..];

      // A full buffer is only compressed once a strictly later byte is
      // known to exist; the final block must be left for `finalize` to tag
      // with the last-block flag.
      if self.buf_len == BLOCK_LEN && !data.is_empty() {
        self.bytes_hashed = self.bytes_hashed.wrapping_add(BLOCK_LEN as u128);
        compress(&mut self.h, &self.buf, self.bytes_hashed, false);
        self.buf_len = 0;
      }
    }

    let (blocks, tail) = data.as_chunks::<BLOCK_LEN>();
    if !blocks.is_empty() {
      // With no trailing tail, the last full block is withheld as above.
      let withhold = tail.is_empty();
      let compress_now = blocks.len() - usize::from(withhold);

      for block in &blocks[..compress_now] {
        self.bytes_hashed = self.bytes_hashed.wrapping_add(BLOCK_LEN as u128);
        compress(&mut self.h, block, self.bytes_hashed, false);
      }

      if withhold {
        self.buf.copy_from_slice(&blocks[blocks.len() - 1]);
        self.buf_len = BLOCK_LEN;
      }
    }

    if !tail.is_empty() {
      self.buf[..tail.len()].copy_from_slice(tail);
      self.buf_len = tail.len();
    }
  }

  /// Run the final compression on copies of the state and write
  /// `out.len()` digest bytes (little-endian `h`, truncated).
  ///
  /// Non-mutating, so callers may keep absorbing afterwards; an empty total
  /// input still compresses one all-zero final block.
  pub(crate) fn finalize_into(&self, out: &mut [u8]) {
    debug_assert!(out.len() <= MAX_OUT_LEN);

    let mut h = self.h;
    let mut block = self.buf;
    block[self.buf_len..].fill(0);
    let t = self.bytes_hashed.wrapping_add(self.buf_len as u128);
    compress(&mut h, &block, t, true);

    let mut full = [0u8; MAX_OUT_LEN];
    for (i, word) in h.iter().copied().enumerate() {
      full[i * 8..i * 8 + 8].copy_from_slice(&word.to_le_bytes());
    }
    out.copy_from_slice(&full[..out.len()]);
  }
}

/// A BLAKE2b digest of 1 to 64 bytes.
///
/// Backed by a fixed 64-byte array; bytes past [`len`](Self::len) are zero.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Blake2bDigest {
  bytes: [u8; MAX_OUT_LEN],
  len: usize,
}

impl Blake2bDigest {
  /// The digest bytes.
  #[inline]
  #[must_use]
  pub fn as_bytes(&self) -> &[u8] {
    &self.bytes[..self.len]
  }

  /// Digest length in bytes, in [1, 64].
  #[allow(clippy::len_without_is_empty)] // Never empty by construction
  #[inline]
  #[must_use]
  pub const fn len(&self) -> usize {
    self.len
  }
}

impl AsRef<[u8]> for Blake2bDigest {
  #[inline]
  fn as_ref(&self) -> &[u8] {
    self.as_bytes()
  }
}

impl PartialEq<[u8]> for Blake2bDigest {
  #[inline]
  fn eq(&self, other: &[u8]) -> bool {
    self.as_bytes() == other
  }
}

impl PartialEq<&[u8]> for Blake2bDigest {
  #[inline]
  fn eq(&self, other: &&[u8]) -> bool {
    self.as_bytes() == *other
  }
}

impl fmt::Debug for Blake2bDigest {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("Blake2bDigest(")?;
    for b in self.as_bytes() {
      write!(f, "{b:02x}")?;
    }
    f.write_str(")")
  }
}

/// Streaming BLAKE2b engine.
///
/// Constructed with a digest length (and optionally a key), fed an arbitrary
/// sequence of byte chunks via [`update`](Self::update), and consumed by
/// exactly one [`finalize`](Self::finalize). The digest is independent of how
/// the input was chunked across `update` calls.
///
/// ```
/// use hashes::crypto::Blake2b;
///
/// let mut h = Blake2b::new(32)?;
/// h.update(b"hello ").unwrap();
/// h.update(b"world").unwrap();
/// let digest = h.finalize().unwrap();
/// assert_eq!(digest.len(), 32);
/// # Ok::<(), traits::ParameterError>(())
/// ```
#[derive(Clone)]
pub struct Blake2b {
  core: Blake2bCore,
  out_len: usize,
  finalized: bool,
}

impl Blake2b {
  /// Create an unkeyed engine producing `out_len` digest bytes.
  ///
  /// # Errors
  ///
  /// [`ParameterError`] if `out_len` is outside [1, 64].
  pub fn new(out_len: usize) -> Result<Self, ParameterError> {
    if out_len == 0 || out_len > MAX_OUT_LEN {
      return Err(ParameterError::new());
    }
    Ok(Self {
      core: Blake2bCore::new(out_len, &[]),
      out_len,
      finalized: false,
    })
  }

  /// Create a keyed engine (MAC/PRF mode) producing `out_len` digest bytes.
  ///
  /// The key counts toward the byte counter as one full input block once
  /// processed, per the reference keyed construction.
  ///
  /// # Errors
  ///
  /// [`ParameterError`] if `out_len` or `key.len()` is outside [1, 64].
  pub fn new_keyed(key: &[u8], out_len: usize) -> Result<Self, ParameterError> {
    if out_len == 0 || out_len > MAX_OUT_LEN || key.is_empty() || key.len() > MAX_KEY_LEN {
      return Err(ParameterError::new());
    }
    Ok(Self {
      core: Blake2bCore::new(out_len, key),
      out_len,
      finalized: false,
    })
  }

  /// Digest length in bytes this engine will produce.
  #[inline]
  #[must_use]
  pub const fn out_len(&self) -> usize {
    self.out_len
  }

  /// Whether [`finalize`](Self::finalize) has been called.
  #[inline]
  #[must_use]
  pub const fn is_finalized(&self) -> bool {
    self.finalized
  }

  /// Absorb more input. Accepts any length, including empty.
  ///
  /// # Errors
  ///
  /// [`StateError`] if the engine has already been finalized.
  pub fn update(&mut self, data: &[u8]) -> Result<(), StateError> {
    if self.finalized {
      return Err(StateError::new());
    }
    self.core.update(data);
    Ok(())
  }

  /// Finalize and return the digest, consuming the engine: any further
  /// [`update`](Self::update) or `finalize` fails with [`StateError`].
  ///
  /// # Errors
  ///
  /// [`StateError`] if the engine has already been finalized.
  pub fn finalize(&mut self) -> Result<Blake2bDigest, StateError> {
    if self.finalized {
      return Err(StateError::new());
    }
    self.finalized = true;
    Ok(self.digest_so_far())
  }

  // Derived from finalize_into: the final compression runs on copies, so
  // this can serve both the consuming finalize and the one-shot helpers.
  fn digest_so_far(&self) -> Blake2bDigest {
    let mut digest = Blake2bDigest {
      bytes: [0u8; MAX_OUT_LEN],
      len: self.out_len,
    };
    self.core.finalize_into(&mut digest.bytes[..self.out_len]);
    digest
  }
}

/// Compute the BLAKE2b digest of `data` in one shot.
///
/// # Errors
///
/// [`ParameterError`] if `out_len` is outside [1, 64].
pub fn hash(data: &[u8], out_len: usize) -> Result<Blake2bDigest, ParameterError> {
  let mut h = Blake2b::new(out_len)?;
  h.core.update(data);
  Ok(h.digest_so_far())
}

/// Compute a keyed BLAKE2b MAC of `data` in one shot.
///
/// # Errors
///
/// [`ParameterError`] if `out_len` or `key.len()` is outside [1, 64].
pub fn mac(data: &[u8], key: &[u8], out_len: usize) -> Result<Blake2bDigest, ParameterError> {
  let mut h = Blake2b::new_keyed(key, out_len)?;
  h.core.update(data);
  Ok(h.digest_so_far())
}

/// Verify a keyed BLAKE2b MAC tag.
///
/// The tag comparison is constant-time in the tag length.
///
/// # Errors
///
/// [`VerificationError`] if the tag does not match (or has an unsupported
/// length). Intentionally opaque.
pub fn verify(data: &[u8], key: &[u8], tag: &[u8]) -> Result<(), VerificationError> {
  let expected = mac(data, key, tag.len()).map_err(|_| VerificationError::new())?;
  if ct_eq(expected.as_bytes(), tag) {
    Ok(())
  } else {
    Err(VerificationError::new())
  }
}

#[inline]
fn ct_eq(a: &[u8], b: &[u8]) -> bool {
  if a.len() != b.len() {
    return false;
  }
  let mut acc = 0u8;
  for (x, y) in a.iter().zip(b) {
    acc |= x ^ y;
  }
  acc == 0
}

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::vec::Vec;

  use super::*;

  fn pattern(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i as u8).wrapping_mul(31).wrapping_add((i >> 8) as u8)).collect()
  }

  #[test]
  fn rejects_out_len_zero_and_oversize() {
    assert_eq!(Blake2b::new(0).err(), Some(ParameterError::new()));
    assert_eq!(Blake2b::new(65).err(), Some(ParameterError::new()));
    assert!(Blake2b::new(1).is_ok());
    assert!(Blake2b::new(64).is_ok());
  }

  #[test]
  fn rejects_bad_key_lengths() {
    assert_eq!(Blake2b::new_keyed(&[], 64).err(), Some(ParameterError::new()));
    assert_eq!(Blake2b::new_keyed(&[0u8; 65], 64).err(), Some(ParameterError::new()));
    assert_eq!(Blake2b::new_keyed(&[0u8; 1], 0).err(), Some(ParameterError::new()));
    assert!(Blake2b::new_keyed(&[0u8; 64], 64).is_ok());
  }

  #[test]
  fn rejects_use_after_finalize() {
    let mut h = Blake2b::new(64).unwrap();
    h.update(b"data").unwrap();
    assert!(!h.is_finalized());
    let _ = h.finalize().unwrap();
    assert!(h.is_finalized());
    assert_eq!(h.update(b"more").unwrap_err(), StateError::new());
    assert_eq!(h.finalize().unwrap_err(), StateError::new());
  }

  #[test]
  fn deterministic() {
    let data = pattern(1000);
    assert_eq!(hash(&data, 64).unwrap(), hash(&data, 64).unwrap());
    assert_eq!(mac(&data, b"key", 64).unwrap(), mac(&data, b"key", 64).unwrap());
  }

  #[test]
  fn output_length_exact_for_all_lengths() {
    for out_len in 1..=MAX_OUT_LEN {
      let d = hash(b"length check", out_len).unwrap();
      assert_eq!(d.len(), out_len);
      assert_eq!(d.as_bytes().len(), out_len);

      let m = mac(b"length check", b"key", out_len).unwrap();
      assert_eq!(m.len(), out_len);
    }
  }

  #[test]
  fn chunking_invariance() {
    let lens = [0usize, 1, 127, 128, 129, 255, 256, 257, 1024, 4096];
    let chunks = [1usize, 7, 31, 63, 64, 65, 127, 128, 129, 1000];

    for &len in &lens {
      let msg = pattern(len);
      let expected = hash(&msg, 64).unwrap();

      for &chunk in &chunks {
        let mut h = Blake2b::new(64).unwrap();
        for part in msg.chunks(chunk) {
          h.update(part).unwrap();
        }
        assert_eq!(h.finalize().unwrap(), expected, "len={len} chunk={chunk}");
      }

      // Empty updates interleaved anywhere change nothing.
      let mut h = Blake2b::new(64).unwrap();
      h.update(&[]).unwrap();
      h.update(&msg).unwrap();
      h.update(&[]).unwrap();
      assert_eq!(h.finalize().unwrap(), expected, "len={len} with empty updates");
    }
  }

  #[test]
  fn keyed_chunking_invariance() {
    let msg = pattern(777);
    let key = pattern(64);
    let expected = mac(&msg, &key, 64).unwrap();

    for &chunk in &[1usize, 64, 128, 129, 500] {
      let mut h = Blake2b::new_keyed(&key, 64).unwrap();
      for part in msg.chunks(chunk) {
        h.update(part).unwrap();
      }
      assert_eq!(h.finalize().unwrap(), expected, "chunk={chunk}");
    }
  }

  #[test]
  fn key_sensitivity() {
    let msg = b"fixed message";
    let a = mac(msg, b"key one", 64).unwrap();
    let b = mac(msg, b"key two", 64).unwrap();
    assert_ne!(a, b);

    // Keyed and unkeyed disagree as well.
    let unkeyed = hash(msg, 64).unwrap();
    assert_ne!(a, unkeyed);
  }

  #[test]
  fn truncation_is_not_prefix_of_longer_digest() {
    // BLAKE2b encodes the output length in the parameter block, so a
    // 32-byte digest is not the prefix of the 64-byte digest.
    let long = hash(b"abc", 64).unwrap();
    let short = hash(b"abc", 32).unwrap();
    assert_ne!(&long.as_bytes()[..32], short.as_bytes());
  }

  #[test]
  fn verify_round_trip_and_rejection() {
    let msg = b"authenticated message";
    let key = b"secret key";
    let tag = mac(msg, key, 32).unwrap();

    assert!(verify(msg, key, tag.as_bytes()).is_ok());
    assert_eq!(verify(b"tampered", key, tag.as_bytes()).unwrap_err(), VerificationError::new());
    assert_eq!(verify(msg, b"wrong key", tag.as_bytes()).unwrap_err(), VerificationError::new());

    let mut bad_tag = [0u8; 32];
    bad_tag.copy_from_slice(tag.as_bytes());
    bad_tag[31] ^= 1;
    assert!(verify(msg, key, &bad_tag).is_err());

    // Unsupported tag lengths are rejected opaquely.
    assert!(verify(msg, key, &[]).is_err());
    assert!(verify(msg, key, &[0u8; 65]).is_err());
  }

  #[test]
  fn digest_equality_and_debug() {
    let d = hash(b"abc", 4).unwrap();
    assert_eq!(d, d.as_bytes());
    assert_eq!(d.as_ref(), d.as_bytes());

    let dbg = alloc::format!("{d:?}");
    assert!(dbg.starts_with("Blake2bDigest("));
    assert_eq!(dbg.len(), "Blake2bDigest()".len() + 8);
  }

  #[test]
  fn clone_forks_the_stream() {
    let mut a = Blake2b::new(64).unwrap();
    a.update(b"shared prefix").unwrap();
    let mut b = a.clone();

    a.update(b"/left").unwrap();
    b.update(b"/right").unwrap();

    let whole_left = hash(b"shared prefix/left", 64).unwrap();
    let whole_right = hash(b"shared prefix/right", 64).unwrap();
    assert_eq!(a.finalize().unwrap(), whole_left);
    assert_eq!(b.finalize().unwrap(), whole_right);
  }
}
