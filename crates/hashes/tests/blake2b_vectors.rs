//! Known-answer tests for BLAKE2b.
//!
//! Expected digests were generated with a reference BLAKE2b implementation;
//! the "hello" and keyed 16-byte vectors match RFC 7693 / the upstream
//! blake2 KAT corpus.

use hashes::crypto::{Blake2b, Blake2b256, Blake2b512, blake2b};
use traits::Digest as _;

fn check_hash(msg: &[u8], out_len: usize, expected_hex: &str) {
  let expected = hex::decode(expected_hex).unwrap();
  let digest = blake2b::hash(msg, out_len).unwrap();
  assert_eq!(digest.as_bytes(), &expected[..], "hash len={} out={out_len}", msg.len());

  // The same input streamed byte-by-byte must agree.
  let mut h = Blake2b::new(out_len).unwrap();
  for b in msg {
    h.update(core::slice::from_ref(b)).unwrap();
  }
  assert_eq!(h.finalize().unwrap().as_bytes(), &expected[..]);
}

fn check_mac(msg: &[u8], key: &[u8], out_len: usize, expected_hex: &str) {
  let expected = hex::decode(expected_hex).unwrap();
  let digest = blake2b::mac(msg, key, out_len).unwrap();
  assert_eq!(digest.as_bytes(), &expected[..], "mac len={} out={out_len}", msg.len());
  blake2b::verify(msg, key, &expected).unwrap();
}

#[test]
fn unkeyed_512() {
  check_hash(
    b"hello",
    64,
    "e4cfa39a3d37be31c59609e807970799caa68a19bfaa15135f165085e01d41a6\
     5ba1e1b146aeb6bd0092b49eac214c103ccfa3a365954bbbe52f74a2b3620c94",
  );
  check_hash(
    b"abc",
    64,
    "ba80a53f981c4d0d6a2797b69f12f6e94c212f14685ac4b74b12bb6fdbffa2d1\
     7d87c5392aab792dc252d5de4533cc9518d38aa8dbf1925ab92386edd4009923",
  );
}

#[test]
fn empty_input_still_compresses_one_final_block() {
  // RFC 7693 empty-string vector: one compression of an all-zero block.
  check_hash(
    b"",
    64,
    "786a02f742015903c6c6fd852552d272912f4740e15847618a86e217f71f5419\
     d25e1031afee585313896444934eb04b903a685b1448b755d56f701afe9be2ce",
  );
  check_hash(b"", 1, "2e");
  check_hash(b"", 32, "0e5751c026e543b2e8ab2eb06099daa1d1e5df47778f7787faab45cdf12fe3a8");
}

#[test]
fn keyed_512() {
  let msg: Vec<u8> = (0u8..16).collect();
  let key: Vec<u8> = (0u8..64).collect();
  check_mac(
    &msg,
    &key,
    64,
    "a0c65bddde8adef57282b04b11e7bc8aab105b99231b750c021f4a735cb1bcfa\
     b87553bba3abb0c3e64a0b6955285185a0bd35fb8cfde557329bebb1f629ee93",
  );

  // Keyed with an empty message: the key block is the final block, t = 128.
  check_mac(
    b"",
    &key,
    64,
    "10ebb67700b1868efb4417987acf4690ae9d972fb7a590c2f02871799aaa4786\
     b5e996e8f0f4eb981fc214b005f42d2ff4233499391653df7aefcbc13fc51568",
  );
}

#[test]
fn truncated_outputs() {
  check_hash(b"hello", 20, "b5531c7037f06c9f2947132a6a77202c308e8939");
  check_hash(b"abc", 32, "bddd813c634239723171ef3fee98579b94964e3bb1cb3e427262c8c068d52319");
  check_hash(b"abc", 1, "6b");
  check_mac(
    b"hello",
    b"secret",
    32,
    "1953751cc7004cc8f7965529b26562b4382f59382f6ed7367c68c2b98922b426",
  );
}

#[test]
fn block_boundary_lengths() {
  check_hash(
    &[b'A'; 127],
    64,
    "d5e825b4aa701cd057e2e09397f8294779b15ce242262fc9f3b91629ebaa7684\
     865db25cb533b4f70f5da5e2f3513b92b17f35601058e6d8767c644a5458e140",
  );
  check_hash(
    &[b'A'; 128],
    64,
    "f5011c14425def0732ae5ad325ea7ceb558b908e390cb8157d15c365226d4e07\
     6789bd1e9534353bfc852bb90c0c1c85755a7cc43f9fafecd8fabade9bcc8d77",
  );
  check_hash(
    &[b'A'; 129],
    64,
    "3dc8c5e69fe2ad0d8ea8bc16732f00cd7c1ce619783cb91a2f684ccf2e1e95a4\
     aba27640e9f6339df2b1d572c4fb3900deae6330b94e900a934e131b9ca5d136",
  );

  let seq: Vec<u8> = (0..256u16).map(|i| i as u8).collect();
  check_hash(
    &seq,
    64,
    "1ecc896f34d3f9cac484c73f75f6a5fb58ee6784be41b35f46067b9c65c63a67\
     94d3d744112c653f73dd7deb6666204c5a9bfa5b46081fc10fdbe7884fa5cbf8",
  );
}

#[test]
fn fixed_size_adapters_match_vectors() {
  let expected512 = hex::decode(
    "e4cfa39a3d37be31c59609e807970799caa68a19bfaa15135f165085e01d41a6\
     5ba1e1b146aeb6bd0092b49eac214c103ccfa3a365954bbbe52f74a2b3620c94",
  )
  .unwrap();
  assert_eq!(&Blake2b512::digest(b"hello")[..], &expected512[..]);

  let expected256 = hex::decode("bddd813c634239723171ef3fee98579b94964e3bb1cb3e427262c8c068d52319").unwrap();
  assert_eq!(&Blake2b256::digest(b"abc")[..], &expected256[..]);
}
