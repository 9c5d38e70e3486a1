#![no_main]

use hashes::crypto::{Blake2b, Blake2b512, blake2b};
use libfuzzer_sys::fuzz_target;
use traits::Digest as _;

fuzz_target!(|input: &[u8]| {
  // Layout:
  // - 1 byte: out_len (mapped into 1..=64)
  // - 1 byte: key_len (0 = unkeyed, else mapped into 1..=64)
  // - rest: data
  let out_len = (input.first().copied().unwrap_or(0) as usize % 64) + 1;
  let key_len = input.get(1).copied().unwrap_or(0) as usize % 65;
  let data = input.get(2..).unwrap_or(&[]);
  let key: Vec<u8> = (0..key_len).map(|i| i as u8 ^ 0x5a).collect();

  let ours = if key.is_empty() {
    blake2b::hash(data, out_len).unwrap()
  } else {
    blake2b::mac(data, &key, out_len).unwrap()
  };
  assert_eq!(ours.len(), out_len);

  // Streaming with a data-derived split must agree with one-shot.
  let split = if data.is_empty() { 0 } else { (data[0] as usize) % (data.len() + 1) };
  let (a, b) = data.split_at(split);
  let mut h = if key.is_empty() {
    Blake2b::new(out_len).unwrap()
  } else {
    Blake2b::new_keyed(&key, out_len).unwrap()
  };
  h.update(a).unwrap();
  h.update(b).unwrap();
  assert_eq!(h.finalize().unwrap(), ours);

  // Oracle comparisons.
  if key.is_empty() {
    use blake2::digest::{Update as _, VariableOutput as _};
    let mut r = blake2::Blake2bVar::new(out_len).unwrap();
    r.update(data);
    let mut expected = vec![0u8; out_len];
    r.finalize_variable(&mut expected).unwrap();
    assert_eq!(ours.as_bytes(), &expected[..]);

    if out_len == 64 {
      use blake2::Digest as _;
      let full = blake2::Blake2b512::digest(data);
      assert_eq!(&Blake2b512::digest(data)[..], &full[..]);
    }
  } else if out_len == 64 {
    use blake2::digest::Mac as _;
    let mut m = blake2::Blake2bMac512::new_from_slice(&key).unwrap();
    m.update(data);
    let expected = m.finalize().into_bytes();
    assert_eq!(ours.as_bytes(), &expected[..]);
  }
});
