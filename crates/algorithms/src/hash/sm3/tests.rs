use super::*;
use hex;

#[test]
fn test_sm3_empty() {
    let expected = "1ab21d8355cfa17f8e61194831e81a8f22bec8c728fefb747ed035eb5082aa2b";

    let hash = Sm3::digest(&[]).unwrap();
    assert_eq!(hex::encode(hash.as_ref()), expected);
}

#[test]
fn test_sm3_abc() {
    // GB/T 32905 example 1
    let expected = "66c7f0f462eeedd9d1f2d46bdc10e4e24167c4875cf2f7a2297da02b8f4ba8e0";

    let hash = Sm3::digest(b"abc").unwrap();
    assert_eq!(hex::encode(hash.as_ref()), expected);
}

#[test]
fn test_sm3_abcd_x16() {
    // GB/T 32905 example 2, a full 64-byte block that forces a second
    // padding block
    let expected = "debe9ff92275b8a138604889c18e5a4d6fdb70e5387e5765293dcba39c0c5732";

    let input = b"abcd".repeat(16);
    let hash = Sm3::digest(&input).unwrap();
    assert_eq!(hex::encode(hash.as_ref()), expected);
}

#[test]
fn test_sm3_incremental_matches_one_shot() {
    let data: Vec<u8> = (0..300u32).map(|i| (i * 7 + 3) as u8).collect();
    let one_shot = Sm3::digest(&data).unwrap();

    for split in [0usize, 1, 3, 55, 56, 63, 64, 65, 128, 299, 300] {
        let mut hasher = Sm3::new();
        hasher.update(&data[..split]).unwrap();
        hasher.update(&data[split..]).unwrap();
        assert_eq!(hasher.finalize().unwrap(), one_shot, "split at {}", split);
    }

    let mut bytewise = Sm3::new();
    for b in &data {
        bytewise.update(core::slice::from_ref(b)).unwrap();
    }
    assert_eq!(bytewise.finalize().unwrap(), one_shot);
}

#[test]
fn test_sm3_padding_boundaries() {
    // Lengths around the 56-byte length-field boundary must all differ and
    // all be stable across chunkings.
    let mut seen = Vec::new();
    for len in 54..=66 {
        let data = vec![0x61u8; len];
        let a = Sm3::digest(&data).unwrap();
        let mut h = Sm3::new();
        h.update(&data[..len / 2]).unwrap();
        h.update(&data[len / 2..]).unwrap();
        assert_eq!(h.finalize().unwrap(), a);
        assert!(!seen.contains(&a));
        seen.push(a);
    }
}

#[test]
fn test_sm3_finalize_resets() {
    let mut hasher = Sm3::new();
    hasher.update(b"first message").unwrap();
    let _ = hasher.finalize().unwrap();

    hasher.update(b"abc").unwrap();
    assert_eq!(hasher.finalize().unwrap(), Sm3::digest(b"abc").unwrap());

    // finalize without any update hashes the empty message
    assert_eq!(hasher.finalize().unwrap(), Sm3::digest(b"").unwrap());
}

#[test]
fn test_sm3_reuse_matches_fresh_instances() {
    let mut shared = Sm3::new();
    shared.update(b"unrelated input one").unwrap();
    let first = shared.finalize().unwrap();
    shared.update(b"another one entirely").unwrap();
    let second = shared.finalize().unwrap();

    assert_eq!(first, Sm3::digest(b"unrelated input one").unwrap());
    assert_eq!(second, Sm3::digest(b"another one entirely").unwrap());
}

#[test]
fn test_sm3_reset_discards_input() {
    let mut hasher = Sm3::new();
    hasher.update(b"garbage").unwrap();
    hasher.reset();
    assert_eq!(hasher.absorbed(), 0);
    hasher.update(b"abc").unwrap();
    assert_eq!(hasher.digest_reset(), Sm3::digest(b"abc").unwrap());
}

#[test]
fn test_sm3_snapshot_is_independent() {
    let mut seeded = Sm3::new();
    seeded.update(b"ab").unwrap();

    let mut branch = seeded.snapshot();
    branch.update(b"c").unwrap();
    assert_eq!(branch.finalize().unwrap(), Sm3::digest(b"abc").unwrap());

    // the original is untouched by the branch
    assert_eq!(seeded.absorbed(), 2);
    seeded.update(b"c").unwrap();
    assert_eq!(seeded.finalize().unwrap(), Sm3::digest(b"abc").unwrap());
}

#[test]
fn test_sm3_metadata() {
    assert_eq!(Sm3::output_size(), 32);
    assert_eq!(Sm3::block_size(), 64);
    assert_eq!(Sm3::name(), "SM3");
    assert_eq!(<Sm3Algorithm as HashAlgorithm>::OUTPUT_SIZE, 32);
}
