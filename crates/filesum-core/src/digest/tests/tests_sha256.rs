//! Tests for the incremental SHA-256 state machine

#![allow(clippy::unwrap_used)]

use rstest::rstest;
use sha2::{Digest, Sha256};

use crate::digest::Sha256State;

fn digest_hex(input: &[u8]) -> String {
    let mut state = Sha256State::new();
    state.absorb(input);
    hex::encode(state.finalize())
}

#[test]
fn test_empty_input_matches_known_vector() {
    assert_eq!(
        digest_hex(b""),
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
}

#[test]
fn test_abc_matches_known_vector() {
    assert_eq!(
        digest_hex(b"abc"),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
}

#[test]
fn test_two_block_message_matches_known_vector() {
    // FIPS 180-4 test vector spanning two compression blocks
    assert_eq!(
        digest_hex(b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq"),
        "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1"
    );
}

#[test]
fn test_one_shot_matches_sha2_reference() {
    let input: Vec<u8> = (0u32..100_000).map(|i| (i % 251) as u8).collect();
    let expected = hex::encode(Sha256::digest(&input));
    assert_eq!(digest_hex(&input), expected);
}

#[rstest]
#[case(1)]
#[case(3)]
#[case(63)]
#[case(64)]
#[case(65)]
#[case(1024)]
#[case(65536)]
fn test_chunk_invariance(#[case] chunk_size: usize) {
    let input: Vec<u8> = (0u32..200_000).map(|i| (i.wrapping_mul(31) % 256) as u8).collect();
    let whole = digest_hex(&input);

    let mut state = Sha256State::new();
    for chunk in input.chunks(chunk_size) {
        state.absorb(chunk);
    }
    assert_eq!(hex::encode(state.finalize()), whole);
}

#[test]
fn test_exact_block_boundary_input() {
    // 64 bytes: padding must spill into a second block
    let input = [0x61u8; 64];
    let expected = hex::encode(Sha256::digest(input));
    assert_eq!(digest_hex(&input), expected);
}

#[test]
fn test_length_just_below_padding_boundary() {
    // 55 bytes is the largest input whose padding fits in a single block
    let input = [0x62u8; 55];
    let expected = hex::encode(Sha256::digest(input));
    assert_eq!(digest_hex(&input), expected);

    // 56 bytes forces the length field into a second block
    let input = [0x62u8; 56];
    let expected = hex::encode(Sha256::digest(input));
    assert_eq!(digest_hex(&input), expected);
}

#[test]
fn test_absorb_after_empty_calls() {
    let mut state = Sha256State::new();
    state.absorb(b"");
    state.absorb(b"abc");
    state.absorb(b"");
    assert_eq!(
        hex::encode(state.finalize()),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
}

#[test]
fn test_default_equals_new() {
    let a = Sha256State::default();
    let b = Sha256State::new();
    assert_eq!(a.finalize(), b.finalize());
}
