//! Streaming digest builder behavior

use hashkit_hashing::{
    AlgorithmIdentity, DigestHashBuilder, HashAlgorithm, HashBuilder, HashError, HashMasterBuilder,
    StreamHashBuilder,
};
use hex_literal::hex;
use proptest::prelude::*;
use std::io::{Cursor, Write};

#[test]
fn test_sha256_known_vectors() {
    let mut builder = DigestHashBuilder::sha256();

    let empty = builder.hash(b"").expect("empty input should hash");
    assert_eq!(
        empty.raw_bytes(),
        hex!("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855")
    );

    let abc = builder.hash(b"abc").expect("abc should hash");
    assert_eq!(
        abc.raw_bytes(),
        hex!("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad")
    );
}

#[test]
fn test_hello_is_stable_and_hullo_differs() {
    let mut builder = HashMasterBuilder.sha256();
    let first = builder.hash_str("hello").expect("hello should hash");
    let second = builder.hash_str("hello").expect("hello should hash again");
    assert_eq!(first.raw_bytes(), second.raw_bytes());
    assert_eq!(
        first.to_hex(),
        "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
    );

    let other = builder.hash_str("hullo").expect("hullo should hash");
    assert_ne!(first.raw_bytes(), other.raw_bytes());
}

#[test]
fn test_output_lengths_match_algorithm() {
    let builders = [
        DigestHashBuilder::sha256(),
        DigestHashBuilder::sha384(),
        DigestHashBuilder::sha512(),
        DigestHashBuilder::sha3_256(),
        DigestHashBuilder::sha3_512(),
        DigestHashBuilder::blake2b(),
    ];
    for mut builder in builders {
        let hash = builder.hash(b"test data").expect("digest should succeed");
        assert_eq!(hash.len(), builder.algorithm().output_len());
        assert_eq!(hash.algorithm(), builder.algorithm());
        assert_eq!(hash.algorithm_name(), builder.algorithm_name());
    }
}

#[test]
fn test_streamed_equals_one_shot() {
    let mut builder = DigestHashBuilder::sha3_256();
    builder.update(b"The quick brown fox ");
    builder.update(b"jumps over ");
    builder.update(b"the lazy dog");
    let streamed = builder.finalize();

    let one_shot = builder
        .hash(b"The quick brown fox jumps over the lazy dog")
        .expect("digest should succeed");
    assert_eq!(streamed, one_shot);
}

#[test]
fn test_one_shot_ignores_leftover_state() {
    let mut fresh = DigestHashBuilder::sha256();
    let expected = fresh.hash(b"payload").expect("digest should succeed");

    let mut dirty = DigestHashBuilder::sha256();
    dirty.update(b"left over from an abandoned computation");
    let actual = dirty.hash(b"payload").expect("digest should succeed");

    assert_eq!(expected, actual);
    assert_eq!(dirty.bytes_pending(), 0);
}

#[test]
fn test_finalize_resets_state() {
    let mut builder = DigestHashBuilder::sha256();
    builder.update(b"hello");
    assert_eq!(builder.bytes_pending(), 5);
    let first = builder.finalize();
    assert_eq!(builder.bytes_pending(), 0);

    // Second finalize digests the empty input, not "hello" again.
    let second = builder.finalize();
    assert_ne!(first, second);
    assert_eq!(
        second.raw_bytes(),
        hex!("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855")
    );
}

#[test]
fn test_reset_before_any_update() {
    let mut builder = DigestHashBuilder::blake2b();
    builder.reset();
    builder.reset();
    let empty = builder.finalize();
    let expected = DigestHashBuilder::digest(HashAlgorithm::Blake2b512, b"").expect("digest");
    assert_eq!(empty, expected);
}

#[test]
fn test_hash_range_selects_bytes() {
    let mut builder = DigestHashBuilder::sha256();
    let framed = b"xxhelloyy";
    let ranged = builder.hash_range(framed, 2, 5).expect("range is valid");
    let direct = builder.hash(b"hello").expect("digest should succeed");
    assert_eq!(ranged, direct);
}

#[test]
fn test_hash_range_out_of_bounds_fails() {
    let mut builder = DigestHashBuilder::sha256();
    let data = [0u8; 8];

    let err = builder.hash_range(&data, 4, 5).expect_err("range overruns buffer");
    assert!(matches!(
        err,
        HashError::InvalidRange {
            offset: 4,
            length: 5,
            available: 8
        }
    ));

    let err = builder
        .hash_range(&data, usize::MAX, 2)
        .expect_err("offset overflow must not wrap");
    assert!(matches!(err, HashError::InvalidRange { .. }));
}

#[test]
fn test_update_range_out_of_bounds_absorbs_nothing() {
    let mut builder = DigestHashBuilder::sha256();
    builder.update(b"abc");
    assert!(builder.update_range(b"def", 1, 3).is_err());
    assert_eq!(builder.bytes_pending(), 3);

    builder.update_range(b"xdefx", 1, 3).expect("range is valid");
    let hash = builder.finalize();
    assert_eq!(hash, DigestHashBuilder::sha256_digest(b"abcdef"));
}

#[test]
fn test_from_name() {
    let builder = DigestHashBuilder::from_name("sha3-512").expect("known digest");
    assert_eq!(builder.algorithm(), HashAlgorithm::Sha3_512);

    let err = DigestHashBuilder::from_name("MD5").expect_err("MD5 is not offered");
    assert!(matches!(err, HashError::UnsupportedAlgorithm(_)));

    let err = DigestHashBuilder::from_name("PBKDF2WithHmacSHA256")
        .expect_err("salted algorithms have no streaming digest");
    assert!(matches!(err, HashError::UnsupportedAlgorithm(_)));
}

#[test]
fn test_hash_reader_and_write() {
    let data = vec![0x5au8; 100_000];
    let mut builder = DigestHashBuilder::sha512();
    let from_reader = builder
        .hash_reader(Cursor::new(&data))
        .expect("in-memory reader cannot fail");

    let mut writer = DigestHashBuilder::sha512();
    for chunk in data.chunks(4096) {
        writer.write_all(chunk).expect("writing into a digest cannot fail");
    }
    assert_eq!(from_reader, writer.finalize());
}

#[test]
fn test_hash_builder_from_value() {
    let hash = DigestHashBuilder::sha384().hash(b"abc").expect("digest");
    let mut again = hash.builder().expect("plain hashes have a digest builder");
    assert_eq!(again.hash(b"abc").expect("digest"), hash);
}

#[tokio::test]
async fn test_hash_stream() {
    let chunks = vec![b"hel".to_vec(), b"lo".to_vec()];
    let mut builder = DigestHashBuilder::sha256();
    let streamed = builder.hash_stream(futures::stream::iter(chunks)).await;
    assert_eq!(streamed, DigestHashBuilder::sha256_digest(b"hello"));
}

proptest! {
    #[test]
    fn prop_equal_inputs_give_equal_hashes(data in proptest::collection::vec(any::<u8>(), 0..512)) {
        let copy = data.clone();
        let mut a = DigestHashBuilder::sha256();
        let mut b = DigestHashBuilder::sha256();
        prop_assert_eq!(a.hash(&data).expect("digest"), b.hash(&copy).expect("digest"));
    }

    #[test]
    fn prop_incremental_matches_one_shot(
        data in proptest::collection::vec(any::<u8>(), 0..1024),
        split in any::<prop::sample::Index>(),
    ) {
        let mut builder = DigestHashBuilder::sha3_256();
        let at = if data.is_empty() { 0 } else { split.index(data.len()) };
        builder.reset();
        builder.update(&data[..at]);
        builder.update(&data[at..]);
        let incremental = builder.finalize();
        prop_assert_eq!(incremental, builder.hash(&data).expect("digest"));
    }
}
