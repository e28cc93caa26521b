//! Equality, persistence and configuration of hash values

use hashkit_hashing::{
    DigestHashBuilder, HashAlgorithm, HashBuilder, HashError, HashRecord, HashValue,
    Pbkdf2HashBuilder, SecureHashConfig,
};
use std::collections::HashSet;

#[test]
fn test_plain_equality_is_data_determined() {
    let a = DigestHashBuilder::sha256().hash(b"data").expect("digest");
    let b = DigestHashBuilder::sha256().hash(b"data").expect("digest");
    let c = DigestHashBuilder::sha256().hash(b"other").expect("digest");

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert!(a == *b.raw_bytes());
    assert!(a == b.raw_bytes());

    let set: HashSet<_> = [a.clone(), b, c].into_iter().collect();
    assert_eq!(set.len(), 2);
    assert!(set.contains(&a));
}

#[test]
fn test_ordering_follows_raw_bytes() {
    let mut hashes: Vec<_> = ["a", "b", "c", "d"]
        .iter()
        .map(|s| DigestHashBuilder::sha256_digest(s.as_bytes()))
        .collect();
    hashes.sort();
    for pair in hashes.windows(2) {
        assert!(pair[0].raw_bytes() <= pair[1].raw_bytes());
    }
}

#[test]
fn test_display_is_hex() {
    let hash = DigestHashBuilder::sha256_digest(b"abc");
    assert_eq!(
        hash.to_string(),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
    assert_eq!(hash.to_base64url().len(), 43);
    assert_eq!(hash.to_base64().len(), 44);
}

#[test]
fn test_secure_hash_equality_includes_parameters() {
    let a = Pbkdf2HashBuilder::derive("pw", b"salt-one".to_vec(), 10).expect("derive");
    let b = Pbkdf2HashBuilder::derive("pw", b"salt-one".to_vec(), 10).expect("derive");
    assert_eq!(a, b);

    let other_salt = Pbkdf2HashBuilder::derive("pw", b"salt-two".to_vec(), 10).expect("derive");
    assert_ne!(a, other_salt);

    let other_iterations = Pbkdf2HashBuilder::derive("pw", b"salt-one".to_vec(), 11).expect("derive");
    assert_ne!(a, other_iterations);
}

#[test]
fn test_plain_and_salted_records_never_equal() {
    let salted = Pbkdf2HashBuilder::derive("pw", b"salt".to_vec(), 1).expect("derive");
    let plain = salted.as_hash().clone();
    assert_eq!(plain.raw_bytes(), salted.raw_bytes());

    let plain_record = plain.into_record();
    let salted_record = salted.into_record();
    assert_ne!(plain_record, salted_record);
    assert_eq!(plain_record.salt(), None);
    assert_eq!(salted_record.salt(), Some(&b"salt"[..]));
    assert_eq!(salted_record.iterations(), Some(1));
}

#[test]
fn test_salted_record_survives_json() {
    let stored = Pbkdf2HashBuilder::derive("hunter2", b"0123456789abcdef".to_vec(), 25)
        .expect("derive");
    let json = HashRecord::from(stored.clone()).to_json().expect("serialize");
    assert!(json.contains("\"kind\":\"salted\""));
    assert!(json.contains("PBKDF2WithHmacSHA256"));

    let HashRecord::Salted(restored) = HashRecord::from_json(&json).expect("parse") else {
        panic!("expected a salted record");
    };
    assert_eq!(restored, stored);
    assert!(restored.verify("hunter2").expect("verify"));
}

#[test]
fn test_plain_record_survives_json() {
    let hash = DigestHashBuilder::blake2b().hash(b"abc").expect("digest");
    let record = HashRecord::from(hash.clone());
    let restored = HashRecord::from_json(&record.to_json().expect("serialize")).expect("parse");
    assert_eq!(restored, record);
    assert_eq!(restored.algorithm(), HashAlgorithm::Blake2b512);
    assert_eq!(restored.raw_bytes(), hash.raw_bytes());
}

#[test]
fn test_record_with_wrong_length_is_rejected() {
    let json = r#"{"kind":"plain","algorithm":"SHA-256","raw":"abcd"}"#;
    assert!(matches!(
        HashRecord::from_json(json),
        Err(HashError::InvalidParameters(_))
    ));

    let unsalted = format!(
        r#"{{"kind":"salted","algorithm":"SHA-256","raw":"{}","salt":"00","iterations":1}}"#,
        "00".repeat(32)
    );
    assert!(HashRecord::from_json(&unsalted).is_err());

    let zero_iterations = format!(
        r#"{{"kind":"salted","algorithm":"PBKDF2WithHmacSHA256","raw":"{}","salt":"00","iterations":0}}"#,
        "00".repeat(32)
    );
    assert!(HashRecord::from_json(&zero_iterations).is_err());
}

#[test]
fn test_algorithm_lookup() {
    assert_eq!(
        HashAlgorithm::from_name("sha-256").expect("known"),
        HashAlgorithm::Sha256
    );
    assert_eq!(
        "PBKDF2WithHmacSHA512".parse::<HashAlgorithm>().expect("known"),
        HashAlgorithm::Pbkdf2HmacSha512
    );
    assert!(matches!(
        HashAlgorithm::from_name("whirlpool"),
        Err(HashError::UnsupportedAlgorithm(name)) if name == "whirlpool"
    ));

    for algorithm in HashAlgorithm::ALL {
        assert_eq!(HashAlgorithm::from_name(algorithm.name()).expect("round trip"), algorithm);
        assert_eq!(algorithm.to_string(), algorithm.name());
    }
}

#[test]
fn test_config_parsing_and_validation() {
    let config = SecureHashConfig::default();
    assert_eq!(config.algorithm, HashAlgorithm::Pbkdf2HmacSha256);
    assert_eq!(config.salt_length, 64);
    assert_eq!(config.iterations, 5_000);
    assert!(config.validate().is_ok());

    let parsed = SecureHashConfig::from_json(
        r#"{ "algorithm": "PBKDF2WithHmacSHA512", "salt_length": 16 }"#,
    )
    .expect("valid config");
    assert_eq!(parsed.algorithm, HashAlgorithm::Pbkdf2HmacSha512);
    assert_eq!(parsed.salt_length, 16);
    assert_eq!(parsed.iterations, 5_000);

    assert!(SecureHashConfig::from_json(r#"{ "iterations": 0 }"#).is_err());
    assert!(SecureHashConfig::from_json(r#"{ "algorithm": "SHA-256" }"#).is_err());
    assert!(SecureHashConfig::from_json("not json").is_err());

    let mut builder = Pbkdf2HashBuilder::from_config(&parsed).expect("valid config");
    let hash = builder.hash_str("pw").expect("derive");
    assert_eq!(hash.salt().len(), 16);
    assert_eq!(hash.raw_bytes().len(), 64);
}
