// Copyright (c) 2025 The Botho Foundation

//! End-to-end tests for DualDory signing and verification.

use dd_common::{logger::create_test_logger, trace_time};
use dd_crypto_ring_signature::{
    generate_parameters, signature_size, verify, verify_batch, Digestible, Error, ParseError,
    PreprocessedRing, PrivateKey, PublicKey, PublicParams, Ring, RingSignature, SchemeConfig,
    VerificationError, PUBLIC_KEY_BYTES,
};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

const TAG_PROOF_BYTES: usize = 96;

fn keys_and_ring(size: usize, seed: u64) -> (Vec<PrivateKey>, Ring) {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let keys: Vec<PrivateKey> = (0..size)
        .map(|_| PrivateKey::keygen(&mut rng).unwrap())
        .collect();
    let ring = keys.iter().map(PrivateKey::public_key).collect();
    (keys, ring)
}

fn setup(size: usize, seed: u64) -> (Vec<PrivateKey>, Ring, PublicParams) {
    let (keys, ring) = keys_and_ring(size, seed);
    let params = PublicParams::for_ring(&ring, &SchemeConfig::default()).unwrap();
    (keys, ring, params)
}

#[test]
fn sign_then_verify() {
    create_test_logger("sign_then_verify");
    let (keys, ring, params) = setup(5, 1);
    let mut rng = ChaCha20Rng::seed_from_u64(2);

    let signature = {
        trace_time!("sign over ring of {}", ring.len());
        keys[4]
            .sign(&params, b"Transfer 100 credits", b"ctx", &ring, &mut rng)
            .unwrap()
    };
    assert_eq!(params.setup().width(), 8);
    assert_eq!(signature.ring_proof().rounds(), 3);
    verify(&params, b"Transfer 100 credits", b"ctx", &signature).unwrap();
}

#[test]
fn single_member_ring() {
    create_test_logger("single_member_ring");
    let (keys, ring, params) = setup(1, 3);
    let mut rng = ChaCha20Rng::seed_from_u64(4);
    let signature = keys[0]
        .sign(&params, b"alone", b"", &ring, &mut rng)
        .unwrap();
    verify(&params, b"alone", b"", &signature).unwrap();
}

#[test]
fn empty_message_and_prefix() {
    let (keys, ring, params) = setup(2, 5);
    let mut rng = ChaCha20Rng::seed_from_u64(6);
    let signature = keys[1].sign(&params, b"", b"", &ring, &mut rng).unwrap();
    verify(&params, b"", b"", &signature).unwrap();
    assert_eq!(
        verify(&params, b"x", b"", &signature),
        Err(VerificationError::BadTagProof.into())
    );
}

#[test]
fn offline_online_signing_matches_one_shot() {
    create_test_logger("offline_online_signing_matches_one_shot");
    let (keys, ring, params) = setup(6, 7);

    let (randomness, partial) = keys[3]
        .preprocess_ring_proof(&params, &ring, &mut ChaCha20Rng::seed_from_u64(8))
        .unwrap();
    assert_eq!(randomness.ephemeral_key(), partial.ring_proof().ephemeral_key());
    let split = partial
        .append_tag_proof(randomness, b"late message", b"ctx")
        .unwrap();

    let one_shot = keys[3]
        .sign(
            &params,
            b"late message",
            b"ctx",
            &ring,
            &mut ChaCha20Rng::seed_from_u64(8),
        )
        .unwrap();

    assert_eq!(split.to_bytes().unwrap(), one_shot.to_bytes().unwrap());
    verify(&params, b"late message", b"ctx", &split).unwrap();
}

#[test]
fn one_partial_signature_for_any_message() {
    let (keys, ring, params) = setup(3, 9);
    let mut rng = ChaCha20Rng::seed_from_u64(10);
    let (randomness, partial) = keys[0]
        .preprocess_ring_proof(&params, &ring, &mut rng)
        .unwrap();

    // The message is chosen only after the ring proof exists.
    let message = b"chosen later";
    let signature = partial
        .append_tag_proof(randomness, message, b"ctx")
        .unwrap();
    verify(&params, message, b"ctx", &signature).unwrap();
}

#[test]
fn wrong_message_or_prefix_fails_tag_proof() {
    let (keys, ring, params) = setup(4, 11);
    let mut rng = ChaCha20Rng::seed_from_u64(12);
    let signature = keys[2]
        .sign(&params, b"pay alice", b"chain-a", &ring, &mut rng)
        .unwrap();

    assert_eq!(
        verify(&params, b"pay bob", b"chain-a", &signature),
        Err(Error::Verification(VerificationError::BadTagProof))
    );
    assert_eq!(
        verify(&params, b"pay alice", b"chain-b", &signature),
        Err(Error::Verification(VerificationError::BadTagProof))
    );
}

#[test]
fn tag_proof_from_another_signature_fails_binding() {
    let (keys, ring, params) = setup(2, 13);
    let mut rng = ChaCha20Rng::seed_from_u64(14);
    let a = keys[0]
        .sign(&params, b"m", b"p", &ring, &mut rng)
        .unwrap()
        .to_bytes()
        .unwrap();
    let b = keys[1]
        .sign(&params, b"m", b"p", &ring, &mut rng)
        .unwrap()
        .to_bytes()
        .unwrap();

    let split = a.len() - TAG_PROOF_BYTES;
    let mut spliced = a[..split].to_vec();
    spliced.extend_from_slice(&b[split..]);
    let spliced = RingSignature::from_bytes(&spliced).unwrap();

    assert_eq!(
        verify(&params, b"m", b"p", &spliced),
        Err(Error::Verification(VerificationError::BindingMismatch))
    );
}

#[test]
fn signature_for_another_ring_fails_ring_proof() {
    let (keys, ring, params) = setup(4, 15);
    let (_, other_ring, other_params) = setup(4, 16);
    assert_ne!(params, other_params);
    assert!(!other_params.matches_ring(&ring));

    let mut rng = ChaCha20Rng::seed_from_u64(17);
    let signature = keys[1]
        .sign(&params, b"m", b"p", &ring, &mut rng)
        .unwrap();
    verify(&params, b"m", b"p", &signature).unwrap();
    assert_eq!(
        verify(&other_params, b"m", b"p", &signature),
        Err(Error::Verification(VerificationError::BadRingProof))
    );
    assert!(other_params.matches_ring(&other_ring));
}

#[test]
fn ring_order_matters() {
    let (keys, ring, params) = setup(3, 18);
    let reversed: Ring = ring.iter().rev().copied().collect();
    let reversed_params = PublicParams::new(
        params.setup().clone(),
        PreprocessedRing::new(params.setup(), &reversed).unwrap(),
    )
    .unwrap();

    let mut rng = ChaCha20Rng::seed_from_u64(19);
    let signature = keys[0]
        .sign(&params, b"m", b"p", &ring, &mut rng)
        .unwrap();
    assert_eq!(
        verify(&reversed_params, b"m", b"p", &signature),
        Err(Error::Verification(VerificationError::BadRingProof))
    );
}

#[test]
fn signature_size_mismatch_is_malformed() {
    let (keys, ring, params) = setup(2, 20);
    let (_, _, wide_params) = setup(9, 21);
    let mut rng = ChaCha20Rng::seed_from_u64(22);
    let signature = keys[0]
        .sign(&params, b"m", b"p", &ring, &mut rng)
        .unwrap();
    assert_eq!(
        verify(&wide_params, b"m", b"p", &signature),
        Err(Error::Verification(VerificationError::Malformed))
    );
}

#[test]
fn outsider_cannot_sign() {
    let (_, ring, params) = setup(3, 23);
    let outsider = PrivateKey::keygen(&mut ChaCha20Rng::seed_from_u64(24)).unwrap();
    let mut rng = ChaCha20Rng::seed_from_u64(25);
    assert_eq!(
        outsider
            .sign(&params, b"m", b"p", &ring, &mut rng)
            .unwrap_err(),
        Error::SignerNotInRing
    );
    assert_eq!(
        outsider
            .preprocess_ring_proof(&params, &ring, &mut rng)
            .unwrap_err(),
        Error::SignerNotInRing
    );
}

#[test]
fn byte_encoding_round_trip_verifies() {
    let (keys, ring, params) = setup(7, 26);
    let mut rng = ChaCha20Rng::seed_from_u64(27);
    let signature = keys[6]
        .sign(&params, b"m", b"p", &ring, &mut rng)
        .unwrap();

    let bytes = signature.to_bytes().unwrap();
    assert_eq!(bytes.len(), signature_size(params.rounds()));
    let decoded = RingSignature::from_bytes(&bytes).unwrap();
    assert_eq!(decoded, signature);
    assert!(!decoded.ring_proof().is_digested());
    verify(&params, b"m", b"p", &decoded).unwrap();

    let mut extended = bytes.clone();
    extended.push(0);
    assert_eq!(
        RingSignature::from_bytes(&extended),
        Err(Error::Parse(ParseError::TrailingBytes(1)))
    );
    assert!(matches!(
        RingSignature::from_bytes(&bytes[..bytes.len() - 1]),
        Err(Error::Parse(ParseError::Truncated { .. }))
    ));
}

#[test]
fn digests_are_stable_and_do_not_affect_verification() {
    let (keys, ring, params) = setup(2, 28);
    let mut rng = ChaCha20Rng::seed_from_u64(29);
    let signature = keys[0]
        .sign(&params, b"m", b"p", &ring, &mut rng)
        .unwrap();

    verify(&params, b"m", b"p", &signature).unwrap();
    assert!(!signature.ring_proof().is_digested());

    let first = *signature.ring_proof().digest().unwrap();
    let second = *signature.ring_proof().digest().unwrap();
    assert_eq!(first, second);
    assert_eq!(&first, signature.tag_proof().ring_digest());
    assert!(signature.ring_proof().is_digested());

    let tag_digest = *signature.tag_proof().digest().unwrap();
    assert_ne!(tag_digest, first);

    verify(&params, b"m", b"p", &signature).unwrap();
    let decoded = RingSignature::from_bytes(&signature.to_bytes().unwrap()).unwrap();
    assert_eq!(decoded.ring_proof().digest().unwrap(), &first);
}

#[test]
fn signature_size_grows_logarithmically() {
    create_test_logger("signature_size_grows_logarithmically");
    let small = {
        let (keys, ring, params) = setup(2, 30);
        let mut rng = ChaCha20Rng::seed_from_u64(31);
        keys[1]
            .sign(&params, b"m", b"p", &ring, &mut rng)
            .unwrap()
            .to_bytes()
            .unwrap()
            .len()
    };
    let large = {
        let (keys, ring, params) = setup(1024, 32);
        let mut rng = ChaCha20Rng::seed_from_u64(33);
        let signature = keys[700]
            .sign(&params, b"m", b"p", &ring, &mut rng)
            .unwrap();
        verify(&params, b"m", b"p", &signature).unwrap();
        signature.to_bytes().unwrap().len()
    };

    assert_eq!(small, signature_size(2));
    assert_eq!(large, signature_size(10));
    assert!(large < 8 * small);
}

#[test]
fn parameters_are_reproducible_and_domain_separated() {
    let config = SchemeConfig::default();
    let a = generate_parameters(5, &config).unwrap();
    let b = generate_parameters(6, &config).unwrap();
    assert_eq!(a, b);

    let other = SchemeConfig {
        domain: "another-deployment".into(),
        ..Default::default()
    };
    assert_ne!(generate_parameters(5, &other).unwrap(), a);
}

#[test]
fn ring_and_key_encodings() {
    let (keys, ring) = keys_and_ring(3, 34);
    let bytes = ring.to_bytes();
    assert_eq!(bytes.len(), 3 * PUBLIC_KEY_BYTES);
    assert_eq!(Ring::from_bytes(&bytes).unwrap(), ring);

    let key_bytes = keys[2].public_key().to_bytes();
    assert_eq!(PublicKey::from_bytes(&key_bytes).unwrap(), keys[2].public_key());
}

#[test]
fn batch_results_are_indexed() {
    let (keys, ring, params) = setup(3, 35);
    let mut rng = ChaCha20Rng::seed_from_u64(36);
    let signatures: Vec<RingSignature> = keys
        .iter()
        .map(|key| key.sign(&params, b"m", b"p", &ring, &mut rng).unwrap())
        .collect();

    let items: Vec<(&[u8], &[u8], &RingSignature)> = signatures
        .iter()
        .enumerate()
        .map(|(i, sig)| {
            let prefix: &[u8] = if i == 1 { b"q" } else { b"p" };
            (&b"m"[..], prefix, sig)
        })
        .collect();
    let results = verify_batch(&params, items);

    assert_eq!(results.len(), 3);
    for (i, result) in results.iter().enumerate() {
        assert_eq!(result.index, i);
        assert_eq!(result.result.is_ok(), i != 1);
    }
}
