//! Property-based tests for the Dory-Reduce argument.
//!
//! Pairings are expensive, so the case counts stay small.

use ark_ec::CurveGroup;
use dd_common::{logger::create_test_logger, trace_time};
use dd_crypto_dory::{
    backend::{
        g1, g2, normalize_g1, normalize_g2, random_scalar, G1Affine, G1Projective, G2Affine,
        G2Projective, Scalar,
    },
    Error, InnerProductProof, SetupParams, Statement,
};
use merlin::Transcript;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn witness(
    width: usize,
    seed: u64,
) -> (Vec<G1Affine>, Vec<G2Affine>) {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let v1: Vec<G1Projective> = (0..width)
        .map(|_| g1() * random_scalar(&mut rng).unwrap())
        .collect();
    let v2: Vec<G2Projective> = (0..width)
        .map(|_| g2() * random_scalar(&mut rng).unwrap())
        .collect();
    (normalize_g1(&v1), normalize_g2(&v2))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(4))]

    /// Property: honest arguments verify for any witness and transcript label.
    #[test]
    fn prop_honest_argument_verifies(
        log_width in 0usize..4,
        seed in any::<u64>(),
        label in prop::collection::vec(any::<u8>(), 0..16),
    ) {
        create_test_logger("prop_honest_argument_verifies");
        let width = 1 << log_width;
        let params = SetupParams::new(width, "dd-proptest").unwrap();
        let (v1, v2) = witness(width, seed);
        let statement = Statement::for_witness(&params, &v1, &v2).unwrap();

        let mut prover = Transcript::new(b"dd-proptest");
        prover.append_message(b"label", &label);
        let proof = {
            trace_time!("prove width {}", width);
            InnerProductProof::prove(&params, &mut prover, &statement, &v1, &v2).unwrap()
        };

        let mut verifier = Transcript::new(b"dd-proptest");
        verifier.append_message(b"label", &label);
        prop_assert!(proof.verify(&params, &mut verifier, &statement).is_ok());
    }

    /// Property: swapping in a different folded witness is always rejected.
    #[test]
    fn prop_modified_leaf_rejected(seed in any::<u64>(), tweak in 1u64..1000) {
        let params = SetupParams::new(2, "dd-proptest").unwrap();
        let (v1, v2) = witness(2, seed);
        let statement = Statement::for_witness(&params, &v1, &v2).unwrap();
        let mut proof = InnerProductProof::prove(
            &params,
            &mut Transcript::new(b"dd-proptest"),
            &statement,
            &v1,
            &v2,
        )
        .unwrap();

        proof.e1 = (g1() * Scalar::from(tweak) + proof.e1).into_affine();
        prop_assert_eq!(
            proof.verify(&params, &mut Transcript::new(b"dd-proptest"), &statement),
            Err(Error::ArgumentRejected)
        );
    }
}
