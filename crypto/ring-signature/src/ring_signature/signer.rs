// Copyright (c) 2025 The Botho Foundation

//! DualDory signing.
//!
//! The ring proof is a DualRing-style sum argument: the signer picks random
//! challenges for every other member, closes the ring with its own secret so
//! that all challenges sum to the transcript challenge `c`, and then proves
//! with a Dory inner-product argument that the committed challenge vector
//! pairs correctly with the committed ring. None of this depends on the
//! message, so it can run offline; the online tag proof is a Schnorr proof
//! for the ring proof's ephemeral key.

use ark_ec::CurveGroup;
use ark_std::Zero;
use dd_crypto_dory::{
    backend::{
        g1, g2, msm_g1, normalize_g1, normalize_g2, pairing, random_scalar, G1Affine,
        G1Projective, G2Projective, Scalar,
    },
    InnerProductProof,
};
use rand_core::{CryptoRng, RngCore};
use tracing::{debug, trace};
use zeroize::Zeroize;

use super::{
    keys::PrivateKey,
    params::PublicParams,
    proof::RingProof,
    ring::Ring,
    signature::{PartialSignature, PreprocessedRandomness, RingSignature},
    transcript::{ring_challenge, ring_statement, ring_transcript, shift_challenge},
    Error, Result, RingError,
};

fn draw<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Scalar> {
    random_scalar(rng).map_err(|e| Error::RandomnessUnavailable(e.to_string()))
}

impl PrivateKey {
    /// Sign `message` under `prefix` as an anonymous member of `ring`.
    ///
    /// Equivalent to [`PrivateKey::preprocess_ring_proof`] followed by
    /// [`PartialSignature::append_tag_proof`]; with the same RNG state both
    /// paths produce identical signatures.
    ///
    /// `params` must have been preprocessed for exactly this `ring`. The key
    /// must be a ring member, otherwise [`Error::SignerNotInRing`].
    pub fn sign<R: RngCore + CryptoRng>(
        &self,
        params: &PublicParams,
        message: &[u8],
        prefix: &[u8],
        ring: &Ring,
        rng: &mut R,
    ) -> Result<RingSignature> {
        let (randomness, partial) = self.preprocess_ring_proof(params, ring, rng)?;
        partial.append_tag_proof(randomness, message, prefix)
    }

    /// Offline phase: build the ring membership proof before the message is
    /// known.
    ///
    /// The returned randomness must be handed, unchanged, to
    /// [`PartialSignature::append_tag_proof`] on the returned partial
    /// signature. Nothing is returned if the randomness source fails.
    pub fn preprocess_ring_proof<R: RngCore + CryptoRng>(
        &self,
        params: &PublicParams,
        ring: &Ring,
        rng: &mut R,
    ) -> Result<(PreprocessedRandomness, PartialSignature)> {
        if ring.len() != params.ring_size() {
            return Err(RingError::SizeMismatch {
                expected: params.ring_size(),
                found: ring.len(),
            }
            .into());
        }
        let signer_index = ring
            .position(&self.public_key())
            .ok_or(Error::SignerNotInRing)?;

        let setup = params.setup();
        let width = setup.width();
        let ring_size = ring.len();

        let randomness = PreprocessedRandomness::new(draw(rng)?, draw(rng)?);
        let mut nonce = draw(rng)?;
        let mut challenges = vec![Scalar::zero(); width];
        for (index, challenge) in challenges.iter_mut().enumerate().take(ring_size) {
            if index != signer_index {
                *challenge = draw(rng)?;
            }
        }

        let keys: Vec<G1Affine> = ring.iter().map(|pk| *pk.as_point()).collect();
        // The signer's slot is still zero here.
        let others = msm_g1(&keys, &challenges[..ring_size])?;
        let nonce_commitment = (g1() * nonce + others).into_affine();

        let mut transcript = ring_transcript(params, randomness.ephemeral_key(), &nonce_commitment);
        let challenge = ring_challenge(&mut transcript);
        let assigned: Scalar = challenges.iter().sum();
        challenges[signer_index] = challenge - assigned;
        let response = nonce - challenges[signer_index] * self.scalar();
        nonce.zeroize();

        let split = msm_g1(setup.g1_generators(), &challenges)?;
        let challenge_commitment = pairing(split.into_affine(), g2());
        let shift = shift_challenge(&mut transcript, &response, &challenge_commitment);

        let shift_point = g1() * shift;
        let shifted_keys: Vec<G1Projective> = (0..width)
            .map(|i| match keys.get(i) {
                Some(key) => shift_point + key,
                None => G1Projective::zero(),
            })
            .collect();
        let scaled_generators: Vec<G2Projective> = challenges.iter().map(|c| g2() * c).collect();
        let v1 = normalize_g1(&shifted_keys);
        let v2 = normalize_g2(&scaled_generators);

        let statement = ring_statement(
            params,
            &nonce_commitment,
            &response,
            &challenge,
            &shift,
            &challenge_commitment,
        );
        trace!(width, "proving ring statement");
        let argument = InnerProductProof::prove(setup, &mut transcript, &statement, &v1, &v2)?;
        challenges.zeroize();

        debug!(ring_size, width, rounds = argument.rounds.len(), "preprocessed ring proof");
        let ring_proof = RingProof::new(
            *randomness.ephemeral_key(),
            nonce_commitment,
            response,
            challenge_commitment,
            argument,
        );
        Ok((randomness, PartialSignature::new(ring_proof)))
    }
}
