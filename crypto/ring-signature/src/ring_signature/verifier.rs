// Copyright (c) 2025 The Botho Foundation

//! DualDory verification.

use ark_ec::{AffineRepr, CurveGroup};
use dd_crypto_dory::backend::g1;
use subtle::ConstantTimeEq;
use tracing::debug;

use super::{
    params::PublicParams,
    signature::RingSignature,
    transcript::{ring_challenge, ring_statement, ring_transcript, shift_challenge, tag_challenge},
    Result, VerificationError,
};

/// Verify a ring signature.
///
/// Checks, in order:
/// 1. the ring proof has the shape `params` require
///    ([`VerificationError::Malformed`]);
/// 2. the tag proof was made for this ring proof
///    ([`VerificationError::BindingMismatch`]);
/// 3. the tag proof binds `message` and `prefix` to the ring proof's
///    ephemeral key ([`VerificationError::BadTagProof`]);
/// 4. the ring proof shows membership in the ring `params` were
///    preprocessed for ([`VerificationError::BadRingProof`]).
///
/// Pure: neither `params` nor `signature` is modified, and a digest is read
/// from a proof's cache only if one was already stored.
pub fn verify(
    params: &PublicParams,
    message: &[u8],
    prefix: &[u8],
    signature: &RingSignature,
) -> Result<()> {
    let ring_proof = signature.ring_proof();
    let tag_proof = signature.tag_proof();

    if ring_proof.rounds() != params.rounds() || ring_proof.ephemeral_key().is_zero() {
        debug!(
            rounds = ring_proof.rounds(),
            expected = params.rounds(),
            "malformed ring signature"
        );
        return Err(VerificationError::Malformed.into());
    }

    let ring_digest = ring_proof.current_digest()?;
    if !bool::from(ring_digest.ct_eq(tag_proof.ring_digest())) {
        debug!("tag proof bound to a different ring proof");
        return Err(VerificationError::BindingMismatch.into());
    }

    // K = s·g1 - e·T
    let tag_nonce = (g1() * tag_proof.response()
        - *ring_proof.ephemeral_key() * tag_proof.challenge())
    .into_affine();
    let expected = tag_challenge(
        message,
        prefix,
        &ring_digest,
        ring_proof.ephemeral_key(),
        &tag_nonce,
    );
    if expected != *tag_proof.challenge() {
        debug!("tag proof rejected");
        return Err(VerificationError::BadTagProof.into());
    }

    let mut transcript = ring_transcript(
        params,
        ring_proof.ephemeral_key(),
        ring_proof.nonce_commitment(),
    );
    let challenge = ring_challenge(&mut transcript);
    let shift = shift_challenge(
        &mut transcript,
        ring_proof.response(),
        ring_proof.challenge_commitment(),
    );
    let statement = ring_statement(
        params,
        ring_proof.nonce_commitment(),
        ring_proof.response(),
        &challenge,
        &shift,
        ring_proof.challenge_commitment(),
    );
    ring_proof
        .argument()
        .verify(params.setup(), &mut transcript, &statement)
        .map_err(|err| {
            debug!(%err, "ring proof rejected");
            VerificationError::BadRingProof
        })?;

    Ok(())
}
