// Copyright (c) 2025 The Botho Foundation

//! Challenge derivation shared by the signer and the verifier.

use ark_ec::CurveGroup;
use dd_crypto_dory::{
    backend::{g1, g2, pairing, G1Affine, Gt, Scalar},
    Statement, TranscriptProtocol,
};
use merlin::Transcript;

use super::{params::PublicParams, proof::ProofDigest};
use crate::domain_separators::{RING_PROOF_TRANSCRIPT_LABEL, TAG_PROOF_TRANSCRIPT_LABEL};

/// Transcript for a ring proof, after absorbing the ring and the first
/// prover message `(T, R)`.
pub(crate) fn ring_transcript(
    params: &PublicParams,
    ephemeral_key: &G1Affine,
    nonce_commitment: &G1Affine,
) -> Transcript {
    let ring = params.preprocessed_ring();
    let mut transcript = Transcript::new(RING_PROOF_TRANSCRIPT_LABEL);
    transcript.append_message(b"setup-domain", params.setup().domain().as_bytes());
    transcript.append_usize(b"width", params.setup().width());
    transcript.append_usize(b"ring-size", ring.size());
    transcript.append_gt(b"ring-commitment", ring.ring_commitment());
    transcript.append_gt(b"membership-commitment", ring.membership_commitment());
    transcript.append_g1(b"ephemeral-key", ephemeral_key);
    transcript.append_g1(b"nonce-commitment", nonce_commitment);
    transcript
}

/// The ring challenge `c` the split challenges must sum to.
pub(crate) fn ring_challenge(transcript: &mut Transcript) -> Scalar {
    transcript.challenge_scalar(b"ring-challenge")
}

/// Absorb the response and the challenge-split commitment, then squeeze
/// the shift `λ` applied to every ring key.
pub(crate) fn shift_challenge(
    transcript: &mut Transcript,
    response: &Scalar,
    challenge_commitment: &Gt,
) -> Scalar {
    transcript.append_scalar(b"response", response);
    transcript.append_gt(b"challenge-commitment", challenge_commitment);
    transcript.challenge_scalar(b"shift")
}

/// The statement the inner-product argument proves for a ring proof:
///
/// - `C  = e(R + (λ·c - z)·g1, g2)`, which equals `<pk + λ·g1, c·g2>` exactly
///   when the split challenges sum to `c` and `z` answers them
/// - `D1 = <pk, Γ2> + λ·e(g1, Σ_{i<n} Γ2[i])`, the shifted ring
/// - `D2`, the committed challenge split
pub(crate) fn ring_statement(
    params: &PublicParams,
    nonce_commitment: &G1Affine,
    response: &Scalar,
    challenge: &Scalar,
    shift: &Scalar,
    challenge_commitment: &Gt,
) -> Statement {
    let ring = params.preprocessed_ring();
    let offset = g1() * (*shift * challenge - response);
    let c = pairing((offset + nonce_commitment).into_affine(), g2());
    let d1 = *ring.ring_commitment() + *ring.membership_commitment() * shift;
    Statement {
        c,
        d1,
        d2: *challenge_commitment,
    }
}

/// `e = H(prefix, message, ring_digest, T, K)`.
pub(crate) fn tag_challenge(
    message: &[u8],
    prefix: &[u8],
    ring_digest: &ProofDigest,
    ephemeral_key: &G1Affine,
    tag_nonce: &G1Affine,
) -> Scalar {
    let mut transcript = Transcript::new(TAG_PROOF_TRANSCRIPT_LABEL);
    transcript.append_message(b"prefix", prefix);
    transcript.append_message(b"message", message);
    transcript.append_message(b"ring-proof-digest", ring_digest.as_bytes());
    transcript.append_g1(b"ephemeral-key", ephemeral_key);
    transcript.append_g1(b"tag-nonce", tag_nonce);
    transcript.challenge_scalar(b"tag-challenge")
}
