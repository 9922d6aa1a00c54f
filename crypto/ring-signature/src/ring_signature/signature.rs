// Copyright (c) 2025 The Botho Foundation

//! Complete and partial signatures, and the secret state between the
//! offline and online signing phases.

use core::fmt;

use ark_ec::CurveGroup;
use dd_crypto_dory::backend::{g1, G1Affine, Scalar};
use tracing::debug;
use zeroize::Zeroize;

use super::{
    params::PublicParams,
    proof::{RingProof, TagProof},
    transcript::tag_challenge,
    verifier, Error, Result,
};

/// A DualDory ring signature: a ring membership proof plus a tag binding it
/// to a message and prefix. Both signing paths produce this same type.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RingSignature {
    ring_proof: RingProof,
    tag_proof: TagProof,
}

impl RingSignature {
    pub(crate) fn from_parts(ring_proof: RingProof, tag_proof: TagProof) -> Self {
        Self {
            ring_proof,
            tag_proof,
        }
    }

    /// The ring membership proof.
    pub fn ring_proof(&self) -> &RingProof {
        &self.ring_proof
    }

    /// The message-binding proof.
    pub fn tag_proof(&self) -> &TagProof {
        &self.tag_proof
    }

    /// Verify against `params`, `message` and `prefix`. See
    /// [`verify`](super::verify).
    pub fn verify(&self, params: &PublicParams, message: &[u8], prefix: &[u8]) -> Result<()> {
        verifier::verify(params, message, prefix, self)
    }
}

/// Secret output of the offline phase. Consumed by exactly one
/// [`PartialSignature::append_tag_proof`] call; it cannot be cloned, and
/// its scalars are wiped when it is dropped.
pub struct PreprocessedRandomness {
    /// `t`, the discrete log of the ring proof's ephemeral key.
    ephemeral_secret: Scalar,
    /// `k`, the tag proof nonce.
    tag_nonce: Scalar,
    /// `T = t · g1`, identifies the ring proof this belongs to.
    ephemeral_key: G1Affine,
}

impl PreprocessedRandomness {
    pub(crate) fn new(ephemeral_secret: Scalar, tag_nonce: Scalar) -> Self {
        Self {
            ephemeral_secret,
            tag_nonce,
            ephemeral_key: (g1() * ephemeral_secret).into_affine(),
        }
    }

    /// `T`, public.
    pub fn ephemeral_key(&self) -> &G1Affine {
        &self.ephemeral_key
    }
}

impl Drop for PreprocessedRandomness {
    fn drop(&mut self) {
        self.ephemeral_secret.zeroize();
        self.tag_nonce.zeroize();
    }
}

impl fmt::Debug for PreprocessedRandomness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreprocessedRandomness")
            .field("ephemeral_key", &self.ephemeral_key)
            .finish_non_exhaustive()
    }
}

/// Output of the offline phase: a ring proof awaiting its tag.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PartialSignature {
    ring_proof: RingProof,
}

impl PartialSignature {
    pub(crate) fn new(ring_proof: RingProof) -> Self {
        Self { ring_proof }
    }

    /// The completed ring membership proof.
    pub fn ring_proof(&self) -> &RingProof {
        &self.ring_proof
    }

    /// Online phase: bind the ring proof to `message` and `prefix`.
    ///
    /// Consumes both the partial signature and its randomness, so the same
    /// offline work can never yield two tags. Reuse is a compile error:
    ///
    /// ```compile_fail
    /// # use dd_crypto_ring_signature::{PrivateKey, PublicParams, Ring, SchemeConfig};
    /// # use rand_core::OsRng;
    /// # let key = PrivateKey::keygen(&mut OsRng).unwrap();
    /// # let ring = Ring::new(vec![key.public_key()]);
    /// # let params = PublicParams::for_ring(&ring, &SchemeConfig::default()).unwrap();
    /// let (randomness, partial) = key.preprocess_ring_proof(&params, &ring, &mut OsRng).unwrap();
    /// let again = partial.clone();
    /// let first = partial.append_tag_proof(randomness, b"first", b"ctx").unwrap();
    /// let second = again.append_tag_proof(randomness, b"second", b"ctx").unwrap();
    /// ```
    ///
    /// Randomness from a different offline run is rejected with
    /// [`Error::RandomnessMismatch`].
    pub fn append_tag_proof(
        self,
        randomness: PreprocessedRandomness,
        message: &[u8],
        prefix: &[u8],
    ) -> Result<RingSignature> {
        if randomness.ephemeral_key != *self.ring_proof.ephemeral_key() {
            return Err(Error::RandomnessMismatch);
        }

        let ring_digest = self.ring_proof.current_digest()?;
        let tag_nonce = (g1() * randomness.tag_nonce).into_affine();
        let challenge = tag_challenge(
            message,
            prefix,
            &ring_digest,
            &randomness.ephemeral_key,
            &tag_nonce,
        );
        let response = randomness.tag_nonce + challenge * randomness.ephemeral_secret;
        drop(randomness);

        debug!(message_len = message.len(), prefix_len = prefix.len(), "appended tag proof");
        Ok(RingSignature::from_parts(
            self.ring_proof,
            TagProof::new(ring_digest, challenge, response),
        ))
    }
}
