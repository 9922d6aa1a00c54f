// Copyright (c) 2025 The Botho Foundation

//! Proof components and their memoized digests.
//!
//! A digest is computed only when asked for through [`Digestible`], and is
//! fixed for the lifetime of the component from then on. Verification uses
//! a cached digest when one is present and otherwise hashes on the fly
//! without touching the cache, so whether a component was digested never
//! changes a verification outcome.

use core::fmt;
use std::sync::OnceLock;

use blake2::{digest::consts::U32, Blake2b, Digest};
use dd_crypto_dory::{
    backend::{
        read_compressed, write_compressed, G1Affine, Gt, Scalar, G1_BYTES, GT_BYTES, SCALAR_BYTES,
    },
    InnerProductProof,
};
use subtle::{Choice, ConstantTimeEq};

use super::{ParseError, Result};
use crate::domain_separators::{RING_PROOF_DIGEST_DOMAIN_TAG, TAG_PROOF_DIGEST_DOMAIN_TAG};

/// Size of a proof digest.
pub const DIGEST_BYTES: usize = 32;

/// BLAKE2b-256 digest of a proof component's canonical encoding.
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct ProofDigest([u8; DIGEST_BYTES]);

impl ProofDigest {
    fn compute(domain: &[u8], rounds: usize, encoding: &[u8]) -> Self {
        let mut hasher = Blake2b::<U32>::new();
        hasher.update(domain);
        hasher.update((rounds as u64).to_le_bytes());
        hasher.update(encoding);
        Self(hasher.finalize().into())
    }

    /// Raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; DIGEST_BYTES] {
        &self.0
    }
}

impl From<[u8; DIGEST_BYTES]> for ProofDigest {
    fn from(src: [u8; DIGEST_BYTES]) -> Self {
        Self(src)
    }
}

impl AsRef<[u8]> for ProofDigest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl ConstantTimeEq for ProofDigest {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0[..].ct_eq(&other.0[..])
    }
}

impl fmt::Debug for ProofDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ProofDigest({})", hex::encode(self.0))
    }
}

/// Write-once digest slot. Racing first calls may each hash, but only one
/// value is installed and every caller observes that value.
#[derive(Clone, Default)]
struct DigestCache(OnceLock<ProofDigest>);

impl DigestCache {
    fn get(&self) -> Option<&ProofDigest> {
        self.0.get()
    }

    fn get_or_compute(&self, compute: impl FnOnce() -> Result<ProofDigest>) -> Result<&ProofDigest> {
        if let Some(digest) = self.0.get() {
            return Ok(digest);
        }
        let computed = compute()?;
        Ok(self.0.get_or_init(|| computed))
    }
}

impl fmt::Debug for DigestCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.get() {
            Some(digest) => write!(f, "Computed({digest:?})"),
            None => f.write_str("Uncomputed"),
        }
    }
}

/// Components with an on-demand, memoized digest.
pub trait Digestible {
    /// The component's digest. The first call hashes and stores the value;
    /// later calls return the stored value.
    fn digest(&self) -> Result<&ProofDigest>;

    /// Whether [`Digestible::digest`] has stored a value yet.
    fn is_digested(&self) -> bool;
}

/// The message-independent proof that the signer's key is in the ring.
#[derive(Clone, Debug)]
pub struct RingProof {
    /// `T = t · g1`, the committed randomness shared with the tag proof.
    ephemeral_key: G1Affine,
    /// `R = r · g1 + Σ_{i≠j} c_i · pk_i`.
    nonce_commitment: G1Affine,
    /// `z = r - c_j · sk`.
    response: Scalar,
    /// `e(Σ c_i · Γ1[i], g2)`: commitment to the challenge split.
    challenge_commitment: Gt,
    /// Argument tying the ring commitment, the challenge split and the
    /// response together.
    argument: InnerProductProof,
    digest: DigestCache,
}

impl RingProof {
    pub(crate) fn new(
        ephemeral_key: G1Affine,
        nonce_commitment: G1Affine,
        response: Scalar,
        challenge_commitment: Gt,
        argument: InnerProductProof,
    ) -> Self {
        Self {
            ephemeral_key,
            nonce_commitment,
            response,
            challenge_commitment,
            argument,
            digest: DigestCache::default(),
        }
    }

    /// `T`.
    pub fn ephemeral_key(&self) -> &G1Affine {
        &self.ephemeral_key
    }

    /// `R`.
    pub fn nonce_commitment(&self) -> &G1Affine {
        &self.nonce_commitment
    }

    /// `z`.
    pub fn response(&self) -> &Scalar {
        &self.response
    }

    /// `D2`.
    pub fn challenge_commitment(&self) -> &Gt {
        &self.challenge_commitment
    }

    /// The inner-product argument.
    pub fn argument(&self) -> &InnerProductProof {
        &self.argument
    }

    /// Folding rounds in the argument.
    pub fn rounds(&self) -> usize {
        self.argument.rounds.len()
    }

    /// Encoded size for a given number of rounds.
    pub const fn serialized_size(rounds: usize) -> usize {
        2 * G1_BYTES + SCALAR_BYTES + GT_BYTES + InnerProductProof::serialized_size(rounds)
    }

    pub(crate) fn write_to(&self, out: &mut Vec<u8>) -> Result<()> {
        write_compressed(&self.ephemeral_key, out)?;
        write_compressed(&self.nonce_commitment, out)?;
        write_compressed(&self.response, out)?;
        write_compressed(&self.challenge_commitment, out)?;
        self.argument.write_to(out)?;
        Ok(())
    }

    pub(crate) fn read_from(bytes: &[u8], rounds: usize) -> core::result::Result<(Self, &[u8]), ParseError> {
        let invalid = |_| ParseError::InvalidElement;
        let (ephemeral_key, bytes) = read_compressed(bytes, G1_BYTES).map_err(invalid)?;
        let (nonce_commitment, bytes) = read_compressed(bytes, G1_BYTES).map_err(invalid)?;
        let (response, bytes) = read_compressed(bytes, SCALAR_BYTES).map_err(invalid)?;
        let (challenge_commitment, bytes) = read_compressed(bytes, GT_BYTES).map_err(invalid)?;
        let (argument, bytes) = InnerProductProof::read_from(bytes, rounds).map_err(invalid)?;
        Ok((
            Self::new(
                ephemeral_key,
                nonce_commitment,
                response,
                challenge_commitment,
                argument,
            ),
            bytes,
        ))
    }

    fn compute_digest(&self) -> Result<ProofDigest> {
        let mut encoding = Vec::with_capacity(Self::serialized_size(self.rounds()));
        self.write_to(&mut encoding)?;
        Ok(ProofDigest::compute(
            RING_PROOF_DIGEST_DOMAIN_TAG,
            self.rounds(),
            &encoding,
        ))
    }

    /// The cached digest if present, else a freshly computed one. Never
    /// populates the cache.
    pub(crate) fn current_digest(&self) -> Result<ProofDigest> {
        match self.digest.get() {
            Some(digest) => Ok(*digest),
            None => self.compute_digest(),
        }
    }
}

impl Digestible for RingProof {
    fn digest(&self) -> Result<&ProofDigest> {
        self.digest.get_or_compute(|| self.compute_digest())
    }

    fn is_digested(&self) -> bool {
        self.digest.get().is_some()
    }
}

impl PartialEq for RingProof {
    fn eq(&self, other: &Self) -> bool {
        self.ephemeral_key == other.ephemeral_key
            && self.nonce_commitment == other.nonce_commitment
            && self.response == other.response
            && self.challenge_commitment == other.challenge_commitment
            && self.argument == other.argument
    }
}

impl Eq for RingProof {}

/// The online proof binding a ring proof to a message and prefix: a Schnorr
/// proof of knowledge of `t` for the ring proof's ephemeral key.
#[derive(Clone, Debug)]
pub struct TagProof {
    /// Digest of the ring proof this tag was made for.
    ring_digest: ProofDigest,
    /// `e = H(prefix, message, ring_digest, T, k · g1)`.
    challenge: Scalar,
    /// `s = k + e · t`.
    response: Scalar,
    digest: DigestCache,
}

impl TagProof {
    pub(crate) fn new(ring_digest: ProofDigest, challenge: Scalar, response: Scalar) -> Self {
        Self {
            ring_digest,
            challenge,
            response,
            digest: DigestCache::default(),
        }
    }

    /// Digest of the ring proof this tag was made for.
    pub fn ring_digest(&self) -> &ProofDigest {
        &self.ring_digest
    }

    /// `e`.
    pub fn challenge(&self) -> &Scalar {
        &self.challenge
    }

    /// `s`.
    pub fn response(&self) -> &Scalar {
        &self.response
    }

    /// Encoded size.
    pub const SERIALIZED_SIZE: usize = DIGEST_BYTES + 2 * SCALAR_BYTES;

    pub(crate) fn write_to(&self, out: &mut Vec<u8>) -> Result<()> {
        out.extend_from_slice(self.ring_digest.as_bytes());
        write_compressed(&self.challenge, out)?;
        write_compressed(&self.response, out)?;
        Ok(())
    }

    pub(crate) fn read_from(bytes: &[u8]) -> core::result::Result<(Self, &[u8]), ParseError> {
        if bytes.len() < Self::SERIALIZED_SIZE {
            return Err(ParseError::Truncated {
                needed: Self::SERIALIZED_SIZE,
                available: bytes.len(),
            });
        }
        let (digest, bytes) = bytes.split_at(DIGEST_BYTES);
        let mut ring_digest = [0u8; DIGEST_BYTES];
        ring_digest.copy_from_slice(digest);
        let invalid = |_| ParseError::InvalidElement;
        let (challenge, bytes) = read_compressed(bytes, SCALAR_BYTES).map_err(invalid)?;
        let (response, bytes) = read_compressed(bytes, SCALAR_BYTES).map_err(invalid)?;
        Ok((Self::new(ring_digest.into(), challenge, response), bytes))
    }

    fn compute_digest(&self) -> Result<ProofDigest> {
        let mut encoding = Vec::with_capacity(Self::SERIALIZED_SIZE);
        self.write_to(&mut encoding)?;
        Ok(ProofDigest::compute(TAG_PROOF_DIGEST_DOMAIN_TAG, 0, &encoding))
    }
}

impl Digestible for TagProof {
    fn digest(&self) -> Result<&ProofDigest> {
        self.digest.get_or_compute(|| self.compute_digest())
    }

    fn is_digested(&self) -> bool {
        self.digest.get().is_some()
    }
}

impl PartialEq for TagProof {
    fn eq(&self, other: &Self) -> bool {
        self.ring_digest == other.ring_digest
            && self.challenge == other.challenge
            && self.response == other.response
    }
}

impl Eq for TagProof {}
