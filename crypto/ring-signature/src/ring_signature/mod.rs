// Copyright (c) 2025 The Botho Foundation

//! DualDory ring signatures.
//!
//! This module implements parameter generation, ring preprocessing, key
//! generation, one-shot and split signing, verification, digests and the
//! byte encoding.

mod encoding;
mod error;
mod keys;
mod params;
mod proof;
mod ring;
mod signature;
mod signer;
mod transcript;
mod verifier;

pub use encoding::{signature_size, SIGNATURE_VERSION};
pub use error::{Error, ParameterError, ParseError, Result, RingError, VerificationError};
pub use keys::{keygen, PrivateKey, PublicKey, PUBLIC_KEY_BYTES};
pub use params::{generate_parameters, PreprocessedRing, PublicParams};
pub use proof::{Digestible, ProofDigest, RingProof, TagProof, DIGEST_BYTES};
pub use ring::Ring;
pub use signature::{PartialSignature, PreprocessedRandomness, RingSignature};
pub use verifier::verify;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Batch verification result for a single signature.
#[derive(Clone, Debug)]
pub struct BatchVerifyResult {
    /// Index of the signature in the input batch.
    pub index: usize,
    /// Verification result.
    pub result: Result<()>,
}

/// Verify signatures made against the same parameters, each over its own
/// `(message, prefix)`.
///
/// Uses parallel execution when the `parallel` feature is enabled.
#[cfg(feature = "parallel")]
pub fn verify_batch<'a>(
    params: &PublicParams,
    items: impl IntoIterator<Item = (&'a [u8], &'a [u8], &'a RingSignature)>,
) -> Vec<BatchVerifyResult> {
    let items: Vec<_> = items.into_iter().collect();

    items
        .par_iter()
        .enumerate()
        .map(|(index, (message, prefix, signature))| BatchVerifyResult {
            index,
            result: verify(params, message, prefix, signature),
        })
        .collect()
}

/// Verify signatures made against the same parameters (serial version when
/// the parallel feature is disabled).
#[cfg(not(feature = "parallel"))]
pub fn verify_batch<'a>(
    params: &PublicParams,
    items: impl IntoIterator<Item = (&'a [u8], &'a [u8], &'a RingSignature)>,
) -> Vec<BatchVerifyResult> {
    items
        .into_iter()
        .enumerate()
        .map(|(index, (message, prefix, signature))| BatchVerifyResult {
            index,
            result: verify(params, message, prefix, signature),
        })
        .collect()
}

/// Check that every signature in a batch is valid.
///
/// Returns `Ok(())` if all verify, or the first error encountered.
#[cfg(feature = "parallel")]
pub fn verify_batch_all<'a>(
    params: &PublicParams,
    items: impl IntoIterator<Item = (&'a [u8], &'a [u8], &'a RingSignature)>,
) -> Result<()> {
    let items: Vec<_> = items.into_iter().collect();

    items
        .par_iter()
        .try_for_each(|(message, prefix, signature)| verify(params, message, prefix, signature))
}

/// Check that every signature in a batch is valid (serial version).
#[cfg(not(feature = "parallel"))]
pub fn verify_batch_all<'a>(
    params: &PublicParams,
    items: impl IntoIterator<Item = (&'a [u8], &'a [u8], &'a RingSignature)>,
) -> Result<()> {
    for (message, prefix, signature) in items {
        verify(params, message, prefix, signature)?;
    }
    Ok(())
}
