// Copyright (c) 2025 The Botho Foundation

#![deny(unsafe_code)]

//! DualDory: ring signatures with logarithmic size and offline/online
//! signing.
//!
//! A ring signature convinces a verifier that one member of a set of public
//! keys signed a message without revealing which. DualDory pairs a
//! DualRing-style challenge split with a Dory inner-product argument over
//! BLS12-381, so a signature grows with the logarithm of the ring size.
//!
//! Signing splits into two phases:
//!
//! - **Offline**: [`PrivateKey::preprocess_ring_proof`] builds the ring
//!   membership proof, the expensive part, before the message is known.
//! - **Online**: [`PartialSignature::append_tag_proof`] binds the message
//!   and prefix with a single Schnorr proof.
//!
//! # Example
//!
//! ```rust,no_run
//! use dd_crypto_ring_signature::{verify, PrivateKey, PublicParams, Ring, SchemeConfig};
//! use rand_core::OsRng;
//!
//! let keys: Vec<PrivateKey> = (0..8)
//!     .map(|_| PrivateKey::keygen(&mut OsRng))
//!     .collect::<Result<_, _>>()?;
//! let ring: Ring = keys.iter().map(PrivateKey::public_key).collect();
//!
//! // Generate and preprocess parameters once per ring.
//! let params = PublicParams::for_ring(&ring, &SchemeConfig::default())?;
//!
//! // Offline: prove membership.
//! let (randomness, partial) = keys[5].preprocess_ring_proof(&params, &ring, &mut OsRng)?;
//!
//! // Online: bind the message.
//! let signature = partial.append_tag_proof(randomness, b"Transfer 100 credits", b"ctx")?;
//!
//! verify(&params, b"Transfer 100 credits", b"ctx", &signature)?;
//! # Ok::<(), dd_crypto_ring_signature::Error>(())
//! ```
//!
//! # Signature Sizes
//!
//! | Ring size | Width | Rounds | Signature |
//! |-----------|-------|--------|-----------|
//! | 1-4 | 4 | 2 | 7,858 bytes |
//! | 16 | 16 | 4 | 14,770 bytes |
//! | 1,024 | 1,024 | 10 | 35,506 bytes |
//!
//! Public keys are 48 bytes. See [`signature_size`].

pub mod config;
pub mod domain_separators;
pub mod ring_signature;

pub use config::{SchemeConfig, DEFAULT_MIN_WIDTH};
pub use ring_signature::{
    generate_parameters, keygen, signature_size, verify, verify_batch, verify_batch_all,
    BatchVerifyResult, Digestible, Error, ParameterError, ParseError, PartialSignature,
    PreprocessedRandomness, PreprocessedRing, PrivateKey, ProofDigest, PublicKey, PublicParams,
    Result, Ring, RingError, RingProof, RingSignature, TagProof, VerificationError, DIGEST_BYTES,
    PUBLIC_KEY_BYTES, SIGNATURE_VERSION,
};
