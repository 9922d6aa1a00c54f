// Copyright (c) 2025 The Botho Foundation

#![deny(unsafe_code)]
#![deny(missing_docs)]

//! Dory: transparent inner-pairing-product commitments over BLS12-381.
//!
//! This crate provides the commitment layer the DualDory ring signature is
//! built on:
//!
//! - [`SetupParams`]: hash-derived generators `Γ1`, `Γ2` for a power-of-two
//!   width, with the generator pairings the verifier needs precomputed.
//! - [`commit_g1_vector`] / [`commit_g2_vector`]: commitments to vectors of
//!   group elements as inner pairing products against the generators.
//! - [`InnerProductProof`]: the Dory-Reduce argument, proving knowledge of a
//!   vector pair `(v1, v2)` behind a [`Statement`] in `log2(width)` rounds.
//!
//! All arithmetic is reached through [`backend`].
//!
//! # Example
//!
//! ```rust,no_run
//! use dd_crypto_dory::{backend, InnerProductProof, SetupParams, Statement};
//! use merlin::Transcript;
//!
//! let params = SetupParams::new(4, "example").unwrap();
//! let v1 = vec![backend::g1(); 4];
//! let v2 = vec![backend::g2(); 4];
//! let statement = Statement::for_witness(&params, &v1, &v2).unwrap();
//!
//! let proof = InnerProductProof::prove(
//!     &params,
//!     &mut Transcript::new(b"example"),
//!     &statement,
//!     &v1,
//!     &v2,
//! )
//! .unwrap();
//! assert!(proof
//!     .verify(&params, &mut Transcript::new(b"example"), &statement)
//!     .is_ok());
//! ```
//!
//! # Sizes
//!
//! | Width | Rounds | Argument |
//! |-------|--------|----------|
//! | 4 | 2 | 7,056 bytes |
//! | 1,024 | 10 | 34,704 bytes |

pub mod backend;
pub mod commitment;
pub mod error;
pub mod params;
pub mod reduce;
pub mod transcript;

pub use commitment::{commit_g1_vector, commit_g2_vector, Statement};
pub use error::{Error, Result};
pub use params::{SetupParams, MAX_DOMAIN_BYTES, MAX_ROUNDS, MAX_WIDTH};
pub use reduce::{InnerProductProof, ReduceRound};
pub use transcript::TranscriptProtocol;
