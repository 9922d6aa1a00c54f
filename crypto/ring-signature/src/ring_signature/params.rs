// Copyright (c) 2025 The Botho Foundation

//! Public parameters: commitment setup plus the preprocessed ring.

use ark_ec::CurveGroup;
use dd_crypto_dory::{
    backend::{g1, pairing, G1Affine, G2Projective, Gt},
    commit_g1_vector, SetupParams,
};
use tracing::debug;

use super::{ring::Ring, ParameterError, Result, RingError};
use crate::config::SchemeConfig;

/// Derive commitment parameters able to hold a ring of `ring_size` keys.
///
/// The width is the next power of two, raised to `config.min_width`. The
/// generators are hashed from `config.domain`, so anyone can regenerate and
/// audit the result.
pub fn generate_parameters(ring_size: usize, config: &SchemeConfig) -> Result<SetupParams> {
    config.validate()?;
    if ring_size == 0 {
        return Err(ParameterError::ZeroRingSize.into());
    }
    if ring_size > config.max_ring_size {
        return Err(ParameterError::RingTooLarge {
            size: ring_size,
            max: config.max_ring_size,
        }
        .into());
    }

    let width = ring_size.next_power_of_two().max(config.min_width);
    debug!(ring_size, width, "generating commitment parameters");
    Ok(SetupParams::new(width, &config.domain)?)
}

/// Signer-independent commitments to one ring, reused by every signature
/// made or checked against it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PreprocessedRing {
    /// `<pk, Γ2[..n]>`
    ring_commitment: Gt,
    /// `e(g1, Σ_{i<n} Γ2[i])`: commits to the indicator of occupied slots.
    membership_commitment: Gt,
    size: usize,
    width: usize,
}

impl PreprocessedRing {
    /// Commit to `ring` under `setup`.
    pub fn new(setup: &SetupParams, ring: &Ring) -> Result<Self> {
        if ring.is_empty() {
            return Err(RingError::Empty.into());
        }
        if ring.len() > setup.width() {
            return Err(RingError::TooWide {
                size: ring.len(),
                width: setup.width(),
            }
            .into());
        }

        let keys: Vec<G1Affine> = ring.iter().map(|pk| *pk.as_point()).collect();
        let ring_commitment = commit_g1_vector(setup, &keys)?;
        let occupied: G2Projective = setup.g2_generators()[..ring.len()].iter().sum();
        let membership_commitment = pairing(g1(), occupied.into_affine());

        debug!(size = ring.len(), width = setup.width(), "preprocessed ring");
        Ok(Self {
            ring_commitment,
            membership_commitment,
            size: ring.len(),
            width: setup.width(),
        })
    }

    /// Number of ring members committed to.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Width of the setup the ring was committed under.
    pub fn width(&self) -> usize {
        self.width
    }

    pub(crate) fn ring_commitment(&self) -> &Gt {
        &self.ring_commitment
    }

    pub(crate) fn membership_commitment(&self) -> &Gt {
        &self.membership_commitment
    }
}

/// Everything signers and verifiers of one ring share. Immutable once built.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PublicParams {
    setup: SetupParams,
    ring: PreprocessedRing,
}

impl PublicParams {
    /// Combine a setup with a ring preprocessed under it.
    pub fn new(setup: SetupParams, ring: PreprocessedRing) -> Result<Self> {
        if ring.width() != setup.width() {
            return Err(RingError::WidthMismatch {
                expected: setup.width(),
                found: ring.width(),
            }
            .into());
        }
        Ok(Self { setup, ring })
    }

    /// Generate parameters sized for `ring` and preprocess it.
    pub fn for_ring(ring: &Ring, config: &SchemeConfig) -> Result<Self> {
        let setup = generate_parameters(ring.len(), config)?;
        let preprocessed = PreprocessedRing::new(&setup, ring)?;
        Self::new(setup, preprocessed)
    }

    /// The commitment setup.
    pub fn setup(&self) -> &SetupParams {
        &self.setup
    }

    /// The preprocessed ring.
    pub fn preprocessed_ring(&self) -> &PreprocessedRing {
        &self.ring
    }

    /// Number of ring members.
    pub fn ring_size(&self) -> usize {
        self.ring.size()
    }

    /// Folding rounds in every ring proof under these parameters.
    pub fn rounds(&self) -> usize {
        self.setup.rounds()
    }

    /// Recompute the preprocessing for `ring` and compare, to audit
    /// parameters received from someone else.
    pub fn matches_ring(&self, ring: &Ring) -> bool {
        PreprocessedRing::new(&self.setup, ring)
            .map(|recomputed| recomputed == self.ring)
            .unwrap_or(false)
    }
}
