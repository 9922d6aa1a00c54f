// Copyright (c) 2025 The Botho Foundation

//! Transparent setup.
//!
//! Generators are derived by hashing to the curve, so anyone can rebuild the
//! parameters from `(width, domain)` and nobody knows a discrete-log relation
//! between them. The same domain always yields the same generator at a given
//! index, so a narrow setup is a prefix of a wider one.

use std::fmt;

use tracing::debug;

use crate::{
    backend::{
        hash_indices_to_g1, hash_indices_to_g2, inner_pairing_product, pairing, G1Affine,
        G2Affine, Gt, MAX_DST_BYTES,
    },
    error::{Error, Result},
};

/// Largest supported vector width.
pub const MAX_WIDTH: usize = 1 << 16;

/// Largest supported number of folding rounds, `log2(MAX_WIDTH)`.
pub const MAX_ROUNDS: usize = MAX_WIDTH.trailing_zeros() as usize;

/// Longest accepted domain string. Leaves room for the suffixes appended to
/// form the hash-to-curve tags.
pub const MAX_DOMAIN_BYTES: usize = 200;

const G1_TAG_SUFFIX: &str = "-dory-gamma1";
const G2_TAG_SUFFIX: &str = "-dory-gamma2";

/// Pairings of generator blocks needed by the verifier at one folding level.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct RoundTable {
    /// `<Γ1[h..2h], Γ2[..h]>`
    pub delta_1_right: Gt,
    /// `<Γ1[..h], Γ2[h..2h]>`
    pub delta_2_right: Gt,
}

/// Public parameters for vectors of a fixed power-of-two width.
#[derive(Clone, Eq, PartialEq)]
pub struct SetupParams {
    domain: String,
    gamma_1: Vec<G1Affine>,
    gamma_2: Vec<G2Affine>,
    /// `chi[k] = <Γ1[..2^k], Γ2[..2^k]>` for `k = 0..=rounds`.
    chi: Vec<Gt>,
    /// Indexed by `k - 1` for `k = 1..=rounds`.
    tables: Vec<RoundTable>,
}

impl SetupParams {
    /// Derive parameters for vectors of length `width` under `domain`.
    pub fn new(width: usize, domain: &str) -> Result<Self> {
        if !width.is_power_of_two() || width > MAX_WIDTH {
            return Err(Error::UnsupportedWidth(width));
        }
        if domain.len() > MAX_DOMAIN_BYTES {
            return Err(Error::HashToCurve);
        }
        debug_assert!(domain.len() + G1_TAG_SUFFIX.len() <= MAX_DST_BYTES);

        let g1_tag = format!("{domain}{G1_TAG_SUFFIX}");
        let g2_tag = format!("{domain}{G2_TAG_SUFFIX}");
        let gamma_1 = hash_indices_to_g1(g1_tag.as_bytes(), width)?;
        let gamma_2 = hash_indices_to_g2(g2_tag.as_bytes(), width)?;

        let rounds = width.trailing_zeros() as usize;
        let mut chi = Vec::with_capacity(rounds + 1);
        chi.push(pairing(gamma_1[0], gamma_2[0]));
        let mut tables = Vec::with_capacity(rounds);
        for k in 1..=rounds {
            let h = 1usize << (k - 1);
            let delta_1_right = inner_pairing_product(&gamma_1[h..2 * h], &gamma_2[..h])?;
            let delta_2_right = inner_pairing_product(&gamma_1[..h], &gamma_2[h..2 * h])?;
            let upper_right = inner_pairing_product(&gamma_1[h..2 * h], &gamma_2[h..2 * h])?;
            // <Γ1[..2h], Γ2[..2h]> only needs the diagonal blocks.
            chi.push(chi[k - 1] + upper_right);
            tables.push(RoundTable {
                delta_1_right,
                delta_2_right,
            });
        }

        debug!(width, rounds, domain, "derived dory setup");
        Ok(Self {
            domain: domain.to_owned(),
            gamma_1,
            gamma_2,
            chi,
            tables,
        })
    }

    /// Vector width these parameters support.
    pub fn width(&self) -> usize {
        self.gamma_1.len()
    }

    /// Number of folding rounds in an argument, `log2(width)`.
    pub fn rounds(&self) -> usize {
        self.tables.len()
    }

    /// Domain the generators were derived under.
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// `Γ1`.
    pub fn g1_generators(&self) -> &[G1Affine] {
        &self.gamma_1
    }

    /// `Γ2`.
    pub fn g2_generators(&self) -> &[G2Affine] {
        &self.gamma_2
    }

    /// `<Γ1[..2^k], Γ2[..2^k]>`.
    pub(crate) fn chi(&self, k: usize) -> Gt {
        self.chi[k]
    }

    /// Tables for the round that folds width `2^k` to `2^(k-1)`.
    pub(crate) fn table(&self, k: usize) -> &RoundTable {
        &self.tables[k - 1]
    }
}

impl fmt::Debug for SetupParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SetupParams")
            .field("domain", &self.domain)
            .field("width", &self.width())
            .field("rounds", &self.rounds())
            .finish()
    }
}
