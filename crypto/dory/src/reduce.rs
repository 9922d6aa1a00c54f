// Copyright (c) 2025 The Botho Foundation

//! The Dory-Reduce inner-product argument.
//!
//! Each round halves the witness `(v1, v2)`. The prover sends the four
//! cross-commitments `D1L, D1R, D2L, D2R`, receives `β` which blinds the
//! witness with the generators, sends the cross terms `C+, C-`, and receives
//! `α` which folds the halves together. The verifier tracks the statement
//! `(C, D1, D2)` through every fold using only the precomputed generator
//! pairings, and checks the final width-one statement with a single
//! pairing after a last challenge `d`.
//!
//! The argument is not zero knowledge; callers must only prove statements
//! whose witnesses may be public.

use ark_ec::CurveGroup;
use ark_std::Zero;
use merlin::Transcript;
use tracing::trace;

use crate::{
    backend::{
        inner_pairing_product, invert, normalize_g1, normalize_g2, pairing, read_compressed,
        write_compressed, G1Affine, G1Projective, G2Affine, G2Projective, Gt, Scalar, G1_BYTES,
        G2_BYTES, GT_BYTES,
    },
    commitment::Statement,
    error::{Error, Result},
    params::{SetupParams, MAX_ROUNDS},
    transcript::TranscriptProtocol,
};

/// Messages sent by the prover in one folding round.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReduceRound {
    /// `<v1[..h], Γ2[..h]>`
    pub d1_left: Gt,
    /// `<v1[h..], Γ2[..h]>`
    pub d1_right: Gt,
    /// `<Γ1[..h], v2[..h]>`
    pub d2_left: Gt,
    /// `<Γ1[..h], v2[h..]>`
    pub d2_right: Gt,
    /// `<v1[..h], v2[h..]>` after blinding with `β`
    pub c_plus: Gt,
    /// `<v1[h..], v2[..h]>` after blinding with `β`
    pub c_minus: Gt,
}

impl ReduceRound {
    /// Encoded size of one round.
    pub const SIZE: usize = 6 * GT_BYTES;

    fn write_to(&self, out: &mut Vec<u8>) -> Result<()> {
        for element in [
            &self.d1_left,
            &self.d1_right,
            &self.d2_left,
            &self.d2_right,
            &self.c_plus,
            &self.c_minus,
        ] {
            write_compressed(element, out)?;
        }
        Ok(())
    }

    fn read_from(bytes: &[u8]) -> Result<(Self, &[u8])> {
        let (d1_left, bytes) = read_compressed(bytes, GT_BYTES)?;
        let (d1_right, bytes) = read_compressed(bytes, GT_BYTES)?;
        let (d2_left, bytes) = read_compressed(bytes, GT_BYTES)?;
        let (d2_right, bytes) = read_compressed(bytes, GT_BYTES)?;
        let (c_plus, bytes) = read_compressed(bytes, GT_BYTES)?;
        let (c_minus, bytes) = read_compressed(bytes, GT_BYTES)?;
        Ok((
            Self {
                d1_left,
                d1_right,
                d2_left,
                d2_right,
                c_plus,
                c_minus,
            },
            bytes,
        ))
    }
}

/// A logarithmic-size argument of knowledge of `(v1, v2)` satisfying a
/// [`Statement`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InnerProductProof {
    /// One entry per folding round, widest first.
    pub rounds: Vec<ReduceRound>,
    /// The folded G1 witness.
    pub e1: G1Affine,
    /// The folded G2 witness.
    pub e2: G2Affine,
}

fn append_statement(transcript: &mut Transcript, params: &SetupParams, statement: &Statement) {
    transcript.append_message(b"dory-domain", params.domain().as_bytes());
    transcript.append_usize(b"dory-width", params.width());
    transcript.append_gt(b"dory-c", &statement.c);
    transcript.append_gt(b"dory-d1", &statement.d1);
    transcript.append_gt(b"dory-d2", &statement.d2);
}

fn append_round_commitments(transcript: &mut Transcript, round: &ReduceRound) {
    transcript.append_gt(b"dory-d1-left", &round.d1_left);
    transcript.append_gt(b"dory-d1-right", &round.d1_right);
    transcript.append_gt(b"dory-d2-left", &round.d2_left);
    transcript.append_gt(b"dory-d2-right", &round.d2_right);
}

fn append_round_cross_terms(transcript: &mut Transcript, round: &ReduceRound) {
    transcript.append_gt(b"dory-c-plus", &round.c_plus);
    transcript.append_gt(b"dory-c-minus", &round.c_minus);
}

fn challenge_pair(
    transcript: &mut Transcript,
    label: &'static [u8],
) -> Result<(Scalar, Scalar)> {
    let challenge = transcript.challenge_nonzero_scalar(label)?;
    let inverse = invert(&challenge).ok_or(Error::ZeroChallenge)?;
    Ok((challenge, inverse))
}

impl InnerProductProof {
    /// Prove knowledge of `(v1, v2)` for `statement`. Both vectors must be
    /// exactly `params.width()` long.
    pub fn prove(
        params: &SetupParams,
        transcript: &mut Transcript,
        statement: &Statement,
        v1: &[G1Affine],
        v2: &[G2Affine],
    ) -> Result<Self> {
        let width = params.width();
        for len in [v1.len(), v2.len()] {
            if len != width {
                return Err(Error::LengthMismatch {
                    expected: width,
                    found: len,
                });
            }
        }

        append_statement(transcript, params, statement);

        let gamma_1 = params.g1_generators();
        let gamma_2 = params.g2_generators();
        let mut v1 = v1.to_vec();
        let mut v2 = v2.to_vec();
        let mut rounds = Vec::with_capacity(params.rounds());

        for k in (1..=params.rounds()).rev() {
            let h = 1usize << (k - 1);
            let d1_left = inner_pairing_product(&v1[..h], &gamma_2[..h])?;
            let d1_right = inner_pairing_product(&v1[h..], &gamma_2[..h])?;
            let d2_left = inner_pairing_product(&gamma_1[..h], &v2[..h])?;
            let d2_right = inner_pairing_product(&gamma_1[..h], &v2[h..])?;
            let mut round = ReduceRound {
                d1_left,
                d1_right,
                d2_left,
                d2_right,
                c_plus: Gt::zero(),
                c_minus: Gt::zero(),
            };
            append_round_commitments(transcript, &round);
            let (beta, beta_inv) = challenge_pair(transcript, b"dory-beta")?;

            let blinded_1: Vec<G1Projective> = v1
                .iter()
                .zip(&gamma_1[..2 * h])
                .map(|(v, g)| *g * beta + v)
                .collect();
            let blinded_2: Vec<G2Projective> = v2
                .iter()
                .zip(&gamma_2[..2 * h])
                .map(|(v, g)| *g * beta_inv + v)
                .collect();
            let blinded_1 = normalize_g1(&blinded_1);
            let blinded_2 = normalize_g2(&blinded_2);

            round.c_plus = inner_pairing_product(&blinded_1[..h], &blinded_2[h..])?;
            round.c_minus = inner_pairing_product(&blinded_1[h..], &blinded_2[..h])?;
            append_round_cross_terms(transcript, &round);
            let (alpha, alpha_inv) = challenge_pair(transcript, b"dory-alpha")?;

            let folded_1: Vec<G1Projective> = (0..h)
                .map(|i| blinded_1[i] * alpha + blinded_1[h + i])
                .collect();
            let folded_2: Vec<G2Projective> = (0..h)
                .map(|i| blinded_2[i] * alpha_inv + blinded_2[h + i])
                .collect();
            v1 = normalize_g1(&folded_1);
            v2 = normalize_g2(&folded_2);

            trace!(remaining = h, "dory reduce round");
            rounds.push(round);
        }

        let e1 = v1[0];
        let e2 = v2[0];
        transcript.append_g1(b"dory-e1", &e1);
        transcript.append_g2(b"dory-e2", &e2);
        // Keeps prover and verifier transcripts in the same state.
        challenge_pair(transcript, b"dory-final")?;

        Ok(Self { rounds, e1, e2 })
    }

    /// Check the argument against `statement`.
    pub fn verify(
        &self,
        params: &SetupParams,
        transcript: &mut Transcript,
        statement: &Statement,
    ) -> Result<()> {
        if self.rounds.len() != params.rounds() {
            return Err(Error::RoundCountMismatch {
                expected: params.rounds(),
                found: self.rounds.len(),
            });
        }

        append_statement(transcript, params, statement);

        let Statement {
            mut c,
            mut d1,
            mut d2,
        } = *statement;

        for (index, round) in self.rounds.iter().enumerate() {
            let k = params.rounds() - index;
            append_round_commitments(transcript, round);
            let (beta, beta_inv) = challenge_pair(transcript, b"dory-beta")?;
            append_round_cross_terms(transcript, round);
            let (alpha, alpha_inv) = challenge_pair(transcript, b"dory-alpha")?;

            let chi_next = params.chi(k - 1);
            let table = params.table(k);
            c = c
                + params.chi(k)
                + d2 * beta
                + d1 * beta_inv
                + round.c_plus * alpha
                + round.c_minus * alpha_inv;
            d1 = round.d1_left * alpha
                + round.d1_right
                + chi_next * (alpha * beta)
                + table.delta_1_right * beta;
            d2 = round.d2_left * alpha_inv
                + round.d2_right
                + chi_next * (alpha_inv * beta_inv)
                + table.delta_2_right * beta_inv;
        }

        transcript.append_g1(b"dory-e1", &self.e1);
        transcript.append_g2(b"dory-e2", &self.e2);
        let (d, d_inv) = challenge_pair(transcript, b"dory-final")?;

        let lhs = pairing(
            (params.g1_generators()[0] * d + self.e1).into_affine(),
            (params.g2_generators()[0] * d_inv + self.e2).into_affine(),
        );
        let rhs = c + params.chi(0) + d2 * d + d1 * d_inv;
        if lhs != rhs {
            return Err(Error::ArgumentRejected);
        }
        Ok(())
    }

    /// Encoded size of an argument with `rounds` folding rounds.
    pub const fn serialized_size(rounds: usize) -> usize {
        rounds * ReduceRound::SIZE + G1_BYTES + G2_BYTES
    }

    /// Append the canonical encoding: the rounds in order, then `e1`, `e2`.
    pub fn write_to(&self, out: &mut Vec<u8>) -> Result<()> {
        for round in &self.rounds {
            round.write_to(out)?;
        }
        write_compressed(&self.e1, out)?;
        write_compressed(&self.e2, out)
    }

    /// Decode an argument with a known number of rounds from the front of
    /// `bytes`, returning it and the unread remainder.
    pub fn read_from(bytes: &[u8], rounds: usize) -> Result<(Self, &[u8])> {
        if rounds > MAX_ROUNDS {
            return Err(Error::RoundCountMismatch {
                expected: MAX_ROUNDS,
                found: rounds,
            });
        }
        if bytes.len() < Self::serialized_size(rounds) {
            return Err(Error::Serialization);
        }
        let mut decoded = Vec::with_capacity(rounds);
        let mut rest = bytes;
        for _ in 0..rounds {
            let (round, tail) = ReduceRound::read_from(rest)?;
            decoded.push(round);
            rest = tail;
        }
        let (e1, rest) = read_compressed(rest, G1_BYTES)?;
        let (e2, rest) = read_compressed(rest, G2_BYTES)?;
        Ok((
            Self {
                rounds: decoded,
                e1,
                e2,
            },
            rest,
        ))
    }
}
