// Copyright (c) 2025 The Botho Foundation

//! Pairing backend.
//!
//! Every group, field and pairing operation the protocol performs goes
//! through the names in this module. The concrete backend is BLS12-381 from
//! arkworks; switching curves means re-pointing these aliases and helpers.

use ark_bls12_381::{g1, g2, Bls12_381};
use ark_ec::{
    hashing::{curve_maps::wb::WBMap, map_to_curve_hasher::MapToCurveBasedHasher, HashToCurve},
    pairing::{Pairing, PairingOutput},
    AffineRepr, CurveGroup, VariableBaseMSM,
};
use ark_ff::{field_hashers::DefaultFieldHasher, Field, PrimeField};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use rand_core::{CryptoRng, RngCore};
use sha2::Sha256;

use crate::error::{Error, Result};

/// The scalar field of the pairing groups.
pub type Scalar = ark_bls12_381::Fr;
/// First source group, affine form.
pub type G1Affine = ark_bls12_381::G1Affine;
/// First source group, projective form.
pub type G1Projective = ark_bls12_381::G1Projective;
/// Second source group, affine form.
pub type G2Affine = ark_bls12_381::G2Affine;
/// Second source group, projective form.
pub type G2Projective = ark_bls12_381::G2Projective;
/// Target group, written additively.
pub type Gt = PairingOutput<Bls12_381>;

/// Compressed size of a scalar.
pub const SCALAR_BYTES: usize = 32;
/// Compressed size of a G1 element.
pub const G1_BYTES: usize = 48;
/// Compressed size of a G2 element.
pub const G2_BYTES: usize = 96;
/// Compressed size of a target group element.
pub const GT_BYTES: usize = 576;

type G1Hasher = MapToCurveBasedHasher<G1Projective, DefaultFieldHasher<Sha256, 128>, WBMap<g1::Config>>;
type G2Hasher = MapToCurveBasedHasher<G2Projective, DefaultFieldHasher<Sha256, 128>, WBMap<g2::Config>>;

/// Longest domain separation tag accepted by the hash-to-curve expander.
pub const MAX_DST_BYTES: usize = 255;

/// Fixed generator of G1.
pub fn g1() -> G1Affine {
    G1Affine::generator()
}

/// Fixed generator of G2.
pub fn g2() -> G2Affine {
    G2Affine::generator()
}

/// `e(p, q)`.
pub fn pairing(p: G1Affine, q: G2Affine) -> Gt {
    Bls12_381::pairing(p, q)
}

/// `Σ e(a_i, b_i)` with a single final exponentiation.
pub fn inner_pairing_product(a: &[G1Affine], b: &[G2Affine]) -> Result<Gt> {
    if a.len() != b.len() {
        return Err(Error::LengthMismatch {
            expected: a.len(),
            found: b.len(),
        });
    }
    Ok(Bls12_381::multi_pairing(a.iter().copied(), b.iter().copied()))
}

/// `Σ s_i · p_i` in G1.
pub fn msm_g1(bases: &[G1Affine], scalars: &[Scalar]) -> Result<G1Projective> {
    G1Projective::msm(bases, scalars).map_err(|found| Error::LengthMismatch {
        expected: bases.len(),
        found,
    })
}

/// Convert a batch of projective points to affine with one inversion.
pub fn normalize_g1(points: &[G1Projective]) -> Vec<G1Affine> {
    G1Projective::normalize_batch(points)
}

/// Convert a batch of projective points to affine with one inversion.
pub fn normalize_g2(points: &[G2Projective]) -> Vec<G2Affine> {
    G2Projective::normalize_batch(points)
}

/// Hash `msg` to G1 under the domain separation tag `dst`.
pub fn hash_to_g1(dst: &[u8], msg: &[u8]) -> Result<G1Affine> {
    let hasher = G1Hasher::new(dst).map_err(|_| Error::HashToCurve)?;
    hasher.hash(msg).map_err(|_| Error::HashToCurve)
}

/// Hash `msg` to G2 under the domain separation tag `dst`.
pub fn hash_to_g2(dst: &[u8], msg: &[u8]) -> Result<G2Affine> {
    let hasher = G2Hasher::new(dst).map_err(|_| Error::HashToCurve)?;
    hasher.hash(msg).map_err(|_| Error::HashToCurve)
}

/// Hash the messages `index.to_le_bytes()` for `index` in `0..count` to G1.
pub fn hash_indices_to_g1(dst: &[u8], count: usize) -> Result<Vec<G1Affine>> {
    let hasher = G1Hasher::new(dst).map_err(|_| Error::HashToCurve)?;
    map_indices(count, |i| {
        hasher
            .hash(&(i as u64).to_le_bytes())
            .map_err(|_| Error::HashToCurve)
    })
}

/// Hash the messages `index.to_le_bytes()` for `index` in `0..count` to G2.
pub fn hash_indices_to_g2(dst: &[u8], count: usize) -> Result<Vec<G2Affine>> {
    let hasher = G2Hasher::new(dst).map_err(|_| Error::HashToCurve)?;
    map_indices(count, |i| {
        hasher
            .hash(&(i as u64).to_le_bytes())
            .map_err(|_| Error::HashToCurve)
    })
}

#[cfg(feature = "parallel")]
fn map_indices<T, F>(count: usize, f: F) -> Result<Vec<T>>
where
    T: Send,
    F: Fn(usize) -> Result<T> + Sync + Send,
{
    use rayon::prelude::*;
    (0..count).into_par_iter().map(f).collect()
}

#[cfg(not(feature = "parallel"))]
fn map_indices<T, F>(count: usize, f: F) -> Result<Vec<T>>
where
    F: Fn(usize) -> Result<T>,
{
    (0..count).map(f).collect()
}

/// Draw a uniformly random scalar, surfacing RNG failure instead of
/// panicking.
pub fn random_scalar<R: RngCore + CryptoRng>(rng: &mut R) -> core::result::Result<Scalar, rand_core::Error> {
    let mut wide = [0u8; 64];
    rng.try_fill_bytes(&mut wide)?;
    let scalar = Scalar::from_le_bytes_mod_order(&wide);
    wide.iter_mut().for_each(|b| *b = 0);
    Ok(scalar)
}

/// Reduce 64 uniformly distributed bytes to a scalar.
pub fn scalar_from_wide_bytes(bytes: &[u8; 64]) -> Scalar {
    Scalar::from_le_bytes_mod_order(bytes)
}

/// Multiplicative inverse, `None` for zero.
pub fn invert(scalar: &Scalar) -> Option<Scalar> {
    scalar.inverse()
}

/// Append the compressed encoding of `value` to `out`.
pub fn write_compressed<T: CanonicalSerialize>(value: &T, out: &mut Vec<u8>) -> Result<()> {
    value
        .serialize_compressed(out)
        .map_err(|_| Error::Serialization)
}

/// Compressed encoding of `value` as a fresh buffer.
pub fn to_compressed<T: CanonicalSerialize>(value: &T) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(value.compressed_size());
    write_compressed(value, &mut out)?;
    Ok(out)
}

/// Compressed G1 encoding as a fixed-size array. A valid affine point
/// always fills exactly `G1_BYTES`.
pub fn compress_g1(point: &G1Affine) -> [u8; G1_BYTES] {
    let mut out = [0u8; G1_BYTES];
    let written = point.serialize_compressed(&mut out[..]);
    debug_assert!(written.is_ok(), "G1 compression into G1_BYTES failed");
    out
}

/// Decode a compressed element from the front of `bytes`, returning the
/// element and the unread remainder. Subgroup and canonicity checks are
/// applied.
pub fn read_compressed<T: CanonicalDeserialize>(bytes: &[u8], len: usize) -> Result<(T, &[u8])> {
    if bytes.len() < len {
        return Err(Error::Serialization);
    }
    let (head, rest) = bytes.split_at(len);
    let value = T::deserialize_compressed(head).map_err(|_| Error::Serialization)?;
    Ok((value, rest))
}
