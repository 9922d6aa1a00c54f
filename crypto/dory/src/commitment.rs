// Copyright (c) 2025 The Botho Foundation

//! Inner-pairing-product commitments to vectors of group elements.

use crate::{
    backend::{inner_pairing_product, G1Affine, G2Affine, Gt},
    error::{Error, Result},
    params::SetupParams,
};

/// `<v, Γ2[..len(v)]>`: a commitment to a G1 vector.
pub fn commit_g1_vector(params: &SetupParams, v: &[G1Affine]) -> Result<Gt> {
    check_fits(params, v.len())?;
    inner_pairing_product(v, &params.g2_generators()[..v.len()])
}

/// `<Γ1[..len(w)], w>`: a commitment to a G2 vector.
pub fn commit_g2_vector(params: &SetupParams, w: &[G2Affine]) -> Result<Gt> {
    check_fits(params, w.len())?;
    inner_pairing_product(&params.g1_generators()[..w.len()], w)
}

fn check_fits(params: &SetupParams, len: usize) -> Result<()> {
    if len > params.width() {
        return Err(Error::LengthMismatch {
            expected: params.width(),
            found: len,
        });
    }
    Ok(())
}

/// Public claim about a hidden pair `(v1, v2)` of full-width vectors:
/// `c = <v1, v2>`, `d1 = <v1, Γ2>`, `d2 = <Γ1, v2>`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Statement {
    /// Inner pairing product of the two vectors.
    pub c: Gt,
    /// Commitment to the G1 vector.
    pub d1: Gt,
    /// Commitment to the G2 vector.
    pub d2: Gt,
}

impl Statement {
    /// Compute the statement for a witness directly. Mostly useful for
    /// tests; protocols usually derive `c`, `d1` and `d2` from
    /// their own public data.
    pub fn for_witness(params: &SetupParams, v1: &[G1Affine], v2: &[G2Affine]) -> Result<Self> {
        if v1.len() != params.width() {
            return Err(Error::LengthMismatch {
                expected: params.width(),
                found: v1.len(),
            });
        }
        Ok(Self {
            c: inner_pairing_product(v1, v2)?,
            d1: commit_g1_vector(params, v1)?,
            d2: commit_g2_vector(params, v2)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{g1, g2, pairing, random_scalar};
    use ark_ec::CurveGroup;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn commitments_are_linear_in_prefix() {
        let params = SetupParams::new(4, "dd-test").unwrap();
        let mut rng = ChaCha20Rng::seed_from_u64(11);
        let s = random_scalar(&mut rng).unwrap();
        let p = (g1() * s).into_affine();

        // A single entry commits against the first generator only.
        assert_eq!(
            commit_g1_vector(&params, &[p]).unwrap(),
            pairing(p, params.g2_generators()[0])
        );
        assert_eq!(
            commit_g2_vector(&params, &[g2()]).unwrap(),
            pairing(params.g1_generators()[0], g2())
        );
    }

    #[test]
    fn rejects_overwide_vectors() {
        let params = SetupParams::new(2, "dd-test").unwrap();
        assert_eq!(
            commit_g1_vector(&params, &[g1(); 3]),
            Err(Error::LengthMismatch {
                expected: 2,
                found: 3
            })
        );
        assert!(Statement::for_witness(&params, &[g1()], &[g2()]).is_err());
    }
}
