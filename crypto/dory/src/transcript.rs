// Copyright (c) 2025 The Botho Foundation

//! Fiat-Shamir helpers over a [`Transcript`].

use ark_serialize::CanonicalSerialize;
use ark_std::Zero;
use merlin::Transcript;

use crate::{
    backend::{scalar_from_wide_bytes, G1Affine, G2Affine, Gt, Scalar},
    error::{Error, Result},
};

/// Typed absorb/squeeze operations used by the argument and by callers
/// binding their own statements to the same transcript.
pub trait TranscriptProtocol {
    /// Absorb a length or counter.
    fn append_usize(&mut self, label: &'static [u8], value: usize);

    /// Absorb a scalar.
    fn append_scalar(&mut self, label: &'static [u8], scalar: &Scalar);

    /// Absorb a G1 element.
    fn append_g1(&mut self, label: &'static [u8], point: &G1Affine);

    /// Absorb a G2 element.
    fn append_g2(&mut self, label: &'static [u8], point: &G2Affine);

    /// Absorb a target group element.
    fn append_gt(&mut self, label: &'static [u8], element: &Gt);

    /// Squeeze a uniformly distributed scalar.
    fn challenge_scalar(&mut self, label: &'static [u8]) -> Scalar;

    /// Squeeze a scalar that must be invertible.
    fn challenge_nonzero_scalar(&mut self, label: &'static [u8]) -> Result<Scalar>;
}

fn append_canonical<T: CanonicalSerialize>(
    transcript: &mut Transcript,
    label: &'static [u8],
    value: &T,
) {
    let mut bytes = Vec::with_capacity(value.compressed_size());
    // Infallible for valid elements written into a Vec. The message is
    // absorbed unconditionally so the transcript never skips a value.
    let written = value.serialize_compressed(&mut bytes);
    debug_assert!(written.is_ok(), "compressed serialization into a Vec failed");
    transcript.append_message(label, &bytes);
}

impl TranscriptProtocol for Transcript {
    fn append_usize(&mut self, label: &'static [u8], value: usize) {
        self.append_u64(label, value as u64);
    }

    fn append_scalar(&mut self, label: &'static [u8], scalar: &Scalar) {
        append_canonical(self, label, scalar);
    }

    fn append_g1(&mut self, label: &'static [u8], point: &G1Affine) {
        append_canonical(self, label, point);
    }

    fn append_g2(&mut self, label: &'static [u8], point: &G2Affine) {
        append_canonical(self, label, point);
    }

    fn append_gt(&mut self, label: &'static [u8], element: &Gt) {
        append_canonical(self, label, element);
    }

    fn challenge_scalar(&mut self, label: &'static [u8]) -> Scalar {
        let mut wide = [0u8; 64];
        self.challenge_bytes(label, &mut wide);
        scalar_from_wide_bytes(&wide)
    }

    fn challenge_nonzero_scalar(&mut self, label: &'static [u8]) -> Result<Scalar> {
        let challenge = self.challenge_scalar(label);
        if challenge.is_zero() {
            return Err(Error::ZeroChallenge);
        }
        Ok(challenge)
    }
}
