// Copyright (c) 2025 The Botho Foundation

//! Canonical signature encoding.
//!
//! | Field | Size |
//! |-------|------|
//! | version | 1 |
//! | rounds | 1 |
//! | ephemeral key `T` | 48 |
//! | nonce commitment `R` | 48 |
//! | response `z` | 32 |
//! | challenge commitment `D2` | 576 |
//! | argument rounds | rounds × 6 × 576 |
//! | argument leaves `E1`, `E2` | 48 + 96 |
//! | ring proof digest | 32 |
//! | tag challenge `e` | 32 |
//! | tag response `s` | 32 |
//!
//! Group elements are compressed and checked for subgroup membership on
//! decode.

use dd_crypto_dory::MAX_ROUNDS;

use super::{
    proof::{RingProof, TagProof},
    signature::RingSignature,
    ParseError, Result,
};

/// Current encoding version.
pub const SIGNATURE_VERSION: u8 = 1;

const HEADER_BYTES: usize = 2;

/// Encoded size of a signature whose argument has `rounds` rounds, i.e.
/// for parameters of width `2^rounds`.
pub const fn signature_size(rounds: usize) -> usize {
    HEADER_BYTES + RingProof::serialized_size(rounds) + TagProof::SERIALIZED_SIZE
}

impl RingSignature {
    /// Canonical byte encoding.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let rounds = self.ring_proof().rounds();
        let mut out = Vec::with_capacity(signature_size(rounds));
        out.push(SIGNATURE_VERSION);
        // Bounded by MAX_ROUNDS, which fits a byte.
        out.push(rounds as u8);
        self.ring_proof().write_to(&mut out)?;
        self.tag_proof().write_to(&mut out)?;
        Ok(out)
    }

    /// Decode a signature. The result carries no cached digests.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(Self::parse(bytes)?)
    }

    fn parse(bytes: &[u8]) -> core::result::Result<Self, ParseError> {
        if bytes.len() < HEADER_BYTES {
            return Err(ParseError::Truncated {
                needed: HEADER_BYTES,
                available: bytes.len(),
            });
        }
        let version = bytes[0];
        if version != SIGNATURE_VERSION {
            return Err(ParseError::UnsupportedVersion(version));
        }
        let rounds = bytes[1];
        if usize::from(rounds) > MAX_ROUNDS {
            return Err(ParseError::TooManyRounds(rounds));
        }

        let expected = signature_size(rounds.into());
        if bytes.len() < expected {
            return Err(ParseError::Truncated {
                needed: expected,
                available: bytes.len(),
            });
        }
        if bytes.len() > expected {
            return Err(ParseError::TrailingBytes(bytes.len() - expected));
        }

        let (ring_proof, rest) = RingProof::read_from(&bytes[HEADER_BYTES..], rounds.into())?;
        let (tag_proof, rest) = TagProof::read_from(rest)?;
        debug_assert!(rest.is_empty());
        Ok(Self::from_parts(ring_proof, tag_proof))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ring_signature::Error;

    #[test]
    fn sizes() {
        assert_eq!(signature_size(2), 7858);
        assert_eq!(signature_size(10), 35506);
        assert!(signature_size(10) < 8 * signature_size(2));
    }

    #[test]
    fn header_errors() {
        assert_eq!(
            RingSignature::from_bytes(&[]),
            Err(Error::Parse(ParseError::Truncated {
                needed: 2,
                available: 0
            }))
        );
        assert_eq!(
            RingSignature::from_bytes(&[2, 0]),
            Err(Error::Parse(ParseError::UnsupportedVersion(2)))
        );
        assert_eq!(
            RingSignature::from_bytes(&[SIGNATURE_VERSION, 17]),
            Err(Error::Parse(ParseError::TooManyRounds(17)))
        );
        assert_eq!(
            RingSignature::from_bytes(&[SIGNATURE_VERSION, 1, 0, 0]),
            Err(Error::Parse(ParseError::Truncated {
                needed: signature_size(1),
                available: 4
            }))
        );
    }

    #[test]
    fn garbage_elements_are_rejected() {
        let mut bytes = vec![0xffu8; signature_size(0)];
        bytes[0] = SIGNATURE_VERSION;
        bytes[1] = 0;
        assert_eq!(
            RingSignature::from_bytes(&bytes),
            Err(Error::Parse(ParseError::InvalidElement))
        );
    }
}
