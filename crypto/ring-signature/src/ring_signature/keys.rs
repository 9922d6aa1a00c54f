// Copyright (c) 2025 The Botho Foundation

//! Signer key pairs.

use core::fmt;

use ark_ec::{AffineRepr, CurveGroup};
use ark_std::Zero;
use dd_crypto_dory::backend::{
    compress_g1, g1, random_scalar, read_compressed, G1Affine, Scalar, G1_BYTES,
};
use rand_core::{CryptoRng, OsRng, RngCore};
use zeroize::Zeroize;

use super::{Error, Result};

/// Size of an encoded public key.
pub const PUBLIC_KEY_BYTES: usize = G1_BYTES;

/// A ring member's verification key, `pk = sk · g1`.
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct PublicKey(G1Affine);

impl PublicKey {
    /// The underlying group element.
    pub fn as_point(&self) -> &G1Affine {
        &self.0
    }

    /// Compressed encoding.
    pub fn to_bytes(&self) -> [u8; PUBLIC_KEY_BYTES] {
        compress_g1(&self.0)
    }

    /// Decode a compressed key. Rejects encodings that are not canonical,
    /// not on the curve, outside the prime-order subgroup, or the identity.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != PUBLIC_KEY_BYTES {
            return Err(Error::InvalidPublicKey);
        }
        let (point, _): (G1Affine, _) =
            read_compressed(bytes, PUBLIC_KEY_BYTES).map_err(|_| Error::InvalidPublicKey)?;
        if point.is_zero() {
            return Err(Error::InvalidPublicKey);
        }
        Ok(Self(point))
    }
}

impl From<&PrivateKey> for PublicKey {
    fn from(src: &PrivateKey) -> Self {
        src.public
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", hex::encode(self.to_bytes()))
    }
}

/// A signer's secret scalar. Zeroized on drop.
pub struct PrivateKey {
    scalar: Scalar,
    public: PublicKey,
}

impl PrivateKey {
    /// Draw a fresh key from `rng`. Fails only if the randomness source does.
    pub fn keygen<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self> {
        loop {
            let scalar =
                random_scalar(rng).map_err(|e| Error::RandomnessUnavailable(e.to_string()))?;
            // Zero has probability 2^-255; it would give an identity key.
            if let Some(key) = Self::from_scalar(scalar) {
                return Ok(key);
            }
        }
    }

    /// Draw a fresh key from the operating system's randomness source.
    pub fn keygen_os() -> Result<Self> {
        Self::keygen(&mut OsRng).map_err(|e| match e {
            Error::RandomnessUnavailable(msg) => Error::KeyGen(msg),
            other => other,
        })
    }

    /// Wrap an existing scalar. `None` for zero.
    pub fn from_scalar(scalar: Scalar) -> Option<Self> {
        if scalar.is_zero() {
            return None;
        }
        let public = PublicKey((g1() * scalar).into_affine());
        Some(Self { scalar, public })
    }

    /// The matching public key.
    pub fn public_key(&self) -> PublicKey {
        self.public
    }

    pub(crate) fn scalar(&self) -> &Scalar {
        &self.scalar
    }
}

impl Drop for PrivateKey {
    fn drop(&mut self) {
        self.scalar.zeroize();
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("public", &self.public)
            .finish_non_exhaustive()
    }
}

/// Generate a key pair from the operating system's randomness source.
pub fn keygen() -> Result<(PublicKey, PrivateKey)> {
    let private = PrivateKey::keygen_os()?;
    Ok((private.public_key(), private))
}

#[cfg(test)]
mod tests {
    use super::*;
    use dd_crypto_dory::backend::to_compressed;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    struct FailingRng;

    impl RngCore for FailingRng {
        fn next_u32(&mut self) -> u32 {
            0
        }
        fn next_u64(&mut self) -> u64 {
            0
        }
        fn fill_bytes(&mut self, dest: &mut [u8]) {
            dest.fill(0)
        }
        fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> core::result::Result<(), rand_core::Error> {
            Err(rand_core::Error::new("entropy source offline"))
        }
    }

    impl CryptoRng for FailingRng {}

    #[test]
    fn keygen_is_deterministic_for_seeded_rng() {
        let a = PrivateKey::keygen(&mut ChaCha20Rng::seed_from_u64(5)).unwrap();
        let b = PrivateKey::keygen(&mut ChaCha20Rng::seed_from_u64(5)).unwrap();
        let c = PrivateKey::keygen(&mut ChaCha20Rng::seed_from_u64(6)).unwrap();
        assert_eq!(a.public_key(), b.public_key());
        assert_ne!(a.public_key(), c.public_key());
    }

    #[test]
    fn public_key_is_scalar_times_generator() {
        let key = PrivateKey::from_scalar(Scalar::from(7u64)).unwrap();
        assert_eq!(*key.public_key().as_point(), (g1() * Scalar::from(7u64)).into_affine());
        assert!(PrivateKey::from_scalar(Scalar::from(0u64)).is_none());
    }

    #[test]
    fn os_keygen() {
        let (public, private) = keygen().unwrap();
        assert_eq!(public, PublicKey::from(&private));
    }

    #[test]
    fn randomness_failure_is_reported() {
        assert!(matches!(
            PrivateKey::keygen(&mut FailingRng),
            Err(Error::RandomnessUnavailable(_))
        ));
    }

    #[test]
    fn public_key_encoding() {
        let key = PrivateKey::keygen(&mut ChaCha20Rng::seed_from_u64(8)).unwrap();
        let bytes = key.public_key().to_bytes();
        assert_eq!(bytes.to_vec(), to_compressed(key.public_key().as_point()).unwrap());
        assert_ne!(bytes, [0u8; PUBLIC_KEY_BYTES]);
        assert_eq!(PublicKey::from_bytes(&bytes).unwrap(), key.public_key());

        assert!(PublicKey::from_bytes(&bytes[1..]).is_err());
        let mut corrupted = bytes;
        corrupted[10] ^= 0xff;
        // Almost every corruption lands off the curve or out of the subgroup.
        if let Ok(decoded) = PublicKey::from_bytes(&corrupted) {
            assert_ne!(decoded, key.public_key());
        }

        let identity = to_compressed(&G1Affine::zero()).unwrap();
        assert!(PublicKey::from_bytes(&identity).is_err());
    }

    #[test]
    fn debug_does_not_leak_scalar() {
        let key = PrivateKey::from_scalar(Scalar::from(12345u64)).unwrap();
        let rendered = format!("{key:?}");
        assert!(rendered.starts_with("PrivateKey"));
        assert!(!rendered.contains("scalar"));
    }
}
