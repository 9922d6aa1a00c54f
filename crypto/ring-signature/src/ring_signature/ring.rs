// Copyright (c) 2025 The Botho Foundation

//! Ordered rings of public keys.

use core::slice;

use super::{
    keys::{PublicKey, PUBLIC_KEY_BYTES},
    Error, Result, RingError,
};

/// The anonymity set. Order matters: a key's position is its index inside
/// the ring commitment. Uniqueness of members is the caller's concern.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Ring {
    keys: Vec<PublicKey>,
}

impl Ring {
    /// Wrap an ordered list of keys.
    pub fn new(keys: Vec<PublicKey>) -> Self {
        Self { keys }
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// True if the ring has no members.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Member at `index`.
    pub fn get(&self, index: usize) -> Option<&PublicKey> {
        self.keys.get(index)
    }

    /// First index holding `key`.
    pub fn position(&self, key: &PublicKey) -> Option<usize> {
        self.keys.iter().position(|k| k == key)
    }

    /// Iterate members in order.
    pub fn iter(&self) -> slice::Iter<'_, PublicKey> {
        self.keys.iter()
    }

    /// Members as a slice.
    pub fn as_slice(&self) -> &[PublicKey] {
        &self.keys
    }

    /// Concatenated member encodings.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.keys.len() * PUBLIC_KEY_BYTES);
        for key in &self.keys {
            out.extend_from_slice(&key.to_bytes());
        }
        out
    }

    /// Decode concatenated member encodings.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() % PUBLIC_KEY_BYTES != 0 {
            return Err(Error::Ring(RingError::InvalidEncoding(bytes.len())));
        }
        bytes
            .chunks_exact(PUBLIC_KEY_BYTES)
            .map(PublicKey::from_bytes)
            .collect()
    }
}

impl From<Vec<PublicKey>> for Ring {
    fn from(keys: Vec<PublicKey>) -> Self {
        Self::new(keys)
    }
}

impl FromIterator<PublicKey> for Ring {
    fn from_iter<I: IntoIterator<Item = PublicKey>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Ring {
    type Item = &'a PublicKey;
    type IntoIter = slice::Iter<'a, PublicKey>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.iter()
    }
}
