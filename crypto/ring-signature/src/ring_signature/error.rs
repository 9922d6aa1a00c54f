// Copyright (c) 2025 The Botho Foundation

//! Errors which can occur in connection to DualDory ring signatures

use displaydoc::Display;

/// Invalid or unsupported ring size when deriving parameters
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum ParameterError {
    /// Ring size must be at least one
    ZeroRingSize,

    /// Ring size `{size}` exceeds the supported maximum `{max}`
    RingTooLarge {
        /// Requested ring size.
        size: usize,
        /// Largest ring size the configuration allows.
        max: usize,
    },
}

/// A ring which cannot be used with the given parameters
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum RingError {
    /// The ring has no members
    Empty,

    /// Ring of `{size}` keys does not fit parameters of width `{width}`
    TooWide {
        /// Number of keys in the ring.
        size: usize,
        /// Width of the parameters.
        width: usize,
    },

    /// Ring of `{found}` keys used with parameters preprocessed for `{expected}`
    SizeMismatch {
        /// Ring size the parameters were preprocessed for.
        expected: usize,
        /// Ring size provided.
        found: usize,
    },

    /// Ring preprocessed for width `{found}` combined with parameters of width `{expected}`
    WidthMismatch {
        /// Width of the setup parameters.
        expected: usize,
        /// Width the ring was preprocessed against.
        found: usize,
    },

    /// Public key encoding of `{0}` bytes is not a whole number of keys
    InvalidEncoding(usize),
}

/// Reasons a signature fails to verify
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum VerificationError {
    /// The ring membership proof is invalid
    BadRingProof,

    /// The tag proof does not bind the message and prefix
    BadTagProof,

    /// The tag proof was produced for a different ring proof
    BindingMismatch,

    /// The signature is structurally inconsistent with the parameters
    Malformed,
}

/// A corrupt or truncated signature encoding
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum ParseError {
    /// Encoding ended early: needed `{needed}` bytes, had `{available}`
    Truncated {
        /// Bytes the layout requires.
        needed: usize,
        /// Bytes provided.
        available: usize,
    },

    /// `{0}` unexpected bytes after the signature
    TrailingBytes(usize),

    /// Unsupported encoding version `{0}`
    UnsupportedVersion(u8),

    /// Signature claims `{0}` folding rounds
    TooManyRounds(u8),

    /// A group or field element failed to decode
    InvalidElement,
}

/// An error which can occur when generating parameters, keys or signatures,
/// or when verifying or decoding a signature
#[derive(Clone, Debug, Display, Eq, PartialEq)]
pub enum Error {
    /// Parameter generation failed: {0}
    Parameter(ParameterError),

    /// Ring error: {0}
    Ring(RingError),

    /// Key generation failed: {0}
    KeyGen(String),

    /// Invalid public key encoding
    InvalidPublicKey,

    /// Secure randomness unavailable: {0}
    RandomnessUnavailable(String),

    /// The signing key is not a member of the ring
    SignerNotInRing,

    /// The preprocessed randomness belongs to a different partial signature
    RandomnessMismatch,

    /// Verification failed: {0}
    Verification(VerificationError),

    /// Parse error: {0}
    Parse(ParseError),

    /// Commitment error: {0}
    Commitment(dd_crypto_dory::Error),

    /// Invalid configuration: {0}
    Config(String),
}

impl From<ParameterError> for Error {
    fn from(src: ParameterError) -> Self {
        Self::Parameter(src)
    }
}

impl From<RingError> for Error {
    fn from(src: RingError) -> Self {
        Self::Ring(src)
    }
}

impl From<VerificationError> for Error {
    fn from(src: VerificationError) -> Self {
        Self::Verification(src)
    }
}

impl From<ParseError> for Error {
    fn from(src: ParseError) -> Self {
        Self::Parse(src)
    }
}

impl From<dd_crypto_dory::Error> for Error {
    fn from(src: dd_crypto_dory::Error) -> Self {
        Self::Commitment(src)
    }
}

impl std::error::Error for ParameterError {}

impl std::error::Error for RingError {}

impl std::error::Error for VerificationError {}

impl std::error::Error for ParseError {}

impl std::error::Error for Error {}

/// Result type for ring signature operations.
pub type Result<T> = core::result::Result<T, Error>;
