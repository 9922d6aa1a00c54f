// Copyright (c) 2025 The Botho Foundation

//! Errors which can occur while setting up, committing or arguing.

use displaydoc::Display;

/// An error from the commitment layer.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum Error {
    /// Unsupported setup width `{0}`: must be a power of two no larger than 65536
    UnsupportedWidth(usize),

    /// Length mismatch: expected `{expected}`, found `{found}`
    LengthMismatch {
        /// Length required by the setup or the other operand.
        expected: usize,
        /// Length provided.
        found: usize,
    },

    /// Hashing to the curve failed
    HashToCurve,

    /// A transcript challenge was zero
    ZeroChallenge,

    /// Argument has `{found}` rounds, setup requires `{expected}`
    RoundCountMismatch {
        /// Rounds required by the setup.
        expected: usize,
        /// Rounds present in the argument.
        found: usize,
    },

    /// The inner-product argument was rejected
    ArgumentRejected,

    /// Group element encoding or decoding failed
    Serialization,
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Result type for commitment operations.
pub type Result<T> = core::result::Result<T, Error>;
