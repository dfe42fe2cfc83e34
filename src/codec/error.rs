// Copyright (c) 2026 The pixstash-core Authors
// SPDX-License-Identifier: GPL-3.0-only

//! Error types for the pixel codec.
//!
//! [`CodecError`] covers seed handling, payload validation on encode, and the
//! strict conversion of a [`Decoded`](super::Decoded) result into text.
//! Per-character failures during decode are reported as [`InvalidChar`]
//! items and never abort the decode loop.

use core::fmt;

/// Errors that can occur during pixel encoding or decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// No seed was supplied; seed-less masking is not reproducible.
    MissingSeed,
    /// Deriving the mask key from the seed failed.
    KeyDerivation(String),
    /// The payload contains a NUL byte, which is reserved as the terminator.
    NulInPayload {
        /// Byte offset of the NUL in the UTF-8 payload.
        offset: usize,
    },
    /// The payload needs a grid wider than a raster image can hold.
    PayloadTooLarge {
        /// Payload length in bytes.
        len: usize,
    },
    /// A decoded byte group is not a single valid UTF-8 character.
    InvalidSequence {
        /// Channel index of the lead byte.
        offset: usize,
        /// The unmasked bytes that failed to decode.
        bytes: Vec<u8>,
    },
    /// The channel stream ended in the middle of a multi-byte character.
    Truncated {
        /// Unmasked bytes collected before the stream ran out.
        leftover: Vec<u8>,
    },
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSeed => write!(f, "no seed supplied for mask generation"),
            Self::KeyDerivation(msg) => write!(f, "mask key derivation failed: {msg}"),
            Self::NulInPayload { offset } => {
                write!(f, "payload contains a NUL byte at offset {offset}")
            }
            Self::PayloadTooLarge { len } => {
                write!(f, "payload of {len} bytes does not fit in a raster image")
            }
            Self::InvalidSequence { offset, bytes } => {
                write!(f, "invalid UTF-8 sequence {bytes:02X?} at channel {offset} (wrong seed?)")
            }
            Self::Truncated { leftover } => {
                write!(f, "channel stream truncated mid-character, leftover {leftover:02X?}")
            }
        }
    }
}

impl std::error::Error for CodecError {}

/// A byte group that did not decode as exactly one UTF-8 character.
///
/// Usually the result of decoding with the wrong seed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidChar {
    /// Channel index of the lead byte.
    pub offset: usize,
    /// The unmasked bytes of the group, lead byte first.
    pub bytes: Vec<u8>,
}

impl fmt::Display for InvalidChar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid UTF-8 sequence {:02X?} at channel {}", self.bytes, self.offset)
    }
}

impl std::error::Error for InvalidChar {}

impl From<InvalidChar> for CodecError {
    fn from(e: InvalidChar) -> Self {
        Self::InvalidSequence { offset: e.offset, bytes: e.bytes }
    }
}
