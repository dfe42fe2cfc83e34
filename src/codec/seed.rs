// Copyright (c) 2026 The pixstash-core Authors
// SPDX-License-Identifier: GPL-3.0-only

//! Seeds and mask key derivation.
//!
//! A [`Seed`] is the shared secret between encoder and decoder. It is
//! stretched into a 32-byte ChaCha20 key with Argon2id over a fixed salt, so
//! both sides derive the identical key from the seed alone.
//!
//! The Argon2 cost parameters are deliberately light: the key only drives an
//! obfuscation mask, and each one-shot encode or decode call derives it once.

use argon2::{Algorithm, Argon2, Params, Version};
use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use crate::codec::error::CodecError;

/// Fixed salt for mask key derivation.
const MASK_SALT: &[u8; 16] = b"pixstash-mask-v1";

/// Argon2 memory cost in KiB.
const MASK_KDF_M_COST: u32 = 256;
/// Argon2 iteration count.
const MASK_KDF_T_COST: u32 = 1;
/// Argon2 lane count.
const MASK_KDF_P_COST: u32 = 1;

/// Length of the derived mask key in bytes.
pub const MASK_KEY_LEN: usize = 32;

/// Domain tags keep `Text("7")` and `Number(7)` apart.
const TAG_TEXT: u8 = b's';
const TAG_NUMBER: u8 = b'n';

/// Shared secret that initializes the mask sequence.
///
/// Deserializes from either a JSON string or a JSON integer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Seed {
    Number(i64),
    Text(String),
}

impl Seed {
    /// Canonical byte representation fed into key derivation.
    ///
    /// Integers use a fixed little-endian width so the bytes are identical
    /// on every platform.
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            Self::Text(s) => {
                let mut out = Vec::with_capacity(1 + s.len());
                out.push(TAG_TEXT);
                out.extend_from_slice(s.as_bytes());
                out
            }
            Self::Number(n) => {
                let mut out = Vec::with_capacity(9);
                out.push(TAG_NUMBER);
                out.extend_from_slice(&n.to_le_bytes());
                out
            }
        }
    }
}

impl From<&str> for Seed {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for Seed {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for Seed {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

/// Derive the 32-byte ChaCha20 mask key from a seed.
///
/// Deterministic: the same seed always yields the same key.
pub fn derive_mask_key(seed: &Seed) -> Result<Zeroizing<[u8; MASK_KEY_LEN]>, CodecError> {
    let params = Params::new(MASK_KDF_M_COST, MASK_KDF_T_COST, MASK_KDF_P_COST, Some(MASK_KEY_LEN))
        .map_err(|e| CodecError::KeyDerivation(e.to_string()))?;
    let argon = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

    let password = Zeroizing::new(seed.to_bytes());
    let mut key = Zeroizing::new([0u8; MASK_KEY_LEN]);
    argon
        .hash_password_into(&password, MASK_SALT, &mut *key)
        .map_err(|e| CodecError::KeyDerivation(e.to_string()))?;
    Ok(key)
}
