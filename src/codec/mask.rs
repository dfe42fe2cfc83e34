// Copyright (c) 2026 The pixstash-core Authors
// SPDX-License-Identifier: GPL-3.0-only

//! Keyed mask sequence generation.
//!
//! The encoder and decoder each reset a [`MaskSource`] with the shared seed
//! and draw one value per channel. As long as both sides draw in the same
//! order they see the same sequence, which is what makes the shift transform
//! reversible.
//!
//! # Cross-platform portability
//!
//! [`ChaChaMask`] takes the low byte of `next_u32` rather than calling
//! `gen_range` on a `usize` range. The amount of PRNG output consumed per
//! draw is then fixed at 32 bits on every target, so WASM (32-bit `usize`)
//! and native builds produce identical masks.

use rand::RngCore;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use zeroize::Zeroizing;

use crate::codec::error::CodecError;
use crate::codec::seed::{derive_mask_key, Seed, MASK_KEY_LEN};

/// A resettable, deterministic source of mask values in `0..=255`.
///
/// Implementations must return the same infinite sequence after every
/// `reset` with an equal seed, on every platform.
pub trait MaskSource {
    /// Reinitialize from `seed`, restarting the sequence at its first value.
    fn reset(&mut self, seed: &Seed) -> Result<(), CodecError>;

    /// Advance and return the next mask value.
    fn next_mask(&mut self) -> u8;
}

impl<M: MaskSource + ?Sized> MaskSource for &mut M {
    fn reset(&mut self, seed: &Seed) -> Result<(), CodecError> {
        (**self).reset(seed)
    }

    fn next_mask(&mut self) -> u8 {
        (**self).next_mask()
    }
}

/// ChaCha20 mask source keyed by Argon2id over the seed.
///
/// The derived key is cached with its seed. Resetting to the same seed only
/// rebuilds the keystream; Argon2 runs again only when the seed changes.
pub struct ChaChaMask {
    seed: Seed,
    key: Zeroizing<[u8; MASK_KEY_LEN]>,
    rng: ChaCha20Rng,
    #[cfg(test)]
    derivations: usize,
}

impl ChaChaMask {
    /// Create a mask source already reset to `seed`.
    pub fn new(seed: &Seed) -> Result<Self, CodecError> {
        let key = derive_mask_key(seed)?;
        let rng = ChaCha20Rng::from_seed(*key);
        Ok(Self {
            seed: seed.clone(),
            key,
            rng,
            #[cfg(test)]
            derivations: 1,
        })
    }

    /// Seed the current key was derived from.
    pub fn seed(&self) -> &Seed {
        &self.seed
    }

    #[cfg(test)]
    pub(crate) fn derivations(&self) -> usize {
        self.derivations
    }
}

impl MaskSource for ChaChaMask {
    fn reset(&mut self, seed: &Seed) -> Result<(), CodecError> {
        if *seed != self.seed {
            self.key = derive_mask_key(seed)?;
            self.seed = seed.clone();
            #[cfg(test)]
            {
                self.derivations += 1;
            }
        }
        self.rng = ChaCha20Rng::from_seed(*self.key);
        Ok(())
    }

    fn next_mask(&mut self) -> u8 {
        (self.rng.next_u32() & 0xFF) as u8
    }
}
