// Copyright (c) 2026 The pixstash-core Authors
// SPDX-License-Identifier: GPL-3.0-only

//! Seeded encode/decode front end.
//!
//! [`PixelCodec`] pairs a [`Seed`] with a [`MaskSource`] and resets the mask
//! at the start of every call, so each encode and each decode sees the mask
//! sequence from its first value. No RNG state leaks between calls. The
//! default [`ChaChaMask`] keeps its derived key, so a codec runs Argon2 once
//! at construction and not on every call.

use crate::codec::decode::{Decoded, Decoder};
use crate::codec::encode::encode_payload;
use crate::codec::error::CodecError;
use crate::codec::grid::PixelGrid;
use crate::codec::mask::{ChaChaMask, MaskSource};
use crate::codec::seed::Seed;

/// Seeded pixel codec.
pub struct PixelCodec<M = ChaChaMask> {
    seed: Seed,
    mask: M,
}

impl PixelCodec<ChaChaMask> {
    /// Codec using the default ChaCha20 mask source.
    pub fn new(seed: impl Into<Seed>) -> Result<Self, CodecError> {
        let seed = seed.into();
        let mask = ChaChaMask::new(&seed)?;
        Ok(Self { seed, mask })
    }
}

impl<M: MaskSource> PixelCodec<M> {
    /// Codec using a caller-supplied mask source.
    pub fn with_mask(seed: impl Into<Seed>, mask: M) -> Self {
        Self { seed: seed.into(), mask }
    }

    pub fn seed(&self) -> &Seed {
        &self.seed
    }

    /// Encode `text` into a square masked grid.
    ///
    /// # Errors
    /// See [`encode_payload`].
    pub fn encode(&mut self, text: &str) -> Result<PixelGrid, CodecError> {
        encode_payload(text, &self.seed, &mut self.mask)
    }

    /// Streaming decoder over a one-shot channel stream.
    ///
    /// The mask is reset before the decoder is returned; the decoder borrows
    /// it until dropped.
    pub fn decoder<I>(&mut self, channels: I) -> Result<Decoder<I::IntoIter, &mut M>, CodecError>
    where
        I: IntoIterator<Item = u8>,
    {
        self.mask.reset(&self.seed)?;
        Ok(Decoder::new(channels.into_iter(), &mut self.mask))
    }

    /// Decode a whole channel stream.
    pub fn decode<I>(&mut self, channels: I) -> Result<Decoded, CodecError>
    where
        I: IntoIterator<Item = u8>,
    {
        Ok(Decoded::collect_from(self.decoder(channels)?))
    }

    /// Decode the channels of `grid`.
    pub fn decode_grid(&mut self, grid: &PixelGrid) -> Result<Decoded, CodecError> {
        self.decode(grid.channels())
    }
}

/// Encode `text` with the default mask source.
pub fn encode_text(text: &str, seed: &Seed) -> Result<PixelGrid, CodecError> {
    PixelCodec::new(seed.clone())?.encode(text)
}

/// Decode a grid with the default mask source.
pub fn decode_grid(grid: &PixelGrid, seed: &Seed) -> Result<Decoded, CodecError> {
    PixelCodec::new(seed.clone())?.decode_grid(grid)
}

/// Decode a raw channel stream with the default mask source.
pub fn decode_channels<I>(channels: I, seed: &Seed) -> Result<Decoded, CodecError>
where
    I: IntoIterator<Item = u8>,
{
    PixelCodec::new(seed.clone())?.decode(channels)
}
