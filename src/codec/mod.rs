// Copyright (c) 2026 The pixstash-core Authors
// SPDX-License-Identifier: GPL-3.0-only

//! Keyed pixel codec.
//!
//! Text is written one UTF-8 byte per color channel into a square RGB grid,
//! then every channel is shifted by a value from a seeded mask sequence:
//!
//! ```text
//! masked[i] = (byte[i] + mask[i]) mod 256
//! ```
//!
//! Decoding resets the same mask sequence and shifts back. The grid side is
//! the smallest `s` with `s² × 3 ≥ len`; slots past the payload hold zero,
//! and a zero lead byte ends decoding.
//!
//! The masking is obfuscation, not encryption: the image looks like noise
//! but the mask is a plain keyed PRNG stream.

pub mod decode;
pub mod encode;
pub mod error;
pub mod grid;
pub mod mask;
mod pipeline;
pub mod seed;
pub mod shift;

pub use decode::{DecodeState, Decoded, Decoder};
pub use error::{CodecError, InvalidChar};
pub use grid::{grid_side, PixelGrid};
pub use mask::{ChaChaMask, MaskSource};
pub use pipeline::{decode_channels, decode_grid, encode_text, PixelCodec};
pub use seed::Seed;
pub use shift::{shift, Direction};
