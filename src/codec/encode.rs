// Copyright (c) 2026 The pixstash-core Authors
// SPDX-License-Identifier: GPL-3.0-only

//! Text → pixel grid.
//!
//! The UTF-8 payload is laid out one byte per channel, three channels per
//! pixel, row-major. Every channel of the grid, including the zero padding
//! after the payload, is masked with one value from the mask source.

use log::debug;

use crate::codec::error::CodecError;
use crate::codec::grid::{grid_side, PixelGrid, CHANNELS};
use crate::codec::mask::MaskSource;
use crate::codec::seed::Seed;
use crate::codec::shift::{shift, Direction};

/// Encode `text` into a square grid masked by `mask` after resetting it to `seed`.
///
/// # Errors
/// - [`CodecError::NulInPayload`] if `text` contains U+0000, which decode
///   would read as the end-of-stream sentinel.
/// - [`CodecError::PayloadTooLarge`] if the grid side would not fit a `u32`.
/// - Any error from [`MaskSource::reset`].
pub fn encode_payload<M: MaskSource>(
    text: &str,
    seed: &Seed,
    mask: &mut M,
) -> Result<PixelGrid, CodecError> {
    let payload = text.as_bytes();
    if let Some(offset) = payload.iter().position(|&b| b == 0) {
        return Err(CodecError::NulInPayload { offset });
    }

    let side = grid_side(payload.len());
    if u32::try_from(side).is_err() {
        return Err(CodecError::PayloadTooLarge { len: payload.len() });
    }
    let total = side
        .checked_mul(side)
        .and_then(|p| p.checked_mul(CHANNELS))
        .ok_or(CodecError::PayloadTooLarge { len: payload.len() })?;

    mask.reset(seed)?;

    // Payload bytes first, then zero padding to the end of the grid.
    let channels: Vec<u8> = payload
        .iter()
        .copied()
        .chain(core::iter::repeat(0))
        .take(total)
        .map(|value| shift(value, mask.next_mask(), Direction::Forward))
        .collect();

    debug!(
        "encoded {} payload bytes into {side}x{side} grid ({} padding channels)",
        payload.len(),
        total - payload.len()
    );

    PixelGrid::from_channels(side, side, channels)
        .ok_or(CodecError::PayloadTooLarge { len: payload.len() })
}
