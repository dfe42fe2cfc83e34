// Copyright (c) 2026 The pixstash-core Authors
// SPDX-License-Identifier: GPL-3.0-only

//! Pixel grid storage and shape calculation.
//!
//! A [`PixelGrid`] stores RGB pixels row-major as a flat channel vector:
//! `channels[(y * width + x) * 3 + c]`. That flat vector *is* the channel
//! stream the decoder consumes.

/// Number of channels per pixel (R, G, B).
pub const CHANNELS: usize = 3;

/// Side of the smallest square grid whose `side² × 3` channels hold
/// `payload_len` bytes. Never less than 1.
///
/// Equivalent to `ceil(sqrt(payload_len / 3))`, computed in integers so large
/// payloads are not subject to float rounding.
pub fn grid_side(payload_len: usize) -> usize {
    let pixels = payload_len.div_ceil(CHANNELS);
    let mut side = (pixels as f64).sqrt() as usize;
    while side.saturating_mul(side) < pixels {
        side += 1;
    }
    while side > 0 && (side - 1) * (side - 1) >= pixels {
        side -= 1;
    }
    side.max(1)
}

/// An immutable RGB image held as a flat row-major channel vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    channels: Vec<u8>,
}

impl PixelGrid {
    /// Wrap a channel vector of exactly `width * height * 3` values.
    ///
    /// Returns `None` on a length mismatch.
    pub fn from_channels(width: usize, height: usize, channels: Vec<u8>) -> Option<Self> {
        let expected = width.checked_mul(height)?.checked_mul(CHANNELS)?;
        (channels.len() == expected).then_some(Self { width, height, channels })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Side length if the grid is square.
    pub fn side(&self) -> Option<usize> {
        (self.width == self.height).then_some(self.width)
    }

    /// Number of pixels.
    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// Pixel at column `x`, row `y`.
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; CHANNELS]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y * self.width + x) * CHANNELS;
        Some([self.channels[i], self.channels[i + 1], self.channels[i + 2]])
    }

    /// Row-major, channel-major view of every channel value.
    pub fn as_channels(&self) -> &[u8] {
        &self.channels
    }

    /// One-shot channel stream for the decoder.
    pub fn channels(&self) -> impl Iterator<Item = u8> + '_ {
        self.channels.iter().copied()
    }

    pub fn into_channels(self) -> Vec<u8> {
        self.channels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn side_matches_ceil_sqrt() {
        for len in 0..5000usize {
            let expected = ((len as f64 / 3.0).sqrt().ceil() as usize).max(1);
            assert_eq!(grid_side(len), expected, "len={len}");
        }
    }

    #[test]
    fn side_is_minimal() {
        for len in 1..2000usize {
            let s = grid_side(len);
            assert!(s * s * CHANNELS >= len);
            if s > 1 {
                assert!((s - 1) * (s - 1) * CHANNELS < len, "len={len} side={s} not minimal");
            }
        }
    }

    #[test]
    fn hello_world_side() {
        assert_eq!(grid_side("Hello, world!".len()), 3);
    }

    #[test]
    fn empty_payload_gets_one_pixel() {
        assert_eq!(grid_side(0), 1);
    }

    #[test]
    fn from_channels_checks_length() {
        assert!(PixelGrid::from_channels(2, 2, vec![0; 12]).is_some());
        assert!(PixelGrid::from_channels(2, 2, vec![0; 11]).is_none());
    }

    #[test]
    fn pixel_access_row_major() {
        let data: Vec<u8> = (0..18).collect();
        let grid = PixelGrid::from_channels(3, 2, data).unwrap();
        assert_eq!(grid.pixel(0, 0), Some([0, 1, 2]));
        assert_eq!(grid.pixel(2, 0), Some([6, 7, 8]));
        assert_eq!(grid.pixel(0, 1), Some([9, 10, 11]));
        assert_eq!(grid.pixel(3, 0), None);
        assert_eq!(grid.side(), None);
        assert_eq!(grid.pixel_count(), 6);
    }
}
