// Copyright (c) 2026 The pixstash-core Authors
// SPDX-License-Identifier: GPL-3.0-only

//! Lossless PNG serialization of pixel grids.
//!
//! The decoder needs every channel value bit-exact, so grids are written as
//! 8-bit RGB PNG and never through a lossy format. On the way back any 8-bit
//! RGB or RGBA PNG is accepted; alpha is dropped and pixel order stays
//! row-major.

pub mod error;

use image::codecs::png::PngEncoder;
use image::{ColorType, ExtendedColorType, ImageEncoder, ImageFormat};
use log::debug;

use crate::codec::PixelGrid;
use error::{RasterError, Result};

/// Serialize `grid` as an 8-bit RGB PNG.
pub fn to_png(grid: &PixelGrid) -> Result<Vec<u8>> {
    let width = u32::try_from(grid.width()).map_err(|_| RasterError::InvalidDimensions)?;
    let height = u32::try_from(grid.height()).map_err(|_| RasterError::InvalidDimensions)?;

    let mut out = Vec::new();
    PngEncoder::new(&mut out)
        .write_image(grid.as_channels(), width, height, ExtendedColorType::Rgb8)
        .map_err(RasterError::Encode)?;
    debug!("wrote {width}x{height} grid as {} PNG bytes", out.len());
    Ok(out)
}

/// Read a PNG back into a grid.
///
/// # Errors
/// - [`RasterError::Decode`] if `bytes` is not a PNG.
/// - [`RasterError::UnsupportedColor`] for anything but 8-bit RGB or RGBA.
pub fn from_png(bytes: &[u8]) -> Result<PixelGrid> {
    let img = image::load_from_memory_with_format(bytes, ImageFormat::Png)
        .map_err(RasterError::Decode)?;
    match img.color() {
        ColorType::Rgb8 | ColorType::Rgba8 => {}
        other => return Err(RasterError::UnsupportedColor(other)),
    }

    let rgb = img.into_rgb8();
    let (width, height) = rgb.dimensions();
    PixelGrid::from_channels(width as usize, height as usize, rgb.into_raw())
        .ok_or(RasterError::InvalidDimensions)
}

/// Read a PNG straight into the channel stream the decoder consumes.
pub fn channels_from_png(bytes: &[u8]) -> Result<Vec<u8>> {
    Ok(from_png(bytes)?.into_channels())
}
