// Copyright (c) 2026 The pixstash-core Authors
// SPDX-License-Identifier: GPL-3.0-only

//! Error types for PNG serialization.

use std::fmt;

/// Errors that can occur while writing or reading a grid as PNG.
#[derive(Debug)]
pub enum RasterError {
    /// The PNG encoder rejected the grid.
    Encode(image::ImageError),
    /// The input bytes are not a readable PNG.
    Decode(image::ImageError),
    /// The PNG does not use 8-bit RGB(A) samples, so channel values
    /// cannot be recovered exactly.
    UnsupportedColor(image::ColorType),
    /// Grid dimensions do not fit a PNG header or do not match the data.
    InvalidDimensions,
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Encode(e) => write!(f, "PNG encode failed: {e}"),
            Self::Decode(e) => write!(f, "PNG decode failed: {e}"),
            Self::UnsupportedColor(c) => write!(f, "unsupported PNG color type: {c:?}"),
            Self::InvalidDimensions => write!(f, "invalid image dimensions"),
        }
    }
}

impl std::error::Error for RasterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Encode(e) | Self::Decode(e) => Some(e),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, RasterError>;
