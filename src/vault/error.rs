// Copyright (c) 2026 The pixstash-core Authors
// SPDX-License-Identifier: GPL-3.0-only

//! Error types for the vault layer.

use core::fmt;

use crate::codec::CodecError;
use crate::raster::error::RasterError;

/// Errors from storing or retrieving payloads through a vault.
#[derive(Debug)]
pub enum VaultError {
    /// Encoding or decoding the pixel grid failed.
    Codec(CodecError),
    /// PNG serialization failed.
    Raster(RasterError),
    /// Reading or writing a local file failed.
    Io(std::io::Error),
    /// JSON serialization or parsing failed.
    Json(serde_json::Error),
    /// No image id is stored under this key.
    KeyNotFound(String),
    /// The image host has no image with this id.
    ImageNotFound(String),
}

impl fmt::Display for VaultError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Codec(e) => write!(f, "codec error: {e}"),
            Self::Raster(e) => write!(f, "raster error: {e}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Json(e) => write!(f, "JSON error: {e}"),
            Self::KeyNotFound(key) => write!(f, "no image stored under key {key:?}"),
            Self::ImageNotFound(id) => write!(f, "image {id:?} not found on host"),
        }
    }
}

impl std::error::Error for VaultError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Codec(e) => Some(e),
            Self::Raster(e) => Some(e),
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<CodecError> for VaultError {
    fn from(e: CodecError) -> Self {
        Self::Codec(e)
    }
}

impl From<RasterError> for VaultError {
    fn from(e: RasterError) -> Self {
        Self::Raster(e)
    }
}

impl From<std::io::Error> for VaultError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for VaultError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}
