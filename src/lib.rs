// Copyright (c) 2026 The pixstash-core Authors
// SPDX-License-Identifier: GPL-3.0-only

//! # pixstash-core
//!
//! Hides UTF-8 text in the pixels of a lossless image that looks like noise.
//! Each byte of the text becomes one color channel, and every channel is
//! shifted by a keyed pseudo-random mask. The same seed shifts it back.
//!
//! - `codec`: seed, mask generator, grid layout, encoder and decoder.
//! - `raster`: lossless PNG serialization of a grid.
//! - `vault`: key → image storage over pluggable id stores and image hosts,
//!   with text, JSON and file helpers.
//!
//! The masking is obfuscation only. It is not a cipher.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use pixstash_core::{encode_text, decode_grid, Seed};
//!
//! let seed = Seed::from("TEST_SEED");
//! let grid = encode_text("Hello, world!", &seed).unwrap();
//! assert_eq!(grid.side(), Some(3));
//! let decoded = decode_grid(&grid, &seed).unwrap();
//! assert_eq!(decoded.into_text().unwrap(), "Hello, world!");
//! ```

pub mod codec;
pub mod config;
pub mod raster;
pub mod vault;

pub use codec::{decode_channels, decode_grid, encode_text};
pub use codec::{ChaChaMask, CodecError, Decoded, Decoder, InvalidChar, MaskSource, PixelCodec, PixelGrid, Seed};
pub use config::{load_config, VaultConfig};
pub use raster::error::RasterError;
pub use raster::{channels_from_png, from_png, to_png};
pub use vault::{DirectoryHost, IdStore, ImageHost, JsonFileStore, MemoryHost, MemoryStore, Vault, VaultError};
