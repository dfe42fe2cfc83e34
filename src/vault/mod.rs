// Copyright (c) 2026 The pixstash-core Authors
// SPDX-License-Identifier: GPL-3.0-only

//! Key-value storage of text in hosted images.
//!
//! A [`Vault`] encodes text with a [`PixelCodec`], uploads the PNG to an
//! [`ImageHost`], and records the returned id under a user key in an
//! [`IdStore`]. Retrieval runs the same steps backwards. Structured values go
//! through JSON first; the codec only ever sees flat text.

pub mod error;
pub mod host;
pub mod store;

use std::fs;
use std::path::Path;

use log::{debug, info, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::codec::{MaskSource, PixelCodec};
use crate::config::VaultConfig;
use crate::raster;

pub use error::VaultError;
pub use host::{DirectoryHost, ImageHost, MemoryHost};
pub use store::{IdStore, JsonFileStore, MemoryStore};

/// Text storage over an id store, an image host and a seeded codec.
pub struct Vault<S, H, M = crate::codec::ChaChaMask> {
    codec: PixelCodec<M>,
    store: S,
    host: H,
}

impl Vault<JsonFileStore, DirectoryHost> {
    /// Open the on-disk vault described by `config`.
    ///
    /// # Errors
    /// [`CodecError::MissingSeed`](crate::codec::CodecError::MissingSeed) if
    /// the config has no seed.
    pub fn from_config(config: &VaultConfig) -> Result<Self, VaultError> {
        let seed = config.require_seed()?;
        let codec = PixelCodec::new(seed.clone())?;
        let store = JsonFileStore::open(&config.store_path)?;
        let host = DirectoryHost::open(&config.image_dir)?;
        Ok(Self::new(codec, store, host))
    }
}

impl<S, H, M> Vault<S, H, M>
where
    S: IdStore,
    H: ImageHost,
    M: MaskSource,
{
    pub fn new(codec: PixelCodec<M>, store: S, host: H) -> Self {
        Self { codec, store, host }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Encode `text`, upload it, and return the host id.
    pub fn upload_text(&mut self, text: &str) -> Result<String, VaultError> {
        let grid = self.codec.encode(text)?;
        let png = raster::to_png(&grid)?;
        let id = self.host.upload(&png)?;
        info!("uploaded {} bytes of text as image {id}", text.len());
        Ok(id)
    }

    /// Download image `id` and decode it strictly.
    ///
    /// # Errors
    /// [`VaultError::Codec`] if any character fails to decode or the image
    /// ends mid-character, which usually means the wrong seed.
    pub fn download_text(&mut self, id: &str) -> Result<String, VaultError> {
        let png = self.host.download(id)?;
        let channels = raster::channels_from_png(&png)?;
        let decoded = self.codec.decode(channels)?;
        if !decoded.is_complete() {
            warn!(
                "image {id} decoded with {} invalid characters, leftover {:?}",
                decoded.invalid_chars().count(),
                decoded.leftover
            );
        }
        Ok(decoded.into_text()?)
    }

    /// Store `text` under `key`.
    pub fn store_text(&mut self, key: &str, text: &str) -> Result<(), VaultError> {
        let id = self.upload_text(text)?;
        self.store.put(key, &id)?;
        debug!("key {key:?} -> image {id}");
        Ok(())
    }

    /// Text stored under `key`.
    pub fn get_text(&mut self, key: &str) -> Result<String, VaultError> {
        let id = self
            .store
            .get(key)?
            .ok_or_else(|| VaultError::KeyNotFound(key.to_owned()))?;
        self.download_text(&id)
    }

    /// Serialize `value` as JSON and store it under `key`.
    pub fn store_json<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<(), VaultError> {
        let json = serde_json::to_string(value)?;
        self.store_text(key, &json)
    }

    /// Parse the JSON stored under `key`.
    pub fn get_json<T: DeserializeOwned>(&mut self, key: &str) -> Result<T, VaultError> {
        let json = self.get_text(key)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Store the UTF-8 contents of `source` under `key`.
    pub fn store_file(&mut self, key: &str, source: impl AsRef<Path>) -> Result<(), VaultError> {
        let source = source.as_ref();
        info!("encoding {} as image", source.display());
        let text = fs::read_to_string(source)?;
        self.store_text(key, &text)
    }

    /// Write the text stored under `key` to `target`.
    pub fn get_file(&mut self, key: &str, target: impl AsRef<Path>) -> Result<(), VaultError> {
        let target = target.as_ref();
        let text = self.get_text(key)?;
        info!("writing {} bytes to {}", text.len(), target.display());
        fs::write(target, text)?;
        Ok(())
    }
}
