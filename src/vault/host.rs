// Copyright (c) 2026 The pixstash-core Authors
// SPDX-License-Identifier: GPL-3.0-only

//! Image hosts: where encoded PNGs are uploaded and fetched back.
//!
//! A host must return the exact bytes it was given, or at least a lossless
//! re-encoding of the same pixels. Hosts that recompress to a lossy format
//! break decoding.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use rand::distributions::Alphanumeric;
use rand::Rng;

use crate::vault::error::VaultError;

/// Length of generated image ids.
pub const ID_LEN: usize = 7;

/// Upload/download boundary to an image hosting service.
pub trait ImageHost {
    /// Upload PNG bytes and return the id the host assigned.
    fn upload(&mut self, png: &[u8]) -> Result<String, VaultError>;

    /// Fetch the PNG bytes stored under `id`.
    fn download(&self, id: &str) -> Result<Vec<u8>, VaultError>;
}

fn random_id() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(ID_LEN)
        .map(char::from)
        .collect()
}

/// In-process host.
#[derive(Debug, Default, Clone)]
pub struct MemoryHost {
    images: HashMap<String, Vec<u8>>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

impl ImageHost for MemoryHost {
    fn upload(&mut self, png: &[u8]) -> Result<String, VaultError> {
        let mut id = random_id();
        while self.images.contains_key(&id) {
            id = random_id();
        }
        self.images.insert(id.clone(), png.to_vec());
        Ok(id)
    }

    fn download(&self, id: &str) -> Result<Vec<u8>, VaultError> {
        self.images
            .get(id)
            .cloned()
            .ok_or_else(|| VaultError::ImageNotFound(id.to_owned()))
    }
}

/// Host backed by a local directory of `<id>.png` files.
#[derive(Debug, Clone)]
pub struct DirectoryHost {
    dir: PathBuf,
}

impl DirectoryHost {
    /// Use `dir`, creating it if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, VaultError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn image_path(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{id}.png"))
    }
}

impl ImageHost for DirectoryHost {
    fn upload(&mut self, png: &[u8]) -> Result<String, VaultError> {
        let mut id = random_id();
        while self.image_path(&id).exists() {
            id = random_id();
        }
        let path = self.image_path(&id);
        fs::write(&path, png)?;
        debug!("stored {} PNG bytes at {}", png.len(), path.display());
        Ok(id)
    }

    fn download(&self, id: &str) -> Result<Vec<u8>, VaultError> {
        // Ids are generated alphanumeric; anything else cannot name an image.
        if id.is_empty() || !id.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(VaultError::ImageNotFound(id.to_owned()));
        }
        match fs::read(self.image_path(id)) {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(VaultError::ImageNotFound(id.to_owned()))
            }
            Err(e) => Err(e.into()),
        }
    }
}
