// Copyright (c) 2026 The pixstash-core Authors
// SPDX-License-Identifier: GPL-3.0-only

//! Runtime configuration for an on-disk vault.
//!
//! ```json
//! { "seed": "TEST_SEED", "store_path": "ids.json", "image_dir": "images" }
//! ```
//!
//! `seed` may be a string or an integer.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::codec::{CodecError, Seed};
use crate::vault::VaultError;

#[derive(Debug, Clone, Deserialize)]
pub struct VaultConfig {
    /// Shared mask seed. Required to open a vault.
    #[serde(default)]
    pub seed: Option<Seed>,
    /// JSON file holding the key → image id map.
    pub store_path: PathBuf,
    /// Directory the local image host writes PNGs into.
    pub image_dir: PathBuf,
}

impl VaultConfig {
    /// The configured seed, or [`CodecError::MissingSeed`].
    pub fn require_seed(&self) -> Result<&Seed, CodecError> {
        self.seed.as_ref().ok_or(CodecError::MissingSeed)
    }
}

pub fn load_config(path: &Path) -> Result<VaultConfig, VaultError> {
    let contents = fs::read_to_string(path)?;
    let config: VaultConfig = serde_json::from_str(&contents)?;
    Ok(config)
}
