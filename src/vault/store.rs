// Copyright (c) 2026 The pixstash-core Authors
// SPDX-License-Identifier: GPL-3.0-only

//! Key → image id stores.

use std::collections::{BTreeMap, HashMap};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::vault::error::VaultError;

/// Maps user keys to opaque image-host ids.
pub trait IdStore {
    /// Store `id` under `key`, replacing any previous id.
    fn put(&mut self, key: &str, id: &str) -> Result<(), VaultError>;

    /// Id stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, VaultError>;
}

/// In-process store; contents are lost on drop.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    ids: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl IdStore for MemoryStore {
    fn put(&mut self, key: &str, id: &str) -> Result<(), VaultError> {
        self.ids.insert(key.to_owned(), id.to_owned());
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<String>, VaultError> {
        Ok(self.ids.get(key).cloned())
    }
}

/// Store persisted as a single JSON object on disk.
///
/// The file is read once on [`open`](Self::open) and rewritten after every
/// `put`. Each rewrite goes to a sibling `.tmp` file that is then renamed over
/// the target, so the file on disk always holds either the old or the new
/// map. A `put` whose write fails leaves the in-memory map unchanged.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    ids: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Open `path`, starting empty if the file does not exist yet.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, VaultError> {
        let path = path.into();
        let ids: BTreeMap<String, String> = match fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };
        debug!("opened id store {} with {} keys", path.display(), ids.len());
        Ok(Self { path, ids })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling file the next snapshot is written to before the rename.
    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from("ids.json"));
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn flush(&self) -> Result<(), VaultError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(&self.ids)?;
        let tmp = self.temp_path();
        fs::write(&tmp, json)?;
        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        Ok(())
    }
}

impl IdStore for JsonFileStore {
    fn put(&mut self, key: &str, id: &str) -> Result<(), VaultError> {
        let previous = self.ids.insert(key.to_owned(), id.to_owned());
        if let Err(e) = self.flush() {
            match previous {
                Some(old) => self.ids.insert(key.to_owned(), old),
                None => self.ids.remove(key),
            };
            debug!("rolled back put of {key:?}: {e}");
            return Err(e);
        }
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<String>, VaultError> {
        Ok(self.ids.get(key).cloned())
    }
}
