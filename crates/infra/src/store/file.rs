//! Filesystem-backed store: one JSON document per key.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{KeyValueStore, StoreError};

/// Stores each key as `{dir}/{key}.json`.
///
/// Writes go to a sibling temp file first and are renamed into place, so a
/// crash mid-write never leaves a half-written document behind.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open (and create if needed) a store rooted at `dir`.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir).map_err(|source| StoreError::Io {
            key: dir.to_string_lossy().into_owned(),
            source,
        })?;
        Ok(Self { dir })
    }

    /// Open the store at `{app_data_dir}/storefront`.
    pub fn open_default() -> Result<Self, StoreError> {
        Self::open(default_dir()?)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key)?;
        match std::fs::read_to_string(&path) {
            Ok(text) => Ok(Some(text)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Io {
                key: key.to_string(),
                source,
            }),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        let tmp = path.with_extension("json.tmp");
        let io = |source| StoreError::Io {
            key: key.to_string(),
            source,
        };
        std::fs::write(&tmp, value).map_err(io)?;
        std::fs::rename(&tmp, &path).map_err(io)?;
        tracing::debug!(key, path = %path.display(), bytes = value.len(), "stored document");
        Ok(())
    }
}

/// Resolve `{app_data_dir}/storefront`, falling back to `~/.local/share`.
pub fn default_dir() -> Result<PathBuf, StoreError> {
    let base = dirs::data_dir()
        .or_else(|| {
            dirs::home_dir().map(|mut h| {
                h.push(".local");
                h.push("share");
                h
            })
        })
        .ok_or_else(|| {
            StoreError::Unavailable(
                "failed to resolve OS app data directory - tried data_dir() and home_dir()/.local/share"
                    .into(),
            )
        })?;
    Ok(base.join("storefront"))
}
