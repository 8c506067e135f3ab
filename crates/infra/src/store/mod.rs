//! Durable key/value store boundary.
//!
//! Values are whole serialized documents; callers always overwrite the full
//! representation under a key, never patch it.

pub mod in_memory;

#[cfg(not(target_arch = "wasm32"))]
pub mod file;

#[cfg(target_arch = "wasm32")]
pub mod web;

use std::sync::Arc;

use thiserror::Error;

pub use in_memory::InMemoryStore;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;

#[cfg(target_arch = "wasm32")]
pub use web::LocalStorageStore;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The key cannot be used by this backend.
    #[error("invalid store key: {0:?}")]
    InvalidKey(String),

    /// The backend refused the write (e.g. quota exceeded).
    #[error("write to {key:?} rejected: {reason}")]
    WriteRejected { key: String, reason: String },

    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("I/O error on {key:?}: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },
}

/// Key/value durable store surviving across sessions.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<S> KeyValueStore for Arc<S>
where
    S: KeyValueStore + ?Sized,
{
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}
