//! Browser `localStorage` store (WASM only).

use web_sys::Storage;

use super::{KeyValueStore, StoreError};

/// Thin wrapper over `window.localStorage`.
#[derive(Debug, Clone)]
pub struct LocalStorageStore {
    storage: Storage,
}

impl LocalStorageStore {
    pub fn open() -> Result<Self, StoreError> {
        let window = web_sys::window()
            .ok_or_else(|| StoreError::Unavailable("no global window".into()))?;
        let storage = window
            .local_storage()
            .map_err(|err| StoreError::Unavailable(format!("{err:?}")))?
            .ok_or_else(|| StoreError::Unavailable("localStorage disabled".into()))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage
            .get_item(key)
            .map_err(|err| StoreError::Unavailable(format!("{err:?}")))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        // Browsers throw QuotaExceededError here when the origin is full.
        self.storage
            .set_item(key, value)
            .map_err(|err| StoreError::WriteRejected {
                key: key.to_string(),
                reason: format!("{err:?}"),
            })
    }
}
