//! `localStorage` backing for the state store

use shared::{KeyValueStorage, Result, WalletError};
use web_sys::Storage;

/// Browser `localStorage`, or nothing when the page has no access to it
/// (private mode, sandboxed iframe). Reads then miss and writes fail.
pub struct BrowserStorage {
    storage: Option<Storage>,
}

impl BrowserStorage {
    pub fn open() -> Self {
        Self::from_storage(web_sys::window().and_then(|w| w.local_storage().ok().flatten()))
    }

    fn from_storage(storage: Option<Storage>) -> Self {
        if storage.is_none() {
            log::warn!("localStorage unavailable, wallet state will not persist");
        }
        Self { storage }
    }
}

impl KeyValueStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let storage = self
            .storage
            .as_ref()
            .ok_or_else(|| WalletError::Storage("localStorage unavailable".to_string()))?;
        storage
            .set_item(key, value)
            .map_err(|e| WalletError::Storage(format!("{:?}", e)))
    }
}
