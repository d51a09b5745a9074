//! Browser backends for the draft manager.

use archfolio_shared::{Clock, DraftStorage, StorageError};
use web_sys::{window, Storage};

/// `window.localStorage`. Resolved per call so a storage that becomes
/// unavailable mid-session just reports [`StorageError::Unavailable`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Result<Storage, StorageError> {
        window()
            .and_then(|win| win.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }
}

impl DraftStorage for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| StorageError::Backend(format!("{:?}", e)))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        // Browsers report a full storage as a DOMException named
        // QuotaExceededError.
        Self::storage()?.set_item(key, value).map_err(|e| {
            let raw = format!("{:?}", e);
            if raw.contains("QuotaExceeded") {
                StorageError::QuotaExceeded
            } else {
                StorageError::Backend(raw)
            }
        })
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        Self::storage()?
            .remove_item(key)
            .map_err(|e| StorageError::Backend(format!("{:?}", e)))
    }
}

/// [`Clock`] reading `Date.now()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn now_ms(&self) -> i64 {
        js_sys::Date::now() as i64
    }
}
