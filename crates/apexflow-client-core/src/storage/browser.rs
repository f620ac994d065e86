use super::{KeyValueStorage, StorageError};

/// The browser's `window.localStorage`. Looked up on every call so the type
/// stays `Send`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local_storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window found".into()))?
            .local_storage()
            .map_err(|e| StorageError::Unavailable(format!("{e:?}")))?
            .ok_or_else(|| StorageError::Unavailable("local storage disabled".into()))
    }
}

impl KeyValueStorage for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::local_storage()?
            .get_item(key)
            .map_err(|e| StorageError::Rejected {
                key: key.to_string(),
                reason: format!("{e:?}"),
            })
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        // Fails when the quota is exceeded
        Self::local_storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Rejected {
                key: key.to_string(),
                reason: format!("{e:?}"),
            })
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        Self::local_storage()?
            .remove_item(key)
            .map_err(|e| StorageError::Rejected {
                key: key.to_string(),
                reason: format!("{e:?}"),
            })
    }
}
