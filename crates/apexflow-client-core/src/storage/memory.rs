use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use super::{KeyValueStorage, StorageError};

/// Keeps values in process memory.
///
/// Clones share the same underlying map so a second session store built from a
/// clone sees what the first one persisted (like a restart would).
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored
    pub fn len(&self) -> usize {
        self.entries.lock().expect("mutex poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self
            .entries
            .lock()
            .expect("mutex poisoned")
            .get(key)
            .cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .lock()
            .expect("mutex poisoned")
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.lock().expect("mutex poisoned").remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_entries() {
        // Arrange
        let mut first = MemoryStorage::new();
        let second = first.clone();

        // Act
        first.set("token", "abc").unwrap();

        // Assert
        assert_eq!(second.get("token").unwrap().as_deref(), Some("abc"));
        first.remove("token").unwrap();
        assert!(second.is_empty());
    }
}
