use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use super::{KeyValueStorage, StorageError};

/// Stores each key as its own file inside a directory
#[derive(Debug, Clone)]
pub struct FileStorage {
    directory: PathBuf,
}

impl FileStorage {
    /// The directory is created on first write if it does not exist
    pub fn new<P: Into<PathBuf>>(directory: P) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.directory.join(key)
    }
}

fn io_err(key: &str, source: std::io::Error) -> StorageError {
    StorageError::Io {
        key: key.to_string(),
        source,
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.key_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(io_err(key, e)),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.directory).map_err(|e| io_err(key, e))?;
        // Write then rename so a crash never leaves a half written value
        let temp_path = self.directory.join(format!(".{key}.tmp"));
        fs::write(&temp_path, value).map_err(|e| io_err(key, e))?;
        fs::rename(&temp_path, self.key_path(key)).map_err(|e| io_err(key, e))
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.key_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(io_err(key, e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_remove() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::new(dir.path().join("session"));

        // Act / Assert
        assert_eq!(storage.get("token").unwrap(), None);
        storage.set("token", "abc").unwrap();
        assert_eq!(storage.get("token").unwrap().as_deref(), Some("abc"));
        storage.set("token", "def").unwrap();
        assert_eq!(storage.get("token").unwrap().as_deref(), Some("def"));
        storage.remove("token").unwrap();
        assert_eq!(storage.get("token").unwrap(), None);
    }

    #[test]
    fn removing_missing_key_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::new(dir.path());
        storage.remove("never-set").unwrap();
    }
}
