//! Persistent key/value storage the session store writes through to

use std::fmt::Debug;

mod memory;
pub use memory::MemoryStorage;

#[cfg(not(target_arch = "wasm32"))]
mod file;
#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStorage;

#[cfg(target_arch = "wasm32")]
mod browser;
#[cfg(target_arch = "wasm32")]
pub use browser::BrowserStorage;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("failed to access storage for key {key:?}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },
    #[error("storage refused to write key {key:?}: {reason}")]
    Rejected { key: String, reason: String },
    #[error("failed to serialize value for key {key:?}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("storage is not available: {0}")]
    Unavailable(String),
}

/// Minimal string key/value store. Implementations must be cheap to call as
/// every session change writes through immediately
pub trait KeyValueStorage: Debug + Send {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}
