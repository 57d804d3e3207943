//! Web Storage persistence.
//!
//! sessionStorage holds data that may be refetched on a new visit (the
//! category list); localStorage holds user state that should survive
//! (cart, theme). Values are JSON-encoded.

use serde::{Serialize, de::DeserializeOwned};
use tracing::warn;
use web_sys::Storage;

use super::dom;

/// Which Web Storage area to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Store {
    Session,
    Local,
}

impl Store {
    fn storage(self) -> Option<Storage> {
        match self {
            Self::Session => dom::session_storage(),
            Self::Local => dom::local_storage(),
        }
    }
}

/// Cache operation errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CacheError {
    #[error("storage not available")]
    StorageUnavailable,
    #[error("failed to serialize value")]
    SerializationFailed,
    #[error("failed to write to storage")]
    WriteFailed,
}

/// Read a value. Missing keys and undecodable entries both yield `None`;
/// the latter is logged.
pub fn get<T: DeserializeOwned>(store: Store, key: &str) -> Option<T> {
    let storage = store.storage()?;
    let json = storage.get_item(key).ok()??;
    match serde_json::from_str(&json) {
        Ok(value) => Some(value),
        Err(err) => {
            warn!(key, error = %err, "ignoring corrupt storage entry");
            None
        }
    }
}

pub fn set<T: Serialize>(store: Store, key: &str, data: &T) -> Result<(), CacheError> {
    let storage = store.storage().ok_or(CacheError::StorageUnavailable)?;
    let json = serde_json::to_string(data).map_err(|_| CacheError::SerializationFailed)?;
    storage
        .set_item(key, &json)
        .map_err(|_| CacheError::WriteFailed)
}

/// Raw string read, for values that are not JSON-encoded.
pub fn get_raw(store: Store, key: &str) -> Option<String> {
    store.storage()?.get_item(key).ok()?
}

pub fn set_raw(store: Store, key: &str, value: &str) -> Result<(), CacheError> {
    let storage = store.storage().ok_or(CacheError::StorageUnavailable)?;
    storage
        .set_item(key, value)
        .map_err(|_| CacheError::WriteFailed)
}
