use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("collection {key} holds malformed data")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode collection {key}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug)]
enum Backend {
    Memory(HashMap<String, String>),
    Directory(PathBuf),
}

impl Backend {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        match self {
            Backend::Memory(map) => Ok(map.get(key).cloned()),
            Backend::Directory(dir) => {
                let path = dir.join(format!("{key}.json"));
                if !path.exists() {
                    return Ok(None);
                }
                Ok(Some(fs::read_to_string(path)?))
            }
        }
    }

    fn write(&mut self, key: &str, text: &str) -> Result<(), StoreError> {
        match self {
            Backend::Memory(map) => {
                map.insert(key.to_string(), text.to_string());
                Ok(())
            }
            Backend::Directory(dir) => {
                fs::write(dir.join(format!("{key}.json")), text)?;
                Ok(())
            }
        }
    }

    fn contains(&self, key: &str) -> bool {
        match self {
            Backend::Memory(map) => map.contains_key(key),
            Backend::Directory(dir) => dir.join(format!("{key}.json")).exists(),
        }
    }
}

/// Key-value store holding one JSON-encoded collection per key.
///
/// Collections are always read and written whole; two handles over the same
/// directory can lose each other's updates, which is an accepted property of
/// the simulated backend.
#[derive(Debug)]
pub struct Store {
    backend: Mutex<Backend>,
}

impl Store {
    /// Open a store backed by a directory, one `<key>.json` file per
    /// collection. The directory is created if missing.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { backend: Mutex::new(Backend::Directory(dir)) })
    }

    /// Open a store that keeps all collections in memory. Data does not
    /// survive the handle.
    pub fn in_memory() -> Self {
        Self { backend: Mutex::new(Backend::Memory(HashMap::new())) }
    }

    fn backend(&self) -> MutexGuard<'_, Backend> {
        self.backend.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Read a whole collection. An absent key reads as an empty collection;
    /// a present but undecodable value is fatal.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>, StoreError> {
        let Some(text) = self.backend().read(key)? else {
            return Ok(Vec::new());
        };
        decode(key, &text)
    }

    /// Overwrite a whole collection.
    pub fn set<T: Serialize>(&self, key: &str, rows: &[T]) -> Result<(), StoreError> {
        let text = encode(key, rows)?;
        self.backend().write(key, &text)
    }

    /// Read-modify-write a single collection while holding the store lock, so
    /// callers sharing this handle cannot interleave within one collection
    /// update.
    pub fn update<T, R>(
        &self,
        key: &str,
        mutate: impl FnOnce(&mut Vec<T>) -> R,
    ) -> Result<R, StoreError>
    where
        T: Serialize + DeserializeOwned,
    {
        let mut backend = self.backend();
        let mut rows: Vec<T> = match backend.read(key)? {
            Some(text) => decode(key, &text)?,
            None => Vec::new(),
        };
        let out = mutate(&mut rows);
        let text = encode(key, &rows)?;
        backend.write(key, &text)?;
        Ok(out)
    }

    /// Whether the key has ever been written, even as an empty collection.
    pub fn contains(&self, key: &str) -> bool {
        self.backend().contains(key)
    }
}

fn decode<T: DeserializeOwned>(key: &str, text: &str) -> Result<Vec<T>, StoreError> {
    serde_json::from_str(text).map_err(|source| StoreError::Corrupt { key: key.to_string(), source })
}

fn encode<T: Serialize>(key: &str, rows: &[T]) -> Result<String, StoreError> {
    serde_json::to_string_pretty(rows)
        .map_err(|source| StoreError::Encode { key: key.to_string(), source })
}
