//! In-memory storage

use std::collections::HashMap;

use super::StorageBackend;
use crate::error::StorageError;

/// A storage backend backed by a hash map.
///
/// Data is lost when the value is dropped; used by tests and by callers that
/// don't want anything written to disk.
///
/// # Example
///
/// ```
/// use evolved_lib::storage::{MemoryBackend, StorageBackend};
///
/// let mut backend = MemoryBackend::new();
/// backend.set("key", "value").unwrap();
/// assert_eq!(backend.get("key").unwrap().as_deref(), Some("value"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    store: HashMap<String, String>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored keys.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns `true` if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

impl StorageBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.store.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.store.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.store.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_missing_key() {
        let mut backend = MemoryBackend::new();
        assert!(backend.remove("missing").is_ok());
        assert!(backend.is_empty());
    }

    #[test]
    fn test_set_overwrites() {
        let mut backend = MemoryBackend::new();
        backend.set("a", "1").unwrap();
        backend.set("a", "2").unwrap();
        assert_eq!(backend.len(), 1);
        assert_eq!(backend.get("a").unwrap().as_deref(), Some("2"));
    }
}
