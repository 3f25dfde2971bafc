//! Key-value storage for persisted state.
//!
//! Projects and presets are stored as JSON strings under fixed keys. The
//! [`StorageBackend`] trait only moves strings around; (de)serialization lives with
//! the callers.

mod file;
mod memory;

pub use file::FileBackend;
pub use memory::MemoryBackend;

use crate::error::StorageError;

/// Backend trait for string storage.
pub trait StorageBackend {
    /// Get the stored value for a key.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store a value, replacing any previous one.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete a key. Deleting a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}
