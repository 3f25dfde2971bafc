//! Persistence errors

/// Errors that can occur while reading or writing persisted state.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Filesystem error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored content is not valid JSON for the expected shape.
    #[error("decode error: {0}")]
    Decode(serde_json::Error),

    /// A value could not be serialized.
    #[error("encode error: {0}")]
    Encode(serde_json::Error),
}
