//! Export errors

/// Errors that can occur while building an export link.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// The export base URL could not be parsed.
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The payload could not be serialized.
    #[error("encode error: {0}")]
    Encode(#[from] serde_json::Error),
}
