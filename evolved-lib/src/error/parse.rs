//! Color parse errors

/// A color string that could not be understood.
#[derive(Debug, Clone, thiserror::Error)]
#[error("invalid color {input:?}: {source}")]
pub struct ParseError {
    /// The rejected input.
    pub input: String,
    /// The underlying parser error.
    #[source]
    pub source: color::ParseError,
}

impl ParseError {
    /// Creates a parse error for the given input.
    pub fn new(input: impl Into<String>, source: color::ParseError) -> Self {
        Self {
            input: input.into(),
            source,
        }
    }
}
