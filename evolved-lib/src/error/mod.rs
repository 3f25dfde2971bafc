//! Error types

mod export;
mod parse;
mod range;
mod storage;

pub use export::*;
pub use parse::*;
pub use range::*;
pub use storage::*;

/// Any error surfaced by the library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A color string could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A ramp or sampling query fell outside its domain.
    #[error(transparent)]
    Range(#[from] RangeError),

    /// Reading or writing persisted state failed.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Building an export payload failed.
    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Result alias using the library [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
