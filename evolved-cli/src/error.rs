//! CLI errors

use std::path::PathBuf;

use evolved_lib::error::{ExportError, ParseError, RangeError, StorageError};

/// Everything a command can fail with.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("could not determine a data directory, pass --data-dir")]
    NoDataDir,

    #[error("projects already exist at {0}, use --force to overwrite")]
    AlreadyInitialized(PathBuf),

    #[error("the active project does not use Bézier stops")]
    NotBezier,

    #[error("no preset with id {0:?}")]
    UnknownPreset(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("logger already set: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Range(#[from] RangeError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error(transparent)]
    Lib(#[from] evolved_lib::Error),
}
