use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("cannot write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },

    #[error("invalid config JSON in {path}: {source}")]
    Config {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("invalid meta split mode: {0} (expected whitespace or space)")]
    InvalidMetaSplit(String),

    #[error("two inputs would both be written to {path}")]
    DuplicateTarget { path: PathBuf },

    #[error("no input files found")]
    NoInputs,

    #[error("cannot serialize render tree: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
