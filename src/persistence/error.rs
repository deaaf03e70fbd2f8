//! Error types raised by the persistence adapters.

use std::path::PathBuf;
use thiserror::Error;

/// Problems a single line of the text fallback file can have. Any one of
/// them fails the load of the whole file.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LineProblem {
    #[error("expected 3 comma separated fields, found {0}")]
    FieldCount(usize),

    #[error("{0:?} is not a valid record id, expected an integer")]
    InvalidId(String),
}

/// Errors surfaced when loading an inventory from disk.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Neither the snapshot nor the text fallback exists. Callers decide
    /// whether this means "start empty", for a fresh data directory it
    /// usually does.
    #[error("no inventory data found, neither {snapshot:?} nor {fallback:?} exists")]
    NotFound { snapshot: PathBuf, fallback: PathBuf },

    #[error("inventory file {path:?} does not exist")]
    FileNotFound { path: PathBuf },

    #[error("could not read {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("snapshot {path:?} could not be decoded: {detail}")]
    CorruptSnapshot { path: PathBuf, detail: String },

    #[error("{path:?} line {line}: {problem}")]
    MalformedLine {
        path: PathBuf,
        line: usize,
        problem: LineProblem,
    },
}

/// Errors surfaced when writing the snapshot.
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("could not encode the inventory snapshot: {0}")]
    Encode(String),

    #[error("could not write {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
