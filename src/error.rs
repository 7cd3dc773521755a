// src/error.rs

use std::io;
use thiserror::Error;

/// Everything that can stop a level from being rebuilt.
///
/// All variants are fatal: a run that hits one of them writes no output.
/// Things that fall outside every room and catalog keys without a
/// description are not errors; they are reported through the log instead.
#[derive(Debug, Error)]
pub enum WadError {
    /// Bad magic, a directory entry past the end of the file, a name field
    /// that is not ASCII, or a reference to a record that does not exist.
    #[error("Malformed container: {0}")]
    MalformedContainer(String),

    #[error("Lump '{0}' not found in WAD")]
    LumpNotFound(String),

    #[error("Lump '{lump}' is {len} bytes, not a multiple of its {record_size}-byte record size")]
    TruncatedLump {
        lump: String,
        len: usize,
        record_size: usize,
    },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl WadError {
    pub(crate) fn malformed(msg: impl Into<String>) -> Self {
        WadError::MalformedContainer(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, WadError>;

/// Failure to read one of the description catalogs from disk.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Could not read catalog '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Catalog '{path}' is not valid JSON: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
