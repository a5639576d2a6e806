use std::path::PathBuf;
use thiserror::Error;

/// Failures of the file-backed key/value store.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing a backing file failed.
    #[error("Failed to access {path}: {source}")]
    Io {
        /// File that could not be accessed
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The credential file exists but does not hold a JSON object of strings.
    ///
    /// Fatal at startup. Running on with an empty map would silently unbind
    /// every verified member.
    #[error("Credential store {path} is corrupt: {source}")]
    Corrupt {
        /// File that failed to parse
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The credential map could not be serialized for writing.
    #[error("Failed to serialize credential store: {0}")]
    Serialize(#[source] serde_json::Error),
}
