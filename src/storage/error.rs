use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::model::ModelError;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize objects: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("corrupt entry '{key}': {source}")]
    Entry {
        key: String,
        #[source]
        source: ModelError,
    },

    #[error("entry '{key}' is stored under the wrong class (found {class})")]
    KeyMismatch { key: String, class: String },
}
