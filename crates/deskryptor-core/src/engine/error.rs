use crate::core::io::json::DocumentError;
use crate::core::io::source::{Collection, SourceError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read {collection} source: {source}")]
    Source {
        collection: Collection,
        #[source]
        source: SourceError,
    },

    #[error("Malformed {collection} document: {source}")]
    Parse {
        collection: Collection,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid record '{key}' in {collection}: {reason}")]
    InvalidRecord {
        collection: Collection,
        key: String,
        reason: String,
    },
}

impl LoadError {
    pub(crate) fn from_document(collection: Collection, err: DocumentError) -> Self {
        match err {
            DocumentError::Malformed(source) => LoadError::Parse { collection, source },
            DocumentError::InvalidRecord { key, reason } => LoadError::InvalidRecord {
                collection,
                key,
                reason,
            },
        }
    }

    /// The collection whose load failed.
    pub fn collection(&self) -> Collection {
        match self {
            LoadError::Source { collection, .. }
            | LoadError::Parse { collection, .. }
            | LoadError::InvalidRecord { collection, .. } => *collection,
        }
    }
}
