use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// The three collections that make up a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Donors,
    Acceptors,
    Complexes,
}

impl Collection {
    pub const ALL: [Collection; 3] = [
        Collection::Donors,
        Collection::Acceptors,
        Collection::Complexes,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Collection::Donors => "donors",
            Collection::Acceptors => "acceptors",
            Collection::Complexes => "complexes",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// File names of the three documents, relative to a dataset root (directory or base URL).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetLayout {
    pub donors: String,
    pub acceptors: String,
    pub complexes: String,
}

impl Default for DatasetLayout {
    fn default() -> Self {
        Self {
            donors: "hbd.json".to_string(),
            acceptors: "hba.json".to_string(),
            complexes: "complexes.json".to_string(),
        }
    }
}

impl DatasetLayout {
    pub fn file_name(&self, collection: Collection) -> &str {
        match collection {
            Collection::Donors => &self.donors,
            Collection::Acceptors => &self.acceptors,
            Collection::Complexes => &self.complexes,
        }
    }
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("Failed to fetch '{location}': {reason}")]
    Remote { location: String, reason: String },
}

/// Provides the raw text of each dataset document.
pub trait DatasetSource {
    fn read(&self, collection: Collection) -> Result<String, SourceError>;
}

/// Reads the documents from a local directory.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
    layout: DatasetLayout,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>, layout: DatasetLayout) -> Self {
        Self {
            root: root.into(),
            layout,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_of(&self, collection: Collection) -> PathBuf {
        self.root.join(self.layout.file_name(collection))
    }
}

impl DatasetSource for DirectorySource {
    fn read(&self, collection: Collection) -> Result<String, SourceError> {
        let path = self.path_of(collection);
        debug!("Reading {} document from {:?}", collection, &path);
        std::fs::read_to_string(&path).map_err(|e| SourceError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })
    }
}

/// Documents that have already been fetched, e.g. by a concurrent network load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatasetDocuments {
    pub donors: String,
    pub acceptors: String,
    pub complexes: String,
}

impl DatasetSource for DatasetDocuments {
    fn read(&self, collection: Collection) -> Result<String, SourceError> {
        Ok(match collection {
            Collection::Donors => self.donors.clone(),
            Collection::Acceptors => self.acceptors.clone(),
            Collection::Complexes => self.complexes.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn directory_source_reads_files_named_by_layout() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("hbd.json"), "{}").unwrap();
        fs::write(dir.path().join("custom_hba.json"), "{\"a\": {}}").unwrap();

        let layout = DatasetLayout {
            acceptors: "custom_hba.json".to_string(),
            ..DatasetLayout::default()
        };
        let source = DirectorySource::new(dir.path(), layout);

        assert_eq!(source.read(Collection::Donors).unwrap(), "{}");
        assert_eq!(source.read(Collection::Acceptors).unwrap(), "{\"a\": {}}");
    }

    #[test]
    fn directory_source_reports_missing_file_with_path() {
        let dir = tempdir().unwrap();
        let source = DirectorySource::new(dir.path(), DatasetLayout::default());

        let err = source.read(Collection::Complexes).unwrap_err();
        match err {
            SourceError::Io { path, .. } => assert!(path.ends_with("complexes.json")),
            other => panic!("Expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn in_memory_documents_serve_each_collection() {
        let docs = DatasetDocuments {
            donors: "d".to_string(),
            acceptors: "a".to_string(),
            complexes: "c".to_string(),
        };
        let read: Vec<_> = Collection::ALL
            .into_iter()
            .map(|c| docs.read(c).unwrap())
            .collect();
        assert_eq!(read, vec!["d", "a", "c"]);
    }
}
