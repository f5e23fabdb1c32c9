use crate::error::{CliError, Result};
use crate::utils::fetch;
use deskryptor::core::io::source::{Collection, DatasetLayout};
use deskryptor::engine::store::DatasetStore;
use deskryptor::workflows::catalog::CatalogSummary;
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataProgress {
    Fetching,
    Validating,
    Writing,
}

#[derive(Debug)]
pub struct DataManager {
    base_path: PathBuf,
}

impl DataManager {
    pub fn new() -> Result<Self> {
        let path = Self::determine_data_path()?;
        debug!("DataManager initialized with path: {:?}", &path);
        Ok(Self { base_path: path })
    }

    pub fn with_custom_path(path: PathBuf) -> Self {
        Self { base_path: path }
    }

    pub fn get_data_path(&self) -> &Path {
        &self.base_path
    }

    /// Whether all three documents of `layout` are present in the data directory.
    pub fn has_dataset(&self, layout: &DatasetLayout) -> bool {
        Collection::ALL
            .iter()
            .all(|&c| self.base_path.join(layout.file_name(c)).is_file())
    }

    /// Downloads the dataset from `base_url` into the data directory.
    ///
    /// The documents are fetched concurrently and must load as a valid dataset before
    /// anything is written, so a failed or corrupt download leaves existing files intact.
    pub async fn download_dataset(
        &self,
        base_url: &str,
        layout: &DatasetLayout,
        force: bool,
        mut progress_callback: impl FnMut(DataProgress),
    ) -> Result<CatalogSummary> {
        info!("Preparing to download dataset to {:?}", &self.base_path);
        let existing: Vec<PathBuf> = Collection::ALL
            .iter()
            .map(|&c| self.base_path.join(layout.file_name(c)))
            .filter(|p| p.exists())
            .collect();
        if !existing.is_empty() && !force {
            return Err(CliError::Data(format!(
                "Dataset files already exist in {:?}. Use --force to overwrite.",
                &self.base_path
            )));
        }

        progress_callback(DataProgress::Fetching);
        let documents = fetch::fetch_documents(base_url, layout).await?;

        progress_callback(DataProgress::Validating);
        let mut store = DatasetStore::new();
        store.load(&documents)?;
        let summary = CatalogSummary::of(&store);

        progress_callback(DataProgress::Writing);
        fs::create_dir_all(&self.base_path)?;
        for (collection, text) in [
            (Collection::Donors, &documents.donors),
            (Collection::Acceptors, &documents.acceptors),
            (Collection::Complexes, &documents.complexes),
        ] {
            let path = self.base_path.join(layout.file_name(collection));
            debug!("Writing {} document to {:?}", collection, &path);
            fs::write(&path, text)?;
        }

        info!(
            "Dataset written to {:?}: {} donors, {} acceptors, {} complexes.",
            &self.base_path, summary.donors, summary.acceptors, summary.complexes
        );
        Ok(summary)
    }

    pub fn set_custom_path(path: &Path) -> Result<()> {
        let config_path = Self::get_path_config_file()?;
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(config_path, path.to_string_lossy().as_bytes()).map_err(CliError::from)
    }

    pub fn reset_path() -> Result<()> {
        if let Ok(config_path) = Self::get_path_config_file() {
            if config_path.exists() {
                fs::remove_file(config_path)?;
            }
        }
        Ok(())
    }

    fn determine_data_path() -> Result<PathBuf> {
        match Self::get_path_config_file() {
            Ok(config_path) if config_path.exists() => {
                let custom_path_str = fs::read_to_string(&config_path)?.trim().to_string();
                if custom_path_str.is_empty() {
                    warn!("Custom path config file is empty, falling back to default path.");
                    Self::get_default_data_path()
                } else {
                    Ok(PathBuf::from(custom_path_str))
                }
            }
            _ => Self::get_default_data_path(),
        }
    }

    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("org", "deskryptor", "deskryptor")
    }

    fn get_path_config_file() -> Result<PathBuf> {
        Self::project_dirs()
            .map(|dirs| dirs.config_dir().join("path.conf"))
            .ok_or_else(|| CliError::Data("Could not determine config directory path.".to_string()))
    }

    fn get_default_data_path() -> Result<PathBuf> {
        Self::project_dirs()
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or_else(|| {
                CliError::Data("Could not determine default data directory path.".to_string())
            })
    }
}
