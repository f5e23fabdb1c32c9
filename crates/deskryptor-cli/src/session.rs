use crate::config::AppConfig;
use crate::error::Result;
use crate::utils::fetch;
use crate::utils::parser::DatasetLocation;
use crate::utils::progress::TaskSpinner;
use deskryptor::core::io::source::DirectorySource;
use deskryptor::workflows::screen::ScreeningSession;
use tracing::info;

/// Opens a screening session over the configured dataset.
pub async fn open_session(config: &AppConfig) -> Result<ScreeningSession> {
    let layout = &config.core_config.layout;
    let mut session = ScreeningSession::new();

    match &config.location {
        DatasetLocation::Directory(root) => {
            info!("Loading dataset from directory {:?}", root);
            session.load(&DirectorySource::new(root.clone(), layout.clone()))?;
        }
        DatasetLocation::Remote(base_url) => {
            let spinner = TaskSpinner::start(format!("Fetching dataset from {}...", base_url));
            let documents = match fetch::fetch_documents(base_url, layout).await {
                Ok(documents) => documents,
                Err(e) => {
                    spinner.fail("Fetching dataset failed.");
                    return Err(e.into());
                }
            };
            spinner.set_message("Loading dataset...");
            if let Err(e) = session.load(&documents) {
                spinner.fail("Dataset is invalid.");
                return Err(e.into());
            }
            spinner.succeed("Dataset loaded.");
        }
    }

    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use deskryptor::core::io::source::DatasetLayout;
    use deskryptor::engine::config::ScreeningConfigBuilder;
    use std::fs;
    use tempfile::tempdir;

    fn config_for(location: DatasetLocation) -> AppConfig {
        AppConfig {
            location,
            core_config: ScreeningConfigBuilder::new()
                .layout(DatasetLayout::default())
                .highlight_threshold(8.0)
                .build()
                .unwrap(),
        }
    }

    #[tokio::test]
    async fn opens_session_from_directory() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("hbd.json"), r#"{"urea": {"HOMO (eV)": -6.9}}"#).unwrap();
        fs::write(dir.path().join("hba.json"), r#"{"betaine": {}}"#).unwrap();
        fs::write(
            dir.path().join("complexes.json"),
            r#"{"c": {"HBD": "urea", "HBA": "betaine", "EFI Score": 6.0, "Interaction Energy (kcal/mol)": -14.2}}"#,
        )
        .unwrap();

        let session = open_session(&config_for(DatasetLocation::Directory(
            dir.path().to_path_buf(),
        )))
        .await
        .unwrap();

        assert!(session.store().is_loaded());
        assert_eq!(session.store().complexes().len(), 1);
    }

    #[tokio::test]
    async fn invalid_document_fails_to_open() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("hbd.json"), "[1, 2, 3]").unwrap();
        fs::write(dir.path().join("hba.json"), "{}").unwrap();
        fs::write(dir.path().join("complexes.json"), "{}").unwrap();

        let result = open_session(&config_for(DatasetLocation::Directory(
            dir.path().to_path_buf(),
        )))
        .await;

        assert!(matches!(result, Err(crate::error::CliError::Load(_))));
    }
}
