use crate::cli::{DataArgs, DataCommands};
use crate::config;
use crate::data::{DataManager, DataProgress};
use crate::error::Result;
use crate::utils::progress::TaskSpinner;
use deskryptor::core::io::source::DatasetLayout;
use std::path::PathBuf;
use tracing::info;

pub async fn run(args: DataArgs) -> Result<()> {
    match args.command {
        DataCommands::Download {
            from,
            force,
            config: config_path,
            set_values,
        } => {
            let layout = config::resolve_layout(config_path.as_deref(), &set_values)?;
            handle_download(&from, &layout, force).await?;
        }
        DataCommands::Path => {
            handle_path()?;
        }
        DataCommands::SetPath { path } => {
            handle_set_path(path)?;
        }
        DataCommands::ResetPath => {
            handle_reset_path()?;
        }
    }
    Ok(())
}

async fn handle_download(base_url: &str, layout: &DatasetLayout, force: bool) -> Result<()> {
    println!("Initializing data manager...");
    let manager = DataManager::new()?;
    println!("Downloading dataset to: {:?}", manager.get_data_path());

    let spinner = TaskSpinner::start("Preparing download...");
    let progress_callback = |progress: DataProgress| match progress {
        DataProgress::Fetching => spinner.set_message(format!("Fetching from {}...", base_url)),
        DataProgress::Validating => spinner.set_message("Validating documents..."),
        DataProgress::Writing => spinner.set_message("Writing documents..."),
    };

    match manager
        .download_dataset(base_url, layout, force, progress_callback)
        .await
    {
        Ok(summary) => {
            spinner.succeed(format!(
                "Dataset ready: {} donors, {} acceptors, {} complexes.",
                summary.donors, summary.acceptors, summary.complexes
            ));
            Ok(())
        }
        Err(e) => {
            spinner.fail("Download failed.");
            Err(e)
        }
    }
}

fn handle_path() -> Result<()> {
    let manager = DataManager::new()?;
    println!("{}", manager.get_data_path().display());
    Ok(())
}

fn handle_set_path(path: PathBuf) -> Result<()> {
    let path = if path.is_absolute() {
        path
    } else {
        std::env::current_dir()?.join(path)
    };
    DataManager::set_custom_path(&path)?;
    info!("Custom data path set to {:?}", &path);
    println!("Data path set to: {}", path.display());
    Ok(())
}

fn handle_reset_path() -> Result<()> {
    DataManager::reset_path()?;
    let manager = DataManager::new()?;
    println!(
        "Data path reset to default: {}",
        manager.get_data_path().display()
    );
    Ok(())
}
