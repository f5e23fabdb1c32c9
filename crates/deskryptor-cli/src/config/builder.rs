use super::defaults::DefaultsConfig;
use super::file::{FileConfig, FileDataConfig};
use super::models::AppConfig;
use crate::cli::DatasetArgs;
use crate::data::DataManager;
use crate::error::{CliError, Result};
use crate::utils::parser::{self, DatasetLocation};
use deskryptor::core::io::source::DatasetLayout;
use deskryptor::engine::config as core_config;
use std::path::Path;

/// Resolves the effective configuration: defaults, then the config file, then `--set`
/// overrides, then explicit flags.
pub fn build_config(
    args: &DatasetArgs,
    highlight_threshold: Option<f64>,
    data_manager: &DataManager,
) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();
    let mut file_config = layered_file_config(args.config.as_deref(), &args.set_values)?;

    let data_file = file_config.data.take().unwrap_or_default();
    let display_file = file_config.display.take().unwrap_or_default();

    let source = args.source.clone().or_else(|| data_file.source.clone());
    let layout = layout_from(data_file, defaults.layout);
    let highlight_threshold = highlight_threshold
        .or(display_file.highlight_threshold)
        .unwrap_or(defaults.highlight_threshold);

    let location = resolve_location(source.as_deref(), &layout, data_manager)?;

    let core_config = core_config::ScreeningConfigBuilder::new()
        .layout(layout)
        .highlight_threshold(highlight_threshold)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    Ok(AppConfig {
        location,
        core_config,
    })
}

/// Resolves only the document file names, for commands that write the dataset rather than
/// load it.
pub fn resolve_layout(config: Option<&Path>, set_values: &[String]) -> Result<DatasetLayout> {
    let mut file_config = layered_file_config(config, set_values)?;
    let data_file = file_config.data.take().unwrap_or_default();
    let layout = layout_from(data_file, DefaultsConfig::default().layout);

    let checked = core_config::ScreeningConfigBuilder::new()
        .layout(layout)
        .highlight_threshold(DefaultsConfig::default().highlight_threshold)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;
    Ok(checked.layout)
}

fn layered_file_config(config: Option<&Path>, set_values: &[String]) -> Result<FileConfig> {
    let file_config = if let Some(config_path) = config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };
    apply_set_values(file_config, set_values)
}

fn layout_from(data_file: FileDataConfig, defaults: DatasetLayout) -> DatasetLayout {
    DatasetLayout {
        donors: data_file.donors_file.unwrap_or(defaults.donors),
        acceptors: data_file.acceptors_file.unwrap_or(defaults.acceptors),
        complexes: data_file.complexes_file.unwrap_or(defaults.complexes),
    }
}

fn resolve_location(
    source: Option<&str>,
    layout: &DatasetLayout,
    data_manager: &DataManager,
) -> Result<DatasetLocation> {
    let Some(source) = source else {
        if !data_manager.has_dataset(layout) {
            return Err(CliError::Data(format!(
                "No dataset found in {:?}.\nHint: Run 'deskryptor data download --from <URL>' or pass --data <DIR_OR_URL>.",
                data_manager.get_data_path()
            )));
        }
        return Ok(DatasetLocation::Directory(
            data_manager.get_data_path().to_path_buf(),
        ));
    };

    let location =
        parser::parse_location(source).map_err(|e| CliError::Argument(e.to_string()))?;
    if let DatasetLocation::Directory(path) = &location {
        if !path.is_dir() {
            return Err(CliError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Dataset directory does not exist: {}", path.display()),
            )));
        }
    }
    Ok(location)
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let (key, value_str) =
            parser::parse_assignment(kv_pair).map_err(|e| CliError::Config(e.to_string()))?;

        match key {
            "data.source" => {
                config.data.get_or_insert_with(Default::default).source =
                    Some(value_str.to_string());
            }
            "data.donors-file" => {
                config.data.get_or_insert_with(Default::default).donors_file =
                    Some(value_str.to_string());
            }
            "data.acceptors-file" => {
                config
                    .data
                    .get_or_insert_with(Default::default)
                    .acceptors_file = Some(value_str.to_string());
            }
            "data.complexes-file" => {
                config
                    .data
                    .get_or_insert_with(Default::default)
                    .complexes_file = Some(value_str.to_string());
            }
            "display.highlight-threshold" => {
                config
                    .display
                    .get_or_insert_with(Default::default)
                    .highlight_threshold = Some(value_str.trim().parse().map_err(|_| {
                    CliError::Config(format!("Invalid float value for {}: {}", key, value_str))
                })?);
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}
