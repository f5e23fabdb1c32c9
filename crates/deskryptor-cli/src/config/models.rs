use crate::utils::parser::DatasetLocation;
use deskryptor::engine::config as core_config;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub location: DatasetLocation,
    pub core_config: core_config::ScreeningConfig,
}
