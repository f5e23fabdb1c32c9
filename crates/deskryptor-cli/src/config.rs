mod builder;
mod defaults;
mod file;
mod models;

pub use builder::{build_config, resolve_layout};
pub use models::AppConfig;
