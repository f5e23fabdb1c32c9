use crate::core::io::source::DatasetLayout;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Invalid value for {parameter}: {reason}")]
    InvalidValue {
        parameter: &'static str,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScreeningConfig {
    pub layout: DatasetLayout,
    /// EFI score above which a complex is highlighted in catalog tables.
    pub highlight_threshold: f64,
}

#[derive(Default)]
pub struct ScreeningConfigBuilder {
    layout: Option<DatasetLayout>,
    highlight_threshold: Option<f64>,
}

impl ScreeningConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn layout(mut self, layout: DatasetLayout) -> Self {
        self.layout = Some(layout);
        self
    }
    pub fn highlight_threshold(mut self, threshold: f64) -> Self {
        self.highlight_threshold = Some(threshold);
        self
    }

    pub fn build(self) -> Result<ScreeningConfig, ConfigError> {
        let layout = self
            .layout
            .ok_or(ConfigError::MissingParameter("layout"))?;
        for (parameter, file) in [
            ("layout.donors", &layout.donors),
            ("layout.acceptors", &layout.acceptors),
            ("layout.complexes", &layout.complexes),
        ] {
            if file.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    parameter,
                    reason: "file name must not be empty".to_string(),
                });
            }
        }

        let highlight_threshold = self
            .highlight_threshold
            .ok_or(ConfigError::MissingParameter("highlight_threshold"))?;
        if !highlight_threshold.is_finite() {
            return Err(ConfigError::InvalidValue {
                parameter: "highlight_threshold",
                reason: format!("expected a finite number, got {}", highlight_threshold),
            });
        }

        Ok(ScreeningConfig {
            layout,
            highlight_threshold,
        })
    }
}
