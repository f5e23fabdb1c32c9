use deskryptor::core::io::source::DatasetLayout;

pub struct DefaultsConfig {
    pub layout: DatasetLayout,
    pub highlight_threshold: f64,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            layout: DatasetLayout::default(),
            highlight_threshold: 8.0,
        }
    }
}
