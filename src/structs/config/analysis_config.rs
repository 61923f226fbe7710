use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AnalysisConfig {
    /// Comma-separated extension allow-list, e.g. ".rs,.py,.java".
    #[serde(default = "ConfigHelper::default_supported_extensions")]
    pub supported_extensions: String,

    /// Maximum analyzable content size in bytes.
    #[serde(default = "ConfigHelper::default_max_file_size")]
    pub max_file_size: usize,
}

impl AnalysisConfig {
    pub fn extensions(&self) -> Vec<String> {
        self.supported_extensions
            .split(',')
            .map(|ext| ext.trim().to_string())
            .filter(|ext| !ext.is_empty())
            .collect()
    }

    pub fn supports_file(&self, file_name: &str) -> bool {
        self.extensions().iter().any(|ext| file_name.ends_with(ext))
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            supported_extensions: ConfigHelper::default_supported_extensions(),
            max_file_size: ConfigHelper::default_max_file_size(),
        }
    }
}
