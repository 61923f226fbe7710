use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SourceHostConfig {
    #[serde(default = "ConfigHelper::default_api_url")]
    pub api_url: String,

    #[serde(default = "ConfigHelper::default_token_env")]
    pub token_env: String,
}

impl Default for SourceHostConfig {
    fn default() -> Self {
        Self {
            api_url: ConfigHelper::default_api_url(),
            token_env: ConfigHelper::default_token_env(),
        }
    }
}
