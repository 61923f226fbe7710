use std::path::{Path, PathBuf};
use crate::errors::{PrlyzerError, PrlyzerResult};
use crate::structs::config::config::Config;

pub struct ConfigManager;

impl ConfigManager {
    pub fn config_dir() -> PrlyzerResult<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| {
            PrlyzerError::config_error("Could not determine home directory", Some("home"))
        })?;
        Ok(home.join("prlyzer"))
    }

    pub fn config_file_path() -> PrlyzerResult<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads the user config, falling back to defaults when no config
    /// file has been written yet.
    pub fn load() -> PrlyzerResult<Config> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            log::info!("📋 No config file found, using defaults");
            return Ok(Config::default());
        }
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> PrlyzerResult<Config> {
        let raw = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&raw)?;
        Self::validate(&config)?;
        log::info!("📋 Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn validate(config: &Config) -> PrlyzerResult<()> {
        if config.analysis.extensions().is_empty() {
            return Err(PrlyzerError::config_error(
                "supported_extensions must list at least one extension",
                Some("analysis.supported_extensions"),
            ));
        }
        if config.analysis.max_file_size == 0 {
            return Err(PrlyzerError::config_error(
                "max_file_size must be greater than zero",
                Some("analysis.max_file_size"),
            ));
        }
        if config.ai.max_tokens == 0 {
            return Err(PrlyzerError::config_error(
                "max_tokens must be greater than zero",
                Some("ai.max_tokens"),
            ));
        }
        if !(0.0..=2.0).contains(&config.ai.temperature) {
            return Err(PrlyzerError::config_error(
                "temperature must be between 0.0 and 2.0",
                Some("ai.temperature"),
            ));
        }
        Ok(())
    }

    /// Writes a commented sample config, refusing to clobber an existing
    /// one.
    pub fn create_sample_config() -> PrlyzerResult<PathBuf> {
        let dir = Self::config_dir()?;
        std::fs::create_dir_all(&dir)?;
        let path = dir.join("config.toml");
        if path.exists() {
            return Err(PrlyzerError::config_error(
                &format!("Config file already exists at {}", path.display()),
                None,
            ));
        }
        std::fs::write(&path, Self::sample_config_content())?;
        Ok(path)
    }

    fn sample_config_content() -> String {
        let defaults = Config::default();
        format!(
            r#"# prlyzer configuration

[analysis]
# Comma-separated extension allow-list.
supported_extensions = "{extensions}"
# Files larger than this (bytes) are skipped.
max_file_size = {max_file_size}

[ai]
provider = "{provider}"
model = "{model}"
max_tokens = {max_tokens}
temperature = {temperature}
# Environment variable holding the engine API key.
api_key_env = "{api_key_env}"
request_timeout_secs = {timeout}

[source_host]
api_url = "{api_url}"
# Environment variable holding the source host token.
token_env = "{token_env}"
"#,
            extensions = defaults.analysis.supported_extensions,
            max_file_size = defaults.analysis.max_file_size,
            provider = defaults.ai.provider,
            model = defaults.ai.model,
            max_tokens = defaults.ai.max_tokens,
            temperature = defaults.ai.temperature,
            api_key_env = defaults.ai.api_key_env,
            timeout = defaults.ai.request_timeout_secs,
            api_url = defaults.source_host.api_url,
            token_env = defaults.source_host.token_env,
        )
    }
}
