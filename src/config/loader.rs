//! Configuration loader
//!
//! TOML parsing, `${VAR}` environment substitution, and the
//! OPENAI_API_KEY fallback

use crate::config::types::{validate_config, Config};
use crate::error::{ConfigError, Result};
use async_trait::async_trait;
use regex::Regex;
use std::path::Path;

/// Environment variable consulted when no API key is configured
pub const API_KEY_ENV_VAR: &str = "OPENAI_API_KEY";

/// Configuration loader trait
#[async_trait]
pub trait ConfigLoader: Send + Sync {
    /// Load configuration from a file
    ///
    /// # Arguments
    /// * `path` - config file path
    ///
    /// # Returns
    /// * `Result<Config>` - loaded configuration or error
    async fn load_from_file<P: AsRef<Path> + Send>(&self, path: P) -> Result<Config>;

    /// Load configuration from a string
    async fn load_from_string(&self, content: &str) -> Result<Config>;

    /// Validate a configuration
    fn validate(&self, config: &Config) -> Result<()>;
}

/// TOML configuration loader
#[derive(Debug, Clone)]
pub struct TomlConfigLoader {
    /// Whether `${VAR}` substitution is applied
    enable_env_substitution: bool,
}

impl TomlConfigLoader {
    /// Create a new TOML loader
    ///
    /// # Arguments
    /// * `enable_env_substitution` - whether `${VAR}` substitution is applied
    pub fn new(enable_env_substitution: bool) -> Self {
        Self {
            enable_env_substitution,
        }
    }

    /// Substitute `${VAR}` references with environment variable values
    ///
    /// A referenced variable that is not set is a hard error.
    fn substitute_env_vars(&self, content: &str) -> Result<String> {
        if !self.enable_env_substitution {
            return Ok(content.to_string());
        }

        let env_var_regex = Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}")
            .map_err(|e| ConfigError::ParseError(format!("regex error: {}", e)))?;

        let mut result = content.to_string();

        for captures in env_var_regex.captures_iter(content) {
            let full_match = &captures[0];
            let var_name = &captures[1];

            match std::env::var(var_name) {
                Ok(value) => {
                    result = result.replace(full_match, &value);
                }
                Err(_) => {
                    return Err(ConfigError::EnvVarError {
                        var: var_name.to_string(),
                    }
                    .into());
                }
            }
        }

        Ok(result)
    }

    /// Parse TOML content into a `Config`
    fn parse_toml(&self, content: &str) -> Result<Config> {
        let processed_content = self.substitute_env_vars(content)?;

        let mut config: Config = toml::from_str(&processed_content)
            .map_err(|e| ConfigError::ParseError(format!("TOML parse failed: {}", e)))?;

        // Env fallback for the API key; a missing key is not an error here,
        // the explainer degrades to the fallback explanation.
        if config.explainer.api_key.is_none() {
            config.explainer.api_key = std::env::var(API_KEY_ENV_VAR).ok();
        }

        Ok(config)
    }
}

#[async_trait]
impl ConfigLoader for TomlConfigLoader {
    async fn load_from_file<P: AsRef<Path> + Send>(&self, path: P) -> Result<Config> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound {
                path: path.to_string_lossy().to_string(),
            }
            .into());
        }

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ConfigError::ParseError(format!("failed to read file: {}", e)))?;

        let config = self.parse_toml(&content)?;
        self.validate(&config)?;

        log::info!("loaded config file: {}", path.display());

        Ok(config)
    }

    async fn load_from_string(&self, content: &str) -> Result<Config> {
        let config = self.parse_toml(content)?;
        self.validate(&config)?;

        log::debug!("parsed config string");

        Ok(config)
    }

    fn validate(&self, config: &Config) -> Result<()> {
        validate_config(config).map_err(|e| ConfigError::ValidationError(e).into())
    }
}

/// Resolve the default configuration file path
///
/// Current directory `site-pulse.toml` wins, otherwise the platform config
/// directory (`~/.config/site-pulse/config.toml` on Unix).
pub fn get_default_config_path() -> std::path::PathBuf {
    if std::path::Path::new("site-pulse.toml").exists() {
        std::path::PathBuf::from("site-pulse.toml")
    } else {
        dirs::config_dir()
            .map(|config_dir| config_dir.join("site-pulse").join("config.toml"))
            .unwrap_or_else(|| std::path::PathBuf::from("site-pulse.toml"))
    }
}
