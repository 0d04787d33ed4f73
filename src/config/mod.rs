//! Configuration module
//!
//! Config file parsing, environment substitution and validation

pub mod loader;
pub mod types;

// Re-export the main types
pub use loader::{get_default_config_path, ConfigLoader, TomlConfigLoader, API_KEY_ENV_VAR};
pub use types::{
    validate_config, CheckConfig, Config, ExplainerConfig, GlobalConfig, ReportConfig,
};
