//! Configuration data structures
//!
//! Defines the application configuration structs and validation logic

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

/// Main configuration: global options plus the per-component sections
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Global options
    #[serde(default)]
    pub global: GlobalConfig,
    /// Liveness check section
    pub check: CheckConfig,
    /// Explainer section
    #[serde(default)]
    pub explainer: ExplainerConfig,
    /// Report output section
    #[serde(default)]
    pub report: ReportConfig,
}

/// Global configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GlobalConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Liveness check configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckConfig {
    /// URL to check
    pub url: String,
    /// Request timeout (seconds)
    #[serde(default = "default_check_timeout")]
    pub timeout_seconds: u64,
    /// Extra request headers
    ///
    /// A browser-like Accept header is sent by default; some sites return
    /// 403 to clients that do not look like browsers.
    #[serde(default = "default_check_headers")]
    pub headers: HashMap<String, String>,
}

impl CheckConfig {
    /// Request timeout as a `Duration`
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

/// Explainer (language-model API) configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExplainerConfig {
    /// API key; falls back to the OPENAI_API_KEY environment variable
    pub api_key: Option<String>,
    /// Chat completions endpoint
    #[serde(default = "default_explainer_endpoint")]
    pub endpoint: String,
    /// Model name
    #[serde(default = "default_explainer_model")]
    pub model: String,
    /// Completion token budget
    #[serde(default = "default_max_completion_tokens")]
    pub max_completion_tokens: u32,
    /// Request timeout (seconds)
    #[serde(default = "default_explainer_timeout")]
    pub timeout_seconds: u64,
}

impl Default for ExplainerConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: default_explainer_endpoint(),
            model: default_explainer_model(),
            max_completion_tokens: default_max_completion_tokens(),
            timeout_seconds: default_explainer_timeout(),
        }
    }
}

impl ExplainerConfig {
    /// Request timeout as a `Duration`
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

/// Report output configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportConfig {
    /// Markdown output path
    #[serde(default = "default_markdown_path")]
    pub markdown_path: PathBuf,
    /// HTML output path
    #[serde(default = "default_html_path")]
    pub html_path: PathBuf,
    /// Report title
    #[serde(default = "default_report_title")]
    pub title: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            markdown_path: default_markdown_path(),
            html_path: default_html_path(),
            title: default_report_title(),
        }
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}
fn default_check_timeout() -> u64 {
    5
}
fn default_check_headers() -> HashMap<String, String> {
    let mut headers = HashMap::new();
    headers.insert("Accept".to_string(), "text/html".to_string());
    headers
}
fn default_explainer_endpoint() -> String {
    "https://api.openai.com/v1/chat/completions".to_string()
}
fn default_explainer_model() -> String {
    "gpt-5".to_string()
}
fn default_max_completion_tokens() -> u32 {
    60
}
fn default_explainer_timeout() -> u64 {
    30
}
fn default_markdown_path() -> PathBuf {
    PathBuf::from("report.md")
}
fn default_html_path() -> PathBuf {
    PathBuf::from("report.html")
}
fn default_report_title() -> String {
    "Website Health Report".to_string()
}

/// Validate a configuration
///
/// # Arguments
/// * `config` - configuration to validate
///
/// # Returns
/// * `Result<(), String>` - human-readable message on failure
pub fn validate_config(config: &Config) -> Result<(), String> {
    // Log level
    let valid_log_levels = ["debug", "info", "warn", "error"];
    if !valid_log_levels.contains(&config.global.log_level.as_str()) {
        return Err(format!(
            "invalid log level: {}, supported levels: {:?}",
            config.global.log_level, valid_log_levels
        ));
    }

    // Check section
    if config.check.url.trim().is_empty() {
        return Err("check URL must not be empty".to_string());
    }
    if !config.check.url.starts_with("http://") && !config.check.url.starts_with("https://") {
        return Err(format!("check URL is not http(s): {}", config.check.url));
    }
    if config.check.timeout_seconds == 0 {
        return Err("check timeout must not be 0".to_string());
    }

    // Explainer section
    if !config.explainer.endpoint.starts_with("http://")
        && !config.explainer.endpoint.starts_with("https://")
    {
        return Err(format!(
            "explainer endpoint is not http(s): {}",
            config.explainer.endpoint
        ));
    }
    if config.explainer.model.trim().is_empty() {
        return Err("explainer model must not be empty".to_string());
    }
    if config.explainer.max_completion_tokens == 0 {
        return Err("explainer token budget must not be 0".to_string());
    }
    if config.explainer.timeout_seconds == 0 {
        return Err("explainer timeout must not be 0".to_string());
    }

    // Report section
    if config.report.markdown_path.as_os_str().is_empty() {
        return Err("markdown report path must not be empty".to_string());
    }
    if config.report.html_path.as_os_str().is_empty() {
        return Err("html report path must not be empty".to_string());
    }
    if config.report.markdown_path == config.report.html_path {
        return Err("markdown and html report paths must differ".to_string());
    }

    Ok(())
}
