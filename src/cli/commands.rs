//! Command handlers
//!
//! Implementations of the CLI subcommands, including the check pipeline

use crate::cli::args::{Args, Commands, OutputFormat};
use crate::config::{Config, ConfigLoader, TomlConfigLoader};
use crate::error::{ConfigError, Result};
use crate::explain::{resolve_explanation, Explainer, OpenAiExplainer};
use crate::health::{CheckResult, HttpChecker, LivenessChecker};
use crate::report::ReportWriter;
use async_trait::async_trait;
use std::path::Path;
use tracing::info;

/// Default config file written by `site-pulse init`
const DEFAULT_CONFIG_TEMPLATE: &str = r#"# Site Pulse configuration

[global]
# Log level: debug, info, warn, error
# log_level = "info"

[check]
# URL whose liveness is checked
url = "https://openai.com/"
# Seconds to wait for the site to respond
timeout_seconds = 5

# Extra request headers sent with the liveness GET
# [check.headers]
# Accept = "text/html"

[explainer]
# Taken from the OPENAI_API_KEY environment variable when unset.
# Without a key, non-OK results get a fixed fallback explanation.
# api_key = "${OPENAI_API_KEY}"
# endpoint = "https://api.openai.com/v1/chat/completions"
# model = "gpt-5"
# max_completion_tokens = 60
# timeout_seconds = 30

[report]
# Both files are overwritten on every run
# markdown_path = "report.md"
# html_path = "report.html"
# title = "Website Health Report"
"#;

/// Command handler trait
#[async_trait]
pub trait Command: Send + Sync {
    /// Execute the command
    async fn execute(&self, args: &Args) -> Result<()>;
}

/// Run the whole check pipeline for a loaded configuration
///
/// Strictly sequential: liveness check, explanation, report files. The
/// returned result carries the resolved explanation.
pub async fn run_check(config: &Config) -> Result<CheckResult> {
    let checker = HttpChecker::new(config.check.timeout())?;
    let result = checker.check(&config.check).await?;

    let explainer = OpenAiExplainer::from_config(&config.explainer)?;
    let explanation = resolve_explanation(
        explainer.as_ref().map(|e| e as &dyn Explainer),
        &result,
    )
    .await;
    let result = result.with_explanation(explanation);

    let writer = ReportWriter::new(config.report.clone())?;
    writer.write(&result).await?;

    Ok(result)
}

/// `check` command
pub struct CheckCommand;

#[async_trait]
impl Command for CheckCommand {
    async fn execute(&self, args: &Args) -> Result<()> {
        if let Commands::Check {
            url,
            timeout,
            format,
        } = &args.command
        {
            let config = self
                .load_config(args, url.as_deref(), *timeout)
                .await?;

            info!(url = %config.check.url, "running liveness check");

            let result = run_check(&config).await?;

            match format {
                OutputFormat::Json => {
                    println!("{}", result.to_json()?);
                }
                OutputFormat::Text => {
                    println!("URL:         {}", result.url);
                    println!("Status:      {}", result.status);
                    println!(
                        "HTTP Code:   {}",
                        result
                            .http_code
                            .map(|c| c.to_string())
                            .unwrap_or_else(|| "-".to_string())
                    );
                    println!("Latency:     {} ms", result.response_time_ms());
                    if let Some(ref error_message) = result.error_message {
                        println!("Error:       {}", error_message);
                    }
                    println!("Diagnosis:   {}", result.explanation);
                }
            }
        }
        Ok(())
    }
}

impl CheckCommand {
    /// Load the configuration, applying CLI overrides
    ///
    /// When no config file exists but `--url` was given, a default
    /// configuration is synthesized so the tool works without one.
    async fn load_config(
        &self,
        args: &Args,
        url: Option<&str>,
        timeout: Option<u64>,
    ) -> Result<Config> {
        let config_path = args.get_config_path();
        let loader = TomlConfigLoader::new(true);

        let mut config = if config_path.exists() {
            loader.load_from_file(&config_path).await?
        } else if let Some(url) = url {
            loader
                .load_from_string(&format!("[check]\nurl = {:?}\n", url))
                .await?
        } else {
            return Err(ConfigError::FileNotFound {
                path: format!(
                    "{} (run 'site-pulse init' to create one, or pass --url)",
                    config_path.display()
                ),
            }
            .into());
        };

        if let Some(url) = url {
            config.check.url = url.to_string();
        }
        if let Some(timeout_secs) = timeout {
            config.check.timeout_seconds = timeout_secs;
        }

        // Overrides bypass the file-time validation
        loader.validate(&config)?;

        Ok(config)
    }
}

/// `init` command
pub struct InitCommand;

#[async_trait]
impl Command for InitCommand {
    async fn execute(&self, args: &Args) -> Result<()> {
        if let Commands::Init { config_path, force } = &args.command {
            self.create_config_file(config_path, *force).await
        } else {
            Ok(())
        }
    }
}

impl InitCommand {
    /// Write the default config file
    async fn create_config_file(&self, config_path: &Path, force: bool) -> Result<()> {
        if config_path.exists() && !force {
            eprintln!("config file already exists: {}", config_path.display());
            eprintln!("use --force to overwrite it");
            return Ok(());
        }

        if let Some(parent) = config_path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        tokio::fs::write(config_path, DEFAULT_CONFIG_TEMPLATE).await?;

        println!("config file created: {}", config_path.display());
        println!("edit the check URL before running 'site-pulse check'");

        Ok(())
    }
}

/// `validate` command
pub struct ValidateCommand;

#[async_trait]
impl Command for ValidateCommand {
    async fn execute(&self, args: &Args) -> Result<()> {
        if let Commands::Validate {
            config_path,
            verbose,
        } = &args.command
        {
            let path = config_path.clone().unwrap_or_else(|| args.get_config_path());
            let loader = TomlConfigLoader::new(true);

            let config = loader.load_from_file(&path).await?;

            println!("config ok: {}", path.display());
            if *verbose {
                println!("{}", toml::to_string_pretty(&config).unwrap_or_default());
            }
        }
        Ok(())
    }
}

/// `version` command
pub struct VersionCommand;

#[async_trait]
impl Command for VersionCommand {
    async fn execute(&self, args: &Args) -> Result<()> {
        if let Commands::Version { format } = &args.command {
            match format {
                OutputFormat::Json => {
                    let version_info = serde_json::json!({
                        "name": crate::APP_NAME,
                        "version": crate::VERSION,
                        "description": crate::APP_DESCRIPTION
                    });
                    println!("{}", serde_json::to_string_pretty(&version_info)?);
                }
                OutputFormat::Text => {
                    println!("{} v{}", crate::APP_NAME, crate::VERSION);
                    println!("{}", crate::APP_DESCRIPTION);
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_default_config_template_is_valid() {
        let loader = TomlConfigLoader::new(false);
        let config = loader
            .load_from_string(DEFAULT_CONFIG_TEMPLATE)
            .await
            .unwrap();

        assert_eq!(config.check.url, "https://openai.com/");
        assert_eq!(config.check.timeout_seconds, 5);
    }

    #[tokio::test]
    async fn test_init_refuses_to_overwrite() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("site-pulse.toml");
        tokio::fs::write(&path, "sentinel").await.unwrap();

        let command = InitCommand;
        command.create_config_file(&path, false).await.unwrap();

        let content = tokio::fs::read_to_string(&path).await.unwrap();
        assert_eq!(content, "sentinel");
    }

    #[tokio::test]
    async fn test_init_force_overwrites() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("site-pulse.toml");
        tokio::fs::write(&path, "sentinel").await.unwrap();

        let command = InitCommand;
        command.create_config_file(&path, true).await.unwrap();

        let content = tokio::fs::read_to_string(&path).await.unwrap();
        assert_eq!(content, DEFAULT_CONFIG_TEMPLATE);
    }
}
