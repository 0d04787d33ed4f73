//! Command line argument definitions
//!
//! clap-based CLI for the application

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Site Pulse - single-site liveness checker with AI-assisted diagnosis
#[derive(Parser, Debug, Clone)]
#[command(
    name = "site-pulse",
    version = crate::VERSION,
    about = crate::APP_DESCRIPTION,
    long_about = None
)]
pub struct Args {
    /// Config file path
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Config file path",
        env = "SITE_PULSE_CONFIG"
    )]
    pub config: Option<PathBuf>,

    /// Log level
    #[arg(
        short,
        long,
        value_enum,
        default_value = "info",
        help = "Log level",
        env = "SITE_PULSE_LOG_LEVEL"
    )]
    pub log_level: LogLevel,

    /// Verbose output
    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Subcommand
    #[command(subcommand)]
    pub command: Commands,
}

/// Log level
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
pub enum LogLevel {
    /// Debug level
    Debug,
    /// Info level
    Info,
    /// Warn level
    Warn,
    /// Error level
    Error,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Error => log::LevelFilter::Error,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Error => write!(f, "error"),
        }
    }
}

/// Subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Run the liveness check and write the report files
    Check {
        /// Override the configured URL
        #[arg(short, long, value_name = "URL", help = "URL to check")]
        url: Option<String>,

        /// Override the configured timeout (seconds)
        #[arg(short, long, value_name = "SECONDS", help = "Request timeout (seconds)")]
        timeout: Option<u64>,

        /// Output format for the result printed to stdout
        #[arg(short, long, value_enum, default_value = "text", help = "Output format")]
        format: OutputFormat,
    },

    /// Create a default config file
    Init {
        /// Config file path
        #[arg(
            value_name = "FILE",
            help = "Config file path",
            default_value = "site-pulse.toml"
        )]
        config_path: PathBuf,

        /// Overwrite an existing file
        #[arg(short, long, help = "Overwrite an existing file")]
        force: bool,
    },

    /// Validate a config file
    Validate {
        /// Config file path
        #[arg(value_name = "FILE", help = "Config file path")]
        config_path: Option<PathBuf>,

        /// Show the parsed configuration
        #[arg(short, long, help = "Show the parsed configuration")]
        verbose: bool,
    },

    /// Show version information
    Version {
        /// Output format
        #[arg(short, long, value_enum, default_value = "text", help = "Output format")]
        format: OutputFormat,
    },
}

/// Output format
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
pub enum OutputFormat {
    /// Plain text
    Text,
    /// JSON
    Json,
}

impl Args {
    /// Resolve the config file path
    pub fn get_config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(crate::config::get_default_config_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
    }

    #[test]
    fn test_check_command_parsing() {
        let args = Args::parse_from([
            "site-pulse",
            "check",
            "--url",
            "https://example.com/",
            "--timeout",
            "3",
            "--format",
            "json",
        ]);

        match args.command {
            Commands::Check {
                url,
                timeout,
                format,
            } => {
                assert_eq!(url.as_deref(), Some("https://example.com/"));
                assert_eq!(timeout, Some(3));
                assert_eq!(format, OutputFormat::Json);
            }
            _ => panic!("expected check command"),
        }
    }

    #[test]
    fn test_explicit_config_path_wins() {
        let args = Args::parse_from(["site-pulse", "--config", "/tmp/custom.toml", "version"]);
        assert_eq!(
            args.get_config_path(),
            std::path::PathBuf::from("/tmp/custom.toml")
        );
    }
}
