//! Site Pulse - single-site liveness checker with AI-assisted diagnosis
//!
//! Checks one URL, classifies the outcome (OK / WARN / FAIL), optionally asks
//! a language-model API to explain a non-OK result, and writes a status report
//! as markdown and HTML. Features:
//! - HTTP/HTTPS liveness check with timeout
//! - Fixed-threshold status classification
//! - OpenAI-compatible explanation of degraded results
//! - Templated markdown + HTML report output
//! - Structured logging

pub mod cli;
pub mod config;
pub mod error;
pub mod explain;
pub mod health;
pub mod logging;
pub mod report;

// Re-export the main types
pub use config::{CheckConfig, Config, ExplainerConfig, ReportConfig};
pub use error::SitePulseError;
pub use health::{CheckResult, CheckStatus, LivenessChecker};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");

/// Application description
pub const APP_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
