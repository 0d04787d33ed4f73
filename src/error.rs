//! Error handling module
//!
//! Defines the unified error types for the application

use thiserror::Error;

/// Top-level error type for Site Pulse
#[derive(Error, Debug)]
pub enum SitePulseError {
    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Liveness check errors
    #[error("liveness check error: {0}")]
    Check(#[from] CheckError),

    /// Explainer errors
    #[error("explainer error: {0}")]
    Explain(#[from] ExplainError),

    /// Report rendering/writing errors
    #[error("report error: {0}")]
    Report(#[from] ReportError),

    /// IO errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Other errors
    #[error("error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file parse failure
    #[error("failed to parse config: {0}")]
    ParseError(String),

    /// Config validation failure
    #[error("invalid config: {0}")]
    ValidationError(String),

    /// Config file does not exist
    #[error("config file not found: {path}")]
    FileNotFound { path: String },

    /// Environment variable substitution failure
    #[error("environment variable not set: {var}")]
    EnvVarError { var: String },
}

/// Liveness check error types
///
/// Transport-level failures during the GET are not errors; they become a
/// FAIL `CheckResult`. These variants cover failures to issue the request
/// at all.
#[derive(Error, Debug)]
pub enum CheckError {
    /// HTTP client construction failure
    #[error("failed to build HTTP client: {0}")]
    ClientError(#[from] reqwest::Error),
}

/// Explainer error types
///
/// All of these are swallowed at the pipeline seam and replaced with the
/// fallback explanation; they never terminate a run.
#[derive(Error, Debug)]
pub enum ExplainError {
    /// Completion request failure
    #[error("completion request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// Non-success HTTP status from the completion endpoint
    #[error("completion endpoint returned HTTP {status}")]
    ApiStatus { status: u16 },

    /// Completion response contained no usable text
    #[error("completion response contained no text")]
    EmptyCompletion,
}

/// Report error types
#[derive(Error, Debug)]
pub enum ReportError {
    /// Template render failure
    #[error("template render failed: {0}")]
    TemplateError(String),

    /// Output file write failure
    #[error("failed to write {path}: {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, SitePulseError>;
