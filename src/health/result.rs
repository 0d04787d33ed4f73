//! Check result data structures
//!
//! Defines the check outcome type and the status classification rules

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

/// Classified outcome of a liveness check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    /// Site responded with a success or redirect code
    Ok,
    /// Site responded, but with an error code
    Warn,
    /// Transport-level failure, no HTTP response at all
    Fail,
}

impl std::fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckStatus::Ok => write!(f, "OK"),
            CheckStatus::Warn => write!(f, "WARN"),
            CheckStatus::Fail => write!(f, "FAIL"),
        }
    }
}

impl CheckStatus {
    /// Classify an HTTP outcome against the fixed thresholds
    ///
    /// [200, 399] is OK, any other present code is WARN, an absent code
    /// (transport failure) is FAIL.
    pub fn classify(http_code: Option<u16>) -> Self {
        match http_code {
            Some(code) if (200..=399).contains(&code) => CheckStatus::Ok,
            Some(_) => CheckStatus::Warn,
            None => CheckStatus::Fail,
        }
    }

    /// Whether the site is considered healthy
    pub fn is_healthy(&self) -> bool {
        matches!(self, CheckStatus::Ok)
    }

    /// Whether an explanation should be requested from the explainer
    pub fn needs_explanation(&self) -> bool {
        matches!(self, CheckStatus::Warn | CheckStatus::Fail)
    }
}

/// Result of a single liveness check
///
/// Constructed once per run and consumed by the reporter. The `with_*`
/// builders consume `self`; there is no mutation after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResult {
    /// Check ID
    pub id: Uuid,
    /// Checked URL
    pub url: String,
    /// Check timestamp
    pub timestamp: DateTime<Utc>,
    /// Classified status
    pub status: CheckStatus,
    /// HTTP status code, absent on transport failure
    pub http_code: Option<u16>,
    /// Elapsed time of the request
    #[serde(with = "duration_serde")]
    pub response_time: Duration,
    /// Transport or HTTP error description
    pub error_message: Option<String>,
    /// Human-readable diagnosis of the outcome
    pub explanation: String,
}

impl CheckResult {
    /// Create a new check result
    ///
    /// # Arguments
    /// * `url` - checked URL
    /// * `status` - classified status
    pub fn new(url: String, status: CheckStatus) -> Self {
        Self {
            id: Uuid::new_v4(),
            url,
            timestamp: Utc::now(),
            status,
            http_code: None,
            response_time: Duration::from_millis(0),
            error_message: None,
            explanation: String::new(),
        }
    }

    /// Set the HTTP status code
    pub fn with_http_code(mut self, http_code: u16) -> Self {
        self.http_code = Some(http_code);
        self
    }

    /// Set the response time
    pub fn with_response_time(mut self, response_time: Duration) -> Self {
        self.response_time = response_time;
        self
    }

    /// Set the error description
    pub fn with_error(mut self, error_message: String) -> Self {
        self.error_message = Some(error_message);
        self
    }

    /// Set the explanation text
    pub fn with_explanation(mut self, explanation: String) -> Self {
        self.explanation = explanation;
        self
    }

    /// Response time in milliseconds
    pub fn response_time_ms(&self) -> u64 {
        self.response_time.as_millis() as u64
    }

    /// Serialize to a pretty JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Duration serialization as whole milliseconds
mod duration_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_millis().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u64::deserialize(deserializer)?;
        Ok(Duration::from_millis(millis))
    }
}
