//! HTTP liveness checker
//!
//! Issues a single GET with a timeout and classifies the outcome. No retries:
//! one request per run.

use crate::config::CheckConfig;
use crate::error::{CheckError, Result};
use crate::health::result::{CheckResult, CheckStatus};
use async_trait::async_trait;
use reqwest::{Client, Response};
use std::time::{Duration, Instant};
use tokio::time::timeout;

/// Liveness checker trait
#[async_trait]
pub trait LivenessChecker: Send + Sync {
    /// Perform one liveness check
    ///
    /// # Arguments
    /// * `check` - check configuration (URL, timeout, headers)
    ///
    /// # Returns
    /// * `Result<CheckResult>` - classified outcome; transport failures are a
    ///   FAIL result, not an error
    async fn check(&self, check: &CheckConfig) -> Result<CheckResult>;
}

/// HTTP liveness checker implementation
pub struct HttpChecker {
    /// HTTP client
    client: Client,
    /// Request timeout
    timeout: Duration,
}

impl HttpChecker {
    /// Create a new HTTP checker
    ///
    /// # Arguments
    /// * `timeout` - request timeout
    pub fn new(timeout: Duration) -> Result<Self> {
        // Redirects are classified, not followed; a 3xx is already an answer
        let client = Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::none())
            .user_agent(format!("{}/{}", crate::APP_NAME, crate::VERSION))
            .build()
            .map_err(CheckError::ClientError)?;

        Ok(Self { client, timeout })
    }

    /// Build the GET request for the configured URL
    fn build_request(&self, check: &CheckConfig) -> reqwest::RequestBuilder {
        let mut request = self.client.get(&check.url);

        for (key, value) in &check.headers {
            request = request.header(key, value);
        }

        request
    }

    /// Turn an HTTP response into a classified result
    fn process_response(
        &self,
        check: &CheckConfig,
        response: Response,
        response_time: Duration,
    ) -> CheckResult {
        let http_code = response.status().as_u16();
        let status = CheckStatus::classify(Some(http_code));

        let mut result = CheckResult::new(check.url.clone(), status)
            .with_http_code(http_code)
            .with_response_time(response_time);

        if !status.is_healthy() {
            result = result.with_error(format!(
                "HTTP {} {}",
                http_code,
                response.status().canonical_reason().unwrap_or("Unknown")
            ));
        }

        result
    }

    /// Turn a transport failure into a FAIL result
    fn failure_result(
        &self,
        check: &CheckConfig,
        response_time: Duration,
        error_message: String,
    ) -> CheckResult {
        CheckResult::new(check.url.clone(), CheckStatus::Fail)
            .with_response_time(response_time)
            .with_error(error_message)
    }

    /// Format a request error into a readable description
    fn format_request_error(&self, error: &reqwest::Error) -> String {
        if error.is_timeout() {
            "Request timeout".to_string()
        } else if error.is_connect() {
            "Connection refused".to_string()
        } else if error.is_request() {
            "Invalid request".to_string()
        } else {
            let error_str = error.to_string();
            if error_str.contains("dns") || error_str.contains("DNS") {
                "DNS resolution failed".to_string()
            } else if error_str.contains("certificate")
                || error_str.contains("tls")
                || error_str.contains("ssl")
            {
                "SSL/TLS certificate error".to_string()
            } else {
                format!("Request failed: {}", error_str)
            }
        }
    }
}

#[async_trait]
impl LivenessChecker for HttpChecker {
    async fn check(&self, check: &CheckConfig) -> Result<CheckResult> {
        let start_time = Instant::now();

        let request = self.build_request(check);

        // The client carries its own timeout; the outer timeout guards
        // against anything the client timeout does not cover.
        let response_result = timeout(self.timeout, request.send()).await;

        let response_time = start_time.elapsed();

        let result = match response_result {
            Ok(Ok(response)) => self.process_response(check, response, response_time),
            Ok(Err(e)) => {
                self.failure_result(check, response_time, self.format_request_error(&e))
            }
            Err(_) => self.failure_result(check, response_time, "Request timeout".to_string()),
        };

        tracing::debug!(
            url = %result.url,
            status = %result.status,
            http_code = ?result.http_code,
            response_time_ms = result.response_time_ms(),
            "liveness check finished"
        );

        Ok(result)
    }
}
