//! Explainer module
//!
//! Language-model diagnosis of non-OK check results

pub mod openai;

// Re-export the main types
pub use openai::{Explainer, OpenAiExplainer};

use crate::health::CheckResult;
use tracing::warn;

/// Explanation used for healthy results; no API call is made
pub const NO_ISSUES_EXPLANATION: &str = "No issues found.";

/// Explanation substituted when the explainer is unavailable or its call fails
pub const FALLBACK_EXPLANATION: &str =
    "No diagnosis available: the explanation service could not be reached.";

/// Resolve the explanation text for a check result
///
/// OK results get the constant healthy text without touching the API. For
/// WARN/FAIL results the explainer is asked once; any failure (missing key,
/// network, auth, rate limit, empty completion) degrades to the fallback
/// text instead of propagating.
pub async fn resolve_explanation(
    explainer: Option<&dyn Explainer>,
    result: &CheckResult,
) -> String {
    if !result.status.needs_explanation() {
        return NO_ISSUES_EXPLANATION.to_string();
    }

    match explainer {
        Some(explainer) => match explainer.explain(result).await {
            Ok(text) => text,
            Err(e) => {
                warn!("explanation request failed, using fallback: {}", e);
                FALLBACK_EXPLANATION.to_string()
            }
        },
        None => {
            warn!("no API key configured, using fallback explanation");
            FALLBACK_EXPLANATION.to_string()
        }
    }
}
