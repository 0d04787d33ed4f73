//! Report templates
//!
//! Handlebars rendering of the markdown and HTML report documents

use crate::config::ReportConfig;
use crate::error::{ReportError, Result};
use crate::health::CheckResult;
use handlebars::Handlebars;
use serde::Serialize;

/// Markdown report template
///
/// Triple-stash placeholders: markdown output is plain text, no HTML
/// escaping.
const MARKDOWN_TEMPLATE: &str = r#"# {{{title}}}

Generated: {{{timestamp}}} by {{{generator}}} v{{{version}}}

- URL: {{{url}}}
- Status: {{{status}}}
- HTTP Code: {{{http_code}}}
- Latency: {{{latency_ms}}} ms

## Diagnosis

{{{explanation}}}
"#;

/// HTML report template, parallel to the markdown one
///
/// Double-stash placeholders: values are HTML-escaped.
const HTML_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{{title}}</title>
</head>
<body>
<h1>{{title}}</h1>
<p>Generated: {{timestamp}} by {{generator}} v{{version}}</p>
<ul>
<li>URL: {{url}}</li>
<li>Status: {{status}}</li>
<li>HTTP Code: {{http_code}}</li>
<li>Latency: {{latency_ms}} ms</li>
</ul>
<h2>Diagnosis</h2>
<p>{{explanation}}</p>
</body>
</html>
"#;

/// Template context for both report formats
#[derive(Debug, Clone, Serialize)]
pub struct ReportContext {
    /// Report title
    pub title: String,
    /// Checked URL
    pub url: String,
    /// Classified status (OK / WARN / FAIL)
    pub status: String,
    /// HTTP code, "-" when absent
    pub http_code: String,
    /// Request latency in milliseconds
    pub latency_ms: u64,
    /// Check timestamp, RFC 3339
    pub timestamp: String,
    /// Diagnosis text
    pub explanation: String,
    /// Generator name
    pub generator: String,
    /// Generator version
    pub version: String,
}

impl ReportContext {
    /// Build a context from a check result
    pub fn from_result(result: &CheckResult, report: &ReportConfig) -> Self {
        Self {
            title: report.title.clone(),
            url: result.url.clone(),
            status: result.status.to_string(),
            http_code: result
                .http_code
                .map(|c| c.to_string())
                .unwrap_or_else(|| "-".to_string()),
            latency_ms: result.response_time_ms(),
            timestamp: result.timestamp.to_rfc3339(),
            explanation: result.explanation.clone(),
            generator: crate::APP_NAME.to_string(),
            version: crate::VERSION.to_string(),
        }
    }
}

/// Report renderer holding the registered templates
pub struct ReportRenderer {
    /// Handlebars registry
    handlebars: Handlebars<'static>,
}

impl ReportRenderer {
    /// Create a renderer with the built-in templates registered
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();
        handlebars
            .register_template_string("markdown", MARKDOWN_TEMPLATE)
            .map_err(|e| ReportError::TemplateError(e.to_string()))?;
        handlebars
            .register_template_string("html", HTML_TEMPLATE)
            .map_err(|e| ReportError::TemplateError(e.to_string()))?;

        Ok(Self { handlebars })
    }

    /// Render the markdown document
    pub fn render_markdown(&self, context: &ReportContext) -> Result<String> {
        self.handlebars
            .render("markdown", context)
            .map_err(|e| ReportError::TemplateError(e.to_string()).into())
    }

    /// Render the HTML document
    pub fn render_html(&self, context: &ReportContext) -> Result<String> {
        self.handlebars
            .render("html", context)
            .map_err(|e| ReportError::TemplateError(e.to_string()).into())
    }
}
