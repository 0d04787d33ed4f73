//! Report writer
//!
//! Persists the rendered markdown and HTML documents, overwriting any files
//! from a prior run

use crate::config::ReportConfig;
use crate::error::{ReportError, Result};
use crate::health::CheckResult;
use crate::report::template::{ReportContext, ReportRenderer};
use std::path::Path;
use tracing::info;

/// Writes both report documents for a check result
pub struct ReportWriter {
    /// Output paths and title
    config: ReportConfig,
    /// Template renderer
    renderer: ReportRenderer,
}

impl ReportWriter {
    /// Create a writer for the given report configuration
    pub fn new(config: ReportConfig) -> Result<Self> {
        Ok(Self {
            renderer: ReportRenderer::new()?,
            config,
        })
    }

    /// Render and write both documents
    ///
    /// # Arguments
    /// * `result` - check result, explanation already resolved
    pub async fn write(&self, result: &CheckResult) -> Result<()> {
        let context = ReportContext::from_result(result, &self.config);

        let markdown = self.renderer.render_markdown(&context)?;
        let html = self.renderer.render_html(&context)?;

        Self::write_file(&self.config.markdown_path, &markdown).await?;
        Self::write_file(&self.config.html_path, &html).await?;

        info!(
            markdown = %self.config.markdown_path.display(),
            html = %self.config.html_path.display(),
            "report written"
        );

        Ok(())
    }

    /// Write one document, creating parent directories as needed
    async fn write_file(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| ReportError::WriteError {
                        path: parent.to_string_lossy().to_string(),
                        source: e,
                    })?;
            }
        }

        tokio::fs::write(path, content)
            .await
            .map_err(|e| ReportError::WriteError {
                path: path.to_string_lossy().to_string(),
                source: e,
            })?;

        Ok(())
    }
}
