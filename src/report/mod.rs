//! Report module
//!
//! Renders a check result into markdown and HTML documents and writes them
//! to disk

pub mod template;
pub mod writer;

// Re-export the main types
pub use template::{ReportContext, ReportRenderer};
pub use writer::ReportWriter;
